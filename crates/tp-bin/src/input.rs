//! Crossterm event -> logical key mapping.

use core_events::{Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKeyEventKind,
    KeyModifiers as CKeyModifiers,
};

/// Map a terminal event. Key releases and unsupported events yield `None`.
pub(crate) fn map_event(event: &CEvent) -> Option<Event> {
    match event {
        CEvent::Key(key) if key.kind != CKeyEventKind::Release => {
            map_key_event(key).map(Event::Key)
        }
        CEvent::Resize(w, h) => Some(Event::Resize(*w, *h)),
        _ => None,
    }
}

pub(crate) fn map_key_event(event: &CKeyEvent) -> Option<KeyEvent> {
    let code = match event.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::F(n) => KeyCode::F(n),
        _ => return None,
    };
    Some(KeyEvent::new(code, map_modifiers(event.modifiers)))
}

fn map_modifiers(mods: CKeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if mods.contains(CKeyModifiers::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if mods.contains(CKeyModifiers::ALT) {
        out |= KeyModifiers::ALT;
    }
    if mods.contains(CKeyModifiers::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}

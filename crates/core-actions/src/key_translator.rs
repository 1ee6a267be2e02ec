//! Key -> Action translation.
//!
//! Bindings:
//! * `Esc` quit, `Backspace` delete last, `Enter` newline, `Tab` tab.
//! * `Ctrl+Z` undo, `Ctrl+Y` redo.
//! * `Ctrl+B` mark selection start, `Ctrl+E` mark selection end.
//! * `Ctrl+C` copy, `Ctrl+X` cut, `Ctrl+V` paste.
//! * `F2` save, `F3` open, `F4` search/replace (each opens a prompt).
//! * Any other printable character is inserted.
//!
//! Unbound control/alt chords translate to `None`.

use crate::{Action, EditKind, PromptKind};
use core_events::{KeyCode, KeyEvent, KeyModifiers};

pub fn translate_key(key: &KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Backspace => Action::Edit(EditKind::DeleteLast),
        KeyCode::Enter => Action::Edit(EditKind::InsertByte(b'\n')),
        KeyCode::Tab => Action::Edit(EditKind::InsertByte(b'\t')),
        KeyCode::F(2) => Action::Prompt(PromptKind::Save),
        KeyCode::F(3) => Action::Prompt(PromptKind::Open),
        KeyCode::F(4) => Action::Prompt(PromptKind::Replace),
        KeyCode::F(_) => return None,
        KeyCode::Char(c) if key.mods.contains(KeyModifiers::CTRL) => {
            return ctrl_chord(c);
        }
        KeyCode::Char(_) if key.mods.contains(KeyModifiers::ALT) => return None,
        KeyCode::Char(c) => insert_char(c),
    };
    Some(action)
}

fn ctrl_chord(c: char) -> Option<Action> {
    let action = match c.to_ascii_lowercase() {
        'z' => Action::Undo,
        'y' => Action::Redo,
        'b' => Action::MarkSelectionStart,
        'e' => Action::MarkSelectionEnd,
        'c' => Action::Copy,
        'x' => Action::Cut,
        'v' => Action::Paste,
        _ => return None,
    };
    Some(action)
}

fn insert_char(c: char) -> Action {
    if c.is_ascii() {
        Action::Edit(EditKind::InsertByte(c as u8))
    } else {
        Action::Edit(EditKind::InsertText(c.to_string()))
    }
}

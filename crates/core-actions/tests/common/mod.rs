#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{
    Action, DispatchResult, Prompt, PromptKind, PromptStep, dispatch, translate_key,
};
use core_events::{KeyCode, KeyEvent};
use core_state::Engine;

/// Drives keys through translation, prompts and dispatch the way the runtime does.
#[derive(Default)]
pub struct Session {
    pub engine: Engine,
    pub prompt: Option<Prompt>,
    pub last: Option<DispatchResult>,
}

impl Session {
    pub fn press(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        if let Some(prompt) = self.prompt.as_mut() {
            match prompt.handle_key(&key) {
                PromptStep::Pending => {}
                PromptStep::Cancelled => self.prompt = None,
                PromptStep::Done(action) => {
                    self.prompt = None;
                    self.apply(action)?;
                }
            }
            return Ok(());
        }
        if let Some(action) = translate_key(&key) {
            self.apply(action)?;
        }
        Ok(())
    }

    pub fn apply(&mut self, action: Action) -> anyhow::Result<()> {
        let result = dispatch(action, &mut self.engine)?;
        if let Some(kind) = result.prompt {
            self.prompt = Some(Prompt::new(kind));
        }
        self.last = Some(result);
        Ok(())
    }

    pub fn type_text(&mut self, text: &str) -> anyhow::Result<()> {
        for c in text.chars() {
            let key = match c {
                '\n' => KeyEvent::plain(KeyCode::Enter),
                c => KeyEvent::plain(KeyCode::Char(c)),
            };
            self.press(key)?;
        }
        Ok(())
    }

    pub fn ctrl(&mut self, c: char) -> anyhow::Result<()> {
        self.press(KeyEvent::ctrl(c))
    }

    pub fn key(&mut self, code: KeyCode) -> anyhow::Result<()> {
        self.press(KeyEvent::plain(code))
    }

    pub fn prompt_kind(&self) -> Option<PromptKind> {
        self.prompt.as_ref().map(Prompt::kind)
    }

    pub fn text(&self) -> String {
        self.engine.render()
    }
}

//! Single-line prompt collecting the input an action needs.
//!
//! `Open` and `Save` collect a file name. `Replace` collects two strings in
//! sequence (find, then replacement). `Enter` submits the current stage,
//! `Esc` cancels, `Backspace` removes the last character. An empty file name
//! or empty find string cancels.

use crate::Action;
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Open,
    Save,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStep {
    Pending,
    Cancelled,
    Done(Action),
}

#[derive(Debug, Clone)]
pub struct Prompt {
    kind: PromptKind,
    input: String,
    find: Option<String>,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
            find: None,
        }
    }

    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn label(&self) -> &'static str {
        match (self.kind, self.find.is_some()) {
            (PromptKind::Open, _) => "Open file: ",
            (PromptKind::Save, _) => "Save as: ",
            (PromptKind::Replace, false) => "Find: ",
            (PromptKind::Replace, true) => "Replace with: ",
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> PromptStep {
        match key.code {
            KeyCode::Esc => PromptStep::Cancelled,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
                PromptStep::Pending
            }
            KeyCode::Char(c)
                if !key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) =>
            {
                self.input.push(c);
                PromptStep::Pending
            }
            _ => PromptStep::Pending,
        }
    }

    fn submit(&mut self) -> PromptStep {
        let value = std::mem::take(&mut self.input);
        match self.kind {
            PromptKind::Open | PromptKind::Save if value.is_empty() => PromptStep::Cancelled,
            PromptKind::Open => PromptStep::Done(Action::Load(PathBuf::from(value))),
            PromptKind::Save => PromptStep::Done(Action::Save(PathBuf::from(value))),
            PromptKind::Replace => match self.find.take() {
                None if value.is_empty() => PromptStep::Cancelled,
                None => {
                    self.find = Some(value);
                    PromptStep::Pending
                }
                Some(find) => PromptStep::Done(Action::Replace { find, with: value }),
            },
        }
    }
}

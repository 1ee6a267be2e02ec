//! Actions: the edit commands a presentation layer issues against the engine.
//!
//! * `key_translator` maps logical keys to actions.
//! * `prompt` collects file names and find/replace strings for the actions
//!   that need them.
//! * `dispatcher` applies an action to an `Engine`.
//! * `io_ops` performs the file access behind load and save.

use std::path::PathBuf;

pub mod dispatcher;
pub mod io_ops;
pub mod key_translator;
pub mod prompt;

pub use dispatcher::{DispatchResult, dispatch};
pub use key_translator::translate_key;
pub use prompt::{Prompt, PromptKind, PromptStep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKind {
    InsertByte(u8),
    /// Typed text; inserted byte by byte (UTF-8).
    InsertText(String),
    DeleteLast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Edit(EditKind),
    Undo,
    Redo,
    MarkSelectionStart,
    MarkSelectionEnd,
    Copy,
    Cut,
    Paste,
    Replace { find: String, with: String },
    Load(PathBuf),
    Save(PathBuf),
    /// Ask the presentation layer to collect input before acting.
    Prompt(PromptKind),
    Quit,
}

impl Action {
    /// Short stable name for logging (payloads are never logged).
    pub fn name(&self) -> &'static str {
        match self {
            Action::Edit(EditKind::InsertByte(_)) => "insert",
            Action::Edit(EditKind::InsertText(_)) => "insert_text",
            Action::Edit(EditKind::DeleteLast) => "delete_last",
            Action::Undo => "undo",
            Action::Redo => "redo",
            Action::MarkSelectionStart => "mark_selection_start",
            Action::MarkSelectionEnd => "mark_selection_end",
            Action::Copy => "copy",
            Action::Cut => "cut",
            Action::Paste => "paste",
            Action::Replace { .. } => "replace",
            Action::Load(_) => "load",
            Action::Save(_) => "save",
            Action::Prompt(_) => "prompt",
            Action::Quit => "quit",
        }
    }
}

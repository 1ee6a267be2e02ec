//! Dispatcher applying `Action` to the engine.
//!
//! Sub-modules:
//! * `edit`      - insert / delete at the tail
//! * `undo`      - undo / redo
//! * `clipboard` - selection marks, copy, cut, paste
//! * `file`      - load, save, replace (whole-buffer rebuilds)

use crate::Action;
use core_state::{EditOutcome, Engine, EngineError};

mod clipboard;
mod edit;
mod file;
mod undo;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    /// The linear view changed and must be re-rendered.
    pub dirty: bool,
    pub quit: bool,
    /// The whole sequence was rebuilt (load / replace); cell identities are new.
    pub buffer_replaced: bool,
    /// The presentation layer should collect input and dispatch the result.
    pub prompt: Option<crate::PromptKind>,
    /// Short message for the status line.
    pub status: Option<String>,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            ..Self::clean()
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
            buffer_replaced: false,
            prompt: None,
            status: None,
        }
    }
    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Self::clean()
        }
    }
    pub fn buffer_replaced() -> Self {
        Self {
            dirty: true,
            buffer_replaced: true,
            ..Self::clean()
        }
    }
    pub fn prompt(kind: crate::PromptKind) -> Self {
        Self {
            prompt: Some(kind),
            ..Self::clean()
        }
    }
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Map an engine outcome: applied edits are dirty, skipped ones clean.
    pub(crate) fn from_outcome(outcome: EditOutcome) -> Self {
        match outcome {
            EditOutcome::Applied => Self::dirty(),
            EditOutcome::Skipped(_) => Self::clean(),
        }
    }
}

/// Apply an action to the engine. Only file access can fail; every other
/// condition is absorbed as a clean (no-op) result.
pub fn dispatch(action: Action, engine: &mut Engine) -> Result<DispatchResult, EngineError> {
    let name = action.name();
    let result = match action {
        Action::Edit(kind) => edit::handle_edit(kind, engine),
        Action::Undo => undo::handle_undo(engine),
        Action::Redo => undo::handle_redo(engine),
        Action::MarkSelectionStart
        | Action::MarkSelectionEnd
        | Action::Copy
        | Action::Cut
        | Action::Paste => clipboard::handle_clipboard(action, engine),
        Action::Replace { find, with } => file::handle_replace(&find, &with, engine),
        Action::Load(path) => file::handle_load(&path, engine)?,
        Action::Save(path) => file::handle_save(&path, engine)?,
        Action::Prompt(kind) => DispatchResult::prompt(kind),
        Action::Quit => DispatchResult::quit(),
    };
    tracing::trace!(target: "actions.dispatch", op = name, dirty = result.dirty, len = engine.len(), "dispatch");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EditKind, PromptKind};

    fn run(engine: &mut Engine, action: Action) -> DispatchResult {
        dispatch(action, engine).unwrap()
    }

    #[test]
    fn insert_marks_dirty() {
        let mut e = Engine::default();
        let r = run(&mut e, Action::Edit(EditKind::InsertByte(b'a')));
        assert!(r.dirty);
        assert!(!r.quit);
        assert_eq!(e.save(), b"a");
    }

    #[test]
    fn noop_is_clean() {
        let mut e = Engine::default();
        assert_eq!(run(&mut e, Action::Undo), DispatchResult::clean());
        assert_eq!(
            run(&mut e, Action::Edit(EditKind::DeleteLast)),
            DispatchResult::clean()
        );
    }

    #[test]
    fn prompt_and_quit_pass_through() {
        let mut e = Engine::default();
        assert_eq!(
            run(&mut e, Action::Prompt(PromptKind::Open)).prompt,
            Some(PromptKind::Open)
        );
        assert!(run(&mut e, Action::Quit).quit);
    }
}

//! Editing engine: character sequence, history, selection and clipboard.
//!
//! All edits happen at the tail of the sequence; there is no cursor. The
//! engine performs no I/O. Load takes bytes and Save returns bytes; file access
//! lives in `core-actions::io_ops`.
//!
//! History semantics:
//! - Every inserted character is pushed to the undo log.
//! - Every character removed from the tail (backspace or undo) is pushed to
//!   the redo log. Inserting does not clear redo.
//! - Undo pops the undo log only to confirm an entry exists, then removes the
//!   current tail. It never searches for a cell matching the popped value.
//! - Cut and Replace bypass history entirely; Load resets it and then records
//!   every loaded byte as if typed.
//!
//! Selection lifetime:
//! - Marks always capture the current tail handle.
//! - Cut, Replace and Load clear the selection. A backspace over a marked cell
//!   leaves the mark in place but stale; stale marks behave as unset.

use core_text::CharSequence;
use core_text::search::replace_first;
use tracing::{debug, trace};

pub mod clipboard;
pub mod error;
pub mod history;
pub mod selection;

pub use clipboard::{CLIPBOARD_CAPACITY_DEFAULT, Clipboard};
pub use error::EngineError;
pub use history::{HISTORY_CAPACITY_DEFAULT, History};
pub use selection::{Selection, SelectionSpan};

/// Capacities of the bounded resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineLimits {
    pub history_capacity: usize,
    pub clipboard_capacity: usize,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            history_capacity: HISTORY_CAPACITY_DEFAULT,
            clipboard_capacity: CLIPBOARD_CAPACITY_DEFAULT,
        }
    }
}

/// Why an operation left the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyBuffer,
    EmptySelection,
    EmptyHistory,
    EmptyClipboard,
    PatternNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Skipped(SkipReason),
}

impl EditOutcome {
    pub fn applied(self) -> bool {
        matches!(self, EditOutcome::Applied)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    sequence: CharSequence,
    history: History,
    selection: Selection,
    clipboard: Clipboard,
}

impl Engine {
    pub fn new(limits: EngineLimits) -> Self {
        Self {
            sequence: CharSequence::new(),
            history: History::new(limits.history_capacity),
            selection: Selection::default(),
            clipboard: Clipboard::new(limits.clipboard_capacity),
        }
    }

    pub fn sequence(&self) -> &CharSequence {
        &self.sequence
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }
    pub fn len(&self) -> usize {
        self.sequence.len()
    }
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Append `c` and record it in the undo log.
    pub fn insert(&mut self, c: u8) -> EditOutcome {
        self.sequence.append(c);
        self.history.record_insert(c);
        EditOutcome::Applied
    }

    /// Insert each byte in order, each one individually recorded.
    pub fn insert_bytes(&mut self, bytes: &[u8]) -> EditOutcome {
        for &b in bytes {
            self.insert(b);
        }
        EditOutcome::Applied
    }

    /// Remove the tail and record it in the redo log.
    pub fn delete_last(&mut self) -> EditOutcome {
        match self.sequence.remove_tail() {
            Some(c) => {
                self.history.record_removal(c);
                EditOutcome::Applied
            }
            None => EditOutcome::Skipped(SkipReason::EmptyBuffer),
        }
    }

    /// Remove the most recent insertion.
    pub fn undo(&mut self) -> EditOutcome {
        if self.history.pop_undo().is_none() {
            return EditOutcome::Skipped(SkipReason::EmptyHistory);
        }
        let outcome = self.delete_last();
        trace!(target: "state.engine", applied = outcome.applied(), len = self.sequence.len(), "undo");
        outcome
    }

    /// Re-insert the most recently removed character.
    pub fn redo(&mut self) -> EditOutcome {
        match self.history.pop_redo() {
            Some(c) => {
                self.insert(c);
                trace!(target: "state.engine", len = self.sequence.len(), "redo");
                EditOutcome::Applied
            }
            None => EditOutcome::Skipped(SkipReason::EmptyHistory),
        }
    }

    pub fn mark_selection_start(&mut self) -> EditOutcome {
        let tail = self.sequence.tail();
        self.selection.mark_start(tail);
        Self::mark_outcome(tail.is_some())
    }

    pub fn mark_selection_end(&mut self) -> EditOutcome {
        let tail = self.sequence.tail();
        self.selection.mark_end(tail);
        Self::mark_outcome(tail.is_some())
    }

    fn mark_outcome(marked: bool) -> EditOutcome {
        if marked {
            EditOutcome::Applied
        } else {
            EditOutcome::Skipped(SkipReason::EmptyBuffer)
        }
    }

    /// Copy the selected range into the clipboard.
    pub fn copy(&mut self) -> EditOutcome {
        let Some(span) = self.selection.live_span(&self.sequence) else {
            return EditOutcome::Skipped(SkipReason::EmptySelection);
        };
        self.clipboard
            .fill(self.sequence.iter_range(span.start, span.end));
        debug!(target: "state.engine", size = self.clipboard.len(), truncated = self.clipboard.truncated(), "copy");
        EditOutcome::Applied
    }

    /// Copy, then splice the selected range out and clear the selection.
    /// History is not updated.
    pub fn cut(&mut self) -> EditOutcome {
        let Some(span) = self.selection.live_span(&self.sequence) else {
            return EditOutcome::Skipped(SkipReason::EmptySelection);
        };
        self.copy();
        let removed = self.sequence.remove_range(span.start, span.end);
        self.selection.clear();
        debug!(target: "state.engine", removed = removed.len(), len = self.sequence.len(), "cut");
        EditOutcome::Applied
    }

    /// Append the clipboard content through `insert`.
    pub fn paste(&mut self) -> EditOutcome {
        if self.clipboard.is_empty() {
            return EditOutcome::Skipped(SkipReason::EmptyClipboard);
        }
        let content = self.clipboard.content().to_vec();
        for c in content {
            self.insert(c);
        }
        debug!(target: "state.engine", size = self.clipboard.len(), "paste");
        EditOutcome::Applied
    }

    /// Replace the first occurrence of `find` with `with` and rebuild the
    /// sequence. History is untouched; the selection is cleared.
    pub fn replace(&mut self, find: &[u8], with: &[u8]) -> EditOutcome {
        let view = self.sequence.to_linear_view();
        let Some(rebuilt) = replace_first(&view, find, with) else {
            trace!(target: "state.engine", find_len = find.len(), "replace_not_found");
            return EditOutcome::Skipped(SkipReason::PatternNotFound);
        };
        self.sequence.reset();
        for &b in &rebuilt {
            self.sequence.append(b);
        }
        self.selection.clear();
        debug!(target: "state.engine", find_len = find.len(), with_len = with.len(), len = self.sequence.len(), "replace");
        EditOutcome::Applied
    }

    /// Reset sequence, history and selection, then insert every byte.
    pub fn load(&mut self, bytes: &[u8]) {
        self.sequence.reset();
        self.history.reset_on_load();
        self.selection.clear();
        for &b in bytes {
            self.insert(b);
        }
        debug!(target: "state.engine", len = self.sequence.len(), undo_depth = self.history.undo_depth(), "load");
    }

    /// Linear view verbatim.
    pub fn save(&self) -> Vec<u8> {
        self.sequence.to_linear_view()
    }

    /// Linear view decoded for display. Invalid UTF-8 is replaced.
    pub fn render(&self) -> String {
        String::from_utf8_lossy(&self.sequence.to_linear_view()).into_owned()
    }
}

//! Selection marks and clipboard transfer.

use super::DispatchResult;
use crate::Action;
use core_state::{EditOutcome, Engine, SkipReason};

pub(crate) fn handle_clipboard(action: Action, engine: &mut Engine) -> DispatchResult {
    match action {
        Action::MarkSelectionStart => marked(engine.mark_selection_start(), "selection start"),
        Action::MarkSelectionEnd => marked(engine.mark_selection_end(), "selection end"),
        Action::Copy => match engine.copy() {
            EditOutcome::Applied => {
                DispatchResult::clean().with_status(copied_status(engine, "copied"))
            }
            EditOutcome::Skipped(_) => DispatchResult::clean().with_status("no selection"),
        },
        Action::Cut => match engine.cut() {
            EditOutcome::Applied => DispatchResult::dirty().with_status(copied_status(engine, "cut")),
            EditOutcome::Skipped(_) => DispatchResult::clean().with_status("no selection"),
        },
        Action::Paste => DispatchResult::from_outcome(engine.paste()),
        _ => DispatchResult::clean(),
    }
}

fn marked(outcome: EditOutcome, what: &str) -> DispatchResult {
    match outcome {
        EditOutcome::Applied => DispatchResult::clean().with_status(format!("{what} marked")),
        EditOutcome::Skipped(SkipReason::EmptyBuffer) => {
            DispatchResult::clean().with_status(format!("{what} cleared (empty buffer)"))
        }
        EditOutcome::Skipped(_) => DispatchResult::clean(),
    }
}

fn copied_status(engine: &Engine, verb: &str) -> String {
    let clip = engine.clipboard();
    if clip.truncated() {
        format!("{verb} {} chars (truncated)", clip.len())
    } else {
        format!("{verb} {} chars", clip.len())
    }
}

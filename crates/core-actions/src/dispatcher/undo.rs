//! Undo / Redo dispatch.

use super::DispatchResult;
use core_state::Engine;

pub(crate) fn handle_undo(engine: &mut Engine) -> DispatchResult {
    let before = engine.len();
    let outcome = engine.undo();
    tracing::trace!(target: "actions.dispatch", op = "undo", applied = outcome.applied(), before, after = engine.len(), "undo");
    DispatchResult::from_outcome(outcome)
}

pub(crate) fn handle_redo(engine: &mut Engine) -> DispatchResult {
    let before = engine.len();
    let outcome = engine.redo();
    tracing::trace!(target: "actions.dispatch", op = "redo", applied = outcome.applied(), before, after = engine.len(), "redo");
    DispatchResult::from_outcome(outcome)
}

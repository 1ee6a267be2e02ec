//! Tail edits: insert and delete-last.

use super::DispatchResult;
use crate::EditKind;
use core_state::Engine;

pub(crate) fn handle_edit(kind: EditKind, engine: &mut Engine) -> DispatchResult {
    let outcome = match kind {
        EditKind::InsertByte(b) => engine.insert(b),
        EditKind::InsertText(text) => {
            tracing::trace!(target: "actions.dispatch", op = "insert_text", size_bytes = text.len(), "edit");
            engine.insert_bytes(text.as_bytes())
        }
        EditKind::DeleteLast => engine.delete_last(),
    };
    DispatchResult::from_outcome(outcome)
}

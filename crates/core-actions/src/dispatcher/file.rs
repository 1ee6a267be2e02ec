//! Whole-buffer operations: replace, load, save.

use super::DispatchResult;
use crate::io_ops;
use core_state::{EditOutcome, Engine, EngineError};
use std::path::Path;

pub(crate) fn handle_replace(find: &str, with: &str, engine: &mut Engine) -> DispatchResult {
    match engine.replace(find.as_bytes(), with.as_bytes()) {
        EditOutcome::Applied => DispatchResult::buffer_replaced().with_status("replaced"),
        EditOutcome::Skipped(_) => DispatchResult::clean().with_status("pattern not found"),
    }
}

pub(crate) fn handle_load(path: &Path, engine: &mut Engine) -> Result<DispatchResult, EngineError> {
    let size = io_ops::load_file(engine, path)?;
    Ok(DispatchResult::buffer_replaced()
        .with_status(format!("opened {} ({size} bytes)", path.display())))
}

pub(crate) fn handle_save(path: &Path, engine: &Engine) -> Result<DispatchResult, EngineError> {
    let size = io_ops::save_file(engine, path)?;
    Ok(DispatchResult::clean().with_status(format!("saved {} ({size} bytes)", path.display())))
}

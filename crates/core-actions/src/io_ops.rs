//! File IO behind load and save.
//!
//! Files are raw byte streams: no header, no line ending translation, no
//! trailing newline handling. A failed read leaves the engine untouched.

use core_state::{Engine, EngineError};
use std::path::Path;

/// Read `path` and load its bytes into the engine. Returns the byte count.
pub fn load_file(engine: &mut Engine, path: &Path) -> Result<usize, EngineError> {
    match std::fs::read(path) {
        Ok(bytes) => {
            engine.load(&bytes);
            tracing::debug!(target: "io", file = %path.display(), size_bytes = bytes.len(), "file_read_ok");
            Ok(bytes.len())
        }
        Err(source) => {
            tracing::error!(target: "io", file = %path.display(), error = %source, "file_open_error");
            Err(EngineError::Load {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Write the engine's linear view to `path`. Returns the byte count.
pub fn save_file(engine: &Engine, path: &Path) -> Result<usize, EngineError> {
    let bytes = engine.save();
    match std::fs::write(path, &bytes) {
        Ok(()) => {
            tracing::debug!(target: "io", file = %path.display(), size_bytes = bytes.len(), "file_write_ok");
            Ok(bytes.len())
        }
        Err(source) => {
            tracing::error!(target: "io", file = %path.display(), error = %source, "file_write_error");
            Err(EngineError::Save {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

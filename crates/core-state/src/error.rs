use std::path::PathBuf;

/// Recoverable failures surfaced to the caller. Everything else the engine
/// meets (empty buffer, unset selection, absent pattern, full history) is
/// absorbed as a [`crate::SkipReason`].
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("cannot read {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EngineError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            EngineError::Load { path, .. } | EngineError::Save { path, .. } => path,
        }
    }
}

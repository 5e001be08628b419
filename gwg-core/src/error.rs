use std::path::PathBuf;

use thiserror::Error;

/// Failure while persisting generated text to disk.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to create directory '{}'", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// The path the failed operation targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::CreateDir { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

//! Error type for preference persistence.

use std::path::PathBuf;

/// Failure to persist the preference document. Reads never fail.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("preferences I/O at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),
}

use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

/// Scrivener's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Scrivener's crate-wide error type.
///
/// This is intentionally decoupled from `anyhow` so downstream libraries aren't forced to
/// adopt `anyhow` in their own public APIs.
///
/// Note that a failed transcription is *not* represented here: the pipeline converts
/// capability errors into `Outcome::Failed` data so one bad input never aborts a batch.
/// Only problems that make the whole run untrustworthy surface as `Error`.
#[derive(Debug, Error)]
pub enum Error {
    /// The discovery configuration is unusable (missing or non-directory scan root,
    /// unreadable input list). Fatal before any transcription is attempted.
    #[error("discovery failed: {0}")]
    Discovery(String),

    /// A transcript artifact (or its parent directory) could not be written.
    ///
    /// Fatal to the whole run: once an artifact is lost, the run's output can no
    /// longer be trusted.
    #[error("failed to persist transcript artifact at '{path}'")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Other(#[from] Box<dyn StdError + Send + Sync>),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Message(format!("{err:#}"))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Other(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(Box::new(err))
    }
}

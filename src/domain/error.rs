use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for reconf operations.
///
/// Every variant aborts the run; the CLI maps all of them to the same exit code.
#[derive(Debug, Error)]
pub enum AppError {
    /// Command line could not be turned into a run configuration.
    #[error("{0}")]
    Usage(String),

    /// Template file missing or unreadable.
    #[error("failed to read template {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Template syntax rejected by the engine.
    #[error("failed to parse template {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Output file could not be created.
    #[error("failed to create {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Template execution failed; the partial output has been removed.
    #[error("failed to render {}: {message}", path.display())]
    Render { path: PathBuf, message: String },

    /// Command could not be resolved or executed.
    #[error("failed to launch '{command}': {reason}")]
    Launch { command: String, reason: String },
}

impl AppError {
    pub fn usage<S: Into<String>>(message: S) -> Self {
        AppError::Usage(message.into())
    }

    pub(crate) fn launch<C: Into<String>, R: Into<String>>(command: C, reason: R) -> Self {
        AppError::Launch { command: command.into(), reason: reason.into() }
    }
}

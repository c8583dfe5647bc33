//! Error types for the terminal front end.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for terminal operations.
pub type TuiResult<T> = Result<T, TuiError>;

/// Errors that can occur while running the terminal UI.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Raw mode, alternate screen, drawing, or event read failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// The log file could not be opened.
    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A global tracing subscriber was already installed.
    #[error("logging already initialized: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),
}

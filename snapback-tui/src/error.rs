//! Error types for snapback-tui

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuiError {
    /// Store or session layer error
    #[error("Store error: {0}")]
    Core(#[from] libsnapback::SnapbackError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

//! Error types for Snapback

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SnapbackError>;

#[derive(Error, Debug)]
pub enum SnapbackError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Failures while reading or writing the persisted session record.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to access session record: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed session record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("No data directory available on this platform")]
    NoDataDir,
}

/// Rejected domain operations.
///
/// The store rejects these with a typed error instead of silently absorbing
/// them, so callers and tests can observe the rejection. State is untouched
/// when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Cannot vote on your own post (post {post_id})")]
    SelfVote { post_id: String },

    #[error("No such post: {post_id}")]
    UnknownPost { post_id: String },
}

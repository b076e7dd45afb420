//! Snapback - a then-vs-now photo voting client
//!
//! This library holds the application state store, the session
//! persistence/rehydration protocol, and the domain rules (one vote per
//! user per post, no self-votes, synthetic rewards). Presentation layers
//! consume the store; they never mutate entities directly.

pub mod directory;
pub mod error;
pub mod logging;
pub mod policy;
pub mod rewards;
pub mod seed;
pub mod session;
pub mod store;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{Result, SessionError, SnapbackError, StoreError};
pub use session::SessionStore;
pub use store::Store;
pub use types::{Comment, Page, Post, Transaction, User, UserRewards};

//! Application module
//!
//! The presentation state machine:
//! - Actions: what can happen
//! - State: screen-local UI state plus a synced read-model of the store
//! - Keymap: pure key-to-action mapping
//! - Reducer: pure function (UiState, Action) -> UiState
//!
//! Store operations are side effects and live in the event loop, never in
//! the reducer.

pub mod actions;
pub mod event;
pub mod keymap;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use keymap::map_key;
pub use reducer::reduce;
pub use state::{LoginField, SubmitField, UiState};

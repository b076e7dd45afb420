//! Actions for the reducer pattern
//!
//! Every state transition is described by an action. Pure transitions are
//! applied by the reducer; the store-operation requests (login, vote,
//! comment, submit, logout) are recognized by the event loop, which calls
//! the store and feeds follow-up actions back in.

use crossterm::event::KeyEvent;
use libsnapback::Page;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Navigation request; the event loop resolves it through the policy
    NavigateTo(Page),

    /// Quit the application
    Quit,

    // === Feed ===
    /// Move the feed selection down
    SelectNext,

    /// Move the feed selection up
    SelectPrev,

    /// Open the comment composer for the selected post
    StartComment,

    /// Close the comment composer, discarding the buffer
    CancelComment,

    /// Type into the comment composer
    CommentInput(char),

    /// Delete from the comment composer
    CommentBackspace,

    /// Submit the comment buffer (store operation)
    CommentSubmitted,

    /// Toggle the vote on the selected post (store operation)
    VoteRequested,

    // === Login form ===
    /// Move focus between the contact and username fields
    LoginFocusNext,

    /// Type into the focused login field
    LoginInput(char),

    /// Delete from the focused login field
    LoginBackspace,

    /// Submit the login form (store operation, validated first)
    LoginSubmitted,

    /// Clear the login form after a successful login
    LoginCleared,

    /// Log out (store operation)
    LogoutRequested,

    /// Erase the cached session and start over (store operation)
    ResetRequested,

    // === Submit form ===
    /// Move focus to the next submit-form field
    SubmitFocusNext,

    /// Type into the focused one-line submit field
    SubmitInput(char),

    /// Delete from the focused one-line submit field
    SubmitBackspace,

    /// Description editor content changed (synced from the textarea)
    DescriptionChanged(String),

    /// Submit the new post (store operation)
    PostSubmitted,

    /// Clear the submit form after a successful submission
    SubmitCleared,

    // === Overlays ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,

    // === Status line ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}

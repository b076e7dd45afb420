//! Presentation state
//!
//! `UiState` is screen-local state only: selections, form buffers,
//! overlays. The authoritative model lives in the store; the few store
//! facts the reducer needs (current page, session presence, feed length)
//! are copied in through [`UiState::sync`] after every batch of store
//! operations.

use libsnapback::{Page, Store};

/// Root presentation state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current page, mirrored from the store
    pub page: Page,

    /// Is a user logged in? Mirrored from the store
    pub session_present: bool,

    /// Feed length, mirrored from the store
    pub post_count: usize,

    /// Feed screen state
    pub feed: FeedState,

    /// Login form state
    pub login: LoginForm,

    /// Submit form state
    pub submit: SubmitForm,

    /// Status line message
    pub status: Option<String>,

    /// Error overlay
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Feed screen state
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    /// Index of the selected post
    pub selected: usize,

    /// Comment composer open?
    pub composing: bool,

    /// Comment composer buffer
    pub comment: String,
}

/// Login form state
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub contact: String,
    pub username: String,
    pub focus: LoginField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Contact,
    Username,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            contact: String::new(),
            username: String::new(),
            focus: LoginField::Contact,
        }
    }
}

/// Submit form state
///
/// `description` is owned by the textarea widget in the event loop and
/// synced in; the one-line fields are edited directly by the reducer.
#[derive(Debug, Clone)]
pub struct SubmitForm {
    pub description: String,
    pub retro_image: String,
    pub recreated_image: String,
    pub retro_location: String,
    pub recreated_location: String,
    pub focus: SubmitField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitField {
    RetroImage,
    RecreatedImage,
    RetroLocation,
    RecreatedLocation,
    Description,
}

impl SubmitField {
    /// Tab order on the submit screen.
    pub fn next(self) -> Self {
        match self {
            SubmitField::RetroImage => SubmitField::RecreatedImage,
            SubmitField::RecreatedImage => SubmitField::RetroLocation,
            SubmitField::RetroLocation => SubmitField::RecreatedLocation,
            SubmitField::RecreatedLocation => SubmitField::Description,
            SubmitField::Description => SubmitField::RetroImage,
        }
    }
}

impl Default for SubmitForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            retro_image: String::new(),
            recreated_image: String::new(),
            retro_location: String::new(),
            recreated_location: String::new(),
            focus: SubmitField::RetroImage,
        }
    }
}

impl SubmitForm {
    /// Both photos and both locations are required; the description is
    /// optional.
    pub fn is_complete(&self) -> bool {
        !self.retro_image.trim().is_empty()
            && !self.recreated_image.trim().is_empty()
            && !self.retro_location.trim().is_empty()
            && !self.recreated_location.trim().is_empty()
    }
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("SNAPBACK_TUI_NO_COLOR").is_err();

        let unicode_enabled = colors_enabled;

        let tick_rate_ms = std::env::var("SNAPBACK_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            should_quit: false,
            page: Page::Landing,
            session_present: false,
            post_count: 0,
            feed: FeedState::default(),
            login: LoginForm::default(),
            submit: SubmitForm::default(),
            status: None,
            error: None,
            config: UiConfig::default(),
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the store facts the reducer depends on and keep the feed
    /// selection inside bounds.
    pub fn sync(&mut self, store: &Store) {
        self.page = store.current_page();
        self.session_present = store.user().is_some();
        self.post_count = store.posts().len();

        if self.feed.selected >= self.post_count {
            self.feed.selected = self.post_count.saturating_sub(1);
        }
    }

    /// Is the user currently typing into a text field?
    pub fn in_text_input(&self) -> bool {
        match self.page {
            Page::Login => true,
            Page::Submit => true,
            Page::Feed => self.feed.composing,
            _ => false,
        }
    }
}

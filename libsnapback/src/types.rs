//! Core types for Snapback

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The acting principal. This is also the exact payload written to the
/// persisted session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Email or phone, validated at the boundary (see `validation`).
    pub contact: String,
}

impl User {
    pub fn new(username: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            contact: contact.into(),
        }
    }
}

/// A single comment on a post. Immutable once created; ordering within a
/// post is insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub user: String,
    pub text: String,
}

impl Comment {
    pub fn new(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user: user.into(),
            text: text.into(),
        }
    }
}

// Comments are equal when they are the same comment, not when they say the
// same thing.
impl PartialEq for Comment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Comment {}

/// A then-vs-now entry in the feed or on the wall of fame.
///
/// `likes` only changes through the vote toggle and `comments` only grows.
/// `is_liked` is the viewing user's own vote flag (single-viewer model).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Author username.
    pub user: String,
    /// Reference to the recreated photo.
    pub image: String,
    pub retro_image: Option<String>,
    pub retro_location: Option<String>,
    pub recreated_location: Option<String>,
    pub likes: u32,
    pub comments: Vec<Comment>,
    pub description: String,
    #[serde(default)]
    pub is_liked: bool,
}

impl Post {
    /// Create a fresh submission: zero votes, no comments.
    pub fn new(
        user: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
        retro_image: Option<String>,
        retro_location: Option<String>,
        recreated_location: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user: user.into(),
            image: image.into(),
            retro_image,
            retro_location,
            recreated_location,
            likes: 0,
            comments: Vec::new(),
            description: description.into(),
            is_liked: false,
        }
    }
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Post {}

/// One rewards-earning event. Read-only once generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub store: String,
    pub points: i64,
    /// Epoch milliseconds.
    pub date: i64,
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}

/// Points balance and transaction history for a user.
///
/// `points` is the balance of record; the transactions are a cosmetic
/// breakdown and need not sum to it exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRewards {
    pub username: String,
    pub points: i64,
    pub transactions: Vec<Transaction>,
}

/// Navigation target. `Feed`, `Submit`, `Wall` and `Rewards` require a
/// session; `Landing` and `Login` require its absence. The store does not
/// enforce this itself - see `policy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Landing,
    Login,
    Feed,
    Submit,
    Wall,
    Rewards,
}

impl Page {
    /// Pages that are only reachable with a logged-in session.
    pub fn requires_session(&self) -> bool {
        matches!(self, Page::Feed | Page::Submit | Page::Wall | Page::Rewards)
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "landing" => Ok(Page::Landing),
            "login" => Ok(Page::Login),
            "feed" => Ok(Page::Feed),
            "submit" => Ok(Page::Submit),
            "wall" => Ok(Page::Wall),
            "rewards" => Ok(Page::Rewards),
            _ => Err(format!(
                "Invalid page: '{}'. Valid options: landing, login, feed, submit, wall, rewards",
                s
            )),
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Page::Landing => "landing",
            Page::Login => "login",
            Page::Feed => "feed",
            Page::Submit => "submit",
            Page::Wall => "wall",
            Page::Rewards => "rewards",
        };
        write!(f, "{}", name)
    }
}

//! The application store
//!
//! Single authoritative in-memory model for session, content, and
//! navigation state. Presentation reads through the accessors and mutates
//! only through the operations here; no mutable reference to the
//! collections ever escapes.
//!
//! The store is an explicit container, constructed per instance with the
//! session handle it should persist through. Tests build one against a
//! temp directory; the application builds one against the default path.

use crate::error::{Result, StoreError};
use crate::rewards::generate_rewards;
use crate::seed;
use crate::session::SessionStore;
use crate::types::{Comment, Page, Post, User, UserRewards};

/// Comment attribution when nobody is logged in.
const GUEST_COMMENTER: &str = "Guest";

/// Post attribution when nobody is logged in.
const ANONYMOUS_AUTHOR: &str = "Anonymous";

pub struct Store {
    session: SessionStore,
    user: Option<User>,
    posts: Vec<Post>,
    wall_of_fame: Vec<Post>,
    current_page: Page,
    user_rewards: Option<UserRewards>,
}

impl Store {
    /// Create a store in its initial logged-out state: seed feed, seed
    /// winners, landing page.
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            user: None,
            posts: seed::seed_posts(),
            wall_of_fame: seed::wall_of_fame(),
            current_page: Page::Landing,
            user_rewards: None,
        }
    }

    // --- read accessors -------------------------------------------------

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn wall_of_fame(&self) -> &[Post] {
        &self.wall_of_fame
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn user_rewards(&self) -> Option<&UserRewards> {
        self.user_rewards.as_ref()
    }

    // --- operations -----------------------------------------------------

    /// Unconditional page transition. Guarding against pages the session
    /// state does not allow is the caller's job, via `policy::resolve_page`.
    pub fn set_current_page(&mut self, page: Page) {
        self.current_page = page;
    }

    /// Log in and persist the session record.
    ///
    /// Input shape is the caller's responsibility (`validation`); this
    /// operation fails only if the record cannot be written. A fresh
    /// rewards ledger is generated on every login.
    pub fn login(&mut self, username: &str, contact: &str) -> Result<()> {
        let user = User::new(username, contact);
        self.session.save(&user)?;

        tracing::info!(username, "Logged in");
        self.user_rewards = Some(generate_rewards(username));
        self.user = Some(user);
        self.current_page = Page::Feed;
        Ok(())
    }

    /// Log out: erase the session record, drop the session and rewards,
    /// restore the seed feed, return to the landing page.
    ///
    /// Restoring the seed feed means posts submitted this session are
    /// discarded - a session boundary resets the content, by contract.
    pub fn logout(&mut self) -> Result<()> {
        self.session.clear()?;

        if let Some(user) = self.user.take() {
            tracing::info!(username = %user.username, "Logged out");
        }
        self.user_rewards = None;
        self.posts = seed::seed_posts();
        self.current_page = Page::Landing;
        Ok(())
    }

    /// Equivalent to [`Store::logout`].
    pub fn reset_cache(&mut self) -> Result<()> {
        self.logout()
    }

    /// Toggle the viewing user's vote on a post.
    ///
    /// Voting on your own post is rejected; toggling twice restores the
    /// original count. The rejected cases leave every post untouched.
    pub fn toggle_like(&mut self, post_id: &str) -> std::result::Result<(), StoreError> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| StoreError::UnknownPost {
                post_id: post_id.to_string(),
            })?;

        if let Some(user) = &self.user {
            if post.user == user.username {
                return Err(StoreError::SelfVote {
                    post_id: post_id.to_string(),
                });
            }
        }

        if post.is_liked {
            post.likes = post.likes.saturating_sub(1);
        } else {
            post.likes += 1;
        }
        post.is_liked = !post.is_liked;

        tracing::debug!(post_id, likes = post.likes, "Vote toggled");
        Ok(())
    }

    /// Append a comment to a post, attributed to the current user or to
    /// the guest placeholder. Text is taken verbatim.
    pub fn add_comment(&mut self, post_id: &str, text: &str) -> std::result::Result<(), StoreError> {
        let commenter = self
            .user
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_else(|| GUEST_COMMENTER.to_string());

        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| StoreError::UnknownPost {
                post_id: post_id.to_string(),
            })?;

        post.comments.push(Comment::new(commenter, text));
        Ok(())
    }

    /// Prepend a new submission to the feed and return its id.
    ///
    /// The newest post is always at index 0.
    pub fn add_post(
        &mut self,
        image: &str,
        description: &str,
        retro_image: Option<String>,
        retro_location: Option<String>,
        recreated_location: Option<String>,
    ) -> String {
        let author = self
            .user
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());

        let post = Post::new(
            author,
            image,
            description,
            retro_image,
            retro_location,
            recreated_location,
        );
        let id = post.id.clone();

        tracing::info!(post_id = %id, "Submission added");
        self.posts.insert(0, post);
        id
    }

    /// Reconcile the persisted session record into the store.
    ///
    /// Runs once at process start, before the first render. Returns whether
    /// a session was restored. A malformed record has already been deleted
    /// by the session store by the time this sees `None`, so the store
    /// simply stays logged out.
    pub fn rehydrate(&mut self) -> Result<bool> {
        match self.session.load()? {
            Some(user) => {
                tracing::info!(username = %user.username, "Session restored");
                self.user_rewards = Some(generate_rewards(&user.username));
                self.user = Some(user);
                self.current_page = Page::Feed;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_posts;

    fn test_store() -> (Store, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(SessionStore::at(dir.path().join("session.json")));
        (store, dir)
    }

    #[test]
    fn test_initial_state() {
        let (store, _dir) = test_store();

        assert!(store.user().is_none());
        assert!(store.user_rewards().is_none());
        assert_eq!(store.current_page(), Page::Landing);
        assert_eq!(store.posts().len(), seed_posts().len());
        assert!(!store.wall_of_fame().is_empty());
    }

    #[test]
    fn test_login_sets_session_and_navigates_to_feed() {
        let (mut store, _dir) = test_store();

        store.login("Maya", "maya@example.com").unwrap();

        assert_eq!(store.user().unwrap().username, "Maya");
        assert_eq!(store.current_page(), Page::Feed);
        let rewards = store.user_rewards().unwrap();
        assert_eq!(rewards.username, "Maya");
        assert_eq!(rewards.transactions.len(), 3);
    }

    #[test]
    fn test_login_persists_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut store = Store::new(SessionStore::at(&path));

        store.login("Maya", "maya@example.com").unwrap();

        assert!(path.exists());
        let on_disk: User =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk.username, "Maya");
        assert_eq!(on_disk.contact, "maya@example.com");
    }

    #[test]
    fn test_logout_clears_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut store = Store::new(SessionStore::at(&path));

        store.login("Maya", "maya@example.com").unwrap();
        store.logout().unwrap();

        assert!(store.user().is_none());
        assert!(store.user_rewards().is_none());
        assert_eq!(store.current_page(), Page::Landing);
        assert!(!path.exists());
    }

    #[test]
    fn test_logout_discards_session_submissions() {
        let (mut store, _dir) = test_store();
        store.login("Maya", "maya@example.com").unwrap();

        store.add_post("assets/new.jpg", "my entry", None, None, None);
        assert_eq!(store.posts().len(), seed_posts().len() + 1);

        store.logout().unwrap();
        assert_eq!(store.posts().len(), seed_posts().len());
    }

    #[test]
    fn test_reset_cache_is_equivalent_to_logout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut store = Store::new(SessionStore::at(&path));

        store.login("Maya", "maya@example.com").unwrap();
        store.reset_cache().unwrap();

        assert!(store.user().is_none());
        assert_eq!(store.current_page(), Page::Landing);
        assert!(!path.exists());
    }

    #[test]
    fn test_toggle_like_is_symmetric() {
        let (mut store, _dir) = test_store();
        store.login("Maya", "maya@example.com").unwrap();
        let before = store.posts()[1].likes;

        store.toggle_like("seed-2").unwrap();
        assert_eq!(store.posts()[1].likes, before + 1);
        assert!(store.posts()[1].is_liked);

        store.toggle_like("seed-2").unwrap();
        assert_eq!(store.posts()[1].likes, before);
        assert!(!store.posts()[1].is_liked);
    }

    #[test]
    fn test_self_vote_is_rejected_and_state_untouched() {
        let (mut store, _dir) = test_store();
        // Seed post "seed-2" is authored by OldTimer.
        store.login("OldTimer", "old@example.com").unwrap();
        let before = store.posts()[1].clone();

        let result = store.toggle_like("seed-2");

        assert_eq!(
            result,
            Err(StoreError::SelfVote {
                post_id: "seed-2".to_string()
            })
        );
        assert_eq!(store.posts()[1].likes, before.likes);
        assert_eq!(store.posts()[1].is_liked, before.is_liked);
    }

    #[test]
    fn test_toggle_like_unknown_post() {
        let (mut store, _dir) = test_store();

        let result = store.toggle_like("nope");

        assert_eq!(
            result,
            Err(StoreError::UnknownPost {
                post_id: "nope".to_string()
            })
        );
    }

    #[test]
    fn test_guest_can_vote() {
        let (mut store, _dir) = test_store();
        let before = store.posts()[0].likes;

        store.toggle_like("seed-1").unwrap();

        assert_eq!(store.posts()[0].likes, before + 1);
    }

    #[test]
    fn test_add_comment_appends_last_and_preserves_order() {
        let (mut store, _dir) = test_store();
        store.login("Maya", "maya@example.com").unwrap();
        let existing: Vec<String> = store.posts()[0]
            .comments
            .iter()
            .map(|c| c.id.clone())
            .collect();

        store.add_comment("seed-1", "nice!").unwrap();

        let comments = &store.posts()[0].comments;
        assert_eq!(comments.len(), existing.len() + 1);
        for (idx, id) in existing.iter().enumerate() {
            assert_eq!(&comments[idx].id, id);
        }
        let last = comments.last().unwrap();
        assert_eq!(last.user, "Maya");
        assert_eq!(last.text, "nice!");
    }

    #[test]
    fn test_add_comment_as_guest_uses_placeholder() {
        let (mut store, _dir) = test_store();

        store.add_comment("seed-1", "nice!").unwrap();

        let last = store.posts()[0].comments.last().unwrap();
        assert_eq!(last.user, "Guest");
        assert_eq!(last.text, "nice!");
    }

    #[test]
    fn test_add_comment_unknown_post() {
        let (mut store, _dir) = test_store();

        let result = store.add_comment("nope", "hello");

        assert_eq!(
            result,
            Err(StoreError::UnknownPost {
                post_id: "nope".to_string()
            })
        );
    }

    #[test]
    fn test_add_post_prepends() {
        let (mut store, _dir) = test_store();
        store.login("Maya", "maya@example.com").unwrap();
        let previous: Vec<String> = store.posts().iter().map(|p| p.id.clone()).collect();

        let id = store.add_post(
            "assets/new.jpg",
            "Court Ave today",
            Some("assets/old.jpg".to_string()),
            Some("Bean Hollow Coffee".to_string()),
            Some("Bean Hollow Coffee".to_string()),
        );

        assert_eq!(store.posts()[0].id, id);
        assert_eq!(store.posts()[0].user, "Maya");
        assert_eq!(store.posts()[0].likes, 0);
        assert!(store.posts()[0].comments.is_empty());
        // Everything that was there keeps its relative order after it.
        let after: Vec<String> = store.posts()[1..].iter().map(|p| p.id.clone()).collect();
        assert_eq!(after, previous);
    }

    #[test]
    fn test_add_post_logged_out_is_anonymous() {
        let (mut store, _dir) = test_store();

        store.add_post("assets/new.jpg", "drive-by entry", None, None, None);

        assert_eq!(store.posts()[0].user, "Anonymous");
    }

    #[test]
    fn test_set_current_page_is_unconditional() {
        let (mut store, _dir) = test_store();

        // Logged out, but the store does not guard; the policy collaborator
        // does.
        store.set_current_page(Page::Rewards);
        assert_eq!(store.current_page(), Page::Rewards);
    }

    #[test]
    fn test_rehydrate_restores_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let session = SessionStore::at(&path);
        session.save(&User::new("Maya", "maya@example.com")).unwrap();

        let mut store = Store::new(session);
        let restored = store.rehydrate().unwrap();

        assert!(restored);
        assert_eq!(store.user().unwrap().username, "Maya");
        assert_eq!(store.current_page(), Page::Feed);
        assert!(store.user_rewards().is_some());
    }

    #[test]
    fn test_rehydrate_without_record_stays_logged_out() {
        let (mut store, _dir) = test_store();

        let restored = store.rehydrate().unwrap();

        assert!(!restored);
        assert!(store.user().is_none());
        assert_eq!(store.current_page(), Page::Landing);
    }

    #[test]
    fn test_rehydrate_malformed_record_self_heals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "][ definitely not json").unwrap();

        let mut store = Store::new(SessionStore::at(&path));
        let restored = store.rehydrate().unwrap();

        assert!(!restored);
        assert!(store.user().is_none());
        assert!(!path.exists());
    }
}

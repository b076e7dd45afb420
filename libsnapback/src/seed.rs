//! Seed content
//!
//! The canned feed and wall-of-fame entries the store starts with. Ids are
//! fixed strings rather than uuids so that a logout/reset lands on exactly
//! the same collection it started from.

use crate::types::{Comment, Post};

/// The initial feed. Logout restores this collection, discarding anything
/// submitted during the session.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: "seed-1".to_string(),
            user: "HistFan22".to_string(),
            image: "assets/main-street-2024.jpg".to_string(),
            retro_image: Some("assets/main-street-1908.jpg".to_string()),
            retro_location: Some("Main Street Books".to_string()),
            recreated_location: Some("Main Street Books".to_string()),
            likes: 45,
            comments: vec![Comment {
                id: "seed-1-c1".to_string(),
                user: "UserA".to_string(),
                text: "Amazing!".to_string(),
            }],
            description: "Main Street then and now".to_string(),
            is_liked: false,
        },
        Post {
            id: "seed-2".to_string(),
            user: "OldTimer".to_string(),
            image: "assets/tiber-alley-2024.jpg".to_string(),
            retro_image: None,
            retro_location: None,
            recreated_location: None,
            likes: 12,
            comments: Vec::new(),
            description: "A lovely comparison shot".to_string(),
            is_liked: false,
        },
    ]
}

/// Past monthly winners. Read-mostly; independent of the live feed.
pub fn wall_of_fame() -> Vec<Post> {
    vec![Post {
        id: "wall-1".to_string(),
        user: "Winner1".to_string(),
        image: "assets/b-and-o-station-2024.jpg".to_string(),
        retro_image: Some("assets/b-and-o-station-1900.jpg".to_string()),
        retro_location: Some("Ellicott Mills Brewing".to_string()),
        recreated_location: Some("Ellicott Mills Brewing".to_string()),
        likes: 200,
        comments: Vec::new(),
        description: "Winner - Month 1".to_string(),
        is_liked: false,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_posts_have_stable_ids() {
        let first = seed_posts();
        let second = seed_posts();

        let first_ids: Vec<_> = first.iter().map(|p| p.id.clone()).collect();
        let second_ids: Vec<_> = second.iter().map(|p| p.id.clone()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_seed_posts_start_unliked() {
        for post in seed_posts() {
            assert!(!post.is_liked);
        }
    }

    #[test]
    fn test_wall_is_disjoint_from_feed() {
        let feed_ids: Vec<_> = seed_posts().into_iter().map(|p| p.id).collect();
        for winner in wall_of_fame() {
            assert!(!feed_ids.contains(&winner.id));
        }
    }
}

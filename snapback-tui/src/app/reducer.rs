//! Pure reducer function for state transitions
//!
//! `(UiState, Action) -> UiState`, no side effects. Store operations are
//! not performed here - the event loop recognizes the request actions,
//! calls the store, and dispatches follow-up actions with the outcome.

use super::actions::Action;
use super::keymap::map_key;
use super::state::{LoginField, LoginForm, SubmitField, SubmitForm, UiState};

/// Pure reducer function
///
/// Raw key events are resolved through the keymap and fed back in, so
/// tests can drive the reducer with either keys or actions.
pub fn reduce(state: UiState, action: Action) -> UiState {
    match action {
        // === UI Events ===
        Action::Key(key) => match map_key(&state, key) {
            Some(mapped) => reduce(state, mapped),
            None => state,
        },
        Action::Tick => state,
        Action::Resize(_, _) => state,

        // === Navigation ===
        // The event loop resolves the request through the policy and the
        // store; the reducer just closes transient feed state so the next
        // visit starts clean.
        Action::NavigateTo(_) => UiState {
            feed: super::state::FeedState {
                selected: state.feed.selected,
                composing: false,
                comment: String::new(),
            },
            status: None,
            ..state
        },

        Action::Quit => UiState {
            should_quit: true,
            ..state
        },

        // === Feed ===
        Action::SelectNext => {
            let last = state.post_count.saturating_sub(1);
            let selected = (state.feed.selected + 1).min(last);
            UiState {
                feed: super::state::FeedState {
                    selected,
                    ..state.feed
                },
                ..state
            }
        }

        Action::SelectPrev => UiState {
            feed: super::state::FeedState {
                selected: state.feed.selected.saturating_sub(1),
                ..state.feed
            },
            ..state
        },

        Action::StartComment => {
            if state.post_count == 0 {
                return state;
            }
            UiState {
                feed: super::state::FeedState {
                    composing: true,
                    comment: String::new(),
                    ..state.feed
                },
                ..state
            }
        }

        Action::CancelComment => UiState {
            feed: super::state::FeedState {
                composing: false,
                comment: String::new(),
                ..state.feed
            },
            ..state
        },

        Action::CommentInput(c) => {
            let mut comment = state.feed.comment.clone();
            comment.push(c);
            UiState {
                feed: super::state::FeedState {
                    comment,
                    ..state.feed
                },
                ..state
            }
        }

        Action::CommentBackspace => {
            let mut comment = state.feed.comment.clone();
            comment.pop();
            UiState {
                feed: super::state::FeedState {
                    comment,
                    ..state.feed
                },
                ..state
            }
        }

        // Handled by the event loop.
        Action::CommentSubmitted => state,
        Action::VoteRequested => state,
        Action::LoginSubmitted => state,
        Action::LogoutRequested => state,
        Action::ResetRequested => state,
        Action::PostSubmitted => state,

        // === Login form ===
        Action::LoginFocusNext => {
            let focus = match state.login.focus {
                LoginField::Contact => LoginField::Username,
                LoginField::Username => LoginField::Contact,
            };
            UiState {
                login: LoginForm {
                    focus,
                    ..state.login
                },
                ..state
            }
        }

        Action::LoginInput(c) => {
            let mut login = state.login.clone();
            match login.focus {
                LoginField::Contact => login.contact.push(c),
                LoginField::Username => login.username.push(c),
            }
            UiState { login, ..state }
        }

        Action::LoginBackspace => {
            let mut login = state.login.clone();
            match login.focus {
                LoginField::Contact => {
                    login.contact.pop();
                }
                LoginField::Username => {
                    login.username.pop();
                }
            }
            UiState { login, ..state }
        }

        Action::LoginCleared => UiState {
            login: LoginForm::default(),
            ..state
        },

        // === Submit form ===
        Action::SubmitFocusNext => UiState {
            submit: SubmitForm {
                focus: state.submit.focus.next(),
                ..state.submit
            },
            ..state
        },

        Action::SubmitInput(c) => {
            let mut submit = state.submit.clone();
            match submit.focus {
                SubmitField::RetroImage => submit.retro_image.push(c),
                SubmitField::RecreatedImage => submit.recreated_image.push(c),
                SubmitField::RetroLocation => submit.retro_location.push(c),
                SubmitField::RecreatedLocation => submit.recreated_location.push(c),
                // Owned by the textarea; synced via DescriptionChanged.
                SubmitField::Description => {}
            }
            UiState { submit, ..state }
        }

        Action::SubmitBackspace => {
            let mut submit = state.submit.clone();
            match submit.focus {
                SubmitField::RetroImage => {
                    submit.retro_image.pop();
                }
                SubmitField::RecreatedImage => {
                    submit.recreated_image.pop();
                }
                SubmitField::RetroLocation => {
                    submit.retro_location.pop();
                }
                SubmitField::RecreatedLocation => {
                    submit.recreated_location.pop();
                }
                SubmitField::Description => {}
            }
            UiState { submit, ..state }
        }

        Action::DescriptionChanged(description) => UiState {
            submit: SubmitForm {
                description,
                ..state.submit
            },
            ..state
        },

        Action::SubmitCleared => UiState {
            submit: SubmitForm::default(),
            ..state
        },

        // === Overlays ===
        Action::ShowError(error) => UiState {
            error: Some(error),
            ..state
        },

        Action::DismissError => UiState {
            error: None,
            ..state
        },

        // === Status line ===
        Action::SetStatus(message) => UiState {
            status: Some(message),
            ..state
        },

        Action::ClearStatus => UiState {
            status: None,
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reducer_is_pure() {
        let state = UiState::new();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Action::SetStatus("Test".to_string()));

        assert!(state_clone.status.is_none());
        assert_eq!(new_state.status, Some("Test".to_string()));
    }

    #[test]
    fn test_quit_action() {
        let state = UiState::new();
        assert!(!state.should_quit);

        let new_state = reduce(state, Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_selection_clamps_to_feed_bounds() {
        let mut state = UiState::new();
        state.post_count = 2;

        state = reduce(state, Action::SelectNext);
        state = reduce(state, Action::SelectNext);
        state = reduce(state, Action::SelectNext);
        assert_eq!(state.feed.selected, 1);

        state = reduce(state, Action::SelectPrev);
        state = reduce(state, Action::SelectPrev);
        assert_eq!(state.feed.selected, 0);
    }

    #[test]
    fn test_comment_composer_flow() {
        let mut state = UiState::new();
        state.post_count = 1;

        state = reduce(state, Action::StartComment);
        assert!(state.feed.composing);

        for c in "hi!".chars() {
            state = reduce(state, Action::CommentInput(c));
        }
        assert_eq!(state.feed.comment, "hi!");

        state = reduce(state, Action::CommentBackspace);
        assert_eq!(state.feed.comment, "hi");

        state = reduce(state, Action::CancelComment);
        assert!(!state.feed.composing);
        assert!(state.feed.comment.is_empty());
    }

    #[test]
    fn test_start_comment_needs_a_post() {
        let state = UiState::new();
        assert_eq!(state.post_count, 0);

        let new_state = reduce(state, Action::StartComment);
        assert!(!new_state.feed.composing);
    }

    #[test]
    fn test_login_input_follows_focus() {
        let mut state = UiState::new();

        state = reduce(state, Action::LoginInput('a'));
        assert_eq!(state.login.contact, "a");
        assert!(state.login.username.is_empty());

        state = reduce(state, Action::LoginFocusNext);
        state = reduce(state, Action::LoginInput('b'));
        assert_eq!(state.login.username, "b");
    }

    #[test]
    fn test_login_cleared_resets_the_form() {
        let mut state = UiState::new();
        state = reduce(state, Action::LoginInput('a'));
        state = reduce(state, Action::LoginFocusNext);

        state = reduce(state, Action::LoginCleared);
        assert!(state.login.contact.is_empty());
        assert_eq!(state.login.focus, LoginField::Contact);
    }

    #[test]
    fn test_submit_input_ignores_description_field() {
        let mut state = UiState::new();
        state.submit.focus = SubmitField::Description;

        state = reduce(state, Action::SubmitInput('x'));
        assert!(state.submit.description.is_empty());

        state = reduce(state, Action::DescriptionChanged("from textarea".to_string()));
        assert_eq!(state.submit.description, "from textarea");
    }

    #[test]
    fn test_navigation_closes_the_comment_composer() {
        let mut state = UiState::new();
        state.post_count = 1;
        state = reduce(state, Action::StartComment);
        state = reduce(state, Action::CommentInput('x'));

        state = reduce(state, Action::NavigateTo(libsnapback::Page::Wall));
        assert!(!state.feed.composing);
        assert!(state.feed.comment.is_empty());
    }

    #[test]
    fn test_error_overlay_set_and_dismissed() {
        let mut state = UiState::new();

        state = reduce(state, Action::ShowError("boom".to_string()));
        assert_eq!(state.error.as_deref(), Some("boom"));

        state = reduce(state, Action::DismissError);
        assert!(state.error.is_none());
    }
}

//! Keybindings
//!
//! Pure mapping from a key event plus the current UI state to an action.
//! The reducer never inspects raw keys; everything routes through here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libsnapback::Page;

use super::actions::Action;
use super::state::{SubmitField, UiState};

/// Map a key event to an action, if any.
pub fn map_key(state: &UiState, key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits, whatever is focused.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    // An open error overlay swallows everything except dismissal.
    if state.error.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::DismissError),
            _ => None,
        };
    }

    match state.page {
        Page::Landing => landing_key(key),
        Page::Login => login_key(key),
        Page::Feed => feed_key(state, key),
        Page::Submit => submit_key(state, key),
        Page::Wall | Page::Rewards => browse_key(key),
    }
}

fn landing_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char('l') => Some(Action::NavigateTo(Page::Login)),
        KeyCode::Char('x') => Some(Action::ResetRequested),
        _ => None,
    }
}

fn login_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::NavigateTo(Page::Landing)),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::LoginFocusNext),
        KeyCode::Enter => Some(Action::LoginSubmitted),
        KeyCode::Backspace => Some(Action::LoginBackspace),
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            Some(Action::LoginInput(c))
        }
        _ => None,
    }
}

fn feed_key(state: &UiState, key: KeyEvent) -> Option<Action> {
    if state.feed.composing {
        return match key.code {
            KeyCode::Esc => Some(Action::CancelComment),
            KeyCode::Enter => Some(Action::CommentSubmitted),
            KeyCode::Backspace => Some(Action::CommentBackspace),
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                Some(Action::CommentInput(c))
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrev),
        KeyCode::Char('v') | KeyCode::Char(' ') => Some(Action::VoteRequested),
        KeyCode::Char('c') => Some(Action::StartComment),
        KeyCode::Char('s') => Some(Action::NavigateTo(Page::Submit)),
        KeyCode::Char('w') => Some(Action::NavigateTo(Page::Wall)),
        KeyCode::Char('r') => Some(Action::NavigateTo(Page::Rewards)),
        KeyCode::Char('o') => Some(Action::LogoutRequested),
        _ => None,
    }
}

fn submit_key(state: &UiState, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::NavigateTo(Page::Feed)),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SubmitFocusNext),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::PostSubmitted)
        }
        // The description field is owned by the textarea widget; the event
        // loop feeds it directly and this map stays out of the way.
        _ if state.submit.focus == SubmitField::Description => None,
        KeyCode::Enter => Some(Action::SubmitFocusNext),
        KeyCode::Backspace => Some(Action::SubmitBackspace),
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            Some(Action::SubmitInput(c))
        }
        _ => None,
    }
}

fn browse_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('f') => Some(Action::NavigateTo(Page::Feed)),
        KeyCode::Char('w') => Some(Action::NavigateTo(Page::Wall)),
        KeyCode::Char('r') => Some(Action::NavigateTo(Page::Rewards)),
        KeyCode::Char('o') => Some(Action::LogoutRequested),
        _ => None,
    }
}

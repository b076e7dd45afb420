//! snapback-tui - terminal client for the Snapback photo competition
//!
//! Browses the feed, votes, comments, submits entries, and shows the
//! rewards balance. All domain state lives in the store; this binary is
//! the event loop around it.

use anyhow::Context;
use crossterm::event::{KeyCode, KeyModifiers};
use libsnapback::policy::resolve_page;
use libsnapback::validation::validate_login;
use libsnapback::{logging, Page, SessionStore, SnapbackError, Store, StoreError};
use snapback_tui::{
    app::{event::EventHandler, event::TuiEvent, map_key, reduce, Action, UiState},
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

const DESCRIPTION_PLACEHOLDER: &str = "Describe your then-vs-now pair...";

fn main() -> anyhow::Result<()> {
    logging::init_default();
    install_panic_hook();

    let session = SessionStore::open_default().context("resolving session path")?;
    let mut store = Store::new(session);
    let restored = store.rehydrate().context("rehydrating session")?;
    tracing::debug!(restored, "Startup rehydration complete");

    // Keep the visible page consistent with login state from the start.
    let resolved = resolve_page(store.user().is_some(), store.current_page());
    store.set_current_page(resolved);

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut store);
    restore_terminal(terminal)?;

    result.map_err(Into::into)
}

fn run_app(terminal: &mut Tui, store: &mut Store) -> snapback_tui::error::Result<()> {
    let mut ui_state = UiState::new();
    ui_state.sync(store);

    let mut description = new_description_editor();
    let event_handler = EventHandler::new(ui_state.config.tick_rate_ms);

    loop {
        terminal.draw(|frame| {
            ui::render(frame, &ui_state, store, &description);
        })?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) => {
                let in_description = ui_state.page == Page::Submit
                    && ui_state.submit.focus == snapback_tui::app::SubmitField::Description
                    && ui_state.error.is_none();

                let is_global_key = matches!(
                    (key.code, key.modifiers),
                    (KeyCode::Esc, _)
                        | (KeyCode::Tab, _)
                        | (KeyCode::BackTab, _)
                        | (KeyCode::Char('s'), KeyModifiers::CONTROL)
                        | (KeyCode::Char('c'), KeyModifiers::CONTROL)
                );

                if in_description && !is_global_key {
                    // Let the textarea handle the input, then sync its
                    // content into the UI state.
                    description.input(key);
                    Action::DescriptionChanged(description.lines().join("\n"))
                } else {
                    match map_key(&ui_state, key) {
                        Some(action) => action,
                        None => continue,
                    }
                }
            }
            other => other.into(),
        };

        ui_state = reduce(ui_state, action.clone());

        // Side effects: store operations requested by the action.
        match action {
            Action::NavigateTo(requested) => {
                let page = resolve_page(store.user().is_some(), requested);
                store.set_current_page(page);
            }

            Action::LoginSubmitted => {
                let check = validate_login(&ui_state.login.username, &ui_state.login.contact);
                if !check.valid {
                    ui_state = reduce(ui_state, Action::ShowError(check.errors.join("\n")));
                } else {
                    match store.login(&ui_state.login.username, &ui_state.login.contact) {
                        Ok(()) => {
                            let welcome =
                                format!("Welcome, {}!", ui_state.login.username);
                            ui_state = reduce(ui_state, Action::LoginCleared);
                            ui_state = reduce(ui_state, Action::SetStatus(welcome));
                        }
                        Err(err) => {
                            ui_state = reduce(ui_state, Action::ShowError(err.to_string()));
                        }
                    }
                }
            }

            Action::LogoutRequested => {
                if let Err(err) = store.logout() {
                    ui_state = reduce(ui_state, Action::ShowError(err.to_string()));
                }
            }

            Action::ResetRequested => match store.reset_cache() {
                Ok(()) => {
                    ui_state = reduce(
                        ui_state,
                        Action::SetStatus("Cached session cleared".to_string()),
                    );
                }
                Err(err) => {
                    ui_state = reduce(ui_state, Action::ShowError(err.to_string()));
                }
            },

            Action::VoteRequested => {
                if let Some(post) = store.posts().get(ui_state.feed.selected) {
                    let post_id = post.id.clone();
                    match store.toggle_like(&post_id) {
                        Ok(()) => {}
                        Err(StoreError::SelfVote { .. }) => {
                            ui_state = reduce(
                                ui_state,
                                Action::SetStatus(
                                    "You can't vote on your own post".to_string(),
                                ),
                            );
                        }
                        Err(err @ StoreError::UnknownPost { .. }) => {
                            ui_state = reduce(ui_state, Action::ShowError(err.to_string()));
                        }
                    }
                }
            }

            Action::CommentSubmitted => {
                let text = ui_state.feed.comment.clone();
                if let Some(post) = store.posts().get(ui_state.feed.selected) {
                    let post_id = post.id.clone();
                    if !text.is_empty() {
                        if let Err(err) = store.add_comment(&post_id, &text) {
                            let err = SnapbackError::from(err);
                            ui_state = reduce(ui_state, Action::ShowError(err.to_string()));
                        }
                    }
                }
                ui_state = reduce(ui_state, Action::CancelComment);
            }

            Action::PostSubmitted => {
                if !ui_state.submit.is_complete() {
                    ui_state = reduce(
                        ui_state,
                        Action::ShowError(
                            "Both photos and both locations are required".to_string(),
                        ),
                    );
                } else {
                    store.add_post(
                        &ui_state.submit.recreated_image,
                        &ui_state.submit.description,
                        Some(ui_state.submit.retro_image.clone()),
                        Some(ui_state.submit.retro_location.clone()),
                        Some(ui_state.submit.recreated_location.clone()),
                    );
                    let page = resolve_page(store.user().is_some(), Page::Feed);
                    store.set_current_page(page);
                    description = new_description_editor();
                    ui_state = reduce(ui_state, Action::SubmitCleared);
                    ui_state = reduce(
                        ui_state,
                        Action::SetStatus("Submission received!".to_string()),
                    );
                }
            }

            _ => {}
        }

        ui_state.sync(store);

        if ui_state.should_quit {
            break;
        }
    }

    Ok(())
}

fn new_description_editor() -> tui_textarea::TextArea<'static> {
    let mut textarea = tui_textarea::TextArea::default();
    textarea.set_placeholder_text(DESCRIPTION_PLACEHOLDER);
    textarea.set_block(
        ratatui::widgets::Block::default()
            .title(" Description ")
            .borders(ratatui::widgets::Borders::ALL),
    );
    textarea
}

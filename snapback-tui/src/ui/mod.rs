//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Nothing in here mutates the store or the UI state.

pub mod feed;

use libsnapback::{Page, Store};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::state::{LoginField, SubmitField, UiState};

/// Render the application UI
pub fn render(frame: &mut Frame, state: &UiState, store: &Store, description: &TextArea) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Page body
            Constraint::Length(1), // Status / hint line
        ])
        .split(area);

    match state.page {
        Page::Landing => render_landing(frame, chunks[0]),
        Page::Login => render_login(frame, chunks[0], state),
        Page::Feed => feed::render_feed(frame, chunks[0], state, store),
        Page::Submit => render_submit(frame, chunks[0], state, description),
        Page::Wall => render_wall(frame, chunks[0], store),
        Page::Rewards => render_rewards(frame, chunks[0], store),
    }

    render_status_line(frame, chunks[1], state);

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error);
    }
}

fn render_landing(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Snapback ")
        .borders(Borders::ALL);

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Then vs. Now",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Recreate a historic photo, vote for your favorites,"),
        Line::from("and earn points at Old Ellicott City businesses."),
        Line::from(""),
        Line::from("Press Enter to log in, q to quit"),
    ])
    .block(block)
    .alignment(Alignment::Center);

    frame.render_widget(text, area);
}

fn render_login(frame: &mut Frame, area: Rect, state: &UiState) {
    let popup = centered_rect(60, 50, area);

    let focus_style = Style::default().fg(Color::Yellow);
    let blur_style = Style::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(popup);

    let contact = Paragraph::new(state.login.contact.as_str()).block(
        Block::default()
            .title(" Email or Phone ")
            .borders(Borders::ALL)
            .border_style(if state.login.focus == LoginField::Contact {
                focus_style
            } else {
                blur_style
            }),
    );
    frame.render_widget(contact, chunks[0]);

    let username = Paragraph::new(state.login.username.as_str()).block(
        Block::default()
            .title(" Username (1-7 chars) ")
            .borders(Borders::ALL)
            .border_style(if state.login.focus == LoginField::Username {
                focus_style
            } else {
                blur_style
            }),
    );
    frame.render_widget(username, chunks[1]);

    let hint = Paragraph::new("Tab: switch field | Enter: log in | Esc: back")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[2]);
}

fn render_submit(frame: &mut Frame, area: Rect, state: &UiState, description: &TextArea) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // retro image
            Constraint::Length(3), // recreated image
            Constraint::Length(3), // retro location
            Constraint::Length(3), // recreated location
            Constraint::Min(4),    // description
        ])
        .split(area);

    let field = |title: &'static str, value: &str, focused: bool| {
        Paragraph::new(value.to_string()).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(if focused {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                }),
        )
    };

    frame.render_widget(
        field(
            " Historic photo ",
            &state.submit.retro_image,
            state.submit.focus == SubmitField::RetroImage,
        ),
        chunks[0],
    );
    frame.render_widget(
        field(
            " Recreated photo ",
            &state.submit.recreated_image,
            state.submit.focus == SubmitField::RecreatedImage,
        ),
        chunks[1],
    );
    frame.render_widget(
        field(
            " Historic location ",
            &state.submit.retro_location,
            state.submit.focus == SubmitField::RetroLocation,
        ),
        chunks[2],
    );
    frame.render_widget(
        field(
            " Recreated location ",
            &state.submit.recreated_location,
            state.submit.focus == SubmitField::RecreatedLocation,
        ),
        chunks[3],
    );

    frame.render_widget(description.widget(), chunks[4]);
}

fn render_wall(frame: &mut Frame, area: Rect, store: &Store) {
    let block = Block::default()
        .title(" Wall of Fame ")
        .borders(Borders::ALL);

    let mut lines = Vec::new();
    for winner in store.wall_of_fame() {
        lines.push(Line::from(vec![
            Span::styled(
                winner.user.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {} votes", winner.likes)),
        ]));
        lines.push(Line::from(winner.description.clone()));
        lines.push(Line::from(""));
    }

    let text = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(text, area);
}

fn render_rewards(frame: &mut Frame, area: Rect, store: &Store) {
    let block = Block::default().title(" Rewards ").borders(Borders::ALL);

    let mut lines = Vec::new();
    match store.user_rewards() {
        Some(rewards) => {
            lines.push(Line::from(vec![
                Span::raw("Points balance: "),
                Span::styled(
                    rewards.points.to_string(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                // 100 points = $1 at participating businesses.
                Span::raw(format!("  (= ${:.2})", rewards.points as f64 / 100.0)),
            ]));
            lines.push(Line::from(""));
            for tx in &rewards.transactions {
                let date = chrono::DateTime::from_timestamp_millis(tx.date)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string());
                lines.push(Line::from(format!(
                    "{}  {:>4} pts  {}",
                    date, tx.points, tx.store
                )));
            }
        }
        None => lines.push(Line::from("Log in to see your rewards.")),
    }

    let text = Paragraph::new(lines).block(block);
    frame.render_widget(text, area);
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &UiState) {
    let text = if let Some(ref status) = state.status {
        Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Green),
        ))
    } else {
        let hints = match state.page {
            Page::Landing => "Enter: log in | x: reset cache | q: quit",
            Page::Login => "Tab: switch field | Enter: log in | Esc: back",
            Page::Feed => {
                if state.feed.composing {
                    "Enter: post comment | Esc: cancel"
                } else {
                    "j/k: select | v: vote | c: comment | s: submit | w: wall | r: rewards | o: log out | q: quit"
                }
            }
            Page::Submit => "Tab: next field | Ctrl+S: submit | Esc: back",
            Page::Wall | Page::Rewards => "Esc: feed | o: log out | q: quit",
        };
        Line::from(Span::styled(hints, Style::default().fg(Color::Gray)))
    };

    frame.render_widget(Paragraph::new(text), area);
}

fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

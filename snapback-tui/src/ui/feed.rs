//! Feed screen rendering
//!
//! Post list on the left, detail of the selected post (photos, locations,
//! comments) on the right, and the comment composer when open.

use libsnapback::Store;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::state::UiState;

pub fn render_feed(frame: &mut Frame, area: Rect, state: &UiState, store: &Store) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_post_list(frame, columns[0], state, store);
    render_post_detail(frame, columns[1], state, store);
}

fn render_post_list(frame: &mut Frame, area: Rect, state: &UiState, store: &Store) {
    let items: Vec<ListItem> = store
        .posts()
        .iter()
        .map(|post| {
            let vote_mark = if post.is_liked {
                if state.config.unicode_enabled {
                    "♥"
                } else {
                    "*"
                }
            } else {
                " "
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<8}", post.user),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{:>4} ", post.likes)),
                Span::styled(vote_mark, Style::default().fg(Color::Red)),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    if !store.posts().is_empty() {
        list_state.select(Some(state.feed.selected));
    }

    let list = List::new(items)
        .block(Block::default().title(" Feed ").borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_post_detail(frame: &mut Frame, area: Rect, state: &UiState, store: &Store) {
    let post = match store.posts().get(state.feed.selected) {
        Some(post) => post,
        None => {
            let empty = Paragraph::new("No posts yet - press s to submit one")
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty, area);
            return;
        }
    };

    let rows = if state.feed.composing {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3)])
            .split(area)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                post.user.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {} votes", post.likes)),
        ]),
        Line::from(post.description.clone()),
        Line::from(""),
    ];

    if let Some(ref retro) = post.retro_image {
        let location = post.retro_location.as_deref().unwrap_or("unknown location");
        lines.push(Line::from(format!("Then: {} ({})", retro, location)));
    }
    let location = post
        .recreated_location
        .as_deref()
        .unwrap_or("unknown location");
    lines.push(Line::from(format!("Now:  {} ({})", post.image, location)));
    lines.push(Line::from(""));

    if post.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            "No comments yet",
            Style::default().fg(Color::Gray),
        )));
    } else {
        for comment in &post.comments {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", comment.user),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(comment.text.clone()),
            ]));
        }
    }

    let detail = Paragraph::new(lines)
        .block(Block::default().title(" Post ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(detail, rows[0]);

    if state.feed.composing {
        let composer = Paragraph::new(state.feed.comment.as_str()).block(
            Block::default()
                .title(" Comment ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(composer, rows[1]);
    }
}

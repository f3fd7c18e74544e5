//! UI rendering using ratatui
//!
//! One screen: the fragment in the header, the prompt in the middle, the
//! standings and the event feed on the right.

use super::view::{FeedKind, TableView};
use crate::game::Standing;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the table
pub fn render(frame: &mut Frame, view: &TableView) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with fragment, round
            Constraint::Min(0),    // Main content area
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], view);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(30),    // Prompt / result
            Constraint::Length(22), // Standings
            Constraint::Length(36), // Feed
        ])
        .split(layout[1]);

    if view.winner.is_some() {
        render_game_over(frame, columns[0], view);
    } else {
        render_prompt_area(frame, columns[0], view);
    }
    render_standings(frame, columns[1], view);
    render_feed(frame, columns[2], view);

    let hint = if view.winner.is_some() {
        "Any key to exit"
    } else {
        "a-z Play  Esc Quit"
    };
    let footer = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[2]);
}

/// Render the header: title, fragment, round
fn render_header(frame: &mut Frame, area: Rect, view: &TableView) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10), // Title
            Constraint::Min(20),    // Fragment
            Constraint::Length(10), // Round
        ])
        .split(inner);

    let title = Paragraph::new("GHOST")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let fragment = Paragraph::new(format_fragment(&view.fragment))
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(fragment, header_layout[1]);

    let round = if view.round == 0 {
        String::new()
    } else {
        format!("Round {}", view.round)
    };
    let round = Paragraph::new(round)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Right);
    frame.render_widget(round, header_layout[2]);
}

/// Whose turn, the prompt and any feedback
fn render_prompt_area(frame: &mut Frame, area: Rect, view: &TableView) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Turn
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Feedback
            Constraint::Min(0),
        ])
        .split(area);

    let turn = match &view.active {
        Some(player) => format!("It's {}'s turn!", player),
        None => String::new(),
    };
    let turn = Paragraph::new(turn).style(Style::default().fg(Color::White).bold());
    frame.render_widget(turn, main_layout[0]);

    if let Some(prompt) = &view.prompt {
        let prompt = Paragraph::new(format!("{} > _", prompt)).style(Style::default().fg(Color::Cyan));
        frame.render_widget(prompt, main_layout[2]);
    }

    let feedback = Paragraph::new(view.feedback.as_str()).style(Style::default().fg(Color::Red));
    frame.render_widget(feedback, main_layout[4]);
}

/// Final result
fn render_game_over(frame: &mut Frame, area: Rect, view: &TableView) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Winner
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new("GAME OVER")
        .style(Style::default().fg(Color::Red).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, main_layout[0]);

    let winner = view.winner.as_deref().unwrap_or_default();
    let winner = Paragraph::new(format!("{} wins!", winner))
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(winner, main_layout[2]);
}

/// Standings panel
fn render_standings(frame: &mut Frame, area: Rect, view: &TableView) {
    let items: Vec<ListItem> = view
        .standings
        .iter()
        .map(|standing| {
            let is_active = view.active.as_deref() == Some(standing.name.as_str());
            let style = if standing.eliminated {
                Style::default().fg(Color::DarkGray).crossed_out()
            } else if is_active {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format_standing(standing, is_active)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Standings"),
    );
    frame.render_widget(list, area);
}

/// Event feed, newest first
fn render_feed(frame: &mut Frame, area: Rect, view: &TableView) {
    let rows = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = view
        .feed
        .iter()
        .rev()
        .take(rows)
        .map(|entry| {
            let color = match entry.kind {
                FeedKind::Round => Color::Yellow,
                FeedKind::Letter => Color::Green,
                FeedKind::Rejected => Color::Red,
                FeedKind::Loss => Color::Magenta,
                FeedKind::Eliminated => Color::Red,
                FeedKind::Win => Color::Yellow,
            };
            ListItem::new(entry.text.as_str()).style(Style::default().fg(color))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Table"),
    );
    frame.render_widget(list, area);
}

/// Fragment as spaced capitals
fn format_fragment(fragment: &str) -> String {
    if fragment.is_empty() {
        return String::from("[ _ ]");
    }

    let letters = fragment
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    format!("[ {} _ ]", letters)
}

fn format_standing(standing: &Standing, is_active: bool) -> String {
    let marker = if is_active { ">" } else { " " };
    format!("{} {}: {}", marker, standing.name, standing.record())
}

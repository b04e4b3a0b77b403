//! Command Box
//!
//! Route and command input with autocomplete.

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

fn describe(command: &str) -> &'static str {
    match command {
        "/" => "home",
        "/list" => "resource list",
        "/search" => "search",
        "clear" => "clear all facets",
        "help" => "show key bindings",
        "quit" => "exit cloudpile",
        "refresh" => "re-fetch the list",
        _ => "",
    }
}

pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(11)])
        .split(f.area());

    let command_area = chunks[1];
    f.render_widget(Clear, command_area);

    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(command_area);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Go to ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    // Ghost text for the rest of the highlighted suggestion
    let ghost = app
        .command_preview
        .as_deref()
        .and_then(|preview| preview.strip_prefix(app.command_text.as_str()))
        .unwrap_or("");

    let input = Line::from(vec![
        Span::styled(":", Style::default().fg(Color::Cyan)),
        Span::styled(app.command_text.as_str(), Style::default().fg(Color::White)),
        Span::styled(ghost, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(input).block(input_block), inner_chunks[0]);

    let suggestions_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " ↑/↓ select, Tab complete, Enter run ",
            Style::default().fg(Color::DarkGray),
        ));

    let suggestions: Vec<ListItem> = app
        .command_suggestions
        .iter()
        .enumerate()
        .map(|(i, cmd)| {
            let style = if i == app.command_suggestion_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("  {:<10}", cmd), style),
                Span::styled(
                    format!(" {}", describe(cmd)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    f.render_widget(
        List::new(suggestions).block(suggestions_block),
        inner_chunks[1],
    );
}

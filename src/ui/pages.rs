//! Static views: home, search placeholder and not-found.

use super::splash::logo_lines;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn page_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
}

/// Vertically center `height` lines inside `area`
fn middle(area: Rect, height: u16) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area)[1]
}

pub fn render_home(f: &mut Frame, area: Rect) {
    let block = page_block("Home");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = logo_lines();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("2", Style::default().fg(Color::Yellow)),
        Span::styled(" or type ", Style::default().fg(Color::DarkGray)),
        Span::styled(":/list", Style::default().fg(Color::Yellow)),
        Span::styled(" to browse resources", Style::default().fg(Color::DarkGray)),
    ]));

    let height = lines.len() as u16;
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        middle(inner, height),
    );
}

pub fn render_search(f: &mut Frame, area: Rect) {
    let block = page_block("Search");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            "Search is not available yet",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Use the list view facets and column filters instead",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        middle(inner, 2),
    );
}

pub fn render_not_found(f: &mut Frame, path: &str, area: Rect) {
    let block = page_block("Not Found");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            "Nothing to see here!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("No view at {}", path),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("1", Style::default().fg(Color::Yellow)),
            Span::styled(" to go to the home page", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        middle(inner, 4),
    );
}

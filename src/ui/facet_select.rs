//! Facet Selector
//!
//! Popup listing "(any)" plus the distinct values of one facet, with
//! type-to-narrow search.

use super::centered_rect;
use crate::app::FacetSelector;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, selector: &FacetSelector, area: Rect) {
    let popup_area = centered_rect(50, 70, area);
    f.render_widget(Clear, popup_area);

    let title = format!(
        " Select {} [{}/{}] ",
        selector.facet.label(),
        selector.filtered.len(),
        selector.values.len()
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Search input
            Constraint::Length(1), // Help text
            Constraint::Min(1),    // Options
        ])
        .split(inner);

    let search_line = Line::from(vec![
        Span::styled(" / ", Style::default().fg(Color::Yellow)),
        Span::styled(
            selector.search_text.as_str(),
            Style::default().fg(Color::White),
        ),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]);
    f.render_widget(Paragraph::new(search_line), chunks[0]);

    let help = Line::from(vec![
        Span::styled(" ↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(":nav ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(":select ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(":cancel", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);

    let mut items = vec![ListItem::new(Span::styled(
        "  (any)",
        Style::default().fg(Color::DarkGray),
    ))];
    items.extend(
        selector
            .filtered
            .iter()
            .map(|value| ListItem::new(Span::raw(format!("  {}", value)))),
    );

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(selector.selected));

    f.render_stateful_widget(list, chunks[2], &mut state);
}

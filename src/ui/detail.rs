//! Detail View
//!
//! Every field of the selected resource, tags listed one badge per line.

use crate::app::App;
use crate::grid::{tag_badges, Column};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Width of the field label column
const LABEL_WIDTH: usize = 15;

pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(resource) = app.selected_resource() else {
        let msg = Paragraph::new("No resource selected").style(Style::default().fg(Color::Red));
        f.render_widget(msg, area);
        return;
    };

    let label_style = Style::default().fg(Color::Cyan);
    let mut lines: Vec<Line> = Column::ALL
        .iter()
        .filter(|col| **col != Column::Tags)
        .map(|col| {
            let value = col.cell_text(resource);
            Line::from(vec![
                Span::styled(format!(" {:<width$}", col.header(), width = LABEL_WIDTH), label_style),
                if value.is_empty() {
                    Span::styled("-", Style::default().fg(Color::DarkGray))
                } else {
                    Span::styled(value.into_owned(), Style::default().fg(Color::White))
                },
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" Tags ({})", resource.tags.len()),
        label_style.add_modifier(Modifier::BOLD),
    )));
    for badge in tag_badges(resource) {
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(badge, Style::default().fg(Color::Black).bg(Color::Cyan)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {} ", resource.id),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let total_lines = lines.len();
    let visible_lines = inner_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible_lines);
    app.set_detail_max_scroll(max_scroll);
    let scroll = app.detail_scroll;

    f.render_widget(
        Paragraph::new(lines).scroll((scroll as u16, 0)),
        inner_area,
    );

    if total_lines > visible_lines {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state = ScrollbarState::new(max_scroll + visible_lines).position(scroll);
        f.render_stateful_widget(scrollbar, inner_area, &mut scrollbar_state);
    }
}

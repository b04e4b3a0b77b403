//! Resource Grid
//!
//! Selector bar, paginated table and the loading indicator of the list view.

use super::truncate_string;
use crate::app::App;
use crate::filter::Facet;
use crate::grid::{tag_badges, Column};
use crate::model::Resource;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Header row: column title plus its filter text
const HEADER_HEIGHT: u16 = 2;

/// Longest cell text before truncation
const MAX_CELL_LEN: usize = 38;

pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if app.resources.is_none() {
        render_loading(f, app, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_selector_bar(f, app, chunks[0]);
    render_table(f, app, chunks[1]);
}

fn render_loading(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let frame = SPINNER[app.spinner_tick % SPINNER.len()];
    let middle = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner)[1];

    let line = Line::from(vec![
        Span::styled(frame, Style::default().fg(Color::Cyan)),
        Span::styled(" Loading resources...", Style::default().fg(Color::Yellow)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), middle);
}

fn render_selector_bar(f: &mut Frame, app: &App, area: Rect) {
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (facet, rect) in Facet::ALL.iter().zip(boxes.iter()) {
        let key = match facet {
            Facet::Type => 't',
            Facet::Region => 'r',
            Facet::Account => 'a',
        };
        let current = app.filter.get(*facet);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if current.is_some() {
                Color::Cyan
            } else {
                Color::DarkGray
            }))
            .title(Span::styled(
                format!(" {} [{}] ", facet.label(), key),
                Style::default().fg(Color::Cyan),
            ));

        let value = match current {
            Some(v) => Span::styled(
                format!(" {}", v),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(" (any)", Style::default().fg(Color::DarkGray)),
        };

        f.render_widget(Paragraph::new(value).block(block), *rect);
    }
}

fn render_table(f: &mut Frame, app: &mut App, area: Rect) {
    let block_title = {
        let grid = &app.grid;
        let sort_info = grid
            .sort()
            .map(|s| {
                format!(
                    " sort:{}{}",
                    Column::ALL[s.column].header(),
                    if s.ascending { "▲" } else { "▼" }
                )
            })
            .unwrap_or_default();
        format!(
            " Resources [{}/{}] page {}/{}{} ",
            grid.rows().len(),
            grid.total(),
            grid.page() + 1,
            grid.page_count(),
            sort_info
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            block_title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let inner = block.inner(area);
    f.render_widget(block, area);

    // Page size follows the rows the table can show
    app.grid
        .set_page_size(inner.height.saturating_sub(HEADER_HEIGHT) as usize);

    let grid = &app.grid;
    let column_filter_active = &app.column_filter_active;
    let resources: &[Resource] = app.resources.as_deref().unwrap_or_default();

    let header_cells: Vec<Cell> = Column::ALL
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let indicator = match grid.sort() {
                Some(s) if s.column == i && s.ascending => " ▲",
                Some(s) if s.column == i => " ▼",
                _ => "",
            };
            let focused = grid.focused_column() == i;
            let title_style = if focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            };

            let filter_text = grid.column_filter(i);
            let filter_line = if focused && *column_filter_active {
                Span::styled(
                    format!(" /{}_", filter_text),
                    Style::default().fg(Color::Yellow),
                )
            } else if !filter_text.is_empty() {
                Span::styled(
                    format!(" /{}", filter_text),
                    Style::default().fg(Color::Green),
                )
            } else {
                Span::raw("")
            };

            Cell::from(vec![
                Line::from(Span::styled(
                    format!(" {}{}", col.header(), indicator),
                    title_style,
                )),
                Line::from(filter_line),
            ])
        })
        .collect();

    let header = Row::new(header_cells).height(HEADER_HEIGHT);

    let range = grid.page_range();
    let rows: Vec<Row> = grid.rows()[range.clone()]
        .iter()
        .filter_map(|&idx| resources.get(idx))
        .map(|resource| {
            let cells = Column::ALL.iter().map(|col| match col {
                Column::Tags => Cell::from(badge_line(resource)),
                _ => Cell::from(format!(
                    " {}",
                    truncate_string(&col.cell_text(resource), MAX_CELL_LEN)
                )),
            });
            Row::new(cells)
        })
        .collect();

    let widths: Vec<Constraint> = Column::ALL
        .iter()
        .map(|col| Constraint::Percentage(col.width()))
        .collect();

    let table = Table::new(rows, widths).header(header).row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = TableState::default();
    if range.contains(&grid.selected()) {
        state.select(Some(grid.selected() - range.start));
    }

    f.render_stateful_widget(table, inner, &mut state);
}

/// One styled badge per tag pair
fn badge_line(resource: &Resource) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for badge in tag_badges(resource) {
        spans.push(Span::styled(
            badge,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

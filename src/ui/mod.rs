//! Terminal User Interface rendering module
//!
//! This module handles all UI rendering for cloudpile using the ratatui
//! framework.
//!
//! # Architecture
//!
//! - [`splash`] - Startup splash screen and the shared logo
//! - `header` - Header bar with menu, endpoint and fetch info
//! - `grid` - Selector bar and the paginated resource table
//! - `facet_select` - Facet selector popup
//! - `detail` - Single resource view
//! - `pages` - Home, search placeholder and not-found views
//! - `help` - Help overlay showing keybindings
//! - `command_box` - Command mode input (`:` key)
//!
//! Rendering only reads the visible rows the grid computed; the one write
//! is the page size, which follows the table height.

mod command_box;
mod detail;
mod facet_select;
mod grid;
mod header;
mod help;
mod pages;
pub mod splash;

use crate::app::{App, Mode};
use crate::route::Route;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Header
            Constraint::Min(1),    // Routed view
            Constraint::Length(1), // Footer/crumb
        ])
        .split(f.area());

    header::render(f, app, chunks[0]);

    if app.mode == Mode::Detail {
        detail::render(f, app, chunks[1]);
    } else {
        match app.route.clone() {
            Route::Home => pages::render_home(f, chunks[1]),
            Route::List => grid::render(f, app, chunks[1]),
            Route::Search => pages::render_search(f, chunks[1]),
            Route::NotFound(path) => pages::render_not_found(f, &path, chunks[1]),
        }
    }

    render_crumb(f, app, chunks[2]);

    // Overlays
    match app.mode {
        Mode::Help => help::render(f, app),
        Mode::Command => command_box::render(f, app),
        Mode::FacetSelect => {
            if let Some(selector) = &app.selector {
                facet_select::render(f, selector, chunks[1]);
            }
        },
        _ => {},
    }
}

fn render_crumb(f: &mut Frame, app: &App, area: Rect) {
    let mut crumb = vec!["cloudpile", app.route.title()];
    if app.mode == Mode::Detail {
        crumb.push("Detail");
    }
    let crumb_display = crumb.join(" > ");

    let (status_text, style) = if let Some(err) = &app.error_message {
        (
            format!("Error: {}", err),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else if let Some(err) = app.fetch_error.as_ref().filter(|_| app.is_loading()) {
        (
            format!("Fetch failed: {}", err),
            Style::default().fg(Color::Red),
        )
    } else if app.is_loading() {
        ("Loading...".to_string(), Style::default().fg(Color::Yellow))
    } else if app.mode == Mode::Detail {
        (
            "j/k: scroll | Esc: back".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else if app.column_filter_active {
        (
            "Type to filter | Enter: keep | Esc: clear".to_string(),
            Style::default().fg(Color::Yellow),
        )
    } else if app.route == Route::List {
        (list_hint(app), Style::default().fg(Color::DarkGray))
    } else {
        (String::new(), Style::default())
    };

    let line = Line::from(vec![
        Span::styled(
            format!("<{}>", crumb_display),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(" "),
        Span::styled(status_text, style),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

fn list_hint(app: &App) -> String {
    let mut hints = Vec::new();
    if app.grid.page() > 0 {
        hints.push("[:prev".to_string());
    }
    if app.grid.page() + 1 < app.grid.page_count() {
        hints.push("]:next".to_string());
    }
    let active = app.filter.active_count();
    if active > 0 {
        hints.push(format!("{} facet(s) set, c:clear", active));
    }
    hints.join(" | ")
}

/// Truncate string for display (Unicode-safe)
pub(crate) fn truncate_string(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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

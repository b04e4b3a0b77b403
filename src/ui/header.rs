//! Header Component
//!
//! Displays the navigation menu, backend endpoint and fetch status.

use crate::app::App;
use crate::route::Route;
use crate::VERSION;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" cloudpile v{} ", VERSION),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    // Row 1: Menu
    let mut menu = vec![Span::raw(" ")];
    for (i, route) in Route::MENU.iter().enumerate() {
        let style = if *route == app.route {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        menu.push(Span::styled(format!(" {} {} ", i + 1, route.title()), style));
        menu.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(menu)), rows[0]);

    // Row 2: Backend and fetch info
    let mut info = vec![
        Span::styled(" Backend: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.client.list_url().as_str(),
            Style::default().fg(Color::Yellow),
        ),
    ];
    if app.route == Route::List {
        info.push(Span::raw("  "));
        info.push(Span::styled("Fetched: ", Style::default().fg(Color::DarkGray)));
        info.push(match &app.fetched_at {
            Some(at) => Span::styled(
                at.format("%H:%M:%S").to_string(),
                Style::default().fg(Color::Green),
            ),
            None if app.fetch_in_flight => {
                Span::styled("in flight", Style::default().fg(Color::Yellow))
            },
            None => Span::styled("-", Style::default().fg(Color::DarkGray)),
        });
        if let Some(resources) = &app.resources {
            info.push(Span::raw("  "));
            info.push(Span::styled("Count: ", Style::default().fg(Color::DarkGray)));
            info.push(Span::styled(
                format!("{}", app.grid.rows().len()),
                Style::default().fg(Color::White),
            ));
            if resources.len() != app.grid.rows().len() {
                info.push(Span::styled(
                    format!(" (filtered from {})", resources.len()),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
    }
    f.render_widget(Paragraph::new(Line::from(info)), rows[1]);

    // Row 3: Help hint
    let hint = if app.route == Route::List {
        " ?:help  ::cmd  t/r/a:facets  c:clear  /:filter  s:sort  R:refresh  q:quit"
    } else {
        " ?:help  ::cmd  1-3:menu  q:quit"
    };
    f.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        rows[2],
    );
}

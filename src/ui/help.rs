//! Help Overlay
//!
//! Shows keyboard shortcuts and help information.

use super::centered_rect;
use crate::app::App;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Views",
        &[
            ("1/2/3, Tab", "Home, List, Search"),
            (":", "Command box (paths like /list, refresh, clear, q)"),
        ],
    ),
    (
        "List navigation",
        &[
            ("j/k, ↑/↓", "Move up/down"),
            ("gg / G", "First/last row"),
            ("[ / ]", "Previous/next page"),
            ("Enter", "Resource details"),
            ("R", "Re-fetch resources"),
        ],
    ),
    (
        "Facets",
        &[
            ("t / r / a", "Select type, region, account"),
            ("c", "Clear all facets"),
        ],
    ),
    (
        "Columns",
        &[
            ("h/l, ←/→", "Focus column"),
            ("/", "Filter focused column (Enter keeps, Esc clears)"),
            ("s, F1-F9", "Sort (again to reverse)"),
            ("F12", "Clear sort"),
        ],
    ),
];

pub fn render(f: &mut Frame, _app: &App) {
    let popup_area = centered_rect(70, 80, f.area());
    f.render_widget(Clear, popup_area);

    let key_style = Style::default().fg(Color::Yellow);
    let mut help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (title, keys) in SECTIONS {
        help_text.push(Line::from(Span::styled(
            *title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (key, action) in keys.iter() {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {:<12}", key), key_style),
                Span::raw(*action),
            ]));
        }
        help_text.push(Line::from(""));
    }

    help_text.push(Line::from(vec![
        Span::styled(format!("  {:<12}", "?/Esc"), key_style),
        Span::raw("Close help"),
    ]));
    help_text.push(Line::from(vec![
        Span::styled(format!("  {:<12}", "q, Ctrl+c"), key_style),
        Span::raw("Quit"),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    f.render_widget(Paragraph::new(help_text).block(block), popup_area);
}

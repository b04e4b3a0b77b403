//! Splash Screen
//!
//! Loading screen shown during initialization. The logo is shared with the
//! home view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

const LOGO: [&str; 6] = [
    "       _                 _       _ _      ",
    "   ___| | ___  _   _  __| |_ __ (_) | ___ ",
    "  / __| |/ _ \\| | | |/ _` | '_ \\| | |/ _ \\",
    " | (__| | (_) | |_| | (_| | |_) | | |  __/",
    "  \\___|_|\\___/ \\__,_|\\__,_| .__/|_|_|\\___|",
    "                          |_|             ",
];

/// Logo and tagline
pub fn logo_lines() -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::Cyan))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Terminal UI for your cloud resource inventory",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines
}

/// Splash screen state
pub struct SplashState {
    message: String,
    completed_steps: usize,
    total_steps: usize,
}

impl SplashState {
    pub fn new(total_steps: usize) -> Self {
        Self {
            message: "Initializing...".to_string(),
            completed_steps: 0,
            total_steps: total_steps.max(1),
        }
    }

    pub fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    pub fn complete_step(&mut self) {
        self.completed_steps = (self.completed_steps + 1).min(self.total_steps);
    }

    fn percent(&self) -> u16 {
        (self.completed_steps * 100 / self.total_steps) as u16
    }
}

pub fn render(f: &mut Frame, state: &SplashState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(14),
            Constraint::Percentage(30),
        ])
        .split(area);

    let center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(chunks[1])[1];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(center);
    f.render_widget(block, center);

    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(inner);

    f.render_widget(
        Paragraph::new(logo_lines()).alignment(Alignment::Center),
        inner_chunks[0],
    );

    let progress = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(state.percent())
        .label(Span::styled(
            state.message.as_str(),
            Style::default().fg(Color::White),
        ));

    f.render_widget(progress, inner_chunks[1]);
}

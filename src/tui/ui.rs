//! UI rendering for the TUI.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::features::timer::{DisplayState, SessionStyle};
use crate::tui::app::{App, HELP_TEXT};

/// Number of cells in the progress ring.
const RING_SEGMENTS: usize = 30;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App, now: Instant) {
    // Create layout: header, timer, controls, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Timer
            Constraint::Length(3), // Controls
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_timer(frame, app, now, chunks[1]);
    render_controls(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

/// Accent color for a session style.
const fn session_color(style: SessionStyle) -> Color {
    match style {
        SessionStyle::Work => Color::LightRed,
        SessionStyle::Break => Color::LightGreen,
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let bell = if app.notifications.is_granted() { "🔔" } else { "🔕" };
    let color = session_color(app.display.style);

    let title = Line::from(vec![
        Span::styled(" 🍅 Pomodoro ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(app.display.session_label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(format!("  {bell}")),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

/// Render the countdown, remaining text and progress ring.
fn render_timer(frame: &mut Frame<'_>, app: &App, now: Instant, area: Rect) {
    let display = &app.display;
    let color = session_color(display.style);

    // The border flashes briefly after a session transition
    let border_style = if app.is_pulsing(now) {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    let lines = vec![
        Line::from(Span::styled(
            display.session_label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            display.digital.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            display.remaining_text.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(ring_line(display, RING_SEGMENTS), Style::default().fg(color))),
        Line::from(Span::styled(
            format!("{:.0}%", display.progress * 100.0),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let timer = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(timer, area);
}

/// Render the start/pause and reset controls.
fn render_controls(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let key_style = Style::default().fg(Color::DarkGray);
    let controls = Line::from(vec![
        Span::styled("[Space] ", key_style),
        Span::styled(
            app.display.control_label,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("     "),
        Span::styled("[R] ", key_style),
        Span::styled("🔄 Reset", Style::default().add_modifier(Modifier::BOLD)),
    ]);

    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP_TEXT);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Progress ring drawn as `segments` cells, filled cells for elapsed time.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn ring_line(display: &DisplayState, segments: usize) -> String {
    let offset = display.ring_offset(segments as f64).round().max(0.0) as usize;
    let empty = offset.min(segments);
    let filled = segments - empty;
    format!("{}{}", "●".repeat(filled), "○".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::timer::SessionKind;

    #[test]
    fn test_ring_line_empty_at_start() {
        let display = DisplayState::derive(1500, SessionKind::Work, false);
        assert_eq!(ring_line(&display, 10), "○".repeat(10));
    }

    #[test]
    fn test_ring_line_half() {
        let display = DisplayState::derive(150, SessionKind::Break, true);
        assert_eq!(ring_line(&display, 10), format!("{}{}", "●".repeat(5), "○".repeat(5)));
    }

    #[test]
    fn test_ring_line_full() {
        let display = DisplayState::derive(0, SessionKind::Work, false);
        assert_eq!(ring_line(&display, 4), "●".repeat(4));
    }
}

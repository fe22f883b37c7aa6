//! Layout components (main area, status bar)

use crate::app::App;
use crate::controller::SubmitPhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the main content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Last submit result
    let indicator = match app.last_result() {
        Some(SubmitPhase::Succeeded) => Span::styled(" ● ", Style::default().fg(Color::Green)),
        Some(SubmitPhase::Failed) => Span::styled(" ● ", Style::default().fg(Color::Red)),
        _ => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
    };
    spans.push(indicator);

    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(status) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            status.display(),
            Style::default().fg(Color::White),
        ));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused control
fn get_hints(app: &App) -> String {
    if app.state.form.is_buttons_row_active() {
        "←/→:select  Enter:press  Shift+Tab:back".to_string()
    } else {
        format!(
            "Tab:next  Enter:submit  {}:submit  {}:reset",
            crate::platform::SUBMIT_SHORTCUT,
            crate::platform::RESET_SHORTCUT
        )
    }
}

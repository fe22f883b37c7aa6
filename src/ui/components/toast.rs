//! Toast notifications stacked in the top-right corner

use crate::notify::{ToastKind, ToastQueue};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum width of a toast including borders
const TOAST_WIDTH: u16 = 44;

/// Render every live toast, newest at the bottom of the stack
pub fn render_toasts(frame: &mut Frame, toasts: &ToastQueue) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);
    let inner_width = width.saturating_sub(4) as usize; // borders + padding
    let mut y = area.y;

    for toast in toasts.iter() {
        let lines = wrap_text(&toast.message, inner_width);
        let height = lines.len() as u16 + 2;
        if y + height > area.bottom() {
            break;
        }

        let toast_area = Rect {
            x: area.right().saturating_sub(width),
            y,
            width,
            height,
        };
        y += height;

        let color = match toast.kind {
            ToastKind::Error => Color::Red,
            ToastKind::Success => Color::Green,
        };
        let remaining = toasts.remaining(toast);
        let border_color = if remaining < 0.25 {
            Color::DarkGray
        } else {
            color
        };

        // Countdown bar along the bottom border
        let bar_len = (remaining * inner_width as f32).round() as usize;
        let bar = Line::from(Span::styled(
            "━".repeat(bar_len),
            Style::default().fg(border_color),
        ));

        let content: Vec<Line> = lines
            .into_iter()
            .map(|l| Line::from(format!(" {l}")))
            .collect();

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title_bottom(bar)
                .style(Style::default().bg(Color::Black)),
        );

        frame.render_widget(Clear, toast_area);
        frame.render_widget(paragraph, toast_area);
    }
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let line_len = current_line.chars().count();
        if line_len + word_len + 1 > max_width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
        }
        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

//! Registration form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::model::FieldName;
use crate::state::{Form, FormButton, RegistrationForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one input (top border + value + bottom border / error slot)
const FIELD_HEIGHT: u16 = 3;

/// Widest the form grows on large terminals
const FORM_MAX_WIDTH: u16 = 64;

/// Draw the registration form centered in `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let [form_area] = Layout::horizontal([Constraint::Max(FORM_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    let form = &app.state.form;

    let block = Block::default()
        .title(" Register ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, form_area);

    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); FieldName::ALL.len()];
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit / Reset
    constraints.push(Constraint::Length(1)); // Help text
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(form_area);

    for i in 0..FieldName::ALL.len() {
        let Some(field) = form.get_field(i) else {
            continue;
        };
        draw_field(
            frame,
            chunks[i],
            field,
            form.active_field_index == i,
            app.state.mask_passwords,
        );
    }

    let buttons_row = RegistrationForm::BUTTONS_ROW;
    draw_buttons(frame, chunks[buttons_row], form);
    draw_help_text(frame, chunks[buttons_row + 1]);
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let [submit_area, reset_area] =
        Layout::horizontal([Constraint::Length(12), Constraint::Length(12)])
            .flex(Flex::Center)
            .spacing(2)
            .areas(area);

    let row_active = form.is_buttons_row_active();
    for (button, button_area) in [
        (FormButton::Submit, submit_area),
        (FormButton::Reset, reset_area),
    ] {
        let is_selected = row_active && form.selected_button == button;
        render_button(frame, button_area, button.label(), is_selected);
    }
}

fn draw_help_text(frame: &mut Frame, area: Rect) {
    let help_spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled(
            crate::platform::RESET_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": reset  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": dismiss"),
    ];

    let help = Paragraph::new(Line::from(help_spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

//! Application state and core logic

use crate::config::TuiConfig;
use crate::controller::{SubmissionController, SubmitOutcome, SubmitPhase};
use crate::notify::{LogSubmission, SuccessHandler, ToastKind};
use crate::state::{AppState, Form, FormButton};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Submit/reset orchestration
    controller: SubmissionController,
    /// Receives accepted registrations
    handler: Box<dyn SuccessHandler>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_handler(config, Box::new(LogSubmission::default()))
    }

    /// Create an App that delivers accepted registrations to `handler`
    pub fn with_handler(config: &TuiConfig, handler: Box<dyn SuccessHandler>) -> Self {
        Self {
            state: AppState::from_config(config),
            controller: SubmissionController::default(),
            handler,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Terminal phase of the most recent submit, cleared by reset
    pub fn last_result(&self) -> Option<SubmitPhase> {
        self.controller.last_result()
    }

    /// Per-frame housekeeping: expire old toasts
    pub fn tick(&mut self) {
        self.state.toasts.prune();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        if key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER) {
            match key.code {
                KeyCode::Char('s') => {
                    self.submit();
                    return;
                }
                KeyCode::Char('r') => {
                    self.reset();
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => self.state.toasts.clear(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            _ if self.state.form.is_buttons_row_active() => self.handle_buttons_key(key),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                self.state.form.input_char(c)
            }
            _ => {}
        }
    }

    /// Handle keys while the Submit/Reset row is focused
    fn handle_buttons_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right => self.state.form.next_button(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.form.selected_button {
                FormButton::Submit => self.submit(),
                FormButton::Reset => self.reset(),
            },
            _ => {}
        }
    }

    /// Run one submit cycle and report it in the status bar
    pub fn submit(&mut self) {
        let model = self.state.form.model();
        let who = format!("{} {}", model.first_name, model.last_name);

        let outcome = self.controller.submit(
            &mut self.state.form,
            &mut self.state.toasts,
            self.handler.as_mut(),
        );

        match outcome {
            SubmitOutcome::Succeeded => {
                let message = format!("Registered {who}");
                self.state.toasts.push(ToastKind::Success, message.clone());
                self.state.set_status(message);
            }
            SubmitOutcome::Failed { errors } => {
                let noun = if errors == 1 { "error" } else { "errors" };
                self.state.set_status(format!("{errors} {noun} to fix"));
            }
        }
    }

    /// Clear the form back to defaults
    pub fn reset(&mut self) {
        self.controller.reset(&mut self.state.form);
        self.state.set_status("Form reset");
    }
}

//! Application state definitions

use super::forms::RegistrationForm;
use crate::config::TuiConfig;
use crate::notify::ToastQueue;
use chrono::{DateTime, Local};

/// One-line message shown in the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub at: DateTime<Local>,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            at: Local::now(),
        }
    }

    /// Text prefixed with the time it was raised
    pub fn display(&self) -> String {
        format!("{} {}", self.at.format("%H:%M:%S"), self.text)
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// The registration form and its bound model
    pub form: RegistrationForm,
    /// Transient error notifications
    pub toasts: ToastQueue,
    /// Last submit or reset message
    pub status_message: Option<StatusMessage>,
    /// Render password inputs as bullets
    pub mask_passwords: bool,
}

impl AppState {
    pub fn from_config(config: &TuiConfig) -> Self {
        Self {
            form: RegistrationForm::new(),
            toasts: ToastQueue::new(config.toast_duration()),
            status_message: None,
            mask_passwords: config.mask_passwords(),
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage::new(text));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&TuiConfig::default())
    }
}

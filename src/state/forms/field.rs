//! Form input controls

use crate::model::{FieldName, InputKind};

/// Character shown in place of each password character
const MASK_CHAR: char = '•';

/// A single input control: its raw text, kind and error slot
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub kind: InputKind,
    value: String,
    /// Error message shown under the input, if any
    pub error: Option<String>,
}

impl FormField {
    /// Create an empty control for a field
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            label: name.label().to_string(),
            kind: name.input_kind(),
            value: String::new(),
            error: None,
        }
    }

    /// Create a control holding an initial text
    pub fn with_value(name: FieldName, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::new(name)
        }
    }

    /// Raw text as typed
    pub fn as_text(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn is_password(&self) -> bool {
        self.kind == InputKind::Password
    }

    /// Get the display value for rendering
    pub fn display_value(&self, mask_passwords: bool) -> String {
        if mask_passwords && self.is_password() {
            MASK_CHAR.to_string().repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

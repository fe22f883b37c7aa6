//! Registration form data model

/// Kind of input control backing a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Number,
    Password,
}

/// The six fields of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Age,
    Password,
    ConfirmPassword,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Age,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Field path used in validation errors
    pub fn path(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Age => "age",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name",
            FieldName::LastName => "Last Name",
            FieldName::Email => "Email",
            FieldName::Age => "Age",
            FieldName::Password => "Password",
            FieldName::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            FieldName::FirstName | FieldName::LastName => InputKind::Text,
            FieldName::Email => InputKind::Email,
            FieldName::Age => InputKind::Number,
            FieldName::Password | FieldName::ConfirmPassword => InputKind::Password,
        }
    }

    /// Position of the field in the form
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// In-memory record of every field value
#[derive(Debug, Clone, PartialEq)]
pub struct FormModel {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `NaN` when the age input does not hold a number
    pub age: f64,
    pub password: String,
    pub confirm_password: String,
}

impl Default for FormModel {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            age: 0.0,
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl FormModel {
    /// Write a text value into the named attribute.
    ///
    /// For `Age` the text is coerced to a number; anything that does not
    /// parse becomes `NaN`.
    pub fn set(&mut self, field: FieldName, raw: &str) {
        match field {
            FieldName::FirstName => self.first_name = raw.to_string(),
            FieldName::LastName => self.last_name = raw.to_string(),
            FieldName::Email => self.email = raw.to_string(),
            FieldName::Age => self.age = coerce_number(raw),
            FieldName::Password => self.password = raw.to_string(),
            FieldName::ConfirmPassword => self.confirm_password = raw.to_string(),
        }
    }
}

/// Parse number input text the way an HTML number input reports it.
/// Anything that is not a finite number becomes `NaN`.
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(f64::NAN)
}

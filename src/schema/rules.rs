//! Rule combinators for individual fields

use thiserror::Error;

/// A field value as seen by the schema
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
}

impl Value<'_> {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "string",
            Value::Number(_) => "number",
        }
    }
}

/// Why a single rule rejected a value. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("String must contain at least {0} character(s)")]
    TooShort(usize),
    #[error("String must contain at most {0} character(s)")]
    TooLong(usize),
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Number must be greater than or equal to {0}")]
    TooSmall(f64),
    #[error("Number must be less than or equal to {0}")]
    TooBig(f64),
    #[error("Expected {expected}, received {received}")]
    InvalidType {
        expected: &'static str,
        received: &'static str,
    },
    #[error("{0}")]
    Custom(String),
}

type TextRule = Box<dyn Fn(&str) -> Option<Violation>>;
type NumberRule = Box<dyn Fn(f64) -> Option<Violation>>;

/// Ordered rules for a string field
#[derive(Default)]
pub struct StringRules {
    rules: Vec<TextRule>,
}

/// Start a rule list for a string field
pub fn string() -> StringRules {
    StringRules::default()
}

impl StringRules {
    /// Require at least `min` characters
    pub fn min(self, min: usize) -> Self {
        self.push(move |v| (v.chars().count() < min).then_some(Violation::TooShort(min)))
    }

    /// Require at most `max` characters
    pub fn max(self, max: usize) -> Self {
        self.push(move |v| (v.chars().count() > max).then_some(Violation::TooLong(max)))
    }

    /// Require a well-formed email address
    pub fn email(self) -> Self {
        self.push(|v| (!is_email(v)).then_some(Violation::InvalidEmail))
    }

    fn push<F>(mut self, rule: F) -> Self
    where
        F: Fn(&str) -> Option<Violation> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }
}

/// Ordered rules for a numeric field
#[derive(Default)]
pub struct NumberRules {
    rules: Vec<NumberRule>,
}

/// Start a rule list for a numeric field
pub fn number() -> NumberRules {
    NumberRules::default()
}

impl NumberRules {
    /// Require `value >= min`. `NaN` never satisfies this.
    pub fn min(self, min: f64) -> Self {
        self.push(move |v| (v.is_nan() || v < min).then_some(Violation::TooSmall(min)))
    }

    /// Require `value <= max`. `NaN` never satisfies this.
    pub fn max(self, max: f64) -> Self {
        self.push(move |v| (v.is_nan() || v > max).then_some(Violation::TooBig(max)))
    }

    fn push<F>(mut self, rule: F) -> Self
    where
        F: Fn(f64) -> Option<Violation> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }
}

/// Rules attached to one field of a schema
pub enum FieldRules {
    Text(StringRules),
    Number(NumberRules),
}

impl From<StringRules> for FieldRules {
    fn from(rules: StringRules) -> Self {
        FieldRules::Text(rules)
    }
}

impl From<NumberRules> for FieldRules {
    fn from(rules: NumberRules) -> Self {
        FieldRules::Number(rules)
    }
}

impl FieldRules {
    /// Check a value, returning the first violated rule
    pub fn check(&self, value: Value<'_>) -> Option<Violation> {
        match (self, value) {
            (FieldRules::Text(r), Value::Text(v)) => r.rules.iter().find_map(|rule| rule(v)),
            (FieldRules::Number(r), Value::Number(v)) => r.rules.iter().find_map(|rule| rule(v)),
            (FieldRules::Text(_), other) => Some(Violation::InvalidType {
                expected: "string",
                received: other.type_name(),
            }),
            (FieldRules::Number(_), other) => Some(Violation::InvalidType {
                expected: "number",
                received: other.type_name(),
            }),
        }
    }
}

/// Address syntax check narrowed to plain ASCII addresses: an unquoted local
/// part of `[A-Za-z0-9_'+.-]` and a dotted domain of alphanumeric/hyphen
/// labels ending in an alphabetic label of at least two letters
fn is_email(value: &str) -> bool {
    if !email_address::EmailAddress::is_valid(value) {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    is_plain_local_part(local) && is_plain_domain(domain)
}

fn is_plain_local_part(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with(['.', '\''])
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_'+.-".contains(c))
}

fn is_plain_domain(domain: &str) -> bool {
    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let labels_ok = labels.split('.').all(|label| {
        label.starts_with(|c: char| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    labels_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

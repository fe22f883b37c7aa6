//! Declarative validation schema
//!
//! A schema is data: each field maps to an ordered list of rules, and a
//! separate list of refinements checks relations between fields.
//!
//! ```ignore
//! let schema = Schema::object()
//!     .field(FieldName::Email, |m: &FormModel| Value::Text(&m.email), string().email())
//!     .refine(|m| m.password == m.confirm_password, "Passwords do not Match", FieldName::ConfirmPassword);
//! ```

pub(crate) mod registration;
mod rules;

pub use registration::registration_schema;
pub use rules::{number, string, FieldRules, Value, Violation};

use crate::model::FieldName;

type Accessor<M> = Box<dyn for<'a> Fn(&'a M) -> Value<'a>>;

/// One failed check, before per-field merging
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub field: FieldName,
    pub violation: Violation,
    /// True when raised by a refinement rather than a field rule
    pub cross_field: bool,
}

struct FieldEntry<M> {
    name: FieldName,
    accessor: Accessor<M>,
    rules: FieldRules,
}

struct Refinement<M> {
    predicate: Box<dyn Fn(&M) -> bool>,
    message: String,
    path: FieldName,
}

/// Acceptance criteria for a model of type `M`
pub struct Schema<M> {
    fields: Vec<FieldEntry<M>>,
    refinements: Vec<Refinement<M>>,
}

impl<M: 'static> Schema<M> {
    /// Create an empty object schema
    pub fn object() -> Self {
        Self {
            fields: Vec::new(),
            refinements: Vec::new(),
        }
    }

    /// Declare the rules for a field
    pub fn field<F>(mut self, name: FieldName, accessor: F, rules: impl Into<FieldRules>) -> Self
    where
        F: for<'a> Fn(&'a M) -> Value<'a> + 'static,
    {
        self.fields.push(FieldEntry {
            name,
            accessor: Box::new(accessor),
            rules: rules.into(),
        });
        self
    }

    /// Declare a cross-field rule whose failure is reported on `path`
    pub fn refine<P>(mut self, predicate: P, message: impl Into<String>, path: FieldName) -> Self
    where
        P: Fn(&M) -> bool + 'static,
    {
        self.refinements.push(Refinement {
            predicate: Box::new(predicate),
            message: message.into(),
            path,
        });
        self
    }

    /// Run every field rule list, then every refinement.
    ///
    /// Fields are never short-circuited: each field contributes at most one
    /// issue (its first failing rule) regardless of what other fields did.
    pub fn check(&self, model: &M) -> Vec<Issue> {
        let field_issues = self.fields.iter().filter_map(|entry| {
            entry
                .rules
                .check((entry.accessor)(model))
                .map(|violation| Issue {
                    field: entry.name,
                    violation,
                    cross_field: false,
                })
        });

        let refinement_issues = self
            .refinements
            .iter()
            .filter(|r| !(r.predicate)(model))
            .map(|r| Issue {
                field: r.path,
                violation: Violation::Custom(r.message.clone()),
                cross_field: true,
            });

        field_issues.chain(refinement_issues).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Pair {
        a: String,
        b: String,
    }

    fn pair_schema() -> Schema<Pair> {
        Schema::object()
            .field(FieldName::Password, |p: &Pair| Value::Text(&p.a), string().min(3))
            .field(
                FieldName::ConfirmPassword,
                |p: &Pair| Value::Text(&p.b),
                string().min(3),
            )
            .refine(|p| p.a == p.b, "differ", FieldName::ConfirmPassword)
    }

    #[test]
    fn test_empty_schema_passes() {
        let schema: Schema<Pair> = Schema::object();
        let issues = schema.check(&Pair {
            a: String::new(),
            b: String::new(),
        });
        assert!(issues.is_empty());
    }

    #[test]
    fn test_field_issues_come_before_refinements() {
        let issues = pair_schema().check(&Pair {
            a: "x".to_string(),
            b: "abcd".to_string(),
        });
        assert_eq!(
            issues,
            vec![
                Issue {
                    field: FieldName::Password,
                    violation: Violation::TooShort(3),
                    cross_field: false,
                },
                Issue {
                    field: FieldName::ConfirmPassword,
                    violation: Violation::Custom("differ".to_string()),
                    cross_field: true,
                },
            ]
        );
    }

    #[test]
    fn test_all_fields_checked() {
        let issues = pair_schema().check(&Pair {
            a: "x".to_string(),
            b: "x".to_string(),
        });
        let fields: Vec<_> = issues.iter().map(|i| i.field).collect();
        assert_eq!(fields, vec![FieldName::Password, FieldName::ConfirmPassword]);
    }
}

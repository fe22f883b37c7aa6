//! Validation engine: runs a schema against a model snapshot

use crate::model::FieldName;
use crate::schema::{Issue, Schema};

/// A single field error ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldName,
    pub message: String,
}

/// Field-keyed error messages, at most one per field, in the order the
/// schema produced them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    /// Merge raw schema issues.
    ///
    /// A field rule only records the first message for its field. A
    /// refinement replaces any message already on its target field, and the
    /// entry moves to the position the refinement was raised at.
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        let mut merged = Self::default();
        for issue in issues {
            let message = issue.violation.to_string();
            if issue.cross_field {
                merged.errors.retain(|e| e.field != issue.field);
            } else if merged.get(issue.field).is_some() {
                continue;
            }
            merged.errors.push(FieldError {
                field: issue.field,
                message,
            });
        }
        merged
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outcome of checking a model against a schema
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<M> {
    /// Every rule passed; carries the validated model
    Valid(M),
    /// One or more fields failed
    Invalid(FieldErrors),
}

/// Evaluate `schema` against `model`. Pure and deterministic.
pub fn validate<M: Clone + 'static>(schema: &Schema<M>, model: &M) -> ValidationResult<M> {
    let errors = FieldErrors::from_issues(schema.check(model));
    if errors.is_empty() {
        ValidationResult::Valid(model.clone())
    } else {
        ValidationResult::Invalid(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FormModel;
    use crate::schema::registration::PASSWORD_MISMATCH;
    use crate::schema::registration_schema;
    use pretty_assertions::assert_eq;

    fn valid_model() -> FormModel {
        FormModel {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@doe.com".to_string(),
            age: 30.0,
            password: "abcde".to_string(),
            confirm_password: "abcde".to_string(),
        }
    }

    fn errors_for(model: &FormModel) -> Vec<(FieldName, String)> {
        match validate(&registration_schema(), model) {
            ValidationResult::Valid(_) => Vec::new(),
            ValidationResult::Invalid(errors) => errors
                .iter()
                .map(|e| (e.field, e.message.clone()))
                .collect(),
        }
    }

    fn is_valid(model: &FormModel) -> bool {
        matches!(
            validate(&registration_schema(), model),
            ValidationResult::Valid(_)
        )
    }

    #[test]
    fn test_valid_model_passes() {
        let model = valid_model();
        let result = validate(&registration_schema(), &model);
        assert_eq!(result, ValidationResult::Valid(model));
    }

    #[test]
    fn test_upper_bounds_pass() {
        let model = FormModel {
            first_name: "a".repeat(30),
            last_name: "b".repeat(30),
            age: 80.0,
            password: "p".repeat(20),
            confirm_password: "p".repeat(20),
            ..valid_model()
        };
        assert!(is_valid(&model));
    }

    #[test]
    fn test_password_mismatch_single_error() {
        let model = FormModel {
            confirm_password: "abcdf".to_string(),
            ..valid_model()
        };
        assert_eq!(
            errors_for(&model),
            vec![(FieldName::ConfirmPassword, PASSWORD_MISMATCH.to_string())]
        );
    }

    #[test]
    fn test_every_violated_field_reported() {
        let model = FormModel {
            first_name: "J".to_string(),
            email: "not-an-email".to_string(),
            age: 17.0,
            ..valid_model()
        };
        assert_eq!(
            errors_for(&model),
            vec![
                (
                    FieldName::FirstName,
                    "String must contain at least 2 character(s)".to_string()
                ),
                (FieldName::Email, "Invalid email".to_string()),
                (
                    FieldName::Age,
                    "Number must be greater than or equal to 18".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_age_boundaries() {
        for (age, ok) in [(17.0, false), (18.0, true), (80.0, true), (81.0, false)] {
            let model = FormModel {
                age,
                ..valid_model()
            };
            assert_eq!(is_valid(&model), ok, "age {age}");
            if !ok {
                assert_eq!(errors_for(&model)[0].0, FieldName::Age);
            }
        }
    }

    #[test]
    fn test_age_nan_is_range_violation() {
        let model = FormModel {
            age: f64::NAN,
            ..valid_model()
        };
        assert_eq!(
            errors_for(&model),
            vec![(
                FieldName::Age,
                "Number must be greater than or equal to 18".to_string()
            )]
        );
    }

    #[test]
    fn test_first_name_boundaries() {
        let short = FormModel {
            first_name: "J".to_string(),
            ..valid_model()
        };
        assert_eq!(errors_for(&short).len(), 1);
        assert_eq!(errors_for(&short)[0].0, FieldName::FirstName);

        let two = FormModel {
            first_name: "Jo".to_string(),
            ..valid_model()
        };
        assert!(errors_for(&two).is_empty());

        let long = FormModel {
            first_name: "a".repeat(31),
            ..valid_model()
        };
        assert_eq!(
            errors_for(&long),
            vec![(
                FieldName::FirstName,
                "String must contain at most 30 character(s)".to_string()
            )]
        );
    }

    #[test]
    fn test_length_boundaries() {
        let set: [(FieldName, fn(&mut FormModel, String)); 4] = [
            (FieldName::FirstName, |m, v| m.first_name = v),
            (FieldName::LastName, |m, v| m.last_name = v),
            (FieldName::Password, |m, v| {
                m.password = v.clone();
                m.confirm_password = v;
            }),
            (FieldName::ConfirmPassword, |m, v| {
                m.password = v.clone();
                m.confirm_password = v;
            }),
        ];
        for (field, apply) in set {
            let (min, max) = match field {
                FieldName::Password | FieldName::ConfirmPassword => (5, 20),
                _ => (2, 30),
            };
            for (len, expected) in [
                (min - 1, Some(format!("String must contain at least {min} character(s)"))),
                (min, None),
                (max, None),
                (max + 1, Some(format!("String must contain at most {max} character(s)"))),
            ] {
                let mut model = valid_model();
                apply(&mut model, "x".repeat(len));
                let message = errors_for(&model)
                    .into_iter()
                    .find(|(f, _)| *f == field)
                    .map(|(_, m)| m);
                assert_eq!(message, expected, "{field} with {len} characters");
            }
        }
    }

    #[test]
    fn test_mismatch_overrides_confirm_password_error() {
        let model = FormModel {
            first_name: "J".to_string(),
            password: "abcdef".to_string(),
            confirm_password: "ab".to_string(),
            ..valid_model()
        };
        assert_eq!(
            errors_for(&model),
            vec![
                (
                    FieldName::FirstName,
                    "String must contain at least 2 character(s)".to_string()
                ),
                (FieldName::ConfirmPassword, PASSWORD_MISMATCH.to_string()),
            ]
        );
    }

    #[test]
    fn test_mismatch_is_reported_last() {
        let model = FormModel {
            last_name: String::new(),
            confirm_password: "zzzzz".to_string(),
            ..valid_model()
        };
        let fields: Vec<_> = errors_for(&model).into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![FieldName::LastName, FieldName::ConfirmPassword]);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let schema = registration_schema();
        let model = FormModel {
            email: "bad".to_string(),
            age: f64::NAN,
            ..valid_model()
        };
        assert_eq!(validate(&schema, &model), validate(&schema, &model));
        let valid = valid_model();
        assert_eq!(validate(&schema, &valid), validate(&schema, &valid));
    }

    #[test]
    fn test_at_most_one_error_per_field() {
        let errors = FieldErrors::from_issues(registration_schema().check(&FormModel::default()));
        let mut fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        let total = fields.len();
        fields.dedup();
        assert_eq!(fields.len(), total);
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn test_field_errors_get() {
        let errors = FieldErrors::from_issues(registration_schema().check(&FormModel::default()));
        assert_eq!(errors.get(FieldName::Email), Some("Invalid email"));
        assert!(!errors.is_empty());
        assert!(FieldErrors::default().get(FieldName::Email).is_none());
    }
}

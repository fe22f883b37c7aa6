//! Schema for the registration form

use super::{number, string, Schema, Value};
use crate::model::{FieldName, FormModel};

/// Message reported on `confirmPassword` when the two passwords differ
pub const PASSWORD_MISMATCH: &str = "Passwords do not Match";

/// Build the registration schema
pub fn registration_schema() -> Schema<FormModel> {
    Schema::object()
        .field(
            FieldName::FirstName,
            |m: &FormModel| Value::Text(&m.first_name),
            string().min(2).max(30),
        )
        .field(
            FieldName::LastName,
            |m: &FormModel| Value::Text(&m.last_name),
            string().min(2).max(30),
        )
        .field(
            FieldName::Email,
            |m: &FormModel| Value::Text(&m.email),
            string().email(),
        )
        .field(
            FieldName::Age,
            |m: &FormModel| Value::Number(m.age),
            number().min(18.0).max(80.0),
        )
        .field(
            FieldName::Password,
            |m: &FormModel| Value::Text(&m.password),
            string().min(5).max(20),
        )
        .field(
            FieldName::ConfirmPassword,
            |m: &FormModel| Value::Text(&m.confirm_password),
            string().min(5).max(20),
        )
        .refine(
            |m| m.password == m.confirm_password,
            PASSWORD_MISMATCH,
            FieldName::ConfirmPassword,
        )
}

//! Form domain layer
//!
//! Input controls and the registration form that binds them to the model.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Form, FormButton, RegistrationForm};

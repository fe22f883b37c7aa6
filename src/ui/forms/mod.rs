//! Form rendering module
//!
//! - `field_renderer`: input controls with their error slots
//! - `registration_form`: the registration form and its buttons

mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration;

//! Registration form state and field bindings

use super::field::FormField;
use crate::model::{FieldName, FormModel};
use crate::validation::FieldErrors;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Buttons on the last row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Reset,
}

impl FormButton {
    pub fn label(self) -> &'static str {
        match self {
            FormButton::Submit => "Submit",
            FormButton::Reset => "Reset",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            FormButton::Submit => FormButton::Reset,
            FormButton::Reset => FormButton::Submit,
        }
    }
}

/// The registration form: six input controls bound to a `FormModel`
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    fields: Vec<FormField>,
    model: FormModel,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row
    pub selected_button: FormButton,
}

impl RegistrationForm {
    /// Index of the buttons row
    pub const BUTTONS_ROW: usize = FieldName::ALL.len();

    pub fn new() -> Self {
        let model = FormModel::default();
        let fields = FieldName::ALL
            .iter()
            .map(|&name| FormField::with_value(name, default_text(&model, name)))
            .collect();
        Self {
            fields,
            model,
            active_field_index: 0,
            selected_button: FormButton::default(),
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTONS_ROW
    }

    /// Name of the focused input, or `None` on the buttons row
    pub fn active_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        &self.fields[name.index()]
    }

    /// Current model, as last written by the bindings
    pub fn model(&self) -> &FormModel {
        &self.model
    }

    /// Copy of the model taken at submit time
    pub fn snapshot(&self) -> FormModel {
        self.model.clone()
    }

    /// Type a character into the focused input
    pub fn input_char(&mut self, c: char) {
        self.edit_active(|field| field.push_char(c));
    }

    /// Delete the last character of the focused input
    pub fn backspace(&mut self) {
        self.edit_active(FormField::pop_char);
    }

    /// Replace the whole text of an input
    #[cfg(test)]
    pub fn set_value(&mut self, name: FieldName, value: &str) {
        self.edit(name, |field| field.set_text(value));
    }

    fn edit_active(&mut self, change: impl FnOnce(&mut FormField)) {
        if let Some(name) = self.active_name() {
            self.edit(name, change);
        }
    }

    /// Apply a change to an input and write its new text through to the model
    fn edit(&mut self, name: FieldName, change: impl FnOnce(&mut FormField)) {
        let field = &mut self.fields[name.index()];
        change(field);
        self.model.set(name, field.as_text());
    }

    /// Fill each input's error slot from a validation result
    pub fn show_errors(&mut self, errors: &FieldErrors) {
        for field in &mut self.fields {
            field.error = errors.get(field.name).map(str::to_string);
        }
    }

    #[cfg(test)]
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Restore defaults in the model and every input, and clear errors
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn next_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        Self::BUTTONS_ROW + 1 // six inputs, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldName::ALL.get(index).map(|&name| self.field(name))
    }
}

/// Text an input shows for a model's value
fn default_text(model: &FormModel, name: FieldName) -> String {
    match name {
        FieldName::FirstName => model.first_name.clone(),
        FieldName::LastName => model.last_name.clone(),
        FieldName::Email => model.email.clone(),
        FieldName::Age => model.age.to_string(),
        FieldName::Password => model.password.clone(),
        FieldName::ConfirmPassword => model.confirm_password.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::registration_schema;
    use crate::validation::validate;
    use pretty_assertions::assert_eq;

    fn type_text(form: &mut RegistrationForm, name: FieldName, text: &str) {
        form.set_active_field(name.index());
        for c in text.chars() {
            form.input_char(c);
        }
    }

    #[test]
    fn test_new_has_correct_defaults() {
        let form = RegistrationForm::new();
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.selected_button, FormButton::Submit);
        assert_eq!(form.model(), &FormModel::default());
        assert_eq!(form.field(FieldName::Age).as_text(), "0");
        assert_eq!(form.field(FieldName::Email).as_text(), "");
        assert!(!form.has_errors());
    }

    #[test]
    fn test_typing_updates_model_immediately() {
        let mut form = RegistrationForm::new();
        form.input_char('J');
        assert_eq!(form.model().first_name, "J");
        form.input_char('a');
        assert_eq!(form.model().first_name, "Ja");
        form.backspace();
        assert_eq!(form.model().first_name, "J");
    }

    #[test]
    fn test_age_binding_coerces() {
        let mut form = RegistrationForm::new();
        form.set_active_field(FieldName::Age.index());
        form.backspace(); // remove the default "0"
        assert!(form.model().age.is_nan());
        form.input_char('3');
        form.input_char('0');
        assert_eq!(form.model().age, 30.0);
        form.input_char('x');
        assert!(form.model().age.is_nan());
    }

    #[test]
    fn test_input_on_buttons_row_is_ignored() {
        let mut form = RegistrationForm::new();
        form.set_active_field(RegistrationForm::BUTTONS_ROW);
        form.input_char('z');
        form.backspace();
        assert_eq!(form.model(), &FormModel::default());
    }

    #[test]
    fn test_set_value_binds() {
        let mut form = RegistrationForm::new();
        form.set_value(FieldName::Email, "jane@doe.com");
        assert_eq!(form.model().email, "jane@doe.com");
        assert_eq!(form.field(FieldName::Email).as_text(), "jane@doe.com");
    }

    #[test]
    fn test_show_and_replace_errors() {
        let mut form = RegistrationForm::new();
        let result = validate(&registration_schema(), form.model());
        let crate::validation::ValidationResult::Invalid(errors) = result else {
            panic!("default form should be invalid");
        };
        form.show_errors(&errors);
        assert_eq!(
            form.field(FieldName::Email).error.as_deref(),
            Some("Invalid email")
        );
        assert!(form.has_errors());
        form.show_errors(&FieldErrors::default());
        assert!(!form.has_errors());
    }

    #[test]
    fn test_reset_is_total() {
        let mut form = RegistrationForm::new();
        type_text(&mut form, FieldName::FirstName, "Jane");
        type_text(&mut form, FieldName::Password, "secret");
        type_text(&mut form, FieldName::Age, "5");
        form.selected_button = FormButton::Reset;
        form.fields[0].error = Some("bad".to_string());

        form.reset();

        assert_eq!(form.model(), &FormModel::default());
        for name in FieldName::ALL {
            let expected = if name == FieldName::Age { "0" } else { "" };
            assert_eq!(form.field(name).as_text(), expected);
        }
        assert!(!form.has_errors());
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_field_count_includes_buttons() {
        let form = RegistrationForm::new();
        assert_eq!(form.field_count(), 7);
    }

    #[test]
    fn test_next_field_cycles() {
        let mut form = RegistrationForm::new();
        for _ in 0..7 {
            form.next_field();
        }
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_prev_field_cycles() {
        let mut form = RegistrationForm::new();
        form.prev_field();
        assert!(form.is_buttons_row_active());
        assert!(form.active_name().is_none());
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = RegistrationForm::new();
        form.set_active_field(100);
        assert_eq!(form.active_field_index, RegistrationForm::BUTTONS_ROW);
    }

    #[test]
    fn test_get_field_returns_correct_fields() {
        let form = RegistrationForm::new();
        assert_eq!(form.get_field(0).unwrap().name, FieldName::FirstName);
        assert_eq!(form.get_field(5).unwrap().name, FieldName::ConfirmPassword);
        assert!(form.get_field(6).is_none());
    }

    #[test]
    fn test_button_toggle() {
        let mut form = RegistrationForm::new();
        form.next_button();
        assert_eq!(form.selected_button, FormButton::Reset);
        form.next_button();
        assert_eq!(form.selected_button, FormButton::Submit);
    }
}

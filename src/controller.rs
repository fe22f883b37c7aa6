//! Submission controller: one validate-then-deliver cycle per submit

use crate::model::FormModel;
use crate::notify::{Notifier, SuccessHandler};
use crate::schema::{registration_schema, Schema};
use crate::state::RegistrationForm;
use crate::validation::{validate, ValidationResult};

/// Phase of the submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// What a submit did, for status reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed { errors: usize },
}

/// Drives submit and reset for a registration form
pub struct SubmissionController {
    schema: Schema<FormModel>,
    phase: SubmitPhase,
    /// Terminal phase of the most recent submit
    last_result: Option<SubmitPhase>,
}

impl SubmissionController {
    pub fn new(schema: Schema<FormModel>) -> Self {
        Self {
            schema,
            phase: SubmitPhase::Idle,
            last_result: None,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn last_result(&self) -> Option<SubmitPhase> {
        self.last_result
    }

    fn transition(&mut self, to: SubmitPhase) {
        tracing::trace!(from = ?self.phase, to = ?to, "Submit phase");
        self.phase = to;
        if matches!(to, SubmitPhase::Succeeded | SubmitPhase::Failed) {
            self.last_result = Some(to);
        }
    }

    /// Validate the form's current model and act on the result.
    ///
    /// On failure every error goes to `notifier` in schema order and the
    /// form keeps its values. On success `handler` gets the validated model
    /// and the form is reset.
    pub fn submit(
        &mut self,
        form: &mut RegistrationForm,
        notifier: &mut dyn Notifier,
        handler: &mut dyn SuccessHandler,
    ) -> SubmitOutcome {
        self.transition(SubmitPhase::Submitting);
        let snapshot = form.snapshot();
        tracing::debug!("Submitting registration form");

        let outcome = match validate(&self.schema, &snapshot) {
            ValidationResult::Valid(model) => {
                self.transition(SubmitPhase::Succeeded);
                handler.on_valid_submit(model);
                form.reset();
                SubmitOutcome::Succeeded
            }
            ValidationResult::Invalid(errors) => {
                self.transition(SubmitPhase::Failed);
                tracing::debug!(errors = errors.len(), "Validation failed");
                for error in errors.iter() {
                    tracing::trace!(field = %error.field, message = %error.message, "Field error");
                    notifier.notify_error(&error.message);
                }
                form.show_errors(&errors);
                SubmitOutcome::Failed {
                    errors: errors.len(),
                }
            }
        };

        self.transition(SubmitPhase::Idle);
        outcome
    }

    /// Restore the form to defaults and clear errors, from any phase
    pub fn reset(&mut self, form: &mut RegistrationForm) {
        form.reset();
        self.transition(SubmitPhase::Idle);
        self.last_result = None;
        tracing::debug!("Form reset");
    }
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new(registration_schema())
    }
}

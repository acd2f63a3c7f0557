use wizard_core::{FieldSpec, Payload, StepDefinition, SubmissionFailure};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Provided(String),
    Back,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Submit,
    Back,
    Cancel,
}

pub trait InteractionProvider: Send + Sync {
    /// Asks for the value of `field` on `step`. `current` is the value held
    /// so far, empty for a field that was never filled.
    ///
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn prompt_field(
        &self,
        step: &StepDefinition,
        field: &FieldSpec,
        current: &str,
    ) -> Result<FieldInput>;

    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn confirm(&self, payload: &Payload) -> Result<ConfirmChoice>;

    /// Returns `true` to submit the same payload again.
    ///
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn retry_after_failure(&self, failure: &SubmissionFailure) -> Result<bool>;
}

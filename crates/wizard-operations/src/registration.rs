//! The registration wizard: who the user is and what they like to eat.
//!
//! Step ids double as the keys of the submitted JSON body, so they follow
//! the form-group names the registration backend expects:
//! `{"identityFormGroup":{"name":..},"questionsFormGroup":{"food":..}}`.
//! The confirmation page is not a step; it is the operation's confirm
//! prompt on the last step.

use wizard_core::{FieldSpec, Result, StepDefinition};
use wizard_flow::{WizardBuilder, WizardState};

pub const IDENTITY_STEP: &str = "identityFormGroup";
pub const QUESTIONS_STEP: &str = "questionsFormGroup";

pub const NAME_FIELD: &str = "name";
pub const FOOD_FIELD: &str = "food";

/// Builds a fresh registration wizard positioned on its first step.
///
/// # Errors
///
/// Returns an error if the step definitions declare duplicate ids or fields.
pub fn registration_wizard() -> Result<WizardState> {
    WizardBuilder::new()
        .first_step(
            StepDefinition::new(IDENTITY_STEP)
                .title("Who are you?")
                .field(FieldSpec::new(NAME_FIELD).label("Name").required()),
        )
        .then(
            StepDefinition::new(QUESTIONS_STEP)
                .title("Food preference")
                .field(FieldSpec::new(FOOD_FIELD).label("Favourite food").required()),
        )
        .build()
}

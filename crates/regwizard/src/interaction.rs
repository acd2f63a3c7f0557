use dialoguer::{Confirm, Input, Select};
use wizard_core::{FieldSpec, Payload, StepDefinition, SubmissionFailure};
use wizard_operations::traits::{ConfirmChoice, FieldInput, InteractionProvider};
use wizard_operations::{OperationError, Result};

/// Typed on a text prompt to return to the previous step.
pub(crate) const BACK_INPUT: &str = "<";
/// Typed on a text prompt to abandon the registration.
pub(crate) const CANCEL_INPUT: &str = ":q";

pub struct TerminalInteractionProvider;

impl InteractionProvider for TerminalInteractionProvider {
    fn prompt_field(
        &self,
        step: &StepDefinition,
        field: &FieldSpec,
        current: &str,
    ) -> Result<FieldInput> {
        let is_first_field = step
            .fields()
            .first()
            .is_some_and(|first| first.name() == field.name());
        if is_first_field {
            println!();
            println!("{}  ({BACK_INPUT} back, {CANCEL_INPUT} cancel)", step.display_title());
        }

        let value: String = Input::new()
            .with_prompt(field.display_label())
            .with_initial_text(current)
            .allow_empty(true)
            .validate_with(|input: &String| validate_input(field, input))
            .interact_text()
            .map_err(dialoguer_to_operation_error)?;

        Ok(parse_field_input(value))
    }

    fn confirm(&self, payload: &Payload) -> Result<ConfirmChoice> {
        println!();
        println!("Please review your registration:");
        for data in payload.iter().map(|(_, data)| data) {
            for (field, value) in data {
                println!("  {field}: {value}");
            }
        }

        let selection = Select::new()
            .with_prompt("Submit registration?")
            .items(["Submit", "Back", "Cancel"])
            .default(0)
            .interact_opt()
            .map_err(dialoguer_to_operation_error)?;

        match selection {
            Some(0) => Ok(ConfirmChoice::Submit),
            Some(1) => Ok(ConfirmChoice::Back),
            _ => Ok(ConfirmChoice::Cancel),
        }
    }

    fn retry_after_failure(&self, failure: &SubmissionFailure) -> Result<bool> {
        eprintln!("Submission failed: {failure}");

        let retry = Confirm::new()
            .with_prompt("Try again?")
            .default(true)
            .interact_opt()
            .map_err(dialoguer_to_operation_error)?;

        Ok(retry.unwrap_or(false))
    }
}

fn parse_field_input(value: String) -> FieldInput {
    match value.as_str() {
        BACK_INPUT => FieldInput::Back,
        CANCEL_INPUT => FieldInput::Cancelled,
        _ => FieldInput::Provided(value),
    }
}

fn validate_input(field: &FieldSpec, input: &str) -> std::result::Result<(), String> {
    if input == BACK_INPUT || input == CANCEL_INPUT {
        return Ok(());
    }

    let violations = field.violations(input);
    if violations.is_empty() {
        Ok(())
    } else {
        let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
        Err(reasons.join("; "))
    }
}

fn dialoguer_to_operation_error(e: dialoguer::Error) -> OperationError {
    match e {
        dialoguer::Error::IO(io_err) => OperationError::Io(io_err),
    }
}

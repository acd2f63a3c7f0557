use serde_json::Value;
use tracing::{info, warn};
use wizard_core::{Payload, SubmissionResult, WizardError};
use wizard_gateway::SubmissionTransport;

use crate::error::OperationError;
use crate::traits::{ConfirmChoice, FieldInput, InteractionProvider};
use crate::{Result, WizardEvent, WizardSession};

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    Submitted { payload: Payload, response: Value },
    Cancelled,
}

enum StepInput {
    Completed,
    Back,
    Cancelled,
}

/// Walks the user through every step of a session and submits the result.
pub struct RegisterOperation<I> {
    interaction_provider: I,
}

impl<I> RegisterOperation<I>
where
    I: InteractionProvider,
{
    pub fn new(interaction_provider: I) -> Self {
        Self {
            interaction_provider,
        }
    }

    /// Runs until the backend accepts the registration or the user cancels.
    ///
    /// Incomplete steps are asked again. Confirmation happens on the last
    /// step; going back from it reopens that step's fields, or the previous
    /// step when the last one has none. A failed submission keeps every
    /// value and returns to confirmation unless the user retries.
    ///
    /// # Errors
    ///
    /// Returns an error if an interaction fails or the gateway refuses to
    /// submit.
    pub async fn execute<T>(&self, session: &mut WizardSession<T>) -> Result<RegisterOutcome>
    where
        T: SubmissionTransport,
    {
        loop {
            match self.fill_active_step(session)? {
                StepInput::Completed => {}
                StepInput::Back => {
                    session.handle(WizardEvent::Back)?;
                    continue;
                }
                StepInput::Cancelled => return Ok(RegisterOutcome::Cancelled),
            }

            if !session.state().is_terminal() {
                match session.handle(WizardEvent::Next) {
                    Ok(_) => {}
                    Err(OperationError::Wizard(WizardError::InvalidStep { step, fields })) => {
                        warn!(%step, ?fields, "step incomplete");
                    }
                    Err(e) => return Err(e),
                }
                continue;
            }

            if !session.state().can_advance() {
                let step = session.state().active_step();
                warn!(step = %step.id(), fields = ?step.failing_fields(), "step incomplete");
                continue;
            }

            let payload = session.state().assembled_payload()?;
            match self.interaction_provider.confirm(&payload)? {
                ConfirmChoice::Submit => {}
                ConfirmChoice::Back => {
                    if session.state().active_step().definition().fields().is_empty() {
                        session.handle(WizardEvent::Back)?;
                    }
                    continue;
                }
                ConfirmChoice::Cancel => return Ok(RegisterOutcome::Cancelled),
            }

            if let Some(response) = self.submit_until_settled(session).await? {
                return Ok(RegisterOutcome::Submitted { payload, response });
            }
        }
    }

    fn fill_active_step<T>(&self, session: &mut WizardSession<T>) -> Result<StepInput>
    where
        T: SubmissionTransport,
    {
        let definition = session.state().active_step().definition().clone();

        for field in definition.fields() {
            let current = session
                .state()
                .field_value(definition.id().as_str(), field.name())
                .unwrap_or("")
                .to_string();

            match self
                .interaction_provider
                .prompt_field(&definition, field, &current)?
            {
                FieldInput::Provided(value) => {
                    session.handle(WizardEvent::FieldChanged {
                        step: definition.id().to_string(),
                        field: field.name().to_string(),
                        value,
                    })?;
                }
                FieldInput::Back => return Ok(StepInput::Back),
                FieldInput::Cancelled => return Ok(StepInput::Cancelled),
            }
        }

        Ok(StepInput::Completed)
    }

    /// Returns the backend's answer, or `None` once the user stops retrying.
    async fn submit_until_settled<T>(&self, session: &mut WizardSession<T>) -> Result<Option<Value>>
    where
        T: SubmissionTransport,
    {
        loop {
            match session.submit().await? {
                SubmissionResult::Accepted(response) => {
                    info!("registration accepted");
                    return Ok(Some(response));
                }
                SubmissionResult::Failed(failure) => {
                    if !self.interaction_provider.retry_after_failure(&failure)? {
                        return Ok(None);
                    }
                }
            }
        }
    }
}

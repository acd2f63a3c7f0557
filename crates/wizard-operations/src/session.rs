use std::sync::Arc;

use tracing::debug;
use wizard_core::{Payload, SubmissionResult};
use wizard_flow::WizardState;
use wizard_gateway::{GatewayError, SubmissionGateway, SubmissionTransport};

use crate::Result;

/// Input coming from whatever front end drives the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    FieldChanged {
        step: String,
        field: String,
        value: String,
    },
    Next,
    Back,
}

/// One user's traversal of a wizard.
///
/// Owns the wizard state exclusively; the gateway is injected and shared
/// with the submissions this session starts.
pub struct WizardSession<T> {
    state: WizardState,
    gateway: Arc<SubmissionGateway<T>>,
    last_result: Option<SubmissionResult>,
}

impl<T> WizardSession<T>
where
    T: SubmissionTransport,
{
    pub fn new(state: WizardState, gateway: Arc<SubmissionGateway<T>>) -> Self {
        Self {
            state,
            gateway,
            last_result: None,
        }
    }

    /// Applies `event` and returns the active step index afterwards.
    ///
    /// # Errors
    ///
    /// Returns the wizard error if the event is rejected; the state is
    /// unchanged in that case.
    pub fn handle(&mut self, event: WizardEvent) -> Result<usize> {
        match event {
            WizardEvent::FieldChanged { step, field, value } => {
                self.state.set_field_value(&step, &field, value)?;
            }
            WizardEvent::Next => {
                self.state.advance()?;
            }
            WizardEvent::Back => {
                self.state.retreat();
            }
        }
        Ok(self.state.active_index())
    }

    /// Assembles the payload and hands it to a pending submission.
    ///
    /// The session stays usable while the returned submission is awaited.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::IncompleteWizard` if any step is invalid.
    pub fn prepare_submission(&self) -> Result<PendingSubmission<T>> {
        let payload = self.state.assembled_payload()?;
        debug!(steps = payload.len(), "submission prepared");
        Ok(PendingSubmission {
            gateway: Arc::clone(&self.gateway),
            payload,
        })
    }

    /// Assembles, submits and records the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the wizard is incomplete, or if the gateway
    /// refuses the submission (already in flight, or already submitted).
    pub async fn submit(&mut self) -> Result<SubmissionResult> {
        let result = self.prepare_submission()?.send().await?;
        self.last_result = Some(result.clone());
        Ok(result)
    }

    #[must_use]
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    #[must_use]
    pub fn gateway(&self) -> &SubmissionGateway<T> {
        &self.gateway
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&SubmissionResult> {
        self.last_result.as_ref()
    }

    /// Ends the session, returning the final wizard state.
    #[must_use]
    pub fn into_state(self) -> WizardState {
        self.state
    }
}

/// A payload on its way to the gateway, detached from the session.
pub struct PendingSubmission<T> {
    gateway: Arc<SubmissionGateway<T>>,
    payload: Payload,
}

impl<T> PendingSubmission<T>
where
    T: SubmissionTransport,
{
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// # Errors
    ///
    /// Returns the gateway's refusal if another submission is in flight or
    /// resubmission is blocked.
    pub async fn send(self) -> std::result::Result<SubmissionResult, GatewayError> {
        self.gateway.submit(&self.payload).await
    }
}

use tracing::debug;
use wizard_core::{Payload, Result, StepData, StepId, WizardError};

use crate::log::{TransitionKind, TransitionLog};
use crate::step::Step;

/// Steps, captured values and the active step of one wizard session.
///
/// Invariants:
/// - there is always at least one step and `active_index < len()`;
/// - the active index only moves forward from a valid step;
/// - moving back keeps every captured value.
#[derive(Debug, Clone)]
pub struct WizardState {
    steps: Vec<Step>,
    active_index: usize,
    log: TransitionLog,
}

impl WizardState {
    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        debug_assert!(!steps.is_empty(), "builder guarantees at least one step");
        Self {
            steps,
            active_index: 0,
            log: TransitionLog::new(),
        }
    }

    /// Updates `field` of step `step_id` and re-runs that step's validators.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::UnknownStep` or `WizardError::UnknownField` if
    /// the step or field is not declared. The state is left unchanged.
    pub fn set_field_value(
        &mut self,
        step_id: &str,
        field: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        let step = self
            .steps
            .iter_mut()
            .find(|s| s.id().as_str() == step_id)
            .ok_or_else(|| WizardError::UnknownStep(step_id.to_string()))?;

        step.set_value(field, value.into())?;
        debug!(step = step_id, field, valid = step.is_valid(), "field updated");
        Ok(())
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.active_step().is_valid()
    }

    /// Moves to the next step and returns the new active index.
    ///
    /// On the last step this is a no-op that still succeeds.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidStep` if the active step is invalid; the
    /// active index is unchanged.
    pub fn advance(&mut self) -> Result<usize> {
        let from = self.active_index;
        let step_id = self.active_step().id().clone();

        if !self.can_advance() {
            let fields = self.active_step().failing_fields();
            self.log.record(TransitionKind::Refused, &step_id, from, from);
            debug!(step = %step_id, ?fields, "advance refused");
            return Err(WizardError::InvalidStep {
                step: step_id,
                fields,
            });
        }

        if self.is_terminal() {
            self.log.record(TransitionKind::Stayed, &step_id, from, from);
        } else {
            self.active_index += 1;
            let to = self.active_index;
            self.log.record(TransitionKind::Advanced, &step_id, from, to);
            debug!(from, to, "advanced");
        }
        Ok(self.active_index)
    }

    /// Moves to the previous step and returns the new active index.
    /// Clamped at the first step; captured values are kept.
    pub fn retreat(&mut self) -> usize {
        let from = self.active_index;
        let step_id = self.active_step().id().clone();

        if from == 0 {
            self.log.record(TransitionKind::Stayed, &step_id, from, from);
        } else {
            self.active_index -= 1;
            let to = self.active_index;
            self.log.record(TransitionKind::Retreated, &step_id, from, to);
            debug!(from, to, "retreated");
        }
        self.active_index
    }

    /// Builds the payload from every step, whatever the active step is.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::IncompleteWizard` listing every invalid step.
    pub fn assembled_payload(&self) -> Result<Payload> {
        let invalid_steps = self.invalid_steps();
        if !invalid_steps.is_empty() {
            return Err(WizardError::IncompleteWizard { invalid_steps });
        }

        Ok(self
            .steps
            .iter()
            .map(|step| (step.id().clone(), step.data().clone()))
            .collect())
    }

    #[must_use]
    pub fn invalid_steps(&self) -> Vec<StepId> {
        self.steps
            .iter()
            .filter(|step| !step.is_valid())
            .map(|step| step.id().clone())
            .collect()
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn active_step(&self) -> &Step {
        &self.steps[self.active_index]
    }

    #[must_use]
    pub fn current_step_data(&self) -> &StepData {
        self.active_step().data()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.active_index + 1 == self.steps.len()
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn step(&self, step_id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id().as_str() == step_id)
    }

    #[must_use]
    pub fn field_value(&self, step_id: &str, field: &str) -> Option<&str> {
        self.step(step_id).and_then(|s| s.value(field))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Never true for a wizard produced by [`crate::WizardBuilder`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn transitions(&self) -> &TransitionLog {
        &self.log
    }
}

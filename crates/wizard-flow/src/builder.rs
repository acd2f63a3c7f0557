use std::collections::HashSet;
use std::marker::PhantomData;

use wizard_core::{Result, StepDefinition, WizardError};

use crate::state::WizardState;
use crate::step::Step;

/// Marker type for a builder with no steps.
pub struct Empty;

/// Marker type for a builder with at least one step.
pub struct HasSteps;

/// Type-state builder for wizards.
///
/// `build()` only exists once a first step has been added, so a wizard
/// always has a valid active index.
///
/// ```compile_fail
/// use wizard_flow::WizardBuilder;
///
/// // Cannot build an empty wizard - `build()` is only available after `first_step()`
/// let wizard = WizardBuilder::new().build();
/// ```
///
/// Duplicate step ids and duplicate field names within a step are
/// reported by `build()`:
///
/// ```
/// use wizard_core::{StepDefinition, WizardError};
/// use wizard_flow::WizardBuilder;
///
/// let result = WizardBuilder::new()
///     .first_step(StepDefinition::new("identity"))
///     .then(StepDefinition::new("identity"))
///     .build();
///
/// assert!(matches!(result, Err(WizardError::DuplicateStep(_))));
/// ```
pub struct WizardBuilder<State> {
    steps: Vec<StepDefinition>,
    _state: PhantomData<State>,
}

impl WizardBuilder<Empty> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            _state: PhantomData,
        }
    }

    #[must_use]
    pub fn first_step(self, step: StepDefinition) -> WizardBuilder<HasSteps> {
        let mut steps = self.steps;
        steps.push(step);
        WizardBuilder {
            steps,
            _state: PhantomData,
        }
    }
}

impl Default for WizardBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardBuilder<HasSteps> {
    #[must_use]
    pub fn then(mut self, step: StepDefinition) -> Self {
        self.steps.push(step);
        self
    }

    /// # Errors
    ///
    /// Returns `WizardError::DuplicateStep` if two steps share an id, or
    /// `WizardError::DuplicateField` if a step declares a field twice.
    pub fn build(self) -> Result<WizardState> {
        let mut step_ids = HashSet::new();
        for definition in &self.steps {
            if !step_ids.insert(definition.id().clone()) {
                return Err(WizardError::DuplicateStep(definition.id().clone()));
            }

            let mut field_names = HashSet::new();
            for field in definition.fields() {
                if !field_names.insert(field.name()) {
                    return Err(WizardError::DuplicateField {
                        step: definition.id().clone(),
                        field: field.name().to_string(),
                    });
                }
            }
        }

        let steps = self.steps.into_iter().map(Step::new).collect();
        Ok(WizardState::from_steps(steps))
    }
}

use thiserror::Error;

use crate::step::StepId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum WizardError {
    #[error("step '{step}' is not valid (failing fields: {})", fields.join(", "))]
    InvalidStep { step: StepId, fields: Vec<String> },

    #[error("wizard is incomplete; invalid step(s): {}", join_ids(invalid_steps))]
    IncompleteWizard { invalid_steps: Vec<StepId> },

    #[error("unknown step '{0}'")]
    UnknownStep(String),

    #[error("step '{step}' has no field '{field}'")]
    UnknownField { step: StepId, field: String },

    #[error("duplicate step id '{0}'")]
    DuplicateStep(StepId),

    #[error("step '{step}' declares field '{field}' more than once")]
    DuplicateField { step: StepId, field: String },
}

pub type Result<T> = std::result::Result<T, WizardError>;

fn join_ids(ids: &[StepId]) -> String {
    ids.iter()
        .map(StepId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

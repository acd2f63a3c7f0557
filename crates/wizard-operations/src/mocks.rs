use std::collections::VecDeque;
use std::sync::Mutex;

use wizard_core::{FieldSpec, Payload, StepDefinition, SubmissionFailure};

use crate::Result;
use crate::error::OperationError;
use crate::traits::{ConfirmChoice, FieldInput, InteractionProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Field(FieldInput),
    Confirm(ConfirmChoice),
    Retry(bool),
}

impl Answer {
    #[must_use]
    pub fn text(value: &str) -> Self {
        Self::Field(FieldInput::Provided(value.to_string()))
    }
}

/// Replays a fixed list of answers and records every prompt it was shown.
///
/// Running out of answers, or being asked something the next answer does
/// not fit, fails with `OperationError::InteractionRequired`.
pub struct ScriptedInteraction {
    answers: Mutex<VecDeque<Answer>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedInteraction {
    #[must_use]
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts shown so far: `step.field` for fields, then `confirm` and
    /// `retry` for the other questions.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("lock poisoned").clone()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.lock().expect("lock poisoned").len()
    }

    fn next(&self, prompt: String) -> Option<Answer> {
        self.prompts.lock().expect("lock poisoned").push(prompt);
        self.answers.lock().expect("lock poisoned").pop_front()
    }
}

impl InteractionProvider for ScriptedInteraction {
    fn prompt_field(
        &self,
        step: &StepDefinition,
        field: &FieldSpec,
        _current: &str,
    ) -> Result<FieldInput> {
        match self.next(format!("{}.{}", step.id(), field.name())) {
            Some(Answer::Field(input)) => Ok(input),
            _ => Err(OperationError::InteractionRequired),
        }
    }

    fn confirm(&self, _payload: &Payload) -> Result<ConfirmChoice> {
        match self.next("confirm".to_string()) {
            Some(Answer::Confirm(choice)) => Ok(choice),
            _ => Err(OperationError::InteractionRequired),
        }
    }

    fn retry_after_failure(&self, _failure: &SubmissionFailure) -> Result<bool> {
        match self.next("retry".to_string()) {
            Some(Answer::Retry(retry)) => Ok(retry),
            _ => Err(OperationError::InteractionRequired),
        }
    }
}

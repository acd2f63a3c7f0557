use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::step::StepId;

/// Captured values of one step, keyed by field name in declaration order.
pub type StepData = IndexMap<String, String>;

/// The combined data of every step, submitted as a single unit.
///
/// Serializes as a JSON object keyed by step id:
/// `{"identityFormGroup":{"name":"Ann"},"questionsFormGroup":{"food":"Pasta"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(IndexMap<StepId, StepData>);

impl Payload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, step: StepId, data: StepData) {
        self.0.insert(step, data);
    }

    #[must_use]
    pub fn step(&self, step: &str) -> Option<&StepData> {
        self.0.get(step)
    }

    #[must_use]
    pub fn value(&self, step: &str, field: &str) -> Option<&str> {
        self.step(step)
            .and_then(|data| data.get(field))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StepId, &StepData)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(StepId, StepData)> for Payload {
    fn from_iter<I: IntoIterator<Item = (StepId, StepData)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

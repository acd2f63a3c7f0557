use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validator::Validator;

/// Identifier of a step, unique within a wizard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(String);

impl StepId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StepId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StepId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StepId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A field declared by a step. A field without validators is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    label: String,
    validators: Vec<Validator>,
}

impl FieldSpec {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            validators: Vec::new(),
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn required(self) -> Self {
        self.validator(Validator::Required)
    }

    #[must_use]
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn display_label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.validators.contains(&Validator::Required)
    }

    /// True iff every validator accepts `value`.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        self.validators.iter().all(|v| v.check(value))
    }

    /// Validators rejecting `value`, in declaration order.
    #[must_use]
    pub fn violations(&self, value: &str) -> Vec<&Validator> {
        self.validators.iter().filter(|v| !v.check(value)).collect()
    }
}

/// Static description of one wizard page: its id, title and fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    id: StepId,
    title: String,
    fields: Vec<FieldSpec>,
}

impl StepDefinition {
    #[must_use]
    pub fn new(id: impl Into<StepId>) -> Self {
        let id = id.into();
        Self {
            title: id.to_string(),
            id,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn id(&self) -> &StepId {
        &self.id
    }

    #[must_use]
    pub fn display_title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    #[must_use]
    pub fn find_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_label_defaults_to_name() {
        let field = FieldSpec::new("name");

        assert_eq!(field.display_label(), "name");
    }

    #[test]
    fn field_without_validators_is_optional_and_accepts_anything() {
        let field = FieldSpec::new("nickname");

        assert!(!field.is_required());
        assert!(field.accepts(""));
    }

    #[test]
    fn violations_lists_only_failing_rules() {
        let field = FieldSpec::new("food")
            .required()
            .validator(Validator::MaxLength(3));

        let violations = field.violations("Lasagne");

        assert_eq!(violations, vec![&Validator::MaxLength(3)]);
    }

    #[test]
    fn step_title_defaults_to_id() {
        let step = StepDefinition::new("identity");

        assert_eq!(step.display_title(), "identity");
    }

    #[test]
    fn find_field_by_name() {
        let step = StepDefinition::new("identity").field(FieldSpec::new("name").required());

        assert!(step.find_field("name").is_some());
        assert!(step.find_field("food").is_none());
    }

    #[test]
    fn step_id_serializes_as_plain_string() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&StepId::new("questions"))?;

        assert_eq!(json, "\"questions\"");
        Ok(())
    }
}

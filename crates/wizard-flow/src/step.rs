use wizard_core::{Result, StepData, StepDefinition, StepId, WizardError};

/// A step at runtime: its definition, the captured values and the cached
/// validity of those values.
#[derive(Debug, Clone)]
pub struct Step {
    definition: StepDefinition,
    data: StepData,
    valid: bool,
}

impl Step {
    pub(crate) fn new(definition: StepDefinition) -> Self {
        let data = definition
            .fields()
            .iter()
            .map(|field| (field.name().to_string(), String::new()))
            .collect();
        let mut step = Self {
            definition,
            data,
            valid: false,
        };
        step.revalidate();
        step
    }

    #[must_use]
    pub fn id(&self) -> &StepId {
        self.definition.id()
    }

    #[must_use]
    pub fn definition(&self) -> &StepDefinition {
        &self.definition
    }

    #[must_use]
    pub fn data(&self) -> &StepData {
        &self.data
    }

    #[must_use]
    pub fn value(&self, field: &str) -> Option<&str> {
        self.data.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Names of the fields whose current value fails a validator.
    #[must_use]
    pub fn failing_fields(&self) -> Vec<String> {
        self.definition
            .fields()
            .iter()
            .filter(|field| !field.accepts(self.value(field.name()).unwrap_or_default()))
            .map(|field| field.name().to_string())
            .collect()
    }

    pub(crate) fn set_value(&mut self, field: &str, value: String) -> Result<()> {
        let Some(slot) = self.data.get_mut(field) else {
            return Err(WizardError::UnknownField {
                step: self.id().clone(),
                field: field.to_string(),
            });
        };
        *slot = value;
        self.revalidate();
        Ok(())
    }

    fn revalidate(&mut self) {
        self.valid = self
            .definition
            .fields()
            .iter()
            .all(|field| field.accepts(self.value(field.name()).unwrap_or_default()));
    }
}

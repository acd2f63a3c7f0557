use std::fmt;

/// A rule a field value must satisfy.
///
/// Only [`Validator::Required`] rejects the empty value. The other rules
/// accept it so they can be combined with `Required` when a field is
/// mandatory, and left alone when it is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Validator {
    /// The value must not be empty. Whitespace counts as a value.
    Required,
    /// The value must have at least this many characters.
    MinLength(usize),
    /// The value must have at most this many characters.
    MaxLength(usize),
    /// The value must be one of the listed choices.
    OneOf(Vec<String>),
}

impl Validator {
    #[must_use]
    pub fn check(&self, value: &str) -> bool {
        match self {
            Self::Required => !value.is_empty(),
            _ if value.is_empty() => true,
            Self::MinLength(min) => value.chars().count() >= *min,
            Self::MaxLength(max) => value.chars().count() <= *max,
            Self::OneOf(choices) => choices.iter().any(|choice| choice == value),
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "a value is required"),
            Self::MinLength(min) => write!(f, "must be at least {min} characters"),
            Self::MaxLength(max) => write!(f, "must be at most {max} characters"),
            Self::OneOf(choices) => write!(f, "must be one of: {}", choices.join(", ")),
        }
    }
}

//! Core types shared by every wizard crate.
//!
//! A wizard is an ordered list of steps. Each step declares its fields and
//! the validators they must satisfy; the data captured from all steps is
//! combined into a [`Payload`] that is submitted as one unit.

pub mod error;
mod payload;
mod step;
mod submission;
mod validator;

pub use error::{Result, WizardError};
pub use payload::{Payload, StepData};
pub use step::{FieldSpec, StepDefinition, StepId};
pub use submission::{SubmissionFailure, SubmissionResult};
pub use validator::Validator;

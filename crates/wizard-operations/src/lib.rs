mod error;
pub mod operations;
pub mod registration;
mod session;
pub mod traits;

#[cfg(test)]
pub mod mocks;

pub use error::{OperationError, Result};
pub use session::{PendingSubmission, WizardEvent, WizardSession};

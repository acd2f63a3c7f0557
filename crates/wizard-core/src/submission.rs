use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// Outcome of one submission round trip.
///
/// A failed round trip is a value, not an error: the wizard stays usable
/// and the caller may resubmit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    /// The backend accepted the payload. Holds whatever it answered with.
    Accepted(Value),
    Failed(SubmissionFailure),
}

impl SubmissionResult {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    #[must_use]
    pub fn response(&self) -> Option<&Value> {
        match self {
            Self::Accepted(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&SubmissionFailure> {
        match self {
            Self::Accepted(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SubmissionFailure {
    #[error("backend rejected the submission with status {status}")]
    Rejected { status: u16, body: String },

    #[error("submission timed out after {}ms", .0.as_millis())]
    TimedOut(Duration),

    #[error("network error: {0}")]
    Network(String),
}

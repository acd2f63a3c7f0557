use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{info, warn};
use wizard_config::{ResubmissionPolicy, WizardConfig};
use wizard_core::{Payload, SubmissionFailure, SubmissionResult};

use crate::Result;
use crate::error::{GatewayError, TransportError};
use crate::transport::SubmissionTransport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GatewayOptions {
    timeout: Option<Duration>,
    resubmission: ResubmissionPolicy,
}

impl GatewayOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &WizardConfig) -> Self {
        Self {
            timeout: config.api().timeout(),
            resubmission: config.submission().resubmission(),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_resubmission(mut self, policy: ResubmissionPolicy) -> Self {
        self.resubmission = policy;
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    #[must_use]
    pub fn resubmission(&self) -> ResubmissionPolicy {
        self.resubmission
    }
}

/// Performs the submission round trip for one wizard session.
///
/// At most one submission is in flight at any time. The gateway itself
/// enforces this, so concurrent callers get
/// [`GatewayError::SubmissionInProgress`] rather than a duplicate request.
/// Backend and network failures come back as [`SubmissionResult::Failed`].
pub struct SubmissionGateway<T> {
    transport: T,
    options: GatewayOptions,
    in_flight: AtomicBool,
    succeeded: AtomicBool,
}

impl<T> SubmissionGateway<T>
where
    T: SubmissionTransport,
{
    pub fn new(transport: T, options: GatewayOptions) -> Self {
        Self {
            transport,
            options,
            in_flight: AtomicBool::new(false),
            succeeded: AtomicBool::new(false),
        }
    }

    /// Sends `payload` and reports the outcome.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::SubmissionInProgress` if another submission is
    /// pending, or `GatewayError::AlreadySubmitted` if a previous submission
    /// succeeded and the policy forbids resubmitting.
    pub async fn submit(&self, payload: &Payload) -> Result<SubmissionResult> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            warn!("rejected submission: another one is in flight");
            return Err(GatewayError::SubmissionInProgress);
        };

        if self.options.resubmission == ResubmissionPolicy::BlockAfterSuccess
            && self.succeeded.load(Ordering::Acquire)
        {
            return Err(GatewayError::AlreadySubmitted);
        }

        info!(steps = payload.len(), "submitting payload");
        let outcome = match self.options.timeout {
            Some(limit) => {
                match tokio::time::timeout(limit, self.transport.post_payload(payload)).await {
                    Ok(result) => result.map_err(|e| self.failure_from(e)),
                    Err(_) => Err(SubmissionFailure::TimedOut(limit)),
                }
            }
            None => self
                .transport
                .post_payload(payload)
                .await
                .map_err(|e| self.failure_from(e)),
        };

        match outcome {
            Ok(response) => {
                self.succeeded.store(true, Ordering::Release);
                info!("submission accepted");
                Ok(SubmissionResult::Accepted(response))
            }
            Err(failure) => {
                warn!(%failure, "submission failed");
                Ok(SubmissionResult::Failed(failure))
            }
        }
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// True once any submission has been accepted by the backend.
    #[must_use]
    pub fn has_succeeded(&self) -> bool {
        self.succeeded.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn options(&self) -> &GatewayOptions {
        &self.options
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn failure_from(&self, error: TransportError) -> SubmissionFailure {
        match error {
            TransportError::Status { status, body } => SubmissionFailure::Rejected { status, body },
            TransportError::Request(e) if e.is_timeout() => match self.options.timeout {
                Some(limit) => SubmissionFailure::TimedOut(limit),
                None => SubmissionFailure::Network(e.to_string()),
            },
            TransportError::Request(e) => SubmissionFailure::Network(e.to_string()),
            TransportError::Endpoint(e) => SubmissionFailure::Network(e.to_string()),
        }
    }
}

/// Holds the in-flight flag; clears it when dropped, including when the
/// submitting future is dropped before completion.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

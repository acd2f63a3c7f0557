use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use wizard_core::Payload;

use crate::error::TransportError;

/// The network side of the wizard: one write endpoint, one read endpoint.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Sends `payload` and returns the backend's answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend answers with a
    /// non-success status.
    async fn post_payload(&self, payload: &Payload) -> Result<Value, TransportError>;

    /// Reads the list of values offered by the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend answers with a
    /// non-success status, or the body is not a list of strings.
    async fn fetch_values(&self) -> Result<Vec<String>, TransportError>;
}

#[async_trait]
impl<T> SubmissionTransport for Arc<T>
where
    T: SubmissionTransport + ?Sized,
{
    async fn post_payload(&self, payload: &Payload) -> Result<Value, TransportError> {
        (**self).post_payload(payload).await
    }

    async fn fetch_values(&self) -> Result<Vec<String>, TransportError> {
        (**self).fetch_values().await
    }
}

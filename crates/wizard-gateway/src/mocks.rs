use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use wizard_core::Payload;

use crate::error::TransportError;
use crate::transport::SubmissionTransport;

/// Scripted in-memory transport.
///
/// Queued responses are returned in order; once the queue is empty every
/// post echoes the payload back as JSON.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    values: Vec<String>,
    delay: Option<Duration>,
    received: Mutex<Vec<Payload>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn respond_with(self, response: Result<Value, TransportError>) -> Self {
        self.responses
            .lock()
            .expect("responses mutex poisoned")
            .push_back(response);
        self
    }

    #[must_use]
    pub fn with_values(mut self, values: &[&str]) -> Self {
        self.values = values.iter().map(|v| (*v).to_string()).collect();
        self
    }

    /// Makes every post wait before answering.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Payloads received so far, in arrival order.
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn received(&self) -> Vec<Payload> {
        self.received
            .lock()
            .expect("received mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl SubmissionTransport for MockTransport {
    async fn post_payload(&self, payload: &Payload) -> Result<Value, TransportError> {
        self.received
            .lock()
            .expect("received mutex poisoned")
            .push(payload.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self
            .responses
            .lock()
            .expect("responses mutex poisoned")
            .pop_front();
        scripted.unwrap_or_else(|| Ok(serde_json::to_value(payload).unwrap_or(Value::Null)))
    }

    async fn fetch_values(&self) -> Result<Vec<String>, TransportError> {
        Ok(self.values.clone())
    }
}

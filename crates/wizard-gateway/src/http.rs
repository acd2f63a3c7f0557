use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use wizard_config::ApiConfig;
use wizard_core::Payload;

use crate::error::TransportError;
use crate::transport::SubmissionTransport;

/// [`SubmissionTransport`] over HTTP: `POST` for the payload, `GET` for
/// the values list.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    submit_url: String,
    values_url: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new(submit_url: impl Into<String>, values_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            submit_url: submit_url.into(),
            values_url: values_url.into(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the endpoint URLs cannot be built or the HTTP
    /// client cannot be constructed.
    pub fn from_config(api: &ApiConfig) -> Result<Self, TransportError> {
        let submit_url = api.submit_url()?;
        let values_url = api.values_url()?;

        let mut builder = Client::builder();
        if let Some(timeout) = api.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            submit_url: submit_url.into(),
            values_url: values_url.into(),
        })
    }

    #[must_use]
    pub fn submit_url(&self) -> &str {
        &self.submit_url
    }

    #[must_use]
    pub fn values_url(&self) -> &str {
        &self.values_url
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn post_payload(&self, payload: &Payload) -> Result<Value, TransportError> {
        debug!(url = %self.submit_url, "posting payload");
        let response = self
            .client
            .post(&self.submit_url)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(parse_response_body(&body))
    }

    async fn fetch_values(&self) -> Result<Vec<String>, TransportError> {
        debug!(url = %self.values_url, "fetching values");
        let response = self.client.get(&self.values_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Vec<String>>().await?)
    }
}

/// The backend's answer is opaque: JSON when it parses, the raw text
/// otherwise, `null` when empty.
fn parse_response_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

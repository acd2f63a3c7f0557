use tracing::debug;

use crate::Result;
use crate::error::GatewayError;
use crate::transport::SubmissionTransport;

/// Read side of the backend: the list of values it offers.
pub struct ValuesService<T> {
    transport: T,
}

impl<T> ValuesService<T>
where
    T: SubmissionTransport,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// # Errors
    ///
    /// Returns `GatewayError::Values` if the backend cannot be reached or
    /// answers with anything but a list of strings.
    pub async fn fetch_values(&self) -> Result<Vec<String>> {
        let values = self
            .transport
            .fetch_values()
            .await
            .map_err(GatewayError::Values)?;
        debug!(count = values.len(), "fetched values");
        Ok(values)
    }
}

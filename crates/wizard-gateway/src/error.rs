use thiserror::Error;

/// Failure of a single HTTP exchange.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed")]
    Request(#[from] reqwest::Error),

    #[error("backend responded with status {status}")]
    Status { status: u16, body: String },

    #[error("invalid endpoint URL")]
    Endpoint(#[from] wizard_config::ConfigError),
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("a submission is already in progress")]
    SubmissionInProgress,

    #[error("the wizard has already been submitted successfully")]
    AlreadySubmitted,

    #[error("failed to fetch values")]
    Values(#[source] TransportError),

    #[error("failed to build HTTP client")]
    Client(#[source] TransportError),
}

//! Submission round trip for wizard payloads.
//!
//! [`SubmissionGateway`] posts an assembled [`wizard_core::Payload`] through a
//! [`SubmissionTransport`] and turns the outcome into a
//! [`wizard_core::SubmissionResult`]. It permits one submission in flight at a
//! time, applies the configured timeout and resubmission policy, and never
//! touches wizard state.

mod error;
mod gateway;
mod http;
mod transport;
mod values;

#[cfg(any(test, feature = "testing"))]
pub mod mocks;

pub use error::{GatewayError, TransportError};
pub use gateway::{GatewayOptions, SubmissionGateway};
pub use http::HttpTransport;
pub use transport::SubmissionTransport;
pub use values::ValuesService;

pub type Result<T> = std::result::Result<T, GatewayError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Wizard(#[from] wizard_core::WizardError),

    #[error(transparent)]
    Gateway(#[from] wizard_gateway::GatewayError),

    #[error("operation cancelled")]
    Cancelled,

    #[error("interaction required but no answer was available")]
    InteractionRequired,

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OperationError>;

use thiserror::Error;

use crate::environment::NonInteractiveReason;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error")]
    Config(#[from] wizard_config::ConfigError),

    #[error("invalid wizard definition")]
    Wizard(#[from] wizard_core::WizardError),

    #[error("registration failed")]
    Operation(#[from] wizard_operations::OperationError),

    #[error("backend request failed")]
    Gateway(#[from] wizard_gateway::GatewayError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("interactive mode requires a terminal ({0})")]
    NotATty(NonInteractiveReason),
}

pub type Result<T> = std::result::Result<T, CliError>;

use std::sync::Arc;

use tracing::{debug, info};
use wizard_config::WizardConfig;
use wizard_gateway::{GatewayError, GatewayOptions, HttpTransport, SubmissionGateway};
use wizard_operations::WizardSession;
use wizard_operations::operations::{RegisterOperation, RegisterOutcome};
use wizard_operations::registration::registration_wizard;

use crate::environment::non_interactive_reason;
use crate::error::{CliError, Result};
use crate::interaction::TerminalInteractionProvider;

pub(super) async fn run(config: &WizardConfig) -> Result<()> {
    if let Some(reason) = non_interactive_reason() {
        return Err(CliError::NotATty(reason));
    }

    let transport = HttpTransport::from_config(config.api()).map_err(GatewayError::Client)?;
    info!(url = transport.submit_url(), "registering");
    let gateway = Arc::new(SubmissionGateway::new(
        transport,
        GatewayOptions::from_config(config),
    ));
    let mut session = WizardSession::new(registration_wizard()?, gateway);

    let operation = RegisterOperation::new(TerminalInteractionProvider);
    let outcome = operation.execute(&mut session).await?;
    let transitions = session.state().transitions();
    debug!(
        elapsed = ?transitions.elapsed(),
        "navigation:\n{}",
        transitions.summary()
    );

    match outcome {
        RegisterOutcome::Submitted { response, .. } => {
            println!();
            println!("Registration submitted.");
            if !response.is_null() {
                println!("Response: {response}");
            }
        }
        RegisterOutcome::Cancelled => {
            println!();
            println!("Registration cancelled.");
        }
    }
    Ok(())
}

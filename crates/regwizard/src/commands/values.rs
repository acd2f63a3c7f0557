use wizard_config::WizardConfig;
use wizard_gateway::{GatewayError, HttpTransport, ValuesService};

use crate::error::Result;

pub(super) async fn run(config: &WizardConfig) -> Result<()> {
    let transport = HttpTransport::from_config(config.api()).map_err(GatewayError::Client)?;
    let values = ValuesService::new(transport).fetch_values().await?;

    for value in values {
        println!("{value}");
    }
    Ok(())
}

mod register;
mod values;

use clap::Subcommand;
use wizard_config::WizardConfig;

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Walk through the registration wizard and submit it
    Register,
    /// Print the values offered by the backend, one per line
    Values,
}

impl Commands {
    pub(crate) async fn execute(self, config: &WizardConfig) -> Result<()> {
        match self {
            Self::Register => register::run(config).await,
            Self::Values => values::run(config).await,
        }
    }
}

mod commands;
mod environment;
mod error;
mod interaction;
mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use wizard_config::WizardConfig;

use crate::commands::Commands;
use crate::error::{CliError, Result};

#[derive(Parser)]
#[command(name = "regwizard")]
#[command(about = "Register through a multi-step wizard", long_about = None)]
struct Cli {
    /// Configuration file (default: regwizard.toml in the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the registration API, overriding the configuration
    #[arg(long = "api-url", global = true)]
    api_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match resolve_config(cli.config.as_deref(), cli.api_url.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = cli.command.execute(&config).await {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn resolve_config(path: Option<&Path>, api_url: Option<&str>) -> Result<WizardConfig> {
    let config = match path {
        Some(path) => wizard_config::load_config(path)?,
        None => {
            let cwd = std::env::current_dir().map_err(CliError::CurrentDir)?;
            wizard_config::discover_config(&cwd)?
        }
    };

    let mut config = config.with_env_overrides(|name| std::env::var(name).ok())?;
    if let Some(url) = api_url {
        config = config.with_api_url(url)?;
    }

    debug!(
        source = ?config.source(),
        url = config.api().url(),
        "configuration resolved"
    );
    Ok(config)
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}

mod config;
mod error;
mod raw;

pub const DEFAULT_CONFIG_FILE: &str = "regwizard.toml";
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/";
pub const DEFAULT_SUBMIT_PATH: &str = "values";
pub const DEFAULT_VALUES_PATH: &str = "values";
pub const API_URL_ENV_VAR: &str = "REGWIZARD_API_URL";

pub use config::{
    ApiConfig, ResubmissionPolicy, SubmissionConfig, WizardConfig, discover_config, load_config,
    parse_config,
};
pub use error::ConfigError;

pub type Result<T> = std::result::Result<T, ConfigError>;

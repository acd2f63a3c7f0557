use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::ConfigError;
use crate::raw::{RawConfig, ResubmissionValue};
use crate::{
    API_URL_ENV_VAR, DEFAULT_API_URL, DEFAULT_CONFIG_FILE, DEFAULT_SUBMIT_PATH,
    DEFAULT_VALUES_PATH,
};

/// Whether a session may submit again after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResubmissionPolicy {
    /// Resubmit any number of times; only one submission may be in flight.
    #[default]
    Allow,
    /// Reject every submission after the first successful one.
    BlockAfterSuccess,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    url: String,
    submit_path: String,
    values_path: String,
    timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            submit_path: DEFAULT_SUBMIT_PATH.to_string(),
            values_path: DEFAULT_VALUES_PATH.to_string(),
            timeout: None,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn submit_path(&self) -> &str {
        &self.submit_path
    }

    #[must_use]
    pub fn values_path(&self) -> &str {
        &self.values_path
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Full URL the payload is posted to.
    ///
    /// # Errors
    ///
    /// Returns an error if the submit path does not form a valid URL.
    pub fn submit_url(&self) -> Result<Url, ConfigError> {
        endpoint(&self.url, &self.submit_path)
    }

    /// Full URL the values list is read from.
    ///
    /// # Errors
    ///
    /// Returns an error if the values path does not form a valid URL.
    pub fn values_url(&self) -> Result<Url, ConfigError> {
        endpoint(&self.url, &self.values_path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmissionConfig {
    resubmission: ResubmissionPolicy,
}

impl SubmissionConfig {
    #[must_use]
    pub fn resubmission(&self) -> ResubmissionPolicy {
        self.resubmission
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardConfig {
    api: ApiConfig,
    submission: SubmissionConfig,
    source: Option<PathBuf>,
}

impl WizardConfig {
    #[must_use]
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    #[must_use]
    pub fn submission(&self) -> &SubmissionConfig {
        &self.submission
    }

    /// File the configuration was read from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Replaces the API base URL. The stored URL is normalized, so
    /// `HTTPS://Example.org` is kept as `https://example.org/`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidApiUrl` if `url` does not parse, or
    /// `ConfigError::UnsupportedScheme` if it is not http(s).
    pub fn with_api_url(mut self, url: impl AsRef<str>) -> Result<Self, ConfigError> {
        self.api.url = parse_api_url(url.as_ref())?.into();
        Ok(self)
    }

    /// Applies environment overrides, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the overriding URL is invalid or not http(s).
    pub fn with_env_overrides<F>(self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_URL_ENV_VAR) {
            Some(url) if !url.trim().is_empty() => {
                debug!(%url, "API URL overridden from environment");
                self.with_api_url(url)
            }
            _ => Ok(self),
        }
    }
}

/// Parses a configuration file's contents. `path` is used for error
/// reporting and recorded as the configuration source.
///
/// # Errors
///
/// Returns an error if the TOML is malformed, has unknown keys, or holds
/// invalid values.
pub fn parse_config(contents: &str, path: &Path) -> Result<WizardConfig, ConfigError> {
    let raw: RawConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let defaults = ApiConfig::default();
    let api = match raw.api {
        None => defaults,
        Some(section) => {
            let url = match section.url {
                Some(url) => parse_api_url(&url)?.into(),
                None => defaults.url,
            };
            let timeout = match section.timeout_ms {
                Some(0) => return Err(ConfigError::ZeroTimeout),
                Some(ms) => Some(Duration::from_millis(ms)),
                None => None,
            };
            ApiConfig {
                url,
                submit_path: section.submit_path.unwrap_or(defaults.submit_path),
                values_path: section.values_path.unwrap_or(defaults.values_path),
                timeout,
            }
        }
    };

    let resubmission = raw
        .submission
        .and_then(|section| section.resubmission)
        .map_or_else(ResubmissionPolicy::default, |value| match value {
            ResubmissionValue::Allow => ResubmissionPolicy::Allow,
            ResubmissionValue::BlockAfterSuccess => ResubmissionPolicy::BlockAfterSuccess,
        });

    Ok(WizardConfig {
        api,
        submission: SubmissionConfig { resubmission },
        source: Some(path.to_path_buf()),
    })
}

/// Loads the configuration file at `path`, which must exist.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<WizardConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded config file");
    parse_config(&contents, path)
}

/// Loads `regwizard.toml` from `dir` if present, defaults otherwise.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn discover_config(dir: &Path) -> Result<WizardConfig, ConfigError> {
    let path = dir.join(DEFAULT_CONFIG_FILE);
    if path.is_file() {
        load_config(&path)
    } else {
        debug!(dir = %dir.display(), "no config file found, using defaults");
        Ok(WizardConfig::default())
    }
}

fn parse_api_url(url: &str) -> Result<Url, ConfigError> {
    let parsed = Url::parse(url).map_err(|source| ConfigError::InvalidApiUrl {
        url: url.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(ConfigError::UnsupportedScheme {
            url: url.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

/// Joins `path` below `base`, treating `base` as a directory even without
/// a trailing slash and `path` as relative even with a leading one.
fn endpoint(base: &str, path: &str) -> Result<Url, ConfigError> {
    let mut base = parse_api_url(base)?;
    if !base.path().ends_with('/') {
        let directory = format!("{}/", base.path());
        base.set_path(&directory);
    }

    base.join(path.trim_start_matches('/'))
        .map_err(|source| ConfigError::InvalidEndpoint {
            path: path.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn parse(contents: &str) -> Result<WizardConfig, ConfigError> {
        parse_config(contents, Path::new("regwizard.toml"))
    }

    #[test]
    fn empty_file_yields_defaults() -> anyhow::Result<()> {
        let config = parse("")?;

        assert_eq!(config.api(), &ApiConfig::default());
        assert_eq!(config.submission().resubmission(), ResubmissionPolicy::Allow);
        assert_eq!(config.source(), Some(Path::new("regwizard.toml")));
        Ok(())
    }

    #[test]
    fn parses_all_keys() -> anyhow::Result<()> {
        let config = parse(
            r#"
[api]
url = "https://example.org/api"
submit-path = "register"
values-path = "/foods"
timeout-ms = 2500

[submission]
resubmission = "block-after-success"
"#,
        )?;

        assert_eq!(config.api().url(), "https://example.org/api");
        assert_eq!(
            config.api().submit_url()?.as_str(),
            "https://example.org/api/register"
        );
        assert_eq!(
            config.api().values_url()?.as_str(),
            "https://example.org/api/foods"
        );
        assert_eq!(config.api().timeout(), Some(Duration::from_millis(2500)));
        assert_eq!(
            config.submission().resubmission(),
            ResubmissionPolicy::BlockAfterSuccess
        );
        Ok(())
    }

    #[test]
    fn default_urls_join_without_double_slash() -> anyhow::Result<()> {
        let api = ApiConfig::default();

        assert_eq!(api.submit_url()?.as_str(), "http://localhost:5000/api/values");
        assert_eq!(api.values_url()?.as_str(), "http://localhost:5000/api/values");
        Ok(())
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = parse("[api]\nendpoint = \"http://x\"\n");

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn rejects_non_http_url() {
        let result = parse("[api]\nurl = \"ftp://example.org\"\n");

        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedScheme { ref scheme, .. }) if scheme == "ftp"
        ));
    }

    #[test]
    fn rejects_bare_scheme() {
        let result = parse("[api]\nurl = \"http://\"\n");

        assert!(matches!(
            result,
            Err(ConfigError::InvalidApiUrl { ref url, .. }) if url == "http://"
        ));
    }

    #[test]
    fn rejects_host_with_space() {
        let result = WizardConfig::default().with_api_url("http://exa mple.org");

        assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
    }

    #[test]
    fn accepts_upper_case_scheme_and_normalizes_it() -> anyhow::Result<()> {
        let config = parse("[api]\nurl = \"HTTPS://example.org/api/\"\n")?;

        assert_eq!(config.api().url(), "https://example.org/api/");
        assert_eq!(
            config.api().submit_url()?.as_str(),
            "https://example.org/api/values"
        );
        Ok(())
    }

    #[test]
    fn invalid_url_error_keeps_parse_cause() {
        let result = WizardConfig::default().with_api_url("http://");

        let err = result.expect_err("bare scheme must be rejected");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn rejects_zero_timeout() {
        let result = parse("[api]\ntimeout-ms = 0\n");

        assert!(matches!(result, Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn rejects_unknown_resubmission_policy() {
        let result = parse("[submission]\nresubmission = \"never\"\n");

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn env_override_replaces_url() -> anyhow::Result<()> {
        let config = WizardConfig::default().with_env_overrides(|name| {
            (name == API_URL_ENV_VAR).then(|| "https://staging.example.org/api/".to_string())
        })?;

        assert_eq!(config.api().url(), "https://staging.example.org/api/");
        Ok(())
    }

    #[test]
    fn blank_env_override_is_ignored() -> anyhow::Result<()> {
        let config = WizardConfig::default().with_env_overrides(|_| Some("  ".to_string()))?;

        assert_eq!(config.api().url(), DEFAULT_API_URL);
        Ok(())
    }

    #[test]
    fn invalid_env_override_is_an_error() {
        let result =
            WizardConfig::default().with_env_overrides(|_| Some("not a url".to_string()));

        assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
    }

    #[test]
    fn discover_uses_defaults_without_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let config = discover_config(dir.path())?;

        assert_eq!(config, WizardConfig::default());
        assert!(config.source().is_none());
        Ok(())
    }

    #[test]
    fn discover_reads_file_in_directory() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[api]\nurl = \"http://127.0.0.1:9000/\"\n",
        )?;

        let config = discover_config(dir.path())?;

        assert_eq!(config.api().url(), "http://127.0.0.1:9000/");
        Ok(())
    }

    #[test]
    fn load_missing_file_reports_path() {
        let result = load_config(Path::new("/definitely/not/here/regwizard.toml"));

        match result {
            Err(ConfigError::Read { path, .. }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here/regwizard.toml"));
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }
}

use std::fmt;
use std::io::IsTerminal;

pub(crate) const NO_TTY_ENV_VAR: &str = "REGWIZARD_NO_TTY";
pub(crate) const FORCE_TTY_ENV_VAR: &str = "REGWIZARD_FORCE_TTY";

const CI_ENV_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
    "TF_BUILD",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonInteractiveReason {
    ExplicitDisable,
    CiDetected { env_var: String },
    NoTerminal,
}

impl fmt::Display for NonInteractiveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitDisable => write!(f, "{NO_TTY_ENV_VAR} is set"),
            Self::CiDetected { env_var } => write!(f, "CI detected via {env_var}"),
            Self::NoTerminal => write!(f, "stdin is not a terminal"),
        }
    }
}

pub(crate) fn non_interactive_reason() -> Option<NonInteractiveReason> {
    if std::env::var(NO_TTY_ENV_VAR).is_ok() {
        return Some(NonInteractiveReason::ExplicitDisable);
    }

    if std::env::var(FORCE_TTY_ENV_VAR).is_ok() {
        return None;
    }

    if let Some(env_var) = detect_ci_env_var() {
        return Some(NonInteractiveReason::CiDetected { env_var });
    }

    if !std::io::stdin().is_terminal() {
        return Some(NonInteractiveReason::NoTerminal);
    }

    None
}

fn detect_ci_env_var() -> Option<String> {
    CI_ENV_VARS
        .iter()
        .find(|var| std::env::var(var).is_ok())
        .map(|var| (*var).to_string())
}

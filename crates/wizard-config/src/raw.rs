use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawConfig {
    pub(crate) api: Option<RawApiSection>,
    pub(crate) submission: Option<RawSubmissionSection>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct RawApiSection {
    pub(crate) url: Option<String>,
    pub(crate) submit_path: Option<String>,
    pub(crate) values_path: Option<String>,
    pub(crate) timeout_ms: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct RawSubmissionSection {
    pub(crate) resubmission: Option<ResubmissionValue>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ResubmissionValue {
    Allow,
    BlockAfterSuccess,
}

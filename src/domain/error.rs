use std::io;

use chrono::NaiveDate;
use thiserror::Error;

/// Library-wide error type for mmsw operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Calendar date string could not be parsed.
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Period start lies after its end.
    #[error("Invalid period: start {start} is after end {end}")]
    PeriodOrder { start: NaiveDate, end: NaiveDate },

    /// Workflow name is not a valid identifier.
    #[error("Invalid workflow name '{0}': must be alphanumeric with hyphens or underscores")]
    InvalidWorkflowName(String),

    /// Usecase config is not a plain settings-file name.
    #[error("Invalid usecase config '{0}': must be a plain file name ending in .xml")]
    InvalidUsecaseConfig(String),

    /// Host entry could not be parsed.
    #[error("Invalid host entry '{0}': expected 'host:tasks' with tasks >= 1")]
    InvalidHost(String),

    /// Run declares no hosts at all.
    #[error("Host list must declare at least one host")]
    EmptyHostList,

    /// Workflow is not launchable yet.
    #[error("Workflow '{name}' has no {what} configured")]
    MissingParameter { name: String, what: &'static str },

    /// Run spec file could not be read.
    #[error("Failed to read run spec {path}: {details}")]
    SpecRead { path: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON encoding error.
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// External post-processing tool failed.
    #[error("Post-processing tool failed running '{command}': {details}")]
    Tool { command: String, details: String },
}

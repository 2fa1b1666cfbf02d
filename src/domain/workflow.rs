use std::fmt::{self, Display};
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use super::identifiers::{is_valid_identifier, is_valid_settings_file_name};
use super::{AppError, Period};

/// A validated workflow identifier.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, or `_`
/// - No path traversal components (/, \, ., ..)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WorkflowName(String);

impl WorkflowName {
    /// Validate and create a new workflow name.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if is_valid_identifier(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidWorkflowName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for WorkflowName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for WorkflowName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        WorkflowName::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A validated usecase settings-file name, resolved by the external tool
/// against the workflow's config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsecaseConfigName(String);

impl UsecaseConfigName {
    /// Validate and create a new usecase config file name.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if is_valid_settings_file_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidUsecaseConfig(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UsecaseConfigName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for UsecaseConfigName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UsecaseConfigName::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A named, versioned processing job bound to a configuration directory.
///
/// Input directory, usecase config and period are configured via setters
/// after construction; the workflow becomes launchable once all three are
/// set.
#[derive(Debug, Clone)]
pub struct Workflow {
    name: WorkflowName,
    version: u32,
    config_dir: PathBuf,
    input_dir: Option<PathBuf>,
    usecase_config: Option<UsecaseConfigName>,
    period: Option<Period>,
}

impl Workflow {
    pub fn new(name: WorkflowName, version: u32, config_dir: PathBuf) -> Self {
        Self { name, version, config_dir, input_dir: None, usecase_config: None, period: None }
    }

    pub fn name(&self) -> &WorkflowName {
        &self.name
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// Configure the directory holding the data to process.
    pub fn set_input_dir(&mut self, path: PathBuf) {
        self.input_dir = Some(path);
    }

    /// Configure the usecase settings file selecting the processing rules.
    pub fn set_usecase_config(&mut self, name: UsecaseConfigName) {
        self.usecase_config = Some(name);
    }

    /// Bind the temporal scope of the run.
    pub fn set_period(&mut self, period: Period) {
        self.period = Some(period);
    }

    /// Collapse the workflow into the complete parameter set handed to the
    /// external entry point, naming the first missing piece otherwise.
    pub fn launch_parameters(&self) -> Result<LaunchParameters, AppError> {
        let missing = |what| AppError::MissingParameter { name: self.name.to_string(), what };

        let input_dir = self.input_dir.clone().ok_or_else(|| missing("input directory"))?;
        let usecase_config =
            self.usecase_config.clone().ok_or_else(|| missing("usecase config"))?;
        let period = self.period.ok_or_else(|| missing("period"))?;

        Ok(LaunchParameters {
            name: self.name.clone(),
            version: self.version,
            config_dir: self.config_dir.clone(),
            input_dir,
            usecase_config,
            period,
        })
    }
}

/// Fully-configured parameters for one post-processing invocation.
#[derive(Debug, Clone)]
pub struct LaunchParameters {
    pub name: WorkflowName,
    pub version: u32,
    pub config_dir: PathBuf,
    pub input_dir: PathBuf,
    pub usecase_config: UsecaseConfigName,
    pub period: Period,
}

//! Run spec: the complete configuration of one post-processing run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AppError, HostList, Period, UsecaseConfigName, WorkflowName};

/// The run this driver was originally written for: post-processing of the
/// drifter / AMSR-E (Aqua) SST matchup data, usecase 06s.
const SST_DRIFTER_SPEC: &str = r#"
hosts = ["localhost:24"]

[workflow]
name = "post_process_sst_drifter"
version = 7
config_dir = "/group_workspaces/cems2/esacci_sst/mms_new/config"
input_dir = "/group_workspaces/cems2/esacci_sst/mms_new/mmd/mmd06c/drifter-sst_amsre-aq"
usecase_config = "usecase-06s-pp.xml"

[period]
start = "2002-06-01"
end = "2011-10-07"
"#;

/// Workflow parameters of a run spec.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WorkflowSpec {
    /// Workflow name, also the job name under which the run is tracked.
    pub name: WorkflowName,
    /// Usecase revision of the workflow.
    pub version: u32,
    /// Configuration root resolved by the external tool.
    pub config_dir: PathBuf,
    /// Directory holding the matchup data to post-process.
    pub input_dir: PathBuf,
    /// Settings file selecting the processing rules, relative to `config_dir`.
    pub usecase_config: UsecaseConfigName,
}

/// Configuration for one post-processing run, either the built-in preset or
/// loaded from a TOML run spec file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RunSpec {
    pub workflow: WorkflowSpec,
    pub period: Period,
    pub hosts: HostList,
}

impl RunSpec {
    /// The built-in SST drifter run.
    pub fn sst_drifter() -> Result<Self, AppError> {
        Self::parse_toml(SST_DRIFTER_SPEC)
    }

    /// Parse and validate a run spec from TOML text.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a run spec from a TOML file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::SpecRead {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        Self::parse_toml(&content)
    }
}

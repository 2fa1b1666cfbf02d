use serde::Serialize;

use crate::domain::{AppError, Host, LaunchParameters};

/// Seam to the external workflow library that owns the actual
/// post-processing: job scheduling across the declared hosts, config
/// parsing, file discovery. The driver invokes this exactly once per run.
pub trait ProcessingRunner {
    fn run_post_processing(
        &self,
        params: &LaunchParameters,
        hosts: &[Host],
    ) -> Result<RunReport, AppError>;
}

/// What the driver can truthfully report about a delegated run: the command
/// line it handed to the external tool and whether it was executed.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Full argv of the launcher invocation.
    pub command: Vec<String>,
    /// False for dry runs, where the command is constructed but not spawned.
    pub launched: bool,
}

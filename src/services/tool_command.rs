use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::{AppError, Host, LaunchParameters};
use crate::ports::{ProcessingRunner, RunReport};

/// Default name of the external launcher, expected on `PATH`.
pub const DEFAULT_TOOL: &str = "post-processing-run.sh";

/// Production runner that delegates to the external post-processing launcher
/// as a subprocess and propagates its exit status.
#[derive(Debug, Clone)]
pub struct ToolCommandRunner {
    tool: PathBuf,
    dry_run: bool,
}

impl ToolCommandRunner {
    pub fn new(tool: PathBuf) -> Self {
        Self { tool, dry_run: false }
    }

    /// Construct the command without spawning it.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Build the launcher argv for one run.
///
/// Flags and the `yyyy-DDD` date syntax follow the post-processing tool's
/// command line; the host list rides along as a single comma-joined
/// argument for the external scheduler.
pub fn launch_command(tool: &Path, params: &LaunchParameters, hosts: &[Host]) -> Vec<String> {
    let hosts_arg = hosts.iter().map(Host::to_string).collect::<Vec<_>>().join(",");
    vec![
        tool.display().to_string(),
        "-c".to_string(),
        params.config_dir.display().to_string(),
        "-start".to_string(),
        params.period.start_ordinal(),
        "-end".to_string(),
        params.period.end_ordinal(),
        "-i".to_string(),
        params.input_dir.display().to_string(),
        "-j".to_string(),
        params.usecase_config.as_str().to_string(),
        "-hosts".to_string(),
        hosts_arg,
    ]
}

impl ProcessingRunner for ToolCommandRunner {
    fn run_post_processing(
        &self,
        params: &LaunchParameters,
        hosts: &[Host],
    ) -> Result<RunReport, AppError> {
        let command = launch_command(&self.tool, params, hosts);
        if self.dry_run {
            return Ok(RunReport { command, launched: false });
        }

        let tool_error = |details: String| AppError::Tool { command: command.join(" "), details };

        // Stdout/stderr stay inherited: the external tool owns its own reporting.
        let status = Command::new(&command[0])
            .args(&command[1..])
            .status()
            .map_err(|e| tool_error(e.to_string()))?;

        if !status.success() {
            return Err(tool_error(format!("exited with {}", status)));
        }

        Ok(RunReport { command, launched: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Period, UsecaseConfigName, WorkflowName};

    fn params() -> LaunchParameters {
        LaunchParameters {
            name: WorkflowName::new("post_process_sst_drifter").unwrap(),
            version: 7,
            config_dir: PathBuf::from("/mms/config"),
            input_dir: PathBuf::from("/mms/mmd/mmd06c/drifter-sst_amsre-aq"),
            usecase_config: UsecaseConfigName::new("usecase-06s-pp.xml").unwrap(),
            period: Period::new("2002-06-01", "2011-10-07").unwrap(),
        }
    }

    #[test]
    fn command_carries_all_launch_parameters() {
        let hosts = vec![Host::parse("localhost:24").unwrap()];
        let command = launch_command(Path::new(DEFAULT_TOOL), &params(), &hosts);
        assert_eq!(
            command,
            vec![
                "post-processing-run.sh",
                "-c",
                "/mms/config",
                "-start",
                "2002-152",
                "-end",
                "2011-280",
                "-i",
                "/mms/mmd/mmd06c/drifter-sst_amsre-aq",
                "-j",
                "usecase-06s-pp.xml",
                "-hosts",
                "localhost:24",
            ]
        );
    }

    #[test]
    fn multiple_hosts_are_comma_joined() {
        let hosts = vec![Host::parse("lotus1:12").unwrap(), Host::parse("lotus2:8").unwrap()];
        let command = launch_command(Path::new("pp.sh"), &params(), &hosts);
        assert_eq!(command.last().unwrap(), "lotus1:12,lotus2:8");
    }

    #[test]
    fn dry_run_does_not_spawn() {
        let runner = ToolCommandRunner::new(PathBuf::from("/definitely/not/a/tool")).dry_run(true);
        let hosts = vec![Host::parse("localhost:24").unwrap()];
        let report = runner.run_post_processing(&params(), &hosts).unwrap();
        assert!(!report.launched);
        assert_eq!(report.command[0], "/definitely/not/a/tool");
    }

    #[test]
    fn missing_tool_maps_to_tool_error() {
        let runner = ToolCommandRunner::new(PathBuf::from("/definitely/not/a/tool"));
        let hosts = vec![Host::parse("localhost:24").unwrap()];
        let err = runner.run_post_processing(&params(), &hosts).unwrap_err();
        assert!(matches!(err, AppError::Tool { .. }));
    }
}

//! mmsw: configure and launch MMS post-processing workflow runs.
//!
//! The driver owns parameter construction only: the temporal scope, the
//! workflow descriptor and the host/worker topology. The actual
//! post-processing (job scheduling across hosts, config parsing, file
//! discovery) is delegated to the external launcher tool.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use app::{
    AppContext,
    commands::{post_process, show_spec},
};
use services::ToolCommandRunner;

pub use app::commands::OutputFormat;
pub use domain::{AppError, RunSpec};
pub use ports::RunReport;

/// Options for a post-processing run.
#[derive(Debug, Clone, Default)]
pub struct PostProcessOptions {
    /// Run spec TOML file; the built-in SST drifter run when absent.
    pub spec: Option<PathBuf>,
    /// External launcher executable; `post-processing-run.sh` when absent.
    pub tool: Option<PathBuf>,
    /// Construct and print the launcher command without executing it.
    pub dry_run: bool,
    pub format: OutputFormat,
}

/// Configure a workflow run and hand it to the external post-processing
/// entry point.
pub fn post_process(options: &PostProcessOptions) -> Result<RunReport, AppError> {
    let spec = load_spec(options.spec.as_deref())?;
    let tool =
        options.tool.clone().unwrap_or_else(|| PathBuf::from(services::DEFAULT_TOOL));
    let ctx = AppContext::new(ToolCommandRunner::new(tool).dry_run(options.dry_run));

    let report = post_process::execute(&ctx, &spec)?;
    match options.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            if report.launched {
                println!("✅ Post-processing run '{}' completed", spec.workflow.name);
            } else {
                println!("Would launch: {}", report.command.join(" "));
            }
        }
    }
    Ok(report)
}

/// Print the effective run spec without launching anything.
pub fn show_spec(spec: Option<&Path>, format: OutputFormat) -> Result<(), AppError> {
    let spec = load_spec(spec)?;
    print!("{}", show_spec::render(&spec, format)?);
    Ok(())
}

fn load_spec(path: Option<&Path>) -> Result<RunSpec, AppError> {
    match path {
        Some(path) => RunSpec::load(path),
        None => RunSpec::sst_drifter(),
    }
}

//! Render the effective run spec for operator inspection.

use std::fmt::Write;

use crate::app::commands::OutputFormat;
use crate::domain::{AppError, RunSpec};

pub fn render(spec: &RunSpec, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(spec)?),
        OutputFormat::Text => {
            let hosts = spec
                .hosts
                .as_slice()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");

            let mut out = String::new();
            let _ = writeln!(
                out,
                "workflow:       {} (v{})",
                spec.workflow.name, spec.workflow.version
            );
            let _ = writeln!(out, "config dir:     {}", spec.workflow.config_dir.display());
            let _ = writeln!(out, "input dir:      {}", spec.workflow.input_dir.display());
            let _ = writeln!(out, "usecase config: {}", spec.workflow.usecase_config);
            let _ = writeln!(out, "period:         {}", spec.period);
            let _ = writeln!(out, "hosts:          {}", hosts);
            Ok(out)
        }
    }
}

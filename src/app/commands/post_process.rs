//! Configure a workflow from a run spec and hand it to the external
//! post-processing entry point.

use crate::app::AppContext;
use crate::domain::{AppError, RunSpec, Workflow};
use crate::ports::{ProcessingRunner, RunReport};

/// Build the workflow from the run spec and launch it.
///
/// The runner is invoked exactly once; the driver performs no retries and
/// no further calls afterwards.
pub fn execute<R: ProcessingRunner>(
    ctx: &AppContext<R>,
    spec: &RunSpec,
) -> Result<RunReport, AppError> {
    let mut workflow = Workflow::new(
        spec.workflow.name.clone(),
        spec.workflow.version,
        spec.workflow.config_dir.clone(),
    );
    workflow.set_input_dir(spec.workflow.input_dir.clone());
    workflow.set_usecase_config(spec.workflow.usecase_config.clone());
    workflow.set_period(spec.period);

    let params = workflow.launch_parameters()?;
    ctx.runner().run_post_processing(&params, spec.hosts.as_slice())
}

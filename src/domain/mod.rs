//! Value types describing a post-processing run.

mod error;
mod hosts;
mod identifiers;
mod period;
mod run_spec;
mod workflow;

pub use error::AppError;
pub use hosts::{Host, HostList};
pub use period::Period;
pub use run_spec::{RunSpec, WorkflowSpec};
pub use workflow::{LaunchParameters, UsecaseConfigName, Workflow, WorkflowName};

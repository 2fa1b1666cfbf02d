//! Test doubles shared by unit tests.

use std::cell::RefCell;

use crate::domain::{AppError, Host, LaunchParameters};
use crate::ports::{ProcessingRunner, RunReport};

pub(crate) struct RecordedLaunch {
    pub(crate) params: LaunchParameters,
    pub(crate) hosts: Vec<Host>,
}

/// Runner that records every invocation instead of delegating anywhere.
#[derive(Default)]
pub(crate) struct RecordingRunner {
    pub(crate) calls: RefCell<Vec<RecordedLaunch>>,
    fail_with: Option<String>,
}

impl RecordingRunner {
    /// A runner whose invocations fail with the given details.
    pub(crate) fn failing(details: &str) -> Self {
        Self { calls: RefCell::new(Vec::new()), fail_with: Some(details.to_string()) }
    }
}

impl ProcessingRunner for RecordingRunner {
    fn run_post_processing(
        &self,
        params: &LaunchParameters,
        hosts: &[Host],
    ) -> Result<RunReport, AppError> {
        self.calls
            .borrow_mut()
            .push(RecordedLaunch { params: params.clone(), hosts: hosts.to_vec() });

        if let Some(details) = &self.fail_with {
            return Err(AppError::Tool {
                command: format!("recorded launch of '{}'", params.name),
                details: details.clone(),
            });
        }
        Ok(RunReport { command: vec![format!("recorded launch of '{}'", params.name)], launched: true })
    }
}

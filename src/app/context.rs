use crate::ports::ProcessingRunner;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: ProcessingRunner> {
    runner: R,
}

impl<R: ProcessingRunner> AppContext<R> {
    /// Create a new application context.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Get a reference to the processing runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}

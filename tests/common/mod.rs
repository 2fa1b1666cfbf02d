//! Shared testing utilities for mmsw CLI tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `mmsw` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mmsw").expect("Failed to locate mmsw binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write a run spec file into the work directory and return its path.
    pub fn write_spec(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write run spec");
        path
    }

    /// Install a stub launcher script that appends its argv to
    /// `invocations.log` and exits with the given code.
    pub fn write_stub_tool(&self, exit_code: i32) -> PathBuf {
        let log = self.invocations_log();
        let path = self.work_dir.join("post-processing-run.sh");
        let script = format!(
            "#!/bin/sh\nprintf '%s ' \"$@\" >> \"{}\"\nprintf '\\n' >> \"{}\"\nexit {}\n",
            log.display(),
            log.display(),
            exit_code
        );
        fs::write(&path, script).expect("Failed to write stub tool");
        let mut perms = fs::metadata(&path).expect("Failed to stat stub tool").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to mark stub tool executable");
        path
    }

    fn invocations_log(&self) -> PathBuf {
        self.work_dir.join("invocations.log")
    }

    /// Argv lines recorded by the stub launcher, one per invocation.
    pub fn recorded_invocations(&self) -> Vec<String> {
        match fs::read_to_string(self.invocations_log()) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}

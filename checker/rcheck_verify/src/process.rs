//! Captured result of a finished process.

use std::process::{ExitStatus, Output};

/// Return code and captured text of a process that already ran.
///
/// The runner usually merges stderr into stdout; `stderr` is only non-empty
/// when it kept them apart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessResult {
    pub rc: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessResult {
    pub fn new(rc: i32, stdout: impl Into<String>) -> Self {
        ProcessResult {
            rc,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    #[must_use]
    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = stderr.into();
        self
    }

    /// Convert the output of `std::process::Command`.
    ///
    /// A process killed by a signal gets the shell convention `128 + signal`.
    pub fn from_output(output: &Output) -> Self {
        ProcessResult {
            rc: exit_code(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Everything the process printed, for failure reports.
    pub fn output(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

//! Runtime abstraction for system operations.
//!
//! All interaction with the host goes through the [`Runtime`] trait so the
//! APT front-ends can be exercised against canned command output in tests.
//!
//! # Structure
//!
//! - `process` - Running external programs and capturing their output

mod process;

use anyhow::Result;

/// Captured result of a finished external program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Successful output with the given stdout, for tests and fakes.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output with the given exit code and stderr.
    pub fn failed(status: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Human readable exit status, e.g. `exit status 100`.
    pub fn describe_status(&self) -> String {
        match self.status {
            Some(code) => format!("exit status {}", code),
            None => "a signal".to_string(),
        }
    }

    /// `<what> failed with <status>`, followed by stderr when there is any.
    ///
    /// Stderr lines are joined with `; ` so the message stays on one line.
    pub fn failure_message(&self, what: &str) -> String {
        let stderr = self
            .stderr
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("; ");
        if stderr.is_empty() {
            format!("{} failed with {}", what, self.describe_status())
        } else {
            format!("{} failed with {}: {}", what, self.describe_status(), stderr)
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Runtime {
    /// Run a program to completion and capture its output.
    ///
    /// Fails only if the program could not be started; a non-zero exit is
    /// reported through [`CommandOutput::status`].
    fn run_command(&self, program: &str, args: &[String]) -> Result<CommandOutput>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn run_command(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        self.run_command_impl(program, args)
    }
}

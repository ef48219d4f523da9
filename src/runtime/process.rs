//! External process operations.

use anyhow::{Context, Result};
use log::debug;
use std::process::Command;

use super::{CommandOutput, RealRuntime};

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn run_command_impl(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        debug!("Running {} {}", program, args.join(" "));
        // Output is parsed, so force untranslated messages
        let output = Command::new(program)
            .args(args)
            .env("LC_ALL", "C")
            .output()
            .with_context(|| format!("Failed to run {}", program))?;

        let result = CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!("{} finished with {}", program, result.describe_status());
        Ok(result)
    }
}

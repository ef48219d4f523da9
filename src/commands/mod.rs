use std::io::Write;

use log::debug;

use crate::{
    application::CheckUseCase,
    config_store::AptConfigStore,
    domain::{
        model::{Report, Severity},
        service::ReportFormatter,
    },
    error::{CheckError, Result},
    provider::AptProvider,
    runtime::Runtime,
};

pub mod config;

use config::{CheckConfig, CheckOptions};

/// Run the APT check and write the plugin output.
///
/// Returns the status whose numeric value is the process exit code. Fatal
/// errors are reported as a single `APT UNKNOWN` line.
#[tracing::instrument(skip(runtime, options, out))]
pub fn check<R: Runtime>(
    runtime: &R,
    options: &CheckOptions,
    out: &mut impl Write,
) -> std::io::Result<Severity> {
    match run(runtime, options) {
        Ok(report) => {
            out.write_all(ReportFormatter::render(&report).as_bytes())?;
            Ok(report.severity)
        }
        Err(e) => {
            debug!("Check failed: {:?}", e);
            report_error(&e, out)?;
            Ok(Severity::Unknown)
        }
    }
}

/// Write the single diagnostic line for a fatal error.
pub fn report_error(err: &CheckError, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "APT {} - {}", Severity::Unknown, err)
}

fn run<R: Runtime>(runtime: &R, options: &CheckOptions) -> Result<Report> {
    let config = CheckConfig::from_options(options)?;
    let provider = AptProvider::new(runtime);

    if config.periodic_max_days.is_some() {
        let store = AptConfigStore::load(runtime)?;
        CheckUseCase::new(&provider, &config)
            .with_config_store(&store)
            .run()
    } else {
        CheckUseCase::new(&provider, &config).run()
    }
}

use std::io::{self, Write};
use std::process::ExitCode;

use check_apt::commands::{self, config::CheckOptions};
use check_apt::domain::model::Severity;
use check_apt::error::CheckError;
use check_apt::runtime::RealRuntime;
use clap::Parser;
use clap::error::ErrorKind;

/// check_apt - APT upgrade check for monitoring systems
///
/// Simulates an upgrade and reports pending security updates, other updates,
/// new installs, removals, kept back and broken packages in the monitoring
/// plugin format. The exit code is the status: 0 OK, 1 WARNING, 2 CRITICAL,
/// 3 UNKNOWN.
///
/// Examples:
///   check_apt                      # Security updates are CRITICAL, others WARNING
///   check_apt -d --keep WARNING    # Simulate dist-upgrade, warn about kept packages
#[derive(Parser, Debug)]
#[command(author, version = env!("CHECK_APT_VERSION"), about)]
struct Cli {
    #[command(flatten)]
    options: CheckOptions,

    /// Verbose output on stderr (repeat for more detail)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            // Usage errors must not map to clap's exit code 2 (CRITICAL)
            let err = CheckError::InvalidArguments(usage_error_summary(&e));
            let _ = commands::report_error(&err, &mut io::stdout());
            return ExitCode::from(Severity::Unknown.exit_code());
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.verbose)),
    )
    .init();

    let runtime = RealRuntime;
    let mut stdout = io::stdout().lock();
    let status = commands::check(&runtime, &cli.options, &mut stdout)
        .and_then(|severity| stdout.flush().map(|_| severity))
        .unwrap_or_else(|e| {
            log::error!("Failed to write check output: {}", e);
            Severity::Unknown
        });
    ExitCode::from(status.exit_code())
}

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn usage_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

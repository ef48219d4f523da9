use log::debug;

use crate::domain::model::{Severity, ThresholdConfig};
use crate::domain::service::{
    DEFAULT_CRITICAL_PATTERN, DEFAULT_PERIODIC_MAX_DAYS, DEFAULT_SHOW_MAX_PACKAGES, LabelMatcher,
};
use crate::error::{CheckError, Result};
use crate::provider::UpgradeMode;

/// Check options as given on the command line.
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct CheckOptions {
    /// Use "dist-upgrade", otherwise "upgrade"
    #[arg(short = 'd', long = "dist-upgrade")]
    pub dist_upgrade: bool,

    /// RegEx for origin labels which are critical updates
    #[arg(
        short = 'c',
        long = "critical",
        visible_alias = "critial",
        value_name = "REGEX",
        default_value = DEFAULT_CRITICAL_PATTERN,
        allow_hyphen_values = true
    )]
    pub critical: String,

    /// Status when packages are kept back: OK, WARNING, CRITICAL or UNKNOWN
    #[arg(long = "keep", value_name = "LEVEL", default_value = "OK")]
    pub keep: String,

    /// Status when packages would be deleted: OK, WARNING, CRITICAL or UNKNOWN
    #[arg(long = "delete", value_name = "LEVEL", default_value = "OK")]
    pub delete: String,

    /// Status when packages are broken: OK, WARNING, CRITICAL or UNKNOWN
    #[arg(long = "broken", value_name = "LEVEL", default_value = "OK")]
    pub broken: String,

    /// Number of package names shown in the short output (0 hides them)
    #[arg(long = "showmaxpkgs", value_name = "N", default_value_t = DEFAULT_SHOW_MAX_PACKAGES)]
    pub show_max_packages: usize,

    /// Check that periodic package list updates are enabled
    #[arg(long = "periodic-check")]
    pub periodic_check: bool,

    /// Maximum days allowed between periodic package list updates
    #[arg(long = "periodic-max-days", value_name = "DAYS", default_value_t = DEFAULT_PERIODIC_MAX_DAYS)]
    pub periodic_max_days: i64,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            dist_upgrade: false,
            critical: DEFAULT_CRITICAL_PATTERN.to_string(),
            keep: Severity::Ok.to_string(),
            delete: Severity::Ok.to_string(),
            broken: Severity::Ok.to_string(),
            show_max_packages: DEFAULT_SHOW_MAX_PACKAGES,
            periodic_check: false,
            periodic_max_days: DEFAULT_PERIODIC_MAX_DAYS,
        }
    }
}

/// Validated configuration for one check run.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub mode: UpgradeMode,
    pub matcher: LabelMatcher,
    pub thresholds: ThresholdConfig,
    pub show_max_packages: usize,
    /// Maximum allowed update interval; `None` disables the periodic check
    pub periodic_max_days: Option<i64>,
}

impl CheckConfig {
    pub fn from_options(options: &CheckOptions) -> Result<Self> {
        let thresholds = ThresholdConfig {
            kept: parse_threshold("keep", &options.keep)?,
            delete: parse_threshold("delete", &options.delete)?,
            broken: parse_threshold("broken", &options.broken)?,
        };
        let matcher = LabelMatcher::new([&options.critical])?;
        debug!("Critical label pattern: {}", options.critical);

        Ok(Self {
            mode: UpgradeMode::from_dist_upgrade(options.dist_upgrade),
            matcher,
            thresholds,
            show_max_packages: options.show_max_packages,
            periodic_max_days: options.periodic_check.then_some(options.periodic_max_days),
        })
    }
}

fn parse_threshold(option: &'static str, value: &str) -> Result<Severity> {
    value
        .parse::<Severity>()
        .map_err(|_| CheckError::InvalidThreshold {
            option,
            value: value.to_string(),
        })
}

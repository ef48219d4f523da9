use std::fmt;
use std::str::FromStr;

use crate::error::CheckError;

/// Monitoring plugin status, ordered by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Ok = 0,
    Warning = 1,
    Critical = 2,
    Unknown = 3,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Ok,
        Severity::Warning,
        Severity::Critical,
        Severity::Unknown,
    ];

    /// Process exit code for this status.
    pub fn exit_code(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CheckError;

    /// Parse a threshold level. The option name is filled in by the caller.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CheckError::InvalidThreshold {
                option: "threshold",
                value: s.to_string(),
            })
    }
}

/// Per-category floors: one or more members in a category escalates the
/// result to at least the configured severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThresholdConfig {
    pub kept: Severity,
    pub delete: Severity,
    pub broken: Severity,
}

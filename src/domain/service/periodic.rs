//! Periodic update policy check.

use log::debug;

use crate::config_store::ConfigStore;
use crate::domain::model::Severity;

pub const PERIODIC_ENABLE_KEY: &str = "APT::Periodic::Enable";
pub const UPDATE_PACKAGE_LISTS_KEY: &str = "APT::Periodic::Update-Package-Lists";

pub const DEFAULT_PERIODIC_MAX_DAYS: i64 = 1;

/// Contribution of the periodic policy to the final result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicStatus {
    pub severity: Severity,
    /// Short message fragment, absent when the policy is fine
    pub fragment: Option<&'static str>,
    /// Long message line explaining the finding
    pub detail: Option<String>,
}

impl PeriodicStatus {
    fn ok() -> Self {
        Self {
            severity: Severity::Ok,
            fragment: None,
            detail: None,
        }
    }

    fn finding(severity: Severity, fragment: &'static str, detail: String) -> Self {
        Self {
            severity,
            fragment: Some(fragment),
            detail: Some(detail),
        }
    }
}

/// Checks that APT refreshes its package lists often enough.
pub struct PeriodicPolicyChecker {
    max_days: i64,
}

impl PeriodicPolicyChecker {
    pub fn new(max_days: i64) -> Self {
        Self { max_days }
    }

    pub fn check(&self, store: &dyn ConfigStore) -> PeriodicStatus {
        let enable = store.get_string(PERIODIC_ENABLE_KEY);
        let interval = store.get_string(UPDATE_PACKAGE_LISTS_KEY);
        debug!("{} \"{}\"", PERIODIC_ENABLE_KEY, enable.as_deref().unwrap_or_default());
        debug!("{} \"{}\"", UPDATE_PACKAGE_LISTS_KEY, interval.as_deref().unwrap_or_default());

        if enable.as_deref() == Some("0") {
            return PeriodicStatus::finding(
                Severity::Critical,
                "periodic updates disabled",
                format!("Periodic update disabled via '{} \"0\";'", PERIODIC_ENABLE_KEY),
            );
        }

        let Some(raw) = interval else {
            return PeriodicStatus::finding(
                Severity::Critical,
                "periodic updates disabled",
                format!(
                    "Periodic update disabled, no '{} \"X\";' found",
                    UPDATE_PACKAGE_LISTS_KEY
                ),
            );
        };

        let days = store.get_int(UPDATE_PACKAGE_LISTS_KEY).unwrap_or(0);
        if days == 0 {
            PeriodicStatus::finding(
                Severity::Critical,
                "periodic updates disabled",
                format!(
                    "Periodic update disabled via '{} \"0\";' (or garbage)",
                    UPDATE_PACKAGE_LISTS_KEY
                ),
            )
        } else if days > self.max_days {
            PeriodicStatus::finding(
                Severity::Warning,
                "periodic updates interval too big",
                format!(
                    "Periodic update interval too big via '{} \"{}\";'",
                    UPDATE_PACKAGE_LISTS_KEY, raw
                ),
            )
        } else {
            PeriodicStatus::ok()
        }
    }
}

#[cfg(test)]
impl Default for PeriodicPolicyChecker {
    fn default() -> Self {
        Self::new(DEFAULT_PERIODIC_MAX_DAYS)
    }
}

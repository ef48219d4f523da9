//! APT configuration read from `apt-config dump`.

use std::collections::BTreeMap;

use log::debug;

use crate::error::{CheckError, Result};
use crate::runtime::Runtime;

use super::ConfigStore;

const APT_CONFIG: &str = "apt-config";

/// Snapshot of the APT configuration tree, flattened to `A::B::C` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AptConfigStore {
    values: BTreeMap<String, String>,
}

impl AptConfigStore {
    /// Load the configuration once via `apt-config dump`.
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R) -> Result<Self> {
        let output = runtime
            .run_command(APT_CONFIG, &["dump".to_string()])
            .map_err(CheckError::config_store)?;
        if !output.success() {
            return Err(CheckError::ConfigStore(
                output.failure_message(&format!("{} dump", APT_CONFIG)),
            ));
        }
        let store = Self::parse(&output.stdout);
        debug!("Loaded {} APT configuration values", store.values.len());
        Ok(store)
    }

    /// Parse `Key "value";` lines. Later assignments win, like APT itself.
    pub fn parse(dump: &str) -> Self {
        let values = dump
            .lines()
            .filter_map(|line| {
                let (key, rest) = line.trim().split_once(' ')?;
                let value = rest.trim().strip_suffix(';')?.trim();
                let value = value.strip_prefix('"')?.strip_suffix('"')?;
                Some((key.to_string(), value.to_string()))
            })
            .collect();
        Self { values }
    }
}

impl ConfigStore for AptConfigStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).map(|v| parse_leading_int(v))
    }
}

/// Leading optionally-signed decimal integer; anything unparsable is 0.
fn parse_leading_int(value: &str) -> i64 {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{CommandOutput, MockRuntime};

    const DUMP: &str = r#"APT "";
APT::Architecture "amd64";
APT::Periodic "";
APT::Periodic::Enable "1";
APT::Periodic::Update-Package-Lists "7";
APT::Periodic::Unattended-Upgrade "1";
DPkg::Pre-Invoke "";
DPkg::Pre-Invoke:: "rm -f /var/cache/apt/archives/*.deb || true";
"#;

    #[test]
    fn test_parse_dump() {
        let store = AptConfigStore::parse(DUMP);
        assert_eq!(store.get_string("APT::Architecture").as_deref(), Some("amd64"));
        assert_eq!(store.get_string("APT::Periodic::Enable").as_deref(), Some("1"));
        assert_eq!(store.get_int("APT::Periodic::Update-Package-Lists"), Some(7));
        assert_eq!(
            store.get_string("DPkg::Pre-Invoke::").as_deref(),
            Some("rm -f /var/cache/apt/archives/*.deb || true")
        );
    }

    #[test]
    fn test_unset_key_is_absent() {
        let store = AptConfigStore::parse(DUMP);
        assert_eq!(store.get_string("APT::Periodic::AutocleanInterval"), None);
        assert_eq!(store.get_int("APT::Periodic::AutocleanInterval"), None);
    }

    #[test]
    fn test_later_assignment_wins() {
        let store = AptConfigStore::parse("A::B \"1\";\nA::B \"2\";\n");
        assert_eq!(store.get_int("A::B"), Some(2));
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("7"), 7);
        assert_eq!(parse_leading_int(" 14days"), 14);
        assert_eq!(parse_leading_int("-1"), -1);
        assert_eq!(parse_leading_int("+3"), 3);
        assert_eq!(parse_leading_int("always"), 0);
        assert_eq!(parse_leading_int(""), 0);
    }

    #[test]
    fn test_load_runs_apt_config_dump() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_run_command()
            .withf(|program, args| program == "apt-config" && args == ["dump".to_string()])
            .times(1)
            .returning(|_, _| Ok(CommandOutput::ok(DUMP)));

        let store = AptConfigStore::load(&runtime).unwrap();
        assert_eq!(store.get_int("APT::Periodic::Enable"), Some(1));
    }

    #[test]
    fn test_load_failure_is_config_store_error() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_run_command()
            .returning(|_, _| Ok(CommandOutput::failed(100, "E: Syntax error")));

        let err = AptConfigStore::load(&runtime).unwrap_err();
        assert!(matches!(err, CheckError::ConfigStore(_)));
        assert!(err.to_string().contains("E: Syntax error"));
    }

    #[test]
    fn test_load_missing_binary_is_config_store_error() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_run_command()
            .returning(|_, _| Err(anyhow::anyhow!("Failed to run apt-config")));

        let err = AptConfigStore::load(&runtime).unwrap_err();
        assert!(matches!(err, CheckError::ConfigStore(_)));
    }
}

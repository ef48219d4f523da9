//! Parser for `apt-cache policy` output.

use crate::domain::model::Package;

const NONE: &str = "(none)";

/// Installed and candidate versions per package, in output order.
pub fn parse_policy(output: &str) -> Vec<Package> {
    let mut packages: Vec<Package> = Vec::new();

    for line in output.lines() {
        if !line.starts_with(char::is_whitespace) {
            if let Some(name) = line.trim_end().strip_suffix(':') {
                packages.push(Package::new(name));
            }
            continue;
        }
        let Some(current) = packages.last_mut() else {
            continue;
        };
        let entry = line.trim();
        if let Some(version) = entry.strip_prefix("Installed:") {
            current.installed_version = version_of(version);
        } else if let Some(version) = entry.strip_prefix("Candidate:") {
            current.candidate_version = version_of(version);
        }
    }

    packages
}

fn version_of(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == NONE {
        None
    } else {
        Some(value.to_string())
    }
}

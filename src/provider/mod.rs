//! Provider abstraction for package snapshots.
//!
//! A provider simulates an upgrade without applying it and reports what the
//! package manager would change, plus the packages it would leave alone.

mod apt;
mod policy;
mod simulation;

use std::fmt;

use crate::domain::model::Snapshot;
use crate::error::Result;

pub use apt::AptProvider;
pub use policy::parse_policy;
pub use simulation::{Simulation, parse_simulation};

/// Which upgrade operation to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UpgradeMode {
    /// Upgrade installed packages without adding or removing any
    #[default]
    Upgrade,
    /// Full distribution upgrade; may install and remove packages
    DistUpgrade,
}

impl UpgradeMode {
    pub fn from_dist_upgrade(dist_upgrade: bool) -> Self {
        if dist_upgrade {
            UpgradeMode::DistUpgrade
        } else {
            UpgradeMode::Upgrade
        }
    }

    /// apt-get command name
    pub fn command(self) -> &'static str {
        match self {
            UpgradeMode::Upgrade => "upgrade",
            UpgradeMode::DistUpgrade => "dist-upgrade",
        }
    }
}

impl fmt::Display for UpgradeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Source of package snapshots.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotProvider {
    /// Compute what an upgrade in the given mode would change.
    fn simulate_upgrade(&self, mode: UpgradeMode) -> Result<Snapshot>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_mode_from_flag() {
        assert_eq!(UpgradeMode::from_dist_upgrade(false), UpgradeMode::Upgrade);
        assert_eq!(UpgradeMode::from_dist_upgrade(true), UpgradeMode::DistUpgrade);
    }

    #[test]
    fn test_upgrade_mode_display() {
        assert_eq!(UpgradeMode::Upgrade.to_string(), "upgrade");
        assert_eq!(UpgradeMode::DistUpgrade.to_string(), "dist-upgrade");
    }
}

//! APT snapshot provider backed by `apt-get` and `apt-cache`.

use log::{debug, info, warn};

use crate::domain::model::{Package, Snapshot};
use crate::error::{CheckError, Result};
use crate::runtime::Runtime;

use super::{SnapshotProvider, UpgradeMode, parse_policy, parse_simulation};

const APT_GET: &str = "apt-get";
const APT_CACHE: &str = "apt-cache";

/// Simulates upgrades through the APT command line tools.
pub struct AptProvider<'r, R: Runtime> {
    runtime: &'r R,
}

impl<'r, R: Runtime> AptProvider<'r, R> {
    pub fn new(runtime: &'r R) -> Self {
        Self { runtime }
    }

    fn simulate_args(mode: UpgradeMode) -> Vec<String> {
        ["--simulate", "-o", "Debug::NoLocking=true", mode.command()]
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Resolve installed/candidate versions of held-back packages.
    fn policy(&self, names: &[String]) -> Result<Vec<Package>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let mut args = vec!["policy".to_string()];
        args.extend(names.iter().cloned());

        let output = self
            .runtime
            .run_command(APT_CACHE, &args)
            .map_err(CheckError::provider)?;
        if !output.success() {
            return Err(CheckError::Provider(
                output.failure_message(&format!("{} policy", APT_CACHE)),
            ));
        }

        let packages = parse_policy(&output.stdout);
        for name in names {
            if !packages.iter().any(|p| &p.name == name) {
                warn!("No policy information for held back package {}", name);
            }
        }
        Ok(packages)
    }
}

impl<R: Runtime> SnapshotProvider for AptProvider<'_, R> {
    #[tracing::instrument(skip(self))]
    fn simulate_upgrade(&self, mode: UpgradeMode) -> Result<Snapshot> {
        let output = self
            .runtime
            .run_command(APT_GET, &Self::simulate_args(mode))
            .map_err(CheckError::provider)?;
        let sim = parse_simulation(&output.stdout);

        if !output.success() {
            if sim.broken.is_empty() {
                return Err(CheckError::Provider(
                    output.failure_message(&format!("{} {}", APT_GET, mode)),
                ));
            }
            info!(
                "{} {} failed with {} broken packages",
                APT_GET,
                mode,
                sim.broken.len()
            );
        }
        debug!(
            "Simulation: {} changes, {} held back, {} broken",
            sim.changes.len(),
            sim.held_back.len(),
            sim.broken.len()
        );

        let held = self.policy(&sim.held_back)?;
        Ok(Snapshot::new(sim.changes)
            .with_known(held)
            .with_counts(
                sim.install_count,
                sim.delete_count,
                sim.broken.len() as u32,
            ))
    }
}

//! Check use case - orchestrates one point-in-time upgrade check.
//!
//! This use case coordinates:
//! - Simulating the upgrade through the snapshot provider
//! - Partitioning packages into buckets
//! - Optionally checking the periodic update policy
//! - Aggregating everything into a report

use log::{debug, info};

use crate::commands::config::CheckConfig;
use crate::config_store::ConfigStore;
use crate::domain::model::{Report, names};
use crate::domain::service::{
    ChangeClassifier, Partitioner, PeriodicPolicyChecker, SeverityAggregator,
};
use crate::error::{CheckError, Result};
use crate::provider::{SnapshotProvider, UpgradeMode};

/// Check use case - turns a package snapshot into a report
pub struct CheckUseCase<'a, P: SnapshotProvider> {
    provider: &'a P,
    config: &'a CheckConfig,
    config_store: Option<&'a dyn ConfigStore>,
}

impl<'a, P: SnapshotProvider> CheckUseCase<'a, P> {
    pub fn new(provider: &'a P, config: &'a CheckConfig) -> Self {
        Self {
            provider,
            config,
            config_store: None,
        }
    }

    /// Configuration store consulted by the periodic policy check.
    pub fn with_config_store(mut self, store: &'a dyn ConfigStore) -> Self {
        self.config_store = Some(store);
        self
    }

    #[tracing::instrument(skip(self))]
    pub fn run(&self) -> Result<Report> {
        let periodic = match (self.config.periodic_max_days, self.config_store) {
            (Some(max_days), Some(store)) => Some(PeriodicPolicyChecker::new(max_days).check(store)),
            (Some(_), None) => {
                return Err(CheckError::ConfigStore(
                    "no configuration store available for the periodic check".to_string(),
                ));
            }
            (None, _) => None,
        };

        let snapshot = self.provider.simulate_upgrade(self.config.mode)?;

        let dist = if self.config.mode == UpgradeMode::DistUpgrade {
            "dist-"
        } else {
            ""
        };
        info!("APT wants to {}upgrade {} packages", dist, snapshot.changes.len());
        debug!(
            "APT's upgrade: {}",
            snapshot.changes.keys().cloned().collect::<Vec<_>>().join(", ")
        );
        let outdated = snapshot.not_up_to_date();
        info!("Cache has {} updated and new installed packages", outdated.len());
        debug!("Upgrade: {}", names(&outdated).join(", "));

        let classifier = ChangeClassifier::new(&self.config.matcher);
        let buckets = Partitioner::new(&classifier).partition(&snapshot);

        let aggregator =
            SeverityAggregator::new(self.config.thresholds, self.config.show_max_packages);
        let report = aggregator.aggregate(&buckets, &snapshot, periodic.as_ref());
        info!("Result: {}", report.severity);
        Ok(report)
    }
}

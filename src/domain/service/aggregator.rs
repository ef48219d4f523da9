//! Folds bucket counts, thresholds and the periodic result into a report.

use crate::domain::model::{
    Buckets, Metrics, PackageSet, Report, Severity, Snapshot, ThresholdConfig, names,
};

use super::PeriodicStatus;

pub const DEFAULT_SHOW_MAX_PACKAGES: usize = 10;

/// Combines every category into one severity and ordered messages.
#[derive(Debug, Clone)]
pub struct SeverityAggregator {
    thresholds: ThresholdConfig,
    show_max: usize,
}

impl SeverityAggregator {
    pub fn new(thresholds: ThresholdConfig, show_max: usize) -> Self {
        Self {
            thresholds,
            show_max,
        }
    }

    /// Build the report. Fragments are ordered most important first; the
    /// final severity is the maximum of every floor raised along the way.
    pub fn aggregate(
        &self,
        buckets: &Buckets<'_>,
        snapshot: &Snapshot,
        periodic: Option<&PeriodicStatus>,
    ) -> Report {
        let mut report = Report {
            metrics: metrics(buckets, snapshot),
            ..Default::default()
        };
        let mut floors = Vec::new();

        if let Some(status) = periodic {
            floors.push(status.severity);
            if let Some(fragment) = status.fragment {
                report.fragments.push(fragment.to_string());
            }
            if let Some(detail) = &status.detail {
                report.long_lines.push(detail.clone());
            }
        }

        if !buckets.critical.is_empty() {
            floors.push(Severity::Critical);
            self.push_listed(&mut report, "security updates", "Security updates", &buckets.critical);
        }
        if !buckets.warning.is_empty() {
            floors.push(Severity::Warning);
            self.push_listed(&mut report, "other updates", "Other updates", &buckets.warning);
        }
        if !buckets.new.is_empty() {
            push_counted(&mut report, "new installs", "New installs", &buckets.new);
        }
        if !buckets.delete.is_empty() {
            push_counted(&mut report, "delete", "Delete", &buckets.delete);
        }
        if !buckets.kept.is_empty() {
            push_counted(&mut report, "kept packages", "Kept back", &buckets.kept);
        }
        if snapshot.broken_count > 0 {
            report
                .fragments
                .push(format!("broken packages: {}", snapshot.broken_count));
        }
        if !buckets.unknown.is_empty() {
            floors.push(Severity::Warning);
            push_counted(
                &mut report,
                "no information available",
                "No information available",
                &buckets.unknown,
            );
        }

        if !buckets.kept.is_empty() {
            floors.push(self.thresholds.kept);
        }
        if snapshot.delete_count > 0 {
            floors.push(self.thresholds.delete);
        }
        if snapshot.broken_count > 0 {
            floors.push(self.thresholds.broken);
        }

        report.severity = floors.into_iter().max().unwrap_or_default();
        report
    }

    /// Fragment with the first `show_max` names, e.g. `other updates: 3 (a, b, ...)`.
    fn push_listed(&self, report: &mut Report, label: &str, title: &str, set: &PackageSet<'_>) {
        let all = names(set);
        let mut fragment = format!("{}: {}", label, all.len());
        if self.show_max > 0 {
            let mut shown = all.iter().take(self.show_max).copied().collect::<Vec<_>>().join(", ");
            if all.len() > self.show_max {
                shown.push_str(", ...");
            }
            fragment.push_str(&format!(" ({})", shown));
        }
        report.fragments.push(fragment);
        report.long_lines.push(long_line(title, &all));
    }
}

#[cfg(test)]
impl Default for SeverityAggregator {
    fn default() -> Self {
        Self::new(ThresholdConfig::default(), DEFAULT_SHOW_MAX_PACKAGES)
    }
}

fn push_counted(report: &mut Report, label: &str, title: &str, set: &PackageSet<'_>) {
    report.fragments.push(format!("{}: {}", label, set.len()));
    report.long_lines.push(long_line(title, &names(set)));
}

fn long_line(title: &str, names: &[&str]) -> String {
    format!("{} ({}): {}", title, names.len(), names.join(", "))
}

fn metrics(buckets: &Buckets<'_>, snapshot: &Snapshot) -> Metrics {
    Metrics {
        security_updates: buckets.critical.len(),
        other_updates: buckets.warning.len(),
        new_installs: buckets.new.len(),
        kept: buckets.kept.len(),
        unknown: buckets.unknown.len(),
        install: snapshot.install_count,
        delete: snapshot.delete_count,
        broken: snapshot.broken_count,
    }
}

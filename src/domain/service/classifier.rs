//! Change classification by origin label.

use log::trace;

use crate::domain::model::{Package, PackageSet, Severity, insert};

use super::LabelMatcher;

/// Result of classifying the simulated change set.
#[derive(Debug, Default, PartialEq)]
pub struct Classification<'a> {
    pub critical: PackageSet<'a>,
    pub warning: PackageSet<'a>,
    /// No label signal: fresh installs, or upgrades without any origin
    pub unresolved: PackageSet<'a>,
}

/// Assigns changed packages to CRITICAL, WARNING or UNRESOLVED.
pub struct ChangeClassifier<'m> {
    matcher: &'m LabelMatcher,
}

impl<'m> ChangeClassifier<'m> {
    pub fn new(matcher: &'m LabelMatcher) -> Self {
        Self { matcher }
    }

    /// Severity of a single upgrade, folded over its origin labels.
    ///
    /// A matching label gives CRITICAL, any other label WARNING. A package
    /// without labels stays OK.
    pub fn severity_of(&self, pkg: &Package) -> Severity {
        pkg.origin_labels
            .iter()
            .map(|label| {
                if self.matcher.matches(label) {
                    Severity::Critical
                } else {
                    Severity::Warning
                }
            })
            .fold(Severity::Ok, Severity::max)
    }

    /// Classify packages independently of each other.
    ///
    /// Only upgrades of an installed version are label-checked; fresh installs
    /// and anomalies go straight to `unresolved`.
    pub fn classify<'a, I>(&self, packages: I) -> Classification<'a>
    where
        I: IntoIterator<Item = &'a Package>,
    {
        let mut result = Classification::default();
        for pkg in packages {
            let severity = if pkg.is_upgrade() && !pkg.marked_install {
                self.severity_of(pkg)
            } else {
                Severity::Ok
            };
            trace!(
                "Pkg \"{}\", installed: {:?}, candidate: {:?}, state: {}",
                pkg.name, pkg.installed_version, pkg.candidate_version, severity
            );
            match severity {
                Severity::Critical => insert(&mut result.critical, pkg),
                Severity::Warning => insert(&mut result.warning, pkg),
                _ => insert(&mut result.unresolved, pkg),
            }
        }
        result
    }
}

use super::{Package, PackageMap, PackageSet};

/// One-shot result of simulating an upgrade.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Packages the upgrade would touch
    pub changes: PackageMap,
    /// Every package the package manager knows about that is relevant to the
    /// check (a superset of `changes`)
    pub known: PackageMap,
    /// Packages that would be installed or upgraded
    pub install_count: u32,
    /// Packages that would be removed
    pub delete_count: u32,
    /// Packages with unmet dependencies
    pub broken_count: u32,
}

impl Snapshot {
    /// Build a snapshot whose known set equals the change set.
    pub fn new<I: IntoIterator<Item = Package>>(changes: I) -> Self {
        let mut snapshot = Snapshot::default();
        for pkg in changes {
            snapshot.known.insert(pkg.name.clone(), pkg.clone());
            snapshot.changes.insert(pkg.name.clone(), pkg);
        }
        snapshot
    }

    /// Add packages that are known but not part of the change set.
    pub fn with_known<I: IntoIterator<Item = Package>>(mut self, packages: I) -> Self {
        for pkg in packages {
            self.known.insert(pkg.name.clone(), pkg);
        }
        self
    }

    pub fn with_counts(mut self, install: u32, delete: u32, broken: u32) -> Self {
        self.install_count = install;
        self.delete_count = delete;
        self.broken_count = broken;
        self
    }

    /// Known packages that are out of date, ordered by name.
    pub fn not_up_to_date(&self) -> PackageSet<'_> {
        self.known
            .values()
            .filter(|p| p.is_outdated())
            .map(|p| (p.name.as_str(), p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_copies_changes_into_known() {
        let snapshot = Snapshot::new(vec![Package::new("a")]);
        assert!(snapshot.known.contains_key("a"));
        assert!(snapshot.changes.contains_key("a"));
    }

    #[test]
    fn test_not_up_to_date_filters_current_packages() {
        let snapshot = Snapshot::default().with_known(vec![
            Package::new("current").with_versions(Some("1"), Some("1")),
            Package::new("held").with_versions(Some("1"), Some("2")),
            Package::new("fresh").with_versions(None, Some("1")).marked_install(),
        ]);
        let names: Vec<_> = snapshot.not_up_to_date().keys().copied().collect();
        assert_eq!(names, vec!["fresh", "held"]);
    }
}

use std::collections::BTreeMap;

/// A package as seen by the package manager for one check run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Package {
    /// Unique package name (including `:arch` for foreign architectures)
    pub name: String,
    /// Currently installed version, if any
    pub installed_version: Option<String>,
    /// Version the package manager would install, if any
    pub candidate_version: Option<String>,
    /// Origin labels attached to the candidate version
    pub origin_labels: Vec<String>,
    /// Candidate is marked for a fresh install
    pub marked_install: bool,
    /// Package is marked for removal
    pub marked_delete: bool,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_versions(mut self, installed: Option<&str>, candidate: Option<&str>) -> Self {
        self.installed_version = installed.map(String::from);
        self.candidate_version = candidate.map(String::from);
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origin_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn marked_install(mut self) -> Self {
        self.marked_install = true;
        self
    }

    pub fn marked_delete(mut self) -> Self {
        self.marked_delete = true;
        self
    }

    /// An upgrade of something already present: both an installed and a
    /// candidate version exist.
    pub fn is_upgrade(&self) -> bool {
        self.installed_version.is_some() && self.candidate_version.is_some()
    }

    /// Installed with a differing candidate, or a candidate marked for install.
    ///
    /// Versions are only compared for equality.
    pub fn is_outdated(&self) -> bool {
        let newer_candidate = matches!(
            (&self.installed_version, &self.candidate_version),
            (Some(installed), Some(candidate)) if installed != candidate
        );
        newer_candidate || (self.candidate_version.is_some() && self.marked_install)
    }
}

/// Packages keyed and ordered by name.
pub type PackageMap = BTreeMap<String, Package>;

/// Borrowed view over packages, ordered by name.
pub type PackageSet<'a> = BTreeMap<&'a str, &'a Package>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_upgrade_requires_both_versions() {
        assert!(Package::new("a").with_versions(Some("1.0"), Some("1.1")).is_upgrade());
        assert!(!Package::new("a").with_versions(None, Some("1.1")).is_upgrade());
        assert!(!Package::new("a").with_versions(Some("1.0"), None).is_upgrade());
    }

    #[test]
    fn test_is_outdated_when_versions_differ() {
        let pkg = Package::new("a").with_versions(Some("1.0"), Some("1.1"));
        assert!(pkg.is_outdated());
    }

    #[test]
    fn test_is_not_outdated_when_versions_equal() {
        let pkg = Package::new("a").with_versions(Some("1.0"), Some("1.0"));
        assert!(!pkg.is_outdated());
    }

    #[test]
    fn test_new_install_is_outdated() {
        let pkg = Package::new("a").with_versions(None, Some("1.0")).marked_install();
        assert!(pkg.is_outdated());
    }

    #[test]
    fn test_unmarked_new_candidate_is_not_outdated() {
        let pkg = Package::new("a").with_versions(None, Some("1.0"));
        assert!(!pkg.is_outdated());
    }
}

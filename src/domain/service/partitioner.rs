//! Reconciles the change set with the out-of-date set.
//!
//! Both sides are ordered by name, so kept packages are a set difference and
//! the unknown bucket is what remains of the unresolved packages once fresh
//! installs are taken out.

use log::{debug, info};

use crate::domain::model::{Buckets, PackageSet, Snapshot, insert, names};

use super::{ChangeClassifier, Classification};

/// Splits a snapshot into the final, disjoint buckets.
pub struct Partitioner<'c, 'm> {
    classifier: &'c ChangeClassifier<'m>,
}

impl<'c, 'm> Partitioner<'c, 'm> {
    pub fn new(classifier: &'c ChangeClassifier<'m>) -> Self {
        Self { classifier }
    }

    #[tracing::instrument(skip(self, snapshot))]
    pub fn partition<'a>(&self, snapshot: &'a Snapshot) -> Buckets<'a> {
        let mut buckets = Buckets::default();

        for pkg in snapshot.changes.values() {
            if pkg.marked_delete {
                insert(&mut buckets.delete, pkg);
            } else if pkg.marked_install {
                insert(&mut buckets.new, pkg);
            }
        }

        // Removals are reported as deletions only
        let Classification {
            critical,
            warning,
            unresolved,
        } = self
            .classifier
            .classify(snapshot.changes.values().filter(|p| !p.marked_delete));
        buckets.critical = critical;
        buckets.warning = warning;

        buckets.kept = kept(snapshot);
        buckets.unknown = unresolved
            .into_iter()
            .filter(|(name, _)| !buckets.new.contains_key(name))
            .collect();

        for (bucket, set) in buckets.iter() {
            info!("{} packages in {}", set.len(), bucket);
            if !set.is_empty() {
                debug!("{}: {}", bucket, names(set).join(", "));
            }
        }

        buckets
    }
}

/// Out-of-date packages the simulated upgrade would not touch.
pub fn kept(snapshot: &Snapshot) -> PackageSet<'_> {
    snapshot
        .not_up_to_date()
        .into_iter()
        .filter(|(name, _)| !snapshot.changes.contains_key(*name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Bucket, Package};
    use crate::domain::service::LabelMatcher;

    fn upgrade(name: &str, labels: &[&str]) -> Package {
        Package::new(name)
            .with_versions(Some("1.0"), Some("1.1"))
            .with_labels(labels.iter().copied())
    }

    fn mixed_snapshot() -> Snapshot {
        Snapshot::new(vec![
            upgrade("openssl", &["Debian-Security"]),
            upgrade("vim", &["Debian"]),
            upgrade("mystery", &[]),
            Package::new("linux-image-6.1.0-27-amd64")
                .with_versions(None, Some("6.1.115-1"))
                .with_labels(["Debian-Security"])
                .marked_install(),
            Package::new("oldlib")
                .with_versions(Some("0.9"), Some("0.9"))
                .with_labels(["Debian-Security"])
                .marked_delete(),
        ])
        .with_known(vec![
            Package::new("held").with_versions(Some("2.0"), Some("2.1")),
            Package::new("current").with_versions(Some("3.0"), Some("3.0")),
            Package::new("unmarked-new").with_versions(None, Some("1.0")),
        ])
    }

    #[test]
    fn test_partition_buckets() {
        let matcher = LabelMatcher::default();
        let classifier = ChangeClassifier::new(&matcher);
        let snapshot = mixed_snapshot();

        let buckets = Partitioner::new(&classifier).partition(&snapshot);

        assert_eq!(names(&buckets.critical), vec!["openssl"]);
        assert_eq!(names(&buckets.warning), vec!["vim"]);
        assert_eq!(names(&buckets.unknown), vec!["mystery"]);
        assert_eq!(names(&buckets.new), vec!["linux-image-6.1.0-27-amd64"]);
        assert_eq!(names(&buckets.delete), vec!["oldlib"]);
        assert_eq!(names(&buckets.kept), vec!["held"]);
    }

    #[test]
    fn test_every_changed_or_kept_package_in_exactly_one_bucket() {
        let matcher = LabelMatcher::default();
        let classifier = ChangeClassifier::new(&matcher);
        let snapshot = mixed_snapshot();

        let buckets = Partitioner::new(&classifier).partition(&snapshot);

        for name in snapshot.changes.keys() {
            assert_eq!(buckets.buckets_of(name).len(), 1, "{} misplaced", name);
        }
        assert_eq!(buckets.buckets_of("held"), vec![Bucket::Kept]);
        assert_eq!(buckets.total(), snapshot.changes.len() + 1);
    }

    #[test]
    fn test_unmarked_new_candidate_is_dropped() {
        let matcher = LabelMatcher::default();
        let classifier = ChangeClassifier::new(&matcher);
        let snapshot = mixed_snapshot();

        let buckets = Partitioner::new(&classifier).partition(&snapshot);

        assert!(buckets.buckets_of("unmarked-new").is_empty());
        assert!(buckets.buckets_of("current").is_empty());
    }

    #[test]
    fn test_new_install_is_not_unknown() {
        let matcher = LabelMatcher::default();
        let classifier = ChangeClassifier::new(&matcher);
        let snapshot = Snapshot::new(vec![
            Package::new("fresh").with_versions(None, Some("1.0")).marked_install(),
        ]);

        let buckets = Partitioner::new(&classifier).partition(&snapshot);

        assert!(buckets.unknown.is_empty());
        assert_eq!(names(&buckets.new), vec!["fresh"]);
    }

    #[test]
    fn test_kept_is_set_difference() {
        let snapshot = Snapshot::new(vec![upgrade("a", &["Debian"])]).with_known(vec![
            Package::new("b").with_versions(Some("1"), Some("2")),
            Package::new("c").with_versions(Some("1"), Some("2")),
        ]);

        let kept = kept(&snapshot);

        assert_eq!(names(&kept), vec!["b", "c"]);
    }

    #[test]
    fn test_empty_snapshot_has_empty_buckets() {
        let matcher = LabelMatcher::default();
        let classifier = ChangeClassifier::new(&matcher);
        let snapshot = Snapshot::default();

        let buckets = Partitioner::new(&classifier).partition(&snapshot);

        assert_eq!(buckets, Buckets::default());
    }
}

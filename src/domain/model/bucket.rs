use std::fmt;

use super::{Package, PackageSet};

/// Mutually exclusive classification outcome of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    New,
    Delete,
    Critical,
    Warning,
    Kept,
    Unknown,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Bucket::New => "new",
            Bucket::Delete => "delete",
            Bucket::Critical => "critical",
            Bucket::Warning => "warning",
            Bucket::Kept => "kept",
            Bucket::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Final partition of a snapshot; every package lives in exactly one set.
#[derive(Debug, Default, PartialEq)]
pub struct Buckets<'a> {
    pub new: PackageSet<'a>,
    pub delete: PackageSet<'a>,
    pub critical: PackageSet<'a>,
    pub warning: PackageSet<'a>,
    pub kept: PackageSet<'a>,
    pub unknown: PackageSet<'a>,
}

impl<'a> Buckets<'a> {
    pub fn get(&self, bucket: Bucket) -> &PackageSet<'a> {
        match bucket {
            Bucket::New => &self.new,
            Bucket::Delete => &self.delete,
            Bucket::Critical => &self.critical,
            Bucket::Warning => &self.warning,
            Bucket::Kept => &self.kept,
            Bucket::Unknown => &self.unknown,
        }
    }

    /// Every bucket with its set, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &PackageSet<'a>)> {
        [
            Bucket::New,
            Bucket::Delete,
            Bucket::Critical,
            Bucket::Warning,
            Bucket::Kept,
            Bucket::Unknown,
        ]
        .into_iter()
        .map(move |b| (b, self.get(b)))
    }

    /// Buckets containing the named package. More than one entry is a defect.
    pub fn buckets_of(&self, name: &str) -> Vec<Bucket> {
        self.iter()
            .filter(|(_, set)| set.contains_key(name))
            .map(|(b, _)| b)
            .collect()
    }

    /// Number of packages across all buckets.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, set)| set.len()).sum()
    }
}

/// Sorted names of a package set.
pub fn names<'a>(set: &PackageSet<'a>) -> Vec<&'a str> {
    set.keys().copied().collect()
}

/// Insert a package into a set keyed by its name.
pub fn insert<'a>(set: &mut PackageSet<'a>, pkg: &'a Package) {
    set.insert(pkg.name.as_str(), pkg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_names() {
        let rendered: Vec<String> = Buckets::default()
            .iter()
            .map(|(bucket, _)| bucket.to_string())
            .collect();
        assert_eq!(
            rendered,
            vec!["new", "delete", "critical", "warning", "kept", "unknown"]
        );
    }

    #[test]
    fn test_buckets_of_reports_every_holder() {
        let pkg = Package::new("dup");
        let mut buckets = Buckets::default();
        insert(&mut buckets.kept, &pkg);
        insert(&mut buckets.unknown, &pkg);

        assert_eq!(buckets.buckets_of("dup"), vec![Bucket::Kept, Bucket::Unknown]);
        assert_eq!(buckets.total(), 2);
    }
}

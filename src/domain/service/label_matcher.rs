//! Critical origin label matching.

use regex::Regex;

use crate::error::Result;

/// Pattern matching any security-origin label, e.g. `Debian-Security` or
/// `Ubuntu-security`.
pub const DEFAULT_CRITICAL_PATTERN: &str = "-[sS]ecurity";

/// Tests origin labels against the configured critical patterns.
///
/// Patterns are searched anywhere in the label and taken verbatim; no case
/// folding is applied beyond what the pattern itself expresses.
#[derive(Debug, Clone)]
pub struct LabelMatcher {
    patterns: Vec<Regex>,
}

impl LabelMatcher {
    /// Compile the given patterns. A malformed pattern is a configuration error.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn matches(&self, label: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(label))
    }
}

#[cfg(test)]
impl Default for LabelMatcher {
    fn default() -> Self {
        Self::new([DEFAULT_CRITICAL_PATTERN]).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;

    #[test]
    fn test_default_matches_security_labels() {
        let matcher = LabelMatcher::default();
        assert!(matcher.matches("Debian-Security"));
        assert!(matcher.matches("Ubuntu-security"));
        assert!(!matcher.matches("Debian"));
        assert!(!matcher.matches("Security"));
    }

    #[test]
    fn test_matching_is_case_sensitive_as_written() {
        let matcher = LabelMatcher::new(["Security"]).unwrap();
        assert!(matcher.matches("Security"));
        assert!(!matcher.matches("security"));
    }

    #[test]
    fn test_any_pattern_matches() {
        let matcher = LabelMatcher::new(["^Backports$", "-[sS]ecurity"]).unwrap();
        assert!(matcher.matches("Backports"));
        assert!(matcher.matches("Debian-Security"));
        assert!(!matcher.matches("Debian Backports"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = LabelMatcher::new(["[unclosed"]).unwrap_err();
        assert!(matches!(err, CheckError::InvalidPattern(_)));
    }

    #[test]
    fn test_no_patterns_match_nothing() {
        let matcher = LabelMatcher::new(Vec::<String>::new()).unwrap();
        assert!(!matcher.matches("Debian-Security"));
    }
}

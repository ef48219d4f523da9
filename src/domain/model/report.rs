use super::Severity;

/// Performance counters reported after the status line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub security_updates: usize,
    pub other_updates: usize,
    pub new_installs: usize,
    pub kept: usize,
    pub unknown: usize,
    pub install: u32,
    pub delete: u32,
    pub broken: u32,
}

/// Outcome of one check run, ready to be rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub severity: Severity,
    /// Short message fragments, most important first
    pub fragments: Vec<String>,
    /// Long message lines, in the same order as the fragments
    pub long_lines: Vec<String>,
    pub metrics: Metrics,
}

//! Renders a report in the monitoring plugin output format:
//! `APT <STATUS> - <short message>|<metrics>` followed by the long message.

use crate::domain::model::{Metrics, Report};

pub const NO_UPDATES_MESSAGE: &str = "No updates to install";

pub struct ReportFormatter;

impl ReportFormatter {
    /// Joined fragments with the first character upper-cased.
    pub fn short_message(report: &Report) -> String {
        if report.fragments.is_empty() {
            return NO_UPDATES_MESSAGE.to_string();
        }
        let joined = report.fragments.join(", ");
        let mut chars = joined.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => joined,
        }
    }

    pub fn long_message(report: &Report) -> String {
        report.long_lines.join("\n")
    }

    /// Performance data; field order and threshold slots are fixed.
    pub fn metrics(metrics: &Metrics) -> String {
        format!(
            "securityupdates={};;1;0; updates={};1;;0; new={};;;; keep={};;;; unknownupdates={};;;0; \
             install={};;;; delete={};;;; broken={};;;;",
            metrics.security_updates,
            metrics.other_updates,
            metrics.new_installs,
            metrics.kept,
            metrics.unknown,
            metrics.install,
            metrics.delete,
            metrics.broken,
        )
    }

    pub fn status_line(report: &Report) -> String {
        format!(
            "APT {} - {}|{}",
            report.severity,
            Self::short_message(report),
            Self::metrics(&report.metrics)
        )
    }

    /// Full plugin output, newline terminated.
    pub fn render(report: &Report) -> String {
        let mut out = Self::status_line(report);
        out.push('\n');
        let long = Self::long_message(report);
        if !long.is_empty() {
            out.push_str(&long);
            out.push('\n');
        }
        out
    }
}

//! Parser for `apt-get --simulate` output.
//!
//! Relevant lines look like:
//!
//! ```text
//! The following packages have been kept back:
//!   linux-image-amd64 systemd
//! Inst openssl [3.0.11-1~deb12u1] (3.0.11-1~deb12u2 Debian-Security:12/stable-security [amd64])
//! Inst linux-image-6.1.0-27-amd64 (6.1.115-1 Debian:12.8/stable, Debian-Security:12/stable-security [amd64])
//! Remv oldlib [0.9-1]
//! ```

use std::collections::BTreeSet;

use crate::domain::model::Package;

const HELD_BACK_HEADERS: [&str; 2] = [
    "The following packages have been kept back:",
    "The following upgrades have been deferred due to phasing:",
];
const BROKEN_HEADER: &str = "The following packages have unmet dependencies:";

/// Everything the simulation reported.
#[derive(Debug, Default, PartialEq)]
pub struct Simulation {
    /// Packages the upgrade would install, upgrade or remove
    pub changes: Vec<Package>,
    /// Names of out-of-date packages the upgrade leaves alone
    pub held_back: Vec<String>,
    /// Names of packages with unmet dependencies
    pub broken: BTreeSet<String>,
    pub install_count: u32,
    pub delete_count: u32,
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Other,
    HeldBack,
    Broken,
}

pub fn parse_simulation(output: &str) -> Simulation {
    let mut sim = Simulation::default();
    let mut section = Section::Other;

    for line in output.lines() {
        if line.starts_with(char::is_whitespace) {
            let entry = line.trim();
            match section {
                Section::HeldBack => sim
                    .held_back
                    .extend(entry.split_whitespace().map(String::from)),
                Section::Broken => {
                    if let Some((name, _)) = entry.split_once(" : ") {
                        sim.broken.insert(name.trim().to_string());
                    }
                }
                Section::Other => {}
            }
            continue;
        }

        section = if HELD_BACK_HEADERS.contains(&line) {
            Section::HeldBack
        } else if line == BROKEN_HEADER {
            Section::Broken
        } else {
            Section::Other
        };

        if let Some(rest) = line.strip_prefix("Inst ") {
            if let Some(pkg) = parse_inst(rest) {
                sim.install_count += 1;
                sim.changes.push(pkg);
            }
        } else if let Some(rest) = line
            .strip_prefix("Remv ")
            .or_else(|| line.strip_prefix("Purg "))
        {
            if let Some(pkg) = parse_remove(rest) {
                sim.delete_count += 1;
                sim.changes.push(pkg);
            }
        }
    }

    sim
}

/// `NAME [OLD] (NEW REL, REL [ARCH])`, with `[OLD]` absent for fresh installs.
fn parse_inst(rest: &str) -> Option<Package> {
    let (name, after) = split_name(rest)?;
    let (installed, after) = take_bracketed(after);

    let open = after.find('(')?;
    let close = after.rfind(')')?;
    let mut candidate = after.get(open + 1..close)?.trim();
    if candidate.ends_with(']') {
        if let Some((head, _arch)) = candidate.rsplit_once(" [") {
            candidate = head;
        }
    }

    let (version, releases) = candidate
        .split_once(' ')
        .map(|(v, r)| (v, r.trim()))
        .unwrap_or((candidate, ""));
    let labels: Vec<&str> = if releases.is_empty() {
        Vec::new()
    } else {
        releases.split(", ").map(release_label).collect()
    };

    let mut pkg = Package::new(name)
        .with_versions(installed, Some(version))
        .with_labels(labels);
    pkg.marked_install = installed.is_none();
    Some(pkg)
}

/// `NAME [OLD]`
fn parse_remove(rest: &str) -> Option<Package> {
    let (name, after) = split_name(rest)?;
    let (installed, _) = take_bracketed(after);
    Some(
        Package::new(name)
            .with_versions(installed, None)
            .marked_delete(),
    )
}

fn split_name(rest: &str) -> Option<(&str, &str)> {
    let rest = rest.trim();
    let (name, after) = rest.split_once(' ').unwrap_or((rest, ""));
    if name.is_empty() {
        return None;
    }
    Some((name, after.trim_start()))
}

fn take_bracketed(s: &str) -> (Option<&str>, &str) {
    s.strip_prefix('[')
        .and_then(|inner| inner.split_once(']'))
        .map(|(value, rest)| (Some(value), rest.trim_start()))
        .unwrap_or((None, s))
}

/// Label of a release string `Label:Version/Archive`; empty when unlabelled.
fn release_label(release: &str) -> &str {
    release
        .split_once(':')
        .map(|(label, _)| label.trim())
        .unwrap_or("")
}

// src/compat.rs

//! Version compatibility matching between platform releases and theme bundles

use crate::manifest::ReleaseEntry;

/// Collapse a dotted version string into a single integer for comparison:
/// all `.` characters are removed and the remainder is parsed as an integer,
/// so "2.3.1" becomes 231. Anything unparseable collapses to 0.
///
/// Known limitation: segments are assumed single-digit. Multi-digit segments
/// compare incorrectly ("1.2.10" normalizes to 1210, above "1.3.0"'s 130)
/// and distinct versions can collide ("10.0.0" and "1.0.0.0" both normalize
/// to 1000). Release feeds are shaped to stay within single-digit segments.
pub fn normalize_version(version: &str) -> i64 {
    version.replace('.', "").parse().unwrap_or(0)
}

/// Select the first candidate (in the given order) whose minimum platform
/// version is satisfied by `platform_version`.
///
/// No sorting happens here: callers supply candidates most-recent-first, so
/// the first qualifying entry is the most recent compatible release. A
/// candidate without a minimum requirement qualifies for any platform.
pub fn resolve_compatible<'a>(
    candidates: &'a [ReleaseEntry],
    platform_version: &str,
) -> Option<&'a ReleaseEntry> {
    let target = normalize_version(platform_version);

    candidates.iter().find(|candidate| {
        let minimum = candidate
            .minimum_platform_version
            .as_deref()
            .map(normalize_version)
            .unwrap_or(0);
        minimum <= target
    })
}

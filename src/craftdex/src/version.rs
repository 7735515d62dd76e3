//! Release versions and schema eras
//!
//! Every release belongs to exactly one raw-data era. Releases up to 1.12
//! ship the flat legacy layout (numeric variant suffixes, `.lang` files, no
//! tags); everything after uses the tag-capable modern layout.

use std::cmp::Ordering;
use std::fmt;

/// Raw-data schema generation of a release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// Pre-1.13: `namespace:name:meta` identifiers, no tag system
    Legacy,
    /// 1.13 and later: flattened identifiers and item tags
    Modern,
}

impl Era {
    /// Classify a version string.
    ///
    /// Major 1 with minor <= 12 is legacy. Anything else, including strings
    /// that do not parse as a release number, is modern.
    pub fn of(version: &str) -> Era {
        match ReleaseNumber::parse(version) {
            Some(release) if release.major == 1 && release.minor <= 12 => Era::Legacy,
            _ => Era::Modern,
        }
    }

    pub fn is_legacy(self) -> bool {
        self == Era::Legacy
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Era::Legacy => write!(f, "legacy"),
            Era::Modern => write!(f, "modern"),
        }
    }
}

/// Numeric `major.minor[.patch]` release identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseNumber {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ReleaseNumber {
    /// Parse `1.12.2` or `1.20`. Snapshots such as `23w31a` or pre-releases
    /// such as `1.14-pre1` yield `None`.
    pub fn parse(version: &str) -> Option<Self> {
        let mut parts = version.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = match parts.next() {
            Some(p) => p.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            major,
            minor,
            patch,
        })
    }
}

/// Order two version strings by release.
///
/// Parseable releases come first, ordered numerically; anything else follows
/// in plain string order.
pub fn compare_release(a: &str, b: &str) -> Ordering {
    match (ReleaseNumber::parse(a), ReleaseNumber::parse(b)) {
        (Some(ra), Some(rb)) => ra.cmp(&rb).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Sort versions oldest to newest.
pub fn sort_by_release(versions: &mut [String]) {
    versions.sort_by(|a, b| compare_release(a, b));
}

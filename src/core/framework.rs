//! Target framework monikers and version ordering.
//!
//! NuGet scopes dependency groups with a `targetFramework` attribute such as
//! `net472`, `netstandard2.0` or `.NETFramework4.5`. A moniker is split into
//! an alphabetic family and a numeric/dot version suffix.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::resolver::errors::NuspecError;

/// Family prefix followed by a version suffix. Unanchored: the first match wins.
static MONIKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.a-zA-Z]+)([.0-9]+)").expect("moniker pattern is valid"));

/// A `targetFramework` attribute split into family and version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameworkMoniker {
    /// Runtime family, e.g. `net`, `netstandard`, `.NETFramework`
    pub family: String,
    /// Version suffix, e.g. `472`, `2.0`, `4.7.2`
    pub version: String,
}

impl FrameworkMoniker {
    /// Match a moniker string, returning `None` if it has no family/version shape.
    pub fn parse(moniker: &str) -> Option<Self> {
        let caps = MONIKER_PATTERN.captures(moniker)?;
        Some(FrameworkMoniker {
            family: caps[1].to_string(),
            version: caps[2].to_string(),
        })
    }

    /// Candidate order used when choosing among scoped groups.
    ///
    /// Within a family, higher versions come first. Across families, the
    /// lexicographically greater family name comes first.
    pub fn candidate_order(&self, other: &Self) -> Ordering {
        if self.family == other.family {
            compare_versions(&other.version, &self.version)
        } else {
            other.family.cmp(&self.family)
        }
    }
}

impl fmt::Display for FrameworkMoniker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family, self.version)
    }
}

/// The runtime profile dependencies are resolved for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetProfile {
    /// Runtime family identifier (moniker prefix)
    pub framework: String,
    /// Dot-separated numeric version
    pub version: String,
}

impl TargetProfile {
    pub fn new(framework: impl Into<String>, version: impl Into<String>) -> Self {
        TargetProfile {
            framework: framework.into(),
            version: version.into(),
        }
    }

    /// Whether a scoped group can be consumed by this profile.
    ///
    /// The family must match exactly and the group's version must not be
    /// newer than the profile's.
    pub fn accepts(&self, moniker: &FrameworkMoniker) -> bool {
        self.framework == moniker.family
            && compare_versions(&self.version, &moniker.version) != Ordering::Less
    }
}

impl FromStr for TargetProfile {
    type Err = NuspecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let moniker = FrameworkMoniker::parse(s.trim()).ok_or_else(|| {
            NuspecError::InvalidFramework {
                moniker: s.to_string(),
            }
        })?;
        Ok(TargetProfile {
            framework: moniker.family,
            version: moniker.version,
        })
    }
}

impl fmt::Display for TargetProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.framework, self.version)
    }
}

/// Compare two framework version strings.
///
/// Versions are read as numeric segments and compared segment-wise, with
/// missing trailing segments read as zero (`4.5` == `4.5.0`). A dotted
/// version splits on dots; a compact one like `472` has one segment per
/// digit, so `net472` sits between `net4.5` and `net48`. Numeric versions
/// rank above anything that cannot be read this way, and those compare as
/// raw strings among themselves.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (numeric_segments(a), numeric_segments(b)) {
        (Some(a), Some(b)) => {
            let len = a.len().max(b.len());
            (0..len)
                .map(|i| {
                    let x = a.get(i).copied().unwrap_or(0);
                    let y = b.get(i).copied().unwrap_or(0);
                    x.cmp(&y)
                })
                .find(|ord| *ord != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        }
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

fn numeric_segments(version: &str) -> Option<Vec<u64>> {
    if version.contains('.') {
        return version.split('.').map(|s| s.parse::<u64>().ok()).collect();
    }
    if version.is_empty() || !version.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(version.bytes().map(|b| u64::from(b - b'0')).collect())
}

//! Dependency records produced by manifest resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single declared dependency: package id plus version range string.
///
/// The version is kept verbatim (`12.0.1`, `[4.3.0, )`, ...); no semantic
/// validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEntry {
    pub id: String,
    pub version: String,
}

impl DependencyEntry {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        DependencyEntry {
            id: id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for DependencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.version)
    }
}

/// The resolved dependencies of one package for one target profile.
///
/// Children are in manifest order. Recursing into each child is left to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DependencyNode {
    pub name: String,
    pub children: Vec<DependencyEntry>,
}

impl DependencyNode {
    pub fn new(name: impl Into<String>, children: Vec<DependencyEntry>) -> Self {
        DependencyNode {
            name: name.into(),
            children,
        }
    }

    /// Check if the package declares no dependencies.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

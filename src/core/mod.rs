//! Core data structures.
//!
//! - Package references (where an archive lives)
//! - Target framework profiles and monikers
//! - Resolved dependency records

pub mod dependency;
pub mod framework;
pub mod package_ref;

pub use dependency::{DependencyEntry, DependencyNode};
pub use framework::{compare_versions, FrameworkMoniker, TargetProfile};
pub use package_ref::{PackageReference, ARCHIVE_EXTENSION};

//! nuspec-deps - declared dependencies of NuGet packages
//!
//! Given a restored `.nupkg` and a target framework, this crate reads the
//! embedded `.nuspec` manifest and returns the flat list of dependencies the
//! package declares for that framework. Building a tree across packages is
//! left to the caller.

pub mod core;
pub mod ops;
pub mod resolver;
pub mod sources;
pub mod util;

/// Test fixtures for nuspec-deps unit tests.
///
/// Only available when compiling with `--cfg test`.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{DependencyEntry, DependencyNode, FrameworkMoniker, PackageReference, TargetProfile};
pub use crate::ops::{parse_nuspec, parse_nuspec_file};
pub use crate::resolver::{resolve_dependencies, resolve_manifest, NuspecError};

//! Package inspection: load a package's manifest and resolve its dependencies.

use std::path::Path;

use crate::core::{DependencyNode, PackageReference, TargetProfile};
use crate::resolver::{resolve_manifest, NuspecError};
use crate::sources::load_manifest;

/// Resolve the dependencies of a package archive for `profile`.
///
/// Returns `Ok(None)` when the archive does not exist. Every other failure
/// (corrupt archive, missing manifest entry, malformed manifest) is an error.
pub async fn parse_nuspec(
    pkg: &PackageReference,
    profile: &TargetProfile,
) -> Result<Option<DependencyNode>, NuspecError> {
    let Some(text) = load_manifest(pkg).await? else {
        return Ok(None);
    };

    let node = resolve_manifest(text, profile.clone(), pkg.name.clone()).await?;
    Ok(Some(node))
}

/// Resolve a loose `.nuspec` file.
pub async fn parse_nuspec_file(
    path: &Path,
    profile: &TargetProfile,
    name: &str,
) -> Result<DependencyNode, NuspecError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| NuspecError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    resolve_manifest(text, profile.clone(), name.to_string()).await
}

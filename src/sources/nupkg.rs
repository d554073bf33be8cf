//! Manifest loading from `.nupkg` archives.
//!
//! A `.nupkg` is a zip container. Its `.nuspec` entry holds the package
//! manifest; NuGet writes exactly one, and only the first is read if a
//! broken package carries more.

use std::ffi::OsStr;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::core::PackageReference;
use crate::resolver::errors::NuspecError;

/// File extension of manifest entries.
pub const MANIFEST_EXTENSION: &str = "nuspec";

/// Load the manifest text of a package.
///
/// Returns `Ok(None)` when no archive exists at the conventional path. An
/// archive that exists but cannot be opened, or holds no manifest, is an
/// error.
pub async fn load_manifest(pkg: &PackageReference) -> Result<Option<String>, NuspecError> {
    let path = pkg.archive_path();

    let exists = tokio::fs::try_exists(&path)
        .await
        .map_err(|source| NuspecError::Io {
            path: path.clone(),
            source,
        })?;
    if !exists {
        tracing::debug!("No archive for {} at {}", pkg, path.display());
        return Ok(None);
    }

    let data = tokio::fs::read(&path)
        .await
        .map_err(|source| NuspecError::Io {
            path: path.clone(),
            source,
        })?;

    let text = tokio::task::spawn_blocking(move || read_manifest(&data, &path)).await??;
    Ok(Some(text))
}

/// Extract the first manifest entry from archive bytes.
///
/// `path` is only used for error reporting.
pub fn read_manifest(data: &[u8], path: &Path) -> Result<String, NuspecError> {
    let mut archive =
        ZipArchive::new(Cursor::new(data)).map_err(|e| NuspecError::malformed(path, e))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| NuspecError::malformed(path, e))?;
        if entry.is_dir() || !is_manifest_entry(entry.name()) {
            continue;
        }

        let name = entry.name().to_string();
        tracing::debug!("Reading manifest entry {} from {}", name, path.display());

        let mut bytes = Vec::new();
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| NuspecError::malformed(path, format!("failed to read `{}`: {}", name, e)))?;

        return String::from_utf8(bytes).map_err(|e| {
            NuspecError::malformed(path, format!("`{}` is not valid UTF-8: {}", name, e))
        });
    }

    Err(NuspecError::MissingManifestEntry {
        path: PathBuf::from(path),
    })
}

fn is_manifest_entry(name: &str) -> bool {
    Path::new(name).extension() == Some(OsStr::new(MANIFEST_EXTENSION))
}

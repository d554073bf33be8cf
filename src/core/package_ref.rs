//! References to packages laid out on disk.

use std::fmt;
use std::path::{Path, PathBuf};

/// File extension of NuGet package archives.
pub const ARCHIVE_EXTENSION: &str = "nupkg";

/// Identifies one package archive to load.
///
/// The archive is expected at `{location_hint}/{name}.{version}.nupkg`, the
/// layout of a `packages/` folder restored by NuGet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageReference {
    pub name: String,
    pub version: String,
    pub location_hint: PathBuf,
}

impl PackageReference {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        location_hint: impl Into<PathBuf>,
    ) -> Self {
        PackageReference {
            name: name.into(),
            version: version.into(),
            location_hint: location_hint.into(),
        }
    }

    /// Archive file name, e.g. `Newtonsoft.Json.12.0.1.nupkg`.
    pub fn archive_file_name(&self) -> String {
        format!("{}.{}.{}", self.name, self.version, ARCHIVE_EXTENSION)
    }

    /// Conventional archive location.
    pub fn archive_path(&self) -> PathBuf {
        self.location_hint.join(self.archive_file_name())
    }

    pub fn location_hint(&self) -> &Path {
        &self.location_hint
    }
}

impl fmt::Display for PackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}

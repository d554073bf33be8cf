//! Error types for manifest loading and resolution.

use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

/// Error while loading or resolving a package manifest.
///
/// A missing archive is not an error; loaders report it as `Ok(None)`.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum NuspecError {
    #[error("failed to read `{}`", .path.display())]
    #[diagnostic(code(nuspec::archive::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed package archive `{}`: {reason}", .path.display())]
    #[diagnostic(
        code(nuspec::archive::malformed),
        help("The package may be truncated or corrupt; restore it again")
    )]
    MalformedArchive { path: PathBuf, reason: String },

    #[error("package archive `{}` contains no .nuspec manifest", .path.display())]
    #[diagnostic(code(nuspec::archive::no_manifest))]
    MissingManifestEntry { path: PathBuf },

    #[error("manifest is not well-formed XML: {message}")]
    #[diagnostic(code(nuspec::manifest::unparseable))]
    UnparseableManifest { message: String },

    #[error("invalid nuspec manifest: {message}")]
    #[diagnostic(
        code(nuspec::manifest::invalid),
        help("See https://docs.microsoft.com/en-us/nuget/reference/nuspec")
    )]
    InvalidManifest { message: String },

    #[error("`{moniker}` is not a target framework moniker")]
    #[diagnostic(
        code(nuspec::framework::invalid),
        help("Use a moniker such as `net472` or `netstandard2.0`")
    )]
    InvalidFramework { moniker: String },

    #[error("background task failed: {0}")]
    #[diagnostic(code(nuspec::task))]
    Task(String),
}

impl NuspecError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        NuspecError::InvalidManifest {
            message: message.into(),
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        NuspecError::MalformedArchive {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error stems from reading the package file rather than its manifest.
    pub fn is_archive_error(&self) -> bool {
        matches!(
            self,
            NuspecError::Io { .. }
                | NuspecError::MalformedArchive { .. }
                | NuspecError::MissingManifestEntry { .. }
        )
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            NuspecError::Io { path, source } => {
                Diagnostic::error(format!("could not read file: {}", source))
                    .with_location(path)
                    .with_suggestion("Check that the file exists and is readable")
            }

            NuspecError::MalformedArchive { path, reason } => {
                Diagnostic::error("package archive could not be opened")
                    .with_location(path)
                    .with_context(reason.clone())
                    .with_suggestion("Restore the package again; the archive may be truncated")
            }

            NuspecError::MissingManifestEntry { path } => {
                Diagnostic::error("package archive has no .nuspec entry")
                    .with_location(path)
                    .with_suggestion("Check that the file is a NuGet package")
            }

            NuspecError::UnparseableManifest { message } => {
                Diagnostic::error("manifest is not well-formed XML").with_context(message.clone())
            }

            NuspecError::InvalidManifest { message } => {
                Diagnostic::error("invalid nuspec manifest")
                    .with_context(message.clone())
                    .with_suggestion(
                        "See https://docs.microsoft.com/en-us/nuget/reference/nuspec",
                    )
            }

            NuspecError::InvalidFramework { moniker } => {
                Diagnostic::error(format!("`{}` is not a target framework moniker", moniker))
                    .with_suggestion("Use a moniker such as `net472` or `netstandard2.0`")
            }

            NuspecError::Task(message) => Diagnostic::error(format!(
                "background task failed: {}",
                message
            )),
        }
    }
}

impl From<tokio::task::JoinError> for NuspecError {
    fn from(err: tokio::task::JoinError) -> Self {
        NuspecError::Task(err.to_string())
    }
}

//! Dependency extraction from a validated manifest.
//!
//! Each `<dependencies>` section is read in three additive passes: the one
//! framework-scoped group selected for the target profile, every unscoped
//! group, and the dependencies listed outside any group.

use crate::core::{DependencyEntry, DependencyNode, TargetProfile};
use crate::resolver::document::RawManifestDocument;
use crate::resolver::errors::NuspecError;
use crate::resolver::schema::{DependencySection, NuspecManifest, RawEntry};
use crate::resolver::select::select_framework_group;

impl NuspecManifest {
    /// Flatten every metadata block's declarations for `profile`.
    pub fn dependencies_for(&self, profile: &TargetProfile) -> Vec<DependencyEntry> {
        self.metadata
            .iter()
            .flat_map(|block| block.dependencies.iter())
            .flat_map(|section| section.entries_for(profile))
            .collect()
    }
}

impl DependencySection {
    /// Entries in pass order: framework-scoped, unscoped, bare.
    pub fn entries_for(&self, profile: &TargetProfile) -> Vec<DependencyEntry> {
        let mut entries = Vec::new();

        if let Some(group) = select_framework_group(&self.groups, profile) {
            entries.extend(extract_entries(&group.entries));
        }

        for group in self.groups.iter().filter(|g| g.is_unscoped()) {
            entries.extend(extract_entries(&group.entries));
        }

        entries.extend(extract_entries(&self.bare));

        entries
    }
}

fn extract_entries(raw: &[RawEntry]) -> Vec<DependencyEntry> {
    raw.iter()
        .filter_map(|entry| {
            let converted = entry.to_entry();
            if converted.is_none() {
                tracing::trace!(
                    "Dropping dependency without id and version: {:?}",
                    entry
                );
            }
            converted
        })
        .collect()
}

/// Resolve manifest text into the dependency node of package `name`.
///
/// A manifest without `<dependencies>` yields a node with no children.
/// Malformed markup and shape violations are errors, never an empty node.
pub fn resolve_dependencies(
    text: &str,
    profile: &TargetProfile,
    name: &str,
) -> Result<DependencyNode, NuspecError> {
    let document = RawManifestDocument::parse(text)?;
    let manifest = NuspecManifest::from_document(&document)?;
    let children = manifest.dependencies_for(profile);

    tracing::debug!(
        "Resolved {} dependencies of {} for {}",
        children.len(),
        name,
        profile
    );

    Ok(DependencyNode::new(name, children))
}

/// Async form of [`resolve_dependencies`].
///
/// Parsing runs on the blocking pool so the caller's executor is not held
/// while the document is built.
pub async fn resolve_manifest(
    text: String,
    profile: TargetProfile,
    name: String,
) -> Result<DependencyNode, NuspecError> {
    tokio::task::spawn_blocking(move || resolve_dependencies(&text, &profile, &name)).await?
}

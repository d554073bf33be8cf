//! Validated nuspec structure.
//!
//! Lowers a [`RawManifestDocument`] into the parts of the nuspec schema that
//! declare dependencies. Every shape violation is reported here; nothing
//! downstream has to re-check the tree.

use crate::core::{DependencyEntry, FrameworkMoniker};
use crate::resolver::document::{RawElement, RawManifestDocument};
use crate::resolver::errors::NuspecError;

const PACKAGE: &str = "package";
const METADATA: &str = "metadata";
const DEPENDENCIES: &str = "dependencies";
const GROUP: &str = "group";
const DEPENDENCY: &str = "dependency";
const TARGET_FRAMEWORK: &str = "targetFramework";

/// The dependency-bearing parts of a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NuspecManifest {
    /// One entry per `<metadata>` element, in document order.
    pub metadata: Vec<MetadataBlock>,
}

/// A single `<metadata>` element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetadataBlock {
    /// Every `<dependencies>` element of the block.
    pub dependencies: Vec<DependencySection>,
}

/// A `<dependencies>` element: groups plus dependencies listed outside any group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencySection {
    pub groups: Vec<DependencyGroup>,
    pub bare: Vec<RawEntry>,
}

/// How a `<group>` is scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupScope {
    /// `targetFramework` present and shaped like a moniker.
    Framework(FrameworkMoniker),
    /// No `targetFramework` attribute (or an empty one).
    Unscoped,
    /// `targetFramework` present but not a recognizable moniker.
    Unrecognized(String),
}

/// A `<group>` element and its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGroup {
    pub scope: GroupScope,
    pub entries: Vec<RawEntry>,
}

/// Attribute bag of a `<dependency>` element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawEntry {
    pub id: Option<String>,
    pub version: Option<String>,
}

impl RawEntry {
    fn from_element(element: &RawElement) -> Self {
        RawEntry {
            id: element.attribute("id").map(str::to_string),
            version: element.attribute("version").map(str::to_string),
        }
    }

    /// Convert to a dependency record. Entries lacking an id or a version yield `None`.
    ///
    /// An attribute that is present but empty still counts; `version=""`
    /// declares no version constraint.
    pub fn to_entry(&self) -> Option<DependencyEntry> {
        let id = self.id.as_deref()?;
        let version = self.version.as_deref()?;
        Some(DependencyEntry::new(id, version))
    }
}

impl NuspecManifest {
    /// Validate a raw document against the nuspec shape.
    pub fn from_document(document: &RawManifestDocument) -> Result<Self, NuspecError> {
        let root = &document.root;
        if root.name != PACKAGE {
            return Err(NuspecError::invalid(format!(
                "the root element must be `{}`, found `{}`",
                PACKAGE, root.name
            )));
        }

        let blocks: Vec<&RawElement> = root.elements_named(METADATA).collect();
        if blocks.is_empty() {
            return Err(NuspecError::invalid(
                "the `metadata` element is missing; it is a required element",
            ));
        }

        let metadata = blocks
            .into_iter()
            .map(MetadataBlock::from_element)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NuspecManifest { metadata })
    }
}

impl MetadataBlock {
    fn from_element(element: &RawElement) -> Result<Self, NuspecError> {
        if !element.is_element_collection() {
            return Err(NuspecError::invalid(
                "expected `metadata` to be a collection of elements, but it holds text",
            ));
        }

        let dependencies = element
            .elements_named(DEPENDENCIES)
            .map(DependencySection::from_element)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MetadataBlock { dependencies })
    }
}

impl DependencySection {
    fn from_element(element: &RawElement) -> Result<Self, NuspecError> {
        if !element.is_element_collection() {
            return Err(NuspecError::invalid(
                "expected `dependencies` to be a collection of groups and dependencies, but it holds text",
            ));
        }

        let groups = element
            .elements_named(GROUP)
            .map(DependencyGroup::from_element)
            .collect();

        let bare = element
            .elements_named(DEPENDENCY)
            .map(RawEntry::from_element)
            .collect();

        Ok(DependencySection { groups, bare })
    }
}

impl DependencyGroup {
    fn from_element(element: &RawElement) -> Self {
        let scope = match element.attribute(TARGET_FRAMEWORK) {
            None | Some("") => GroupScope::Unscoped,
            Some(tfm) => match FrameworkMoniker::parse(tfm) {
                Some(moniker) => GroupScope::Framework(moniker),
                None => GroupScope::Unrecognized(tfm.to_string()),
            },
        };

        let entries = element
            .elements_named(DEPENDENCY)
            .map(RawEntry::from_element)
            .collect();

        DependencyGroup { scope, entries }
    }

    /// The moniker of a framework-scoped group.
    pub fn moniker(&self) -> Option<&FrameworkMoniker> {
        match &self.scope {
            GroupScope::Framework(moniker) => Some(moniker),
            GroupScope::Unscoped | GroupScope::Unrecognized(_) => None,
        }
    }

    pub fn is_unscoped(&self) -> bool {
        matches!(self.scope, GroupScope::Unscoped)
    }
}

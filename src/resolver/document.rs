//! Owned markup tree for a parsed manifest.
//!
//! The DOM produced by `sxd_document` borrows from its arena, so it is
//! lowered into plain owned nodes before any validation happens. Element
//! names are stored by local part: nuspec files carry a versioned default
//! namespace that differs between NuGet releases.

use sxd_document::dom::{ChildOfElement, ChildOfRoot, Element};
use sxd_document::parser;

use crate::resolver::errors::NuspecError;

/// A node of the raw manifest tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawNode {
    Element(RawElement),
    Text(String),
}

/// An element with its attribute bag and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<RawNode>,
}

impl RawElement {
    /// Look up an attribute by local name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &RawElement> {
        self.children.iter().filter_map(|child| match child {
            RawNode::Element(e) => Some(e),
            RawNode::Text(_) => None,
        })
    }

    /// Child elements with the given local name.
    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a RawElement> {
        self.elements().filter(move |e| e.name == name)
    }

    /// Whether the element can be read as a collection of child elements.
    ///
    /// Empty elements and elements holding only whitespace qualify. An element
    /// whose content is bare text does not.
    pub fn is_element_collection(&self) -> bool {
        let has_elements = self.elements().next().is_some();
        let has_text = self.children.iter().any(|child| match child {
            RawNode::Text(t) => !t.trim().is_empty(),
            RawNode::Element(_) => false,
        });
        has_elements || !has_text
    }
}

/// A manifest parsed into an owned tree, not yet validated against the
/// nuspec schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawManifestDocument {
    pub root: RawElement,
}

impl RawManifestDocument {
    /// Parse manifest text.
    pub fn parse(text: &str) -> Result<Self, NuspecError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let package = parser::parse(text).map_err(|e| NuspecError::UnparseableManifest {
            message: format!("{:?}", e),
        })?;
        let document = package.as_document();

        let root = document
            .root()
            .children()
            .into_iter()
            .find_map(|child| match child {
                ChildOfRoot::Element(e) => Some(e),
                _ => None,
            })
            .ok_or_else(|| NuspecError::UnparseableManifest {
                message: "document has no root element".to_string(),
            })?;

        Ok(RawManifestDocument { root: lower(root) })
    }
}

fn lower(element: Element<'_>) -> RawElement {
    let attributes = element
        .attributes()
        .into_iter()
        .map(|attr| (attr.name().local_part().to_string(), attr.value().to_string()))
        .collect();

    let children = element
        .children()
        .into_iter()
        .filter_map(|child| match child {
            ChildOfElement::Element(e) => Some(RawNode::Element(lower(e))),
            ChildOfElement::Text(t) => Some(RawNode::Text(t.text().to_string())),
            _ => None,
        })
        .collect();

    RawElement {
        name: element.name().local_part().to_string(),
        attributes,
        children,
    }
}

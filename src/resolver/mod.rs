//! Manifest resolution.
//!
//! Turns `.nuspec` text into the flat dependency list of one package for one
//! target framework. Parsing, validation and extraction are separate stages:
//! [`document`] builds an owned markup tree, [`schema`] checks its shape, and
//! [`resolve`] walks the validated sections.

pub mod document;
pub mod errors;
pub mod resolve;
pub mod schema;
pub mod select;

pub use errors::NuspecError;
pub use resolve::{resolve_dependencies, resolve_manifest};
pub use schema::NuspecManifest;

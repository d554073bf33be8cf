//! High-level operations.
//!
//! This module contains the implementation of nuspec-deps commands.

pub mod inspect;

pub use inspect::{parse_nuspec, parse_nuspec_file};

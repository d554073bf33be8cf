//! Package sources.
//!
//! Sources turn a located package into the text of its manifest.

pub mod nupkg;

pub use nupkg::{load_manifest, read_manifest};

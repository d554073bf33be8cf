//! Test utilities for nuspec-deps unit tests.
//!
//! Provides builders for manifest text and package archives so tests can
//! lay out a packages folder in a temporary directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use nuspec_deps::test_support::{write_nupkg, NupkgFixture, NuspecFixture};
//!
//! let nuspec = NuspecFixture::new("Foo", "1.0.0")
//!     .dependency("Newtonsoft.Json", "12.0.1")
//!     .to_xml();
//! write_nupkg(&dir.join("Foo.1.0.0.nupkg"), &NupkgFixture::new().file("Foo.nuspec", nuspec));
//! ```

pub mod fixtures;

pub use fixtures::*;

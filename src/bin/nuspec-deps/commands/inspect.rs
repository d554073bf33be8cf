//! `nuspec-deps inspect` command

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use super::{load_settings, output_format, print_node, target_profile};
use crate::cli::{InspectArgs, OutputFormat};
use nuspec_deps::util::diagnostic::suggestions;
use nuspec_deps::{parse_nuspec, PackageReference};

const DEFAULT_PACKAGES_DIR: &str = "packages";

pub async fn execute(args: InspectArgs) -> Result<()> {
    let config = load_settings()?;
    let profile = target_profile(args.framework, &config)?;
    let format = output_format(args.format, &config)?;

    let packages_dir = args
        .packages_dir
        .or_else(|| config.resolve.packages_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PACKAGES_DIR));

    if !packages_dir.is_dir() {
        bail!(
            "packages directory `{}` does not exist\n{}",
            packages_dir.display(),
            suggestions::NO_PACKAGES_DIR
        );
    }

    let location = package_location(&packages_dir, &args.name, &args.version);
    let pkg = PackageReference::new(args.name, args.version, location);

    match parse_nuspec(&pkg, &profile).await? {
        Some(node) => print_node(&node, &profile, format)?,
        None => {
            tracing::warn!("No archive found for {} at {}", pkg, pkg.archive_path().display());
            if format == OutputFormat::Json {
                println!("null");
            }
        }
    }

    Ok(())
}

/// Where a package's archive lives inside a packages folder.
///
/// `packages.config` restores into `{dir}/{name}.{version}/`; flat folders
/// hold the archive directly.
fn package_location(packages_dir: &Path, name: &str, version: &str) -> PathBuf {
    let nested = packages_dir.join(format!("{}.{}", name, version));
    if nested.is_dir() {
        nested
    } else {
        packages_dir.to_path_buf()
    }
}

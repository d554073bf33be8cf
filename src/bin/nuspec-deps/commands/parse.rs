//! `nuspec-deps parse` command

use anyhow::{Context, Result};

use super::{load_settings, output_format, print_node, target_profile};
use crate::cli::ParseArgs;
use nuspec_deps::parse_nuspec_file;

pub async fn execute(args: ParseArgs) -> Result<()> {
    let config = load_settings()?;
    let profile = target_profile(args.framework, &config)?;
    let format = output_format(args.format, &config)?;

    let name = match args.name {
        Some(name) => name,
        None => args
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .with_context(|| format!("cannot derive a package name from `{}`", args.path.display()))?,
    };

    let node = parse_nuspec_file(&args.path, &profile, &name).await?;
    print_node(&node, &profile, format)
}

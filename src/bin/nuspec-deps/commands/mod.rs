//! Command implementations

pub mod completions;
pub mod inspect;
pub mod parse;

use anyhow::{bail, Context, Result};

use crate::cli::OutputFormat;
use nuspec_deps::util::config::{global_config_path, load_config, project_config_path};
use nuspec_deps::util::diagnostic::suggestions;
use nuspec_deps::util::Config;
use nuspec_deps::{DependencyNode, TargetProfile};

/// Load merged global and project configuration for the current directory.
pub fn load_settings() -> Result<Config> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let global = global_config_path();
    Ok(load_config(global.as_deref(), &project_config_path(&cwd)))
}

/// Pick the target profile from the command line or config.
pub fn target_profile(flag: Option<String>, config: &Config) -> Result<TargetProfile> {
    let Some(moniker) = flag.or_else(|| config.resolve.target_framework.clone()) else {
        bail!("no target framework given\n{}", suggestions::NO_FRAMEWORK);
    };

    Ok(moniker.parse::<TargetProfile>()?)
}

/// Pick the output format from the command line or config.
pub fn output_format(flag: Option<OutputFormat>, config: &Config) -> Result<OutputFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }

    match config.output.format.as_deref() {
        None | Some("text") => Ok(OutputFormat::Text),
        Some("json") => Ok(OutputFormat::Json),
        Some(other) => bail!("unknown output format `{}` in config (expected `text` or `json`)", other),
    }
}

/// Print a resolved node.
pub fn print_node(node: &DependencyNode, profile: &TargetProfile, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(node)
                .context("failed to serialize dependency node")?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", render_tree(node, profile)),
    }
    Ok(())
}

fn render_tree(node: &DependencyNode, profile: &TargetProfile) -> String {
    let mut output = format!("{} ({})\n", node.name, profile);

    let last = node.children.len().saturating_sub(1);
    for (i, child) in node.children.iter().enumerate() {
        let branch = if i == last { "└── " } else { "├── " };
        output.push_str(&format!("{}{} {}\n", branch, child.id, child.version));
    }

    output
}

//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// nuspec-deps - declared dependencies of NuGet packages
#[derive(Parser)]
#[command(name = "nuspec-deps")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dependencies of a restored .nupkg
    Inspect(InspectArgs),

    /// Show the dependencies declared in a .nuspec file
    Parse(ParseArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for resolved dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Package id
    pub name: String,

    /// Package version
    pub version: String,

    /// Directory holding restored packages (defaults to `packages`)
    #[arg(long)]
    pub packages_dir: Option<PathBuf>,

    /// Target framework moniker (e.g. net472, netstandard2.0)
    #[arg(short, long, env = "NUSPEC_DEPS_FRAMEWORK")]
    pub framework: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Args)]
pub struct ParseArgs {
    /// Path to the .nuspec file
    pub path: PathBuf,

    /// Package name to report (defaults to the file stem)
    #[arg(long)]
    pub name: Option<String>,

    /// Target framework moniker (e.g. net472, netstandard2.0)
    #[arg(short, long, env = "NUSPEC_DEPS_FRAMEWORK")]
    pub framework: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

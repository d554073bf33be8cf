//! nuspec-deps CLI - declared dependencies of NuGet packages

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use nuspec_deps::util::diagnostic::emit;
use nuspec_deps::NuspecError;

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<NuspecError>() {
            Some(err) => emit(&err.to_diagnostic(), color),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("nuspec_deps=debug")
    } else {
        EnvFilter::new("nuspec_deps=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    match cli.command {
        Commands::Inspect(args) => runtime.block_on(commands::inspect::execute(args)),
        Commands::Parse(args) => runtime.block_on(commands::parse::execute(args)),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

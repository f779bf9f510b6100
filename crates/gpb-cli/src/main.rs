//! # gpb CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Gantry Engine for Paintbox configuration toolchain.
///
/// Loads an engine manifest, compiles its configuration schema, and
/// validates or resolves operator settings documents against it.
#[derive(Parser, Debug)]
#[command(name = "gpb", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Check a settings document against a manifest's schema.
    Validate(gpb_cli::validate::ValidateArgs),
    /// Validate and print the fully resolved settings as JSON.
    Resolve(gpb_cli::resolve::ResolveArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => gpb_cli::validate::run(&args),
        Commands::Resolve(args) => gpb_cli::resolve::run(&args),
    }
}

//! # Resolve Subcommand
//!
//! Validates a settings document and prints the resolved configuration
//! (supplied values plus declared defaults) as pretty JSON.

use crate::input;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the resolve subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to the engine manifest (engine.yml).
    #[arg(long, value_name = "FILE")]
    pub manifest: PathBuf,

    /// Settings document to resolve; omitted means the empty document.
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,
}

/// Run `gpb resolve`.
pub fn run(args: &ResolveArgs) -> anyhow::Result<()> {
    let manifest = input::load_manifest(&args.manifest)?;
    let schema = manifest.config_schema()?;
    let document = input::load_settings(args.settings.as_deref())?;

    let resolved = schema.validate(&document)?;
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

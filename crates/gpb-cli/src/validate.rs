//! # Validate Subcommand
//!
//! Checks a settings document against a manifest's configuration
//! schema, reporting every violation at once.

use crate::input;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the engine manifest (engine.yml).
    #[arg(long, value_name = "FILE")]
    pub manifest: PathBuf,

    /// Settings document to validate; omitted means the empty document.
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,
}

/// Run `gpb validate`.
pub fn run(args: &ValidateArgs) -> anyhow::Result<()> {
    let manifest = input::load_manifest(&args.manifest)?;
    let schema = manifest.config_schema()?;
    let document = input::load_settings(args.settings.as_deref())?;

    let resolved = schema.validate(&document)?;
    println!(
        "OK: {} of {} options supplied, {} resolved",
        document.len(),
        schema.option_count(),
        resolved.len()
    );
    Ok(())
}

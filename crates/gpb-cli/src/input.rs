//! # Input Loading
//!
//! Shared loading for the `--manifest` and `--settings` arguments.
//! An omitted settings path means the empty document, which checks
//! whether the schema's defaults alone resolve.

use anyhow::{bail, Context};
use gpb_manifest::EngineManifest;
use gpb_schema::ConfigDocument;
use std::path::Path;
use tracing::debug;

/// Load and parse the engine manifest named by `--manifest`.
pub fn load_manifest(path: &Path) -> anyhow::Result<EngineManifest> {
    EngineManifest::load(path).with_context(|| format!("manifest {}", path.display()))
}

enum Format {
    Yaml,
    Json,
}

/// Load the settings document named by `--settings`, or the empty
/// document when the flag is omitted.
///
/// The parser is chosen by file extension; anything other than `.yml`,
/// `.yaml`, or `.json` is refused before the file is read.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<ConfigDocument> {
    let Some(path) = path else {
        debug!("no settings document supplied, validating the empty document");
        return Ok(ConfigDocument::new());
    };

    let format = match path.extension().and_then(|e| e.to_str()) {
        Some("yml") | Some("yaml") => Format::Yaml,
        Some("json") => Format::Json,
        _ => bail!(
            "unsupported settings extension for {} (expected .yml, .yaml, or .json)",
            path.display()
        ),
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read settings document {}", path.display()))?;
    let document = match format {
        Format::Yaml => ConfigDocument::from_yaml_str(&text),
        Format::Json => ConfigDocument::from_json_str(&text),
    }
    .with_context(|| format!("settings document {}", path.display()))?;

    debug!(
        path = %path.display(),
        keys = document.len(),
        "loaded settings document"
    );
    Ok(document)
}

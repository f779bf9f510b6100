//! # Engine Manifest — What the Host Consumes
//!
//! The manifest (`engine.yml`) is the declarative surface of the engine
//! package: it tells the plugin host which configuration options exist,
//! what platform fields and versions the engine needs, and how to present
//! the engine to users. This module models the known sections and carries
//! every unknown top-level section through untouched.
//!
//! ## Known sections
//!
//! - `display_name` / `description` — presentation text.
//! - `configuration` — option declarations; compiled on demand into a
//!   [`ConfigSchema`] via [`EngineManifest::config_schema`].
//! - `requires_gantry_fields` — platform field names the engine needs;
//!   opaque to this package.
//! - `requires_gantry_version` / `requires_core_version` — constraint
//!   strings for the host's compatibility checks; stored verbatim and
//!   never parsed here.
//!
//! ## Unknown sections
//!
//! Anything else is an opaque pass-through: preserved on round-trip,
//! never validated. Hosts own the meaning of their extra sections.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use gpb_schema::{ConfigSchema, OptionDecl};

use crate::error::ManifestError;

/// Conventional file name of an engine manifest.
pub const MANIFEST_FILE_NAME: &str = "engine.yml";

/// One engine package's manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineManifest {
    /// Name shown to users in the host's integration chooser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// One-paragraph description of the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Option declarations, keyed by option name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub configuration: BTreeMap<String, OptionDecl>,
    /// Platform fields the engine requires; `null` and omission both
    /// mean none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_gantry_fields: Option<Vec<String>>,
    /// Minimum platform version constraint, verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_gantry_version: Option<String>,
    /// Minimum pipeline-core version constraint, verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_core_version: Option<String>,
    /// Every top-level section this package does not interpret.
    #[serde(flatten)]
    pub extra_sections: BTreeMap<String, serde_yaml::Value>,
}

impl EngineManifest {
    /// Parse a manifest from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ManifestError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let manifest = Self::from_yaml_str(&text)?;
        debug!(
            path = %path.display(),
            options = manifest.configuration.len(),
            "loaded engine manifest"
        );
        Ok(manifest)
    }

    /// Compile the `configuration:` section into its descriptor table.
    ///
    /// # Errors
    ///
    /// [`ManifestError::Schema`] when a declaration cannot be compiled.
    pub fn config_schema(&self) -> Result<ConfigSchema, ManifestError> {
        Ok(ConfigSchema::compile(&self.configuration)?)
    }

    /// Platform fields the engine requires; empty when the section is
    /// null or absent.
    pub fn required_fields(&self) -> &[String] {
        self.requires_gantry_fields.as_deref().unwrap_or(&[])
    }
}

//! Error type for manifest and stylesheet loading.

use gpb_schema::SchemaError;

/// Failure to load or interpret an engine manifest or its resources.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The manifest text is not valid YAML, or carries values outside
    /// the configuration value domain.
    #[error("engine manifest is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The `configuration:` section does not compile into a descriptor
    /// table.
    #[error("engine manifest declares an invalid configuration schema: {0}")]
    Schema(#[from] SchemaError),
}

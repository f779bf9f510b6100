//! # Configuration Documents — Operator-Supplied Settings
//!
//! A `ConfigDocument` is the key/value mapping an operator authors for one
//! engine instance, parsed from YAML or JSON. Parsing goes through the
//! [`ConfigValue`] deserializer, so anything outside the value domain
//! (floats, nulls, non-mapping top levels) fails here as a
//! [`DocumentError`] — by the time a document reaches the validator,
//! every value is representable and only schema conformance is left to
//! check.
//!
//! Documents are built once per host-session load and treated as
//! read-only input afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gpb_core::ConfigValue;

/// An operator-supplied settings mapping, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument(BTreeMap<String, ConfigValue>);

impl ConfigDocument {
    /// An empty document: every option will resolve from its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from YAML text.
    ///
    /// Whitespace-only input is the empty document. A non-mapping top
    /// level or a value outside the value domain is a parse error.
    pub fn from_yaml_str(text: &str) -> Result<Self, DocumentError> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parse a document from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Sets one key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Looks up a supplied value.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// True if the key was supplied.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Supplied keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Supplied entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of supplied keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no keys were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, ConfigValue>> for ConfigDocument {
    fn from(entries: BTreeMap<String, ConfigValue>) -> Self {
        Self(entries)
    }
}

/// A settings document that could not be parsed into the value domain.
///
/// Distinct from validation: these inputs never reach the validator.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The text is not valid YAML, or carries values outside the domain.
    #[error("settings document is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The text is not valid JSON, or carries values outside the domain.
    #[error("settings document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

//! # Stylesheet Resource — Verbatim Pass-Through
//!
//! The engine ships a widget stylesheet (`style.qss`) that the host's UI
//! toolkit applies to dialogs rendered inside the creative application.
//! This package does not parse, validate, or rewrite it: the resource is
//! an opaque blob handed to the host byte-for-byte. Selector syntax,
//! property names, and ordering are entirely the toolkit's business.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ManifestError;

/// Conventional file name of the engine stylesheet.
pub const STYLE_FILE_NAME: &str = "style.qss";

/// The engine's dialog stylesheet, carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    source: String,
}

impl StyleSheet {
    /// Wrap stylesheet text as-is.
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a stylesheet file, untouched.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "loaded stylesheet");
        Ok(Self { source })
    }

    /// The stylesheet text, exactly as authored.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Length of the stylesheet in bytes.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// True for a zero-length stylesheet.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

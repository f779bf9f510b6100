//! # gpb-manifest — The Engine Package Surface
//!
//! Models the two artifacts an engine package ships to its host: the
//! declarative manifest (`engine.yml`) and the dialog stylesheet
//! (`style.qss`).
//!
//! The manifest's `configuration:` section feeds `gpb-schema`; its
//! compatibility metadata is stored verbatim for the host; unknown
//! sections pass through opaquely. The stylesheet is never interpreted
//! at all — byte-for-byte fidelity is the contract.
//!
//! ## Crate Policy
//!
//! - Depends on `gpb-core` and `gpb-schema` internally.
//! - No `unsafe`, no panics outside tests.

pub mod error;
pub mod manifest;
pub mod style;

pub use error::ManifestError;
pub use manifest::{EngineManifest, MANIFEST_FILE_NAME};
pub use style::{StyleSheet, STYLE_FILE_NAME};

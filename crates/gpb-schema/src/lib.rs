//! # gpb-schema — Configuration Schema & Validation
//!
//! Everything between an authored `configuration:` section and a usable
//! settings mapping: declaration parsing, one-time compilation into a
//! typed descriptor table, and single-pass validation with aggregated,
//! path-tagged violations.
//!
//! ## Declarations (`decl`)
//!
//! The [`decl`] module models the manifest syntax verbatim: per-option
//! `type`, optional `default_value`, `allows_empty`, and nested item
//! declarations, exactly as schema authors write them.
//!
//! ## Descriptor Table (`descriptor`)
//!
//! [`ConfigSchema::compile`] resolves declarations once, at startup, into
//! typed descriptors. Nonsense declarations (constraints on kinds they
//! cannot apply to, defaults of the wrong kind) are rejected here, before
//! any document is seen.
//!
//! ## Validation (`validate`, `document`)
//!
//! [`ConfigSchema::validate`] checks a [`ConfigDocument`] in one pass and
//! either resolves every option (supplied value or verbatim default) into
//! a [`ResolvedConfig`] or fails with every violation found, each tagged
//! with its key path. The schema is closed: undeclared document keys are
//! violations, not pass-through.
//!
//! ## Crate Policy
//!
//! - Depends only on `gpb-core` internally.
//! - Validation is a trust boundary: malformed documents are rejected
//!   with structured violations carrying path and expected-vs-found.
//! - No `unsafe`, no panics outside tests.

pub mod decl;
pub mod descriptor;
pub mod document;
pub mod validate;

pub use decl::{FieldDecl, ItemDecl, OptionDecl};
pub use descriptor::{ConfigSchema, ItemSpec, KindSpec, OptionDescriptor, SchemaError};
pub use document::{ConfigDocument, DocumentError};
pub use validate::{ConfigValidationError, ResolvedConfig, Violation, Violations};

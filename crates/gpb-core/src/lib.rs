//! # gpb-core — Foundational Types for the Gantry Engine for Paintbox
//!
//! This crate is the bedrock of the engine's configuration package. It
//! defines the value domain and addressing primitives that the schema
//! validator and the manifest loader are built on. Every other crate in
//! the workspace depends on `gpb-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One kind tag.** `OptionKind` is the single definition of the five
//!    option kinds (`bool`, `int`, `str`, `list`, `dict`). Exhaustive
//!    `match` everywhere; adding a kind forces every consumer to handle it.
//!
//! 2. **A closed value domain.** `ConfigValue` is the only value type in
//!    the package. Floats, nulls, and non-string mapping keys are rejected
//!    at the deserialization boundary, so validation downstream is a
//!    dispatch over the variant tag, never a runtime type inspection.
//!
//! 3. **Paths for every diagnostic.** `KeyPath` renders the
//!    dotted/indexed location (`menu_favourites[0].app_instance`) attached
//!    to each validation violation.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gpb-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`.

pub mod kind;
pub mod path;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use kind::{OptionKind, UnknownKindError, OPTION_KIND_COUNT};
pub use path::{KeyPath, PathSegment};
pub use value::{ConfigValue, ValueError};

//! # Option Kinds — Single Source of Truth
//!
//! Defines the `OptionKind` enum with the five kinds a configuration
//! option can declare. This is the ONE definition used across the entire
//! package. Every `match` on `OptionKind` must be exhaustive — adding a
//! new kind forces every consumer to handle it at compile time.
//!
//! The wire names (`bool`, `int`, `str`, `list`, `dict`) are what a
//! manifest author writes under `type:` and what every diagnostic prints.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The declared kind of a configuration option.
///
/// Collection kinds (`List`, `Dict`) can additionally carry an
/// allows-empty flag and a nested item schema in their declaration; the
/// scalar kinds cannot. That refinement lives in the schema crate — this
/// enum is only the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// A true/false flag.
    Bool,
    /// A signed integer (64-bit).
    Int,
    /// A text value.
    Str,
    /// An ordered sequence of values.
    List,
    /// A string-keyed mapping of values.
    Dict,
}

/// Total number of option kinds. Used for exhaustiveness assertions.
pub const OPTION_KIND_COUNT: usize = 5;

impl OptionKind {
    /// Returns all kinds in declaration order.
    pub fn all_kinds() -> &'static [OptionKind] {
        &[Self::Bool, Self::Int, Self::Str, Self::List, Self::Dict]
    }

    /// Returns the wire-format identifier for this kind.
    ///
    /// This must match the serde serialization format and the `type:`
    /// values accepted in engine manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Str => "str",
            Self::List => "list",
            Self::Dict => "dict",
        }
    }

    /// Returns true for the collection kinds (`list`, `dict`).
    ///
    /// Only collection kinds may declare `allows_empty` or a nested item
    /// schema.
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::List | Self::Dict)
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the five kind identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown option kind {0:?}; expected one of bool, int, str, list, dict")]
pub struct UnknownKindError(pub String);

impl FromStr for OptionKind {
    type Err = UnknownKindError;

    /// Parse an option kind from its wire identifier.
    ///
    /// Accepts the same identifiers produced by [`OptionKind::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bool" => Ok(Self::Bool),
            "int" => Ok(Self::Int),
            "str" => Ok(Self::Str),
            "list" => Ok(Self::List),
            "dict" => Ok(Self::Dict),
            other => Err(UnknownKindError(other.to_string())),
        }
    }
}

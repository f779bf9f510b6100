//! # Option Declarations — Manifest Syntax
//!
//! The serde models for the `configuration:` section of an engine
//! manifest, one entry per configurable key, exactly as a schema author
//! writes them:
//!
//! ```yaml
//! menu_favourites:
//!     type: list
//!     allows_empty: true
//!     default_value: []
//!     values:
//!         type: dict
//!         items:
//!             name: { type: str }
//!             app_instance: { type: str }
//! ```
//!
//! These structs stay faithful to the authored syntax and carry no
//! behavior; [`ConfigSchema::compile`](crate::ConfigSchema::compile)
//! resolves them once into the typed descriptor table that validation
//! dispatches over. Unknown attributes inside a declaration are ignored —
//! the closed-schema contract applies to settings documents, not to the
//! declaration syntax itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gpb_core::{ConfigValue, OptionKind};

/// One configuration option declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDecl {
    /// The declared kind of the option's value.
    #[serde(rename = "type")]
    pub kind: OptionKind,
    /// Free-text documentation shown to schema consumers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Value substituted verbatim when the key is absent from a settings
    /// document. An option with no default is required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ConfigValue>,
    /// Whether an explicitly supplied empty collection is acceptable.
    /// Only meaningful for `list` and `dict` kinds; undeclared means `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allows_empty: Option<bool>,
    /// For `list` kinds: the declaration each element must satisfy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<ItemDecl>,
    /// For `dict` kinds: the declared fields of the mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<BTreeMap<String, FieldDecl>>,
}

impl OptionDecl {
    /// A bare declaration of the given kind: no default, no constraints.
    pub fn new(kind: OptionKind) -> Self {
        Self {
            kind,
            description: None,
            default_value: None,
            allows_empty: None,
            values: None,
            items: None,
        }
    }

    /// Sets the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default value, making the option optional.
    pub fn with_default(mut self, default: impl Into<ConfigValue>) -> Self {
        self.default_value = Some(default.into());
        self
    }

    /// Sets the allows-empty flag.
    pub fn with_allows_empty(mut self, allows_empty: bool) -> Self {
        self.allows_empty = Some(allows_empty);
        self
    }

    /// Sets the per-element declaration for a `list` option.
    pub fn with_values(mut self, values: ItemDecl) -> Self {
        self.values = Some(values);
        self
    }

    /// Sets the declared fields for a `dict` option.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = (S, OptionKind)>,
        S: Into<String>,
    {
        self.items = Some(
            items
                .into_iter()
                .map(|(name, kind)| (name.into(), FieldDecl { kind }))
                .collect(),
        );
        self
    }
}

/// The per-element declaration of a `list` option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDecl {
    /// The kind every element must have.
    #[serde(rename = "type")]
    pub kind: OptionKind,
    /// When elements are dicts: the fields each element must carry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<BTreeMap<String, FieldDecl>>,
}

impl ItemDecl {
    /// An element declaration with no nested fields.
    pub fn new(kind: OptionKind) -> Self {
        Self { kind, items: None }
    }

    /// Sets the fields each dict element must carry.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = (S, OptionKind)>,
        S: Into<String>,
    {
        self.items = Some(
            items
                .into_iter()
                .map(|(name, kind)| (name.into(), FieldDecl { kind }))
                .collect(),
        );
        self
    }
}

/// The declaration of one field inside a nested item: just its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// The kind the field's value must have.
    #[serde(rename = "type")]
    pub kind: OptionKind,
}

impl FieldDecl {
    /// A field of the given kind.
    pub fn new(kind: OptionKind) -> Self {
        Self { kind }
    }
}

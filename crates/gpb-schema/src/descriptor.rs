//! # Descriptor Table — Declarations Resolved Once
//!
//! `ConfigSchema::compile()` turns the authored [`OptionDecl`] mappings
//! into a table of typed descriptors, built once at startup. After
//! compilation every constraint is an explicit field: the allows-empty
//! flag has a concrete `bool`, the default is an explicit `Option`, and
//! nested item constraints are resolved `ItemSpec` values. Validation
//! never looks at the raw declaration syntax again.
//!
//! Compilation also rejects declarations that cannot mean anything:
//! `allows_empty` on a scalar, item schemas on the wrong kind, or a
//! default whose kind tag contradicts the declared kind. Those are schema
//! authoring bugs, so they surface one at a time as [`SchemaError`] —
//! aggregation is a promise made to operators about settings documents,
//! not to schema authors.

use std::collections::BTreeMap;

use gpb_core::{ConfigValue, OptionKind};

use crate::decl::{FieldDecl, ItemDecl, OptionDecl};

/// The compiled kind of one option, with its collection constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindSpec {
    /// A true/false flag.
    Bool,
    /// A signed 64-bit integer.
    Int,
    /// A text value.
    Str,
    /// An ordered sequence, optionally constrained per element.
    List {
        /// Whether an explicitly supplied empty list is acceptable.
        allows_empty: bool,
        /// The constraint each element must satisfy, when declared.
        item: Option<ItemSpec>,
    },
    /// A string-keyed mapping, optionally with declared fields.
    Dict {
        /// Whether an explicitly supplied empty dict is acceptable.
        allows_empty: bool,
        /// The declared fields of the mapping, when any.
        fields: Option<BTreeMap<String, OptionKind>>,
    },
}

impl KindSpec {
    /// Returns the kind tag this spec checks against.
    pub fn kind(&self) -> OptionKind {
        match self {
            Self::Bool => OptionKind::Bool,
            Self::Int => OptionKind::Int,
            Self::Str => OptionKind::Str,
            Self::List { .. } => OptionKind::List,
            Self::Dict { .. } => OptionKind::Dict,
        }
    }
}

/// The compiled per-element constraint of a list option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    /// The kind every element must have.
    pub kind: OptionKind,
    /// For dict elements: the fields each element must carry and their kinds.
    pub fields: Option<BTreeMap<String, OptionKind>>,
}

/// One compiled option: everything validation needs, nothing it has to
/// re-derive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    name: String,
    spec: KindSpec,
    default: Option<ConfigValue>,
    description: Option<String>,
}

impl OptionDescriptor {
    /// The option's name (the settings document key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The option's kind tag.
    pub fn kind(&self) -> OptionKind {
        self.spec.kind()
    }

    /// The compiled kind with its collection constraints.
    pub fn spec(&self) -> &KindSpec {
        &self.spec
    }

    /// The declared default, substituted verbatim for absent keys.
    pub fn default(&self) -> Option<&ConfigValue> {
        self.default.as_ref()
    }

    /// The declaration's free-text description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// True when the option must appear in every settings document.
    ///
    /// An option is required exactly when it declares no default: a
    /// resolved configuration is total over the schema, so an absent key
    /// with no default has nothing to resolve to.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// The compiled descriptor table for one engine's configuration section.
///
/// Descriptors are keyed by option name and iterate in sorted order, so
/// every downstream report is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSchema {
    options: BTreeMap<String, OptionDescriptor>,
}

impl ConfigSchema {
    /// Compile a declaration mapping into the typed descriptor table.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] encountered: a constraint
    /// declared on a kind it cannot apply to, or a default whose kind tag
    /// mismatches the declared kind.
    pub fn compile(decls: &BTreeMap<String, OptionDecl>) -> Result<Self, SchemaError> {
        let mut options = BTreeMap::new();
        for (name, decl) in decls {
            options.insert(name.clone(), compile_option(name, decl)?);
        }
        Ok(Self { options })
    }

    /// Compile from `(name, declaration)` pairs; convenience for hosts
    /// that build schemas programmatically.
    pub fn from_decls<I, S>(decls: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (S, OptionDecl)>,
        S: Into<String>,
    {
        let map: BTreeMap<String, OptionDecl> = decls
            .into_iter()
            .map(|(name, decl)| (name.into(), decl))
            .collect();
        Self::compile(&map)
    }

    /// Number of declared options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Sorted option names.
    pub fn option_names(&self) -> Vec<&str> {
        self.options.keys().map(String::as_str).collect()
    }

    /// Looks up one descriptor by option name.
    pub fn get_option(&self, name: &str) -> Option<&OptionDescriptor> {
        self.options.get(name)
    }

    /// Iterates descriptors in sorted name order.
    pub fn options(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.options.values()
    }
}

fn compile_option(name: &str, decl: &OptionDecl) -> Result<OptionDescriptor, SchemaError> {
    if decl.allows_empty.is_some() && !decl.kind.is_collection() {
        return Err(SchemaError::AllowsEmptyNotApplicable {
            option: name.to_string(),
            kind: decl.kind,
        });
    }
    if decl.values.is_some() && decl.kind != OptionKind::List {
        return Err(SchemaError::ValuesOnNonList {
            option: name.to_string(),
            kind: decl.kind,
        });
    }
    if decl.items.is_some() && decl.kind != OptionKind::Dict {
        return Err(SchemaError::ItemsOnNonDict {
            option: name.to_string(),
            kind: decl.kind,
        });
    }

    let spec = match decl.kind {
        OptionKind::Bool => KindSpec::Bool,
        OptionKind::Int => KindSpec::Int,
        OptionKind::Str => KindSpec::Str,
        OptionKind::List => KindSpec::List {
            allows_empty: decl.allows_empty.unwrap_or(false),
            item: decl
                .values
                .as_ref()
                .map(|values| compile_item(name, values))
                .transpose()?,
        },
        OptionKind::Dict => KindSpec::Dict {
            allows_empty: decl.allows_empty.unwrap_or(false),
            fields: decl.items.as_ref().map(field_kinds),
        },
    };

    // Defaults are substituted verbatim at resolution time, so the kind
    // tag is the one conformance check that has to hold up front.
    if let Some(default) = &decl.default_value {
        if default.kind() != decl.kind {
            return Err(SchemaError::DefaultKindMismatch {
                option: name.to_string(),
                expected: decl.kind,
                found: default.kind(),
            });
        }
    }

    Ok(OptionDescriptor {
        name: name.to_string(),
        spec,
        default: decl.default_value.clone(),
        description: decl.description.clone(),
    })
}

fn compile_item(option: &str, decl: &ItemDecl) -> Result<ItemSpec, SchemaError> {
    if decl.items.is_some() && decl.kind != OptionKind::Dict {
        return Err(SchemaError::NestedItemsOnScalar {
            option: option.to_string(),
            element_kind: decl.kind,
        });
    }
    Ok(ItemSpec {
        kind: decl.kind,
        fields: decl.items.as_ref().map(field_kinds),
    })
}

fn field_kinds(fields: &BTreeMap<String, FieldDecl>) -> BTreeMap<String, OptionKind> {
    fields
        .iter()
        .map(|(name, field)| (name.clone(), field.kind))
        .collect()
}

/// A declaration that cannot be compiled into a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The declared default's kind tag contradicts the declared kind.
    #[error("option '{option}': default value has kind {found}, but the option declares {expected}")]
    DefaultKindMismatch {
        option: String,
        expected: OptionKind,
        found: OptionKind,
    },
    /// `allows_empty` declared on a scalar kind.
    #[error("option '{option}': allows_empty applies to list and dict options, not {kind}")]
    AllowsEmptyNotApplicable { option: String, kind: OptionKind },
    /// `values` declared on a non-list kind.
    #[error("option '{option}': 'values' describes list elements and does not apply to {kind} options")]
    ValuesOnNonList { option: String, kind: OptionKind },
    /// `items` declared on a non-dict kind.
    #[error("option '{option}': 'items' describes dict fields and does not apply to {kind} options")]
    ItemsOnNonDict { option: String, kind: OptionKind },
    /// `values.items` declared while the element kind is not dict.
    #[error("option '{option}': element fields require dict elements, but the element kind is {element_kind}")]
    NestedItemsOnScalar {
        option: String,
        element_kind: OptionKind,
    },
}

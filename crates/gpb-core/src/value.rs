//! # Configuration Values — The Representable Value Domain
//!
//! This module defines `ConfigValue`, the sole value type flowing through
//! manifest defaults, operator-supplied settings documents, and resolved
//! configurations.
//!
//! ## Closed Domain Invariant
//!
//! The five variants mirror [`OptionKind`] exactly. Anything a settings
//! document can carry is one of them; anything else (floats, nulls,
//! non-string mapping keys, unsigned integers beyond `i64`) is rejected at
//! the deserialization boundary with a precise type error. Downstream code
//! therefore never inspects runtime types — it dispatches over the variant
//! tag, and kind checking is a tag comparison.
//!
//! ## Serialization
//!
//! `Serialize`/`Deserialize` are hand-written so the value reads and
//! writes as the naked YAML/JSON value (no enum tagging) under both
//! `serde_yaml` and `serde_json`. Mapping entries land in a `BTreeMap`, so
//! serialized output is key-sorted and deterministic.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, SeqAccess, Unexpected, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::kind::OptionKind;

/// A configuration value as carried by manifests, settings documents, and
/// resolved configurations.
///
/// # Invariants
///
/// - Every value has exactly one kind tag, returned by [`kind()`](Self::kind).
/// - Dict keys are strings and iterate in sorted order.
/// - Integers are `i64`; the value domain has no float or null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// A true/false flag.
    Bool(bool),
    /// A signed 64-bit integer.
    Int(i64),
    /// A text value.
    Str(String),
    /// An ordered sequence of values.
    List(Vec<ConfigValue>),
    /// A string-keyed mapping of values.
    Dict(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> OptionKind {
        match self {
            Self::Bool(_) => OptionKind::Bool,
            Self::Int(_) => OptionKind::Int,
            Self::Str(_) => OptionKind::Str,
            Self::List(_) => OptionKind::List,
            Self::Dict(_) => OptionKind::Dict,
        }
    }

    /// Returns true if this value is an empty list or empty dict.
    ///
    /// Scalar values are never "empty" in the allows-empty sense; an empty
    /// string is a legitimate `str` value.
    pub fn is_empty_collection(&self) -> bool {
        match self {
            Self::List(items) => items.is_empty(),
            Self::Dict(entries) => entries.is_empty(),
            _ => false,
        }
    }

    /// Returns the inner bool, if this is a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the inner integer, if this is an `Int` value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the inner string slice, if this is a `Str` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner list slice, if this is a `List` value.
    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the inner mapping, if this is a `Dict` value.
    pub fn as_dict(&self) -> Option<&BTreeMap<String, ConfigValue>> {
        match self {
            Self::Dict(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for ConfigValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        Self::List(items)
    }
}

impl From<BTreeMap<String, ConfigValue>> for ConfigValue {
    fn from(entries: BTreeMap<String, ConfigValue>) -> Self {
        Self::Dict(entries)
    }
}

/// Error converting external data into the configuration value domain.
///
/// These are conversion-time errors, distinct from schema validation: a
/// document carrying a float never reaches the validator at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// Floats are outside the value domain; the five kinds have no
    /// floating-point member.
    #[error("float {0} is not representable as a configuration value")]
    FloatNotRepresentable(f64),
    /// Nulls are outside the value domain; absence is expressed by
    /// omitting the key.
    #[error("null is not representable as a configuration value")]
    NullNotRepresentable,
    /// Unsigned integers above `i64::MAX` do not fit the int kind.
    #[error("integer {0} is out of range for an int option")]
    IntegerOverflow(u64),
}

impl TryFrom<&serde_json::Value> for ConfigValue {
    type Error = ValueError;

    fn try_from(value: &serde_json::Value) -> Result<Self, ValueError> {
        match value {
            serde_json::Value::Null => Err(ValueError::NullNotRepresentable),
            serde_json::Value::Bool(b) => Ok(Self::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Err(ValueError::IntegerOverflow(u))
                } else {
                    Err(ValueError::FloatNotRepresentable(
                        n.as_f64().unwrap_or(f64::NAN),
                    ))
                }
            }
            serde_json::Value::String(s) => Ok(Self::Str(s.clone())),
            serde_json::Value::Array(items) => {
                let converted: Result<Vec<_>, _> = items.iter().map(Self::try_from).collect();
                Ok(Self::List(converted?))
            }
            serde_json::Value::Object(map) => {
                let mut entries = BTreeMap::new();
                for (k, v) in map {
                    entries.insert(k.clone(), Self::try_from(v)?);
                }
                Ok(Self::Dict(entries))
            }
        }
    }
}

impl From<&ConfigValue> for serde_json::Value {
    fn from(value: &ConfigValue) -> Self {
        match value {
            ConfigValue::Bool(b) => serde_json::Value::Bool(*b),
            ConfigValue::Int(i) => serde_json::Value::Number((*i).into()),
            ConfigValue::Str(s) => serde_json::Value::String(s.clone()),
            ConfigValue::List(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            ConfigValue::Dict(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<ConfigValue> for serde_json::Value {
    fn from(value: ConfigValue) -> Self {
        Self::from(&value)
    }
}

impl Serialize for ConfigValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Str(s) => serializer.serialize_str(s),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Dict(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = ConfigValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a bool, int, str, list, or dict configuration value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ConfigValue::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ConfigValue::Int(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(v)
            .map(ConfigValue::Int)
            .map_err(|_| E::custom(ValueError::IntegerOverflow(v)))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Err(E::invalid_type(Unexpected::Float(v), &self))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ConfigValue::Str(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
        Ok(ConfigValue::Str(v))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Err(E::invalid_type(Unexpected::Unit, &self))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Err(E::invalid_type(Unexpected::Option, &self))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(ConfigValue::List(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<String, ConfigValue>()? {
            entries.insert(key, value);
        }
        Ok(ConfigValue::Dict(entries))
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

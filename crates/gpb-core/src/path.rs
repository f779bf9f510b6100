//! # Key Paths — Violation Addressing
//!
//! A `KeyPath` names one location inside a configuration document: an
//! option, an element of a list option, or a field of a nested item.
//! Every validation violation carries one, so an operator can go straight
//! from the report to the offending line.
//!
//! Rendering follows the dotted/indexed convention:
//! `menu_favourites[0].app_instance`. The empty path renders `(root)`.

use std::fmt;

/// One step in a [`KeyPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    /// A mapping key (an option name or a nested item field).
    Key(String),
    /// A zero-based position inside a list value.
    Index(usize),
}

/// A dotted/indexed path into a configuration document.
///
/// Paths are built once per violation with the extending constructors
/// [`key()`](Self::key) and [`index()`](Self::index); each returns a new
/// path and leaves the receiver untouched, so a base path can be shared
/// across sibling checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath {
    segments: Vec<PathSegment>,
}

impl KeyPath {
    /// The empty path, addressing the document itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// A path addressing one top-level option.
    pub fn option(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Key(name.into())],
        }
    }

    /// Returns this path extended by a mapping key.
    pub fn key(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(name.into()));
        Self { segments }
    }

    /// Returns this path extended by a list index.
    pub fn index(&self, idx: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(idx));
        Self { segments }
    }

    /// Returns true for the empty path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The path's segments, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

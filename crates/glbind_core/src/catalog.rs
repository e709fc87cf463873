//! Symbol Catalog
//!
//! A [`Catalog`] is the fixed, ordered list of entry points an API surface
//! needs. It is pure data: generated tables build theirs once from
//! `const`-constructed [`CatalogEntry`] rows, tools build theirs at runtime.
//!
//! Declaration order is kept so that binding reports the same first missing
//! symbol on every run.

use std::borrow::{Borrow, Cow};
use std::fmt;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::errors::{BindError, Result};

// ============================================================================
// SymbolName
// ============================================================================

/// Opaque name of one native entry point, e.g. `glClear`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SymbolName(Cow<'static, str>);

impl SymbolName {
    #[inline]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for SymbolName {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for SymbolName {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl Borrow<str> for SymbolName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SymbolName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SymbolName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SymbolName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for SymbolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

// ============================================================================
// CatalogEntry
// ============================================================================

/// Whether binding may proceed without an entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Absence aborts the whole bind.
    Required,
    /// Absence is recorded in the table and reported per entry.
    Optional,
}

/// One declared entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    name: SymbolName,
    requirement: Requirement,
    fallbacks: &'static [&'static str],
}

impl CatalogEntry {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name: SymbolName::from_static(name),
            requirement: Requirement::Required,
            fallbacks: &[],
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name: SymbolName::from_static(name),
            requirement: Requirement::Optional,
            fallbacks: &[],
        }
    }

    /// Entry with a runtime-built name.
    pub fn new(name: impl Into<SymbolName>, requirement: Requirement) -> Self {
        Self {
            name: name.into(),
            requirement,
            fallbacks: &[],
        }
    }

    /// Alias names tried in order when the primary name does not resolve,
    /// typically the `ARB`/`KHR`/`EXT` variants of a promoted extension.
    #[must_use]
    pub const fn with_fallbacks(mut self, fallbacks: &'static [&'static str]) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    #[inline]
    pub fn name(&self) -> &SymbolName {
        &self.name
    }

    #[inline]
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    #[inline]
    pub fn fallbacks(&self) -> &'static [&'static str] {
        self.fallbacks
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }

    /// Primary name followed by every fallback, in resolution order.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.fallbacks.iter().copied())
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Ordered, duplicate-free list of entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog, rejecting any name that appears twice.
    ///
    /// Primary names and fallback aliases share one namespace: an alias that
    /// is another entry's primary name, or that two entries both list, would
    /// bind one address under two entries.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Result<Self> {
        let entries: Vec<CatalogEntry> = entries.into_iter().collect();

        let mut primaries = FxHashSet::default();
        for entry in &entries {
            if !primaries.insert(entry.name.as_str()) {
                return Err(BindError::DuplicateSymbol(entry.name.clone()));
            }
        }

        let mut aliases = FxHashSet::default();
        for &alias in entries.iter().flat_map(|e| e.fallbacks) {
            if primaries.contains(alias) || !aliases.insert(alias) {
                return Err(BindError::DuplicateSymbol(SymbolName::from_static(alias)));
            }
        }

        Ok(Self { entries })
    }

    /// Builds a catalog in which every name is required.
    pub fn from_names<I, N>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<SymbolName>,
    {
        Self::new(
            names
                .into_iter()
                .map(|name| CatalogEntry::new(name, Requirement::Required)),
        )
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn required_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_required()).count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

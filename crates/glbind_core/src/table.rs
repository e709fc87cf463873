//! Symbol Table
//!
//! The immutable result of binding one catalog for one native context.
//!
//! # Design
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     SymbolTable                      │
//! │                                                      │
//! │  entries: [BoundEntry]   ←── catalog order           │
//! │  index:   FxHashMap<SymbolName, usize>               │
//! │                                                      │
//! │  lookup(name) → Option<Address>  (O(1), catalog)     │
//! │  get(name)    → Option<Address>                      │
//! │  pin::<F>()   → Option<F> (typed, once per bind)     │
//! │  report()     → BindReport                           │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Tables are only ever constructed fully populated by the binder. Absent
//! optional entries are part of that state, not a partial bind.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::address::{Address, FnPtr};
use crate::catalog::{Requirement, SymbolName};

/// One catalog entry after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundEntry {
    pub(crate) name: SymbolName,
    pub(crate) requirement: Requirement,
    /// Candidate name that resolved (the primary name or a fallback).
    pub(crate) resolved_as: Option<&'static str>,
    pub(crate) address: Option<Address>,
}

impl BoundEntry {
    pub fn name(&self) -> &SymbolName {
        &self.name
    }

    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    /// The alias the address was found under, if it was not the primary name.
    pub fn resolved_as(&self) -> Option<&'static str> {
        self.resolved_as
    }
}

/// Immutable name → address mapping for one native context.
#[derive(Debug)]
pub struct SymbolTable {
    context: String,
    resolver: String,
    entries: Box<[BoundEntry]>,
    index: FxHashMap<SymbolName, usize>,
}

impl SymbolTable {
    /// Only the binder constructs tables.
    pub(crate) fn from_entries(context: String, resolver: String, entries: Vec<BoundEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.name.clone(), i))
            .collect();

        Self {
            context,
            resolver,
            entries: entries.into_boxed_slice(),
            index,
        }
    }

    /// Address bound for the catalog entry `name`.
    ///
    /// Defined for every catalog entry: required entries always yield
    /// `Some`, optional entries yield `None` when they were absent at bind
    /// time.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not part of the catalog this table was bound from.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Address> {
        match self.index.get(name) {
            Some(&i) => self.entries[i].address,
            None => panic!("'{name}' is not in the catalog of context '{}'", self.context),
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<Address> {
        self.index
            .get(name)
            .and_then(|&i| self.entries[i].address)
    }

    pub fn entry(&self, name: &str) -> Option<&BoundEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    #[inline]
    pub fn is_loaded(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Typed function pointer for `name`, or `None` if it is not bound.
    ///
    /// Generated wrappers call this once per entry when a table is wrapped,
    /// never per call, so dispatch stays pinned to this context's addresses.
    ///
    /// # Safety
    ///
    /// `F` must be the exact signature and calling convention of the native
    /// entry point named `name`.
    #[inline]
    pub unsafe fn pin<F: FnPtr>(&self, name: &str) -> Option<F> {
        // SAFETY: forwarded to the caller.
        self.get(name).map(|address| unsafe { F::from_address(address) })
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn resolver(&self) -> &str {
        &self.resolver
    }

    /// Number of catalog entries, bound or absent.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn loaded_count(&self) -> usize {
        self.entries.iter().filter(|e| e.address.is_some()).count()
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoundEntry> {
        self.entries.iter()
    }

    /// Names of optional entries that were absent at bind time.
    pub fn missing_optional(&self) -> impl Iterator<Item = &SymbolName> {
        self.entries
            .iter()
            .filter(|e| e.address.is_none())
            .map(|e| &e.name)
    }

    /// Serializable summary of this binding.
    pub fn report(&self) -> BindReport {
        BindReport {
            context: self.context.clone(),
            resolver: self.resolver.clone(),
            total: self.entries.len(),
            loaded: self.loaded_count(),
            entries: self
                .entries
                .iter()
                .filter_map(|e| {
                    e.address.map(|address| ReportEntry {
                        name: e.name.clone(),
                        resolved_as: e.resolved_as,
                        address,
                    })
                })
                .collect(),
            missing_optional: self.missing_optional().cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a BoundEntry;
    type IntoIter = std::slice::Iter<'a, BoundEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Report
// ============================================================================

/// Diagnostic summary of a successful bind.
#[derive(Debug, Clone, Serialize)]
pub struct BindReport {
    pub context: String,
    pub resolver: String,
    pub total: usize,
    pub loaded: usize,
    pub entries: Vec<ReportEntry>,
    pub missing_optional: Vec<SymbolName>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub name: SymbolName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_as: Option<&'static str>,
    pub address: Address,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &'static str, requirement: Requirement, raw: usize) -> BoundEntry {
        BoundEntry {
            name: SymbolName::from_static(name),
            requirement,
            resolved_as: None,
            address: Address::new(raw),
        }
    }

    fn sample() -> SymbolTable {
        SymbolTable::from_entries(
            "test".to_string(),
            "map".to_string(),
            vec![
                entry("Foo", Requirement::Required, 0x1000),
                entry("Bar", Requirement::Required, 0x2000),
                entry("Baz", Requirement::Optional, 0),
            ],
        )
    }

    #[test]
    fn test_lookup_bound_entries() {
        let table = sample();

        assert_eq!(table.lookup("Foo").map(Address::get), Some(0x1000));
        assert_eq!(table.lookup("Bar").map(Address::get), Some(0x2000));
        assert_eq!(table.len(), 3);
        assert_eq!(table.loaded_count(), 2);
    }

    #[test]
    fn test_absent_optional_is_not_loaded() {
        let table = sample();

        assert!(table.contains("Baz"));
        assert!(!table.is_loaded("Baz"));
        assert!(table.get("Baz").is_none());
        assert_eq!(table.missing_optional().collect::<Vec<_>>(), ["Baz"]);
    }

    #[test]
    fn test_lookup_is_total_over_catalog() {
        let table = sample();

        let bound: Vec<bool> = ["Foo", "Bar", "Baz"]
            .iter()
            .map(|name| table.lookup(name).is_some())
            .collect();

        assert_eq!(bound, [true, true, false]);
    }

    #[test]
    #[should_panic(expected = "not in the catalog")]
    fn test_lookup_unknown_panics() {
        sample().lookup("Qux");
    }

    #[test]
    fn test_report_serializes() {
        let report = sample().report();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["context"], "test");
        assert_eq!(json["loaded"], 2);
        assert_eq!(json["entries"][0]["name"], "Foo");
        assert_eq!(json["entries"][0]["address"], "0x1000");
        assert_eq!(json["missing_optional"][0], "Baz");
    }
}

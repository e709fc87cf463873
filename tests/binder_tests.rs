//! Binder Tests
//!
//! Tests for:
//! - bind: all-or-nothing resolution, first missing symbol in catalog order
//! - SymbolTable: lookup totality, independence across bind attempts
//! - Fallback aliases, optional entries and the strict optional policy
//! - BindReport: JSON shape consumed by tooling

use std::ffi::c_void;
use std::sync::Arc;

use glbind::{
    BindError, BindSettings, Binder, Catalog, CatalogEntry, MapResolver, OptionalPolicy,
    Requirement, Resolver, bind,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn foo_bar() -> Catalog {
    Catalog::from_names(["Foo", "Bar"]).unwrap()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn bind_succeeds_when_every_symbol_resolves() {
    init_logger();
    let mut resolver = MapResolver::new("scenario")
        .with("Foo", 0x1000)
        .with("Bar", 0x2000);

    let table = bind(&foo_bar(), &mut resolver).unwrap();

    assert_eq!(table.lookup("Foo").unwrap().get(), 0x1000);
    assert_eq!(table.lookup("Bar").unwrap().get(), 0x2000);
    assert_eq!(table.len(), 2);
    assert_eq!(table.loaded_count(), 2);
}

#[test]
fn bind_fails_on_sentinel_address() {
    init_logger();
    let mut resolver = MapResolver::new("scenario")
        .with("Foo", 0x1000)
        .with("Bar", 0);

    let err = bind(&foo_bar(), &mut resolver).unwrap_err();

    match err {
        BindError::MissingSymbol { name, resolver, .. } => {
            assert_eq!(name, "Bar");
            assert_eq!(resolver, "scenario");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn default_bind_accepts_small_non_null_addresses() {
    let mut resolver = MapResolver::new("scenario").with("Foo", 1).with("Bar", usize::MAX);

    let table = bind(&foo_bar(), &mut resolver).unwrap();

    assert_eq!(table.lookup("Foo").unwrap().get(), 1);
    assert_eq!(table.lookup("Bar").unwrap().get(), usize::MAX);
}

#[test]
fn bind_reports_first_missing_in_declaration_order() {
    let catalog = Catalog::from_names(["A", "B", "C", "D"]).unwrap();
    let mut resolver = MapResolver::new("map").with("A", 0x10).with("C", 0x30);

    let err = bind(&catalog, &mut resolver).unwrap_err();

    assert_eq!(err.symbol().unwrap(), "B");
}

#[test]
fn bind_never_calls_resolver_past_first_missing() {
    let catalog = Catalog::from_names(["A", "B", "C"]).unwrap();
    let mut calls = 0;
    let mut resolver = |_: &str| {
        calls += 1;
        std::ptr::null::<c_void>()
    };

    assert!(bind(&catalog, &mut resolver).is_err());
    assert_eq!(calls, 1);
}

#[test]
fn empty_catalog_binds_to_empty_table() {
    let catalog = Catalog::from_names(Vec::<String>::new()).unwrap();
    let table = bind(&catalog, &mut MapResolver::new("empty")).unwrap();

    assert!(table.is_empty());
}

// ============================================================================
// Independence
// ============================================================================

#[test]
fn repeated_binds_produce_distinct_equal_tables() {
    let mut resolver = MapResolver::new("map")
        .with("Foo", 0x1000)
        .with("Bar", 0x2000);
    let catalog = foo_bar();

    let first = Arc::new(bind(&catalog, &mut resolver).unwrap());
    let second = Arc::new(bind(&catalog, &mut resolver).unwrap());

    assert!(!Arc::ptr_eq(&first, &second));
    for entry in &catalog {
        let name = entry.name().as_str();
        assert_eq!(first.lookup(name), second.lookup(name));
    }
}

#[test]
fn failed_bind_does_not_affect_next_attempt() {
    let catalog = foo_bar();
    let mut broken = MapResolver::new("broken").with("Foo", 0x1000);
    let mut working = MapResolver::new("working")
        .with("Foo", 0x1000)
        .with("Bar", 0x2000);

    assert!(bind(&catalog, &mut broken).is_err());
    let table = bind(&catalog, &mut working).unwrap();

    assert_eq!(table.resolver(), "working");
    assert_eq!(table.lookup("Bar").unwrap().get(), 0x2000);
}

// ============================================================================
// Fallbacks & Optional Entries
// ============================================================================

fn mixed_catalog() -> Catalog {
    Catalog::new([
        CatalogEntry::required("glClear"),
        CatalogEntry::required("glBindVertexArray").with_fallbacks(&["glBindVertexArrayOES"]),
        CatalogEntry::optional("glObjectLabel").with_fallbacks(&["glObjectLabelKHR"]),
        CatalogEntry::optional("glBufferStorage"),
    ])
    .unwrap()
}

#[test]
fn fallback_alias_satisfies_required_entry() {
    let mut resolver = MapResolver::new("gles")
        .with("glClear", 0x100)
        .with("glBindVertexArrayOES", 0x200)
        .with("glObjectLabelKHR", 0x300);

    let table = bind(&mixed_catalog(), &mut resolver).unwrap();

    let vao = table.entry("glBindVertexArray").unwrap();
    assert_eq!(vao.resolved_as(), Some("glBindVertexArrayOES"));
    assert_eq!(table.lookup("glObjectLabel").unwrap().get(), 0x300);
}

#[test]
fn absent_optional_entries_are_recorded_not_fatal() {
    init_logger();
    let mut resolver = MapResolver::new("gles")
        .with("glClear", 0x100)
        .with("glBindVertexArray", 0x200);

    let table = bind(&mixed_catalog(), &mut resolver).unwrap();

    assert_eq!(table.len(), 4);
    assert_eq!(table.loaded_count(), 2);
    let missing: Vec<&str> = table.missing_optional().map(|n| n.as_str()).collect();
    assert_eq!(missing, ["glObjectLabel", "glBufferStorage"]);
    assert_eq!(
        table.entry("glBufferStorage").unwrap().requirement(),
        Requirement::Optional
    );
}

#[test]
fn lookup_is_defined_for_every_catalog_entry() {
    let mut resolver = MapResolver::new("gles")
        .with("glClear", 0x100)
        .with("glBindVertexArray", 0x200);
    let catalog = mixed_catalog();

    let table = bind(&catalog, &mut resolver).unwrap();

    for entry in &catalog {
        let address = table.lookup(entry.name().as_str());
        assert_eq!(address.is_some(), entry.is_required(), "{}", entry.name());
    }
}

#[test]
fn strict_policy_makes_optional_entries_fatal() {
    let mut resolver = MapResolver::new("gles")
        .with("glClear", 0x100)
        .with("glBindVertexArray", 0x200);
    let binder = Binder::new(
        BindSettings::default()
            .with_context_label("strict")
            .with_optional_policy(OptionalPolicy::Require),
    );

    let err = binder.bind(&mixed_catalog(), &mut resolver).unwrap_err();

    assert_eq!(
        err,
        BindError::missing_symbol("glObjectLabel", "strict", "gles")
    );
}

#[test]
fn duplicate_catalog_names_are_rejected() {
    let err = Catalog::new([
        CatalogEntry::required("glClear"),
        CatalogEntry::optional("glClear"),
    ])
    .unwrap_err();

    assert_eq!(err, BindError::DuplicateSymbol("glClear".into()));
}

#[test]
fn alias_of_another_entry_is_rejected() {
    let err = Catalog::new([
        CatalogEntry::required("glBindVertexArray").with_fallbacks(&["glBindVertexArrayOES"]),
        CatalogEntry::optional("glBindVertexArrayOES"),
    ])
    .unwrap_err();

    assert_eq!(err, BindError::DuplicateSymbol("glBindVertexArrayOES".into()));
}

// ============================================================================
// Resolver Labels & Reports
// ============================================================================

struct CountingResolver {
    inner: MapResolver,
    calls: usize,
}

impl Resolver for CountingResolver {
    fn resolve(&mut self, name: &str) -> *const c_void {
        self.calls += 1;
        self.inner.resolve(name)
    }

    fn label(&self) -> std::borrow::Cow<'_, str> {
        "counting".into()
    }
}

#[test]
fn custom_resolver_label_reaches_table_and_errors() {
    let mut resolver = CountingResolver {
        inner: MapResolver::new("inner").with("Foo", 0x1000),
        calls: 0,
    };

    let err = bind(&foo_bar(), &mut resolver).unwrap_err();

    assert!(err.to_string().contains("resolver 'counting'"));
    assert_eq!(resolver.calls, 2);
}

#[test]
fn report_serializes_bound_and_missing_entries() {
    let mut resolver = MapResolver::new("gles")
        .with("glClear", 0x100)
        .with("glBindVertexArrayOES", 0x200);
    let binder = Binder::new(BindSettings::default().with_context_label("window-1"));

    let report = binder.bind(&mixed_catalog(), &mut resolver).unwrap().report();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["context"], "window-1");
    assert_eq!(json["resolver"], "gles");
    assert_eq!(json["total"], 4);
    assert_eq!(json["loaded"], 2);
    assert_eq!(json["entries"][1]["name"], "glBindVertexArray");
    assert_eq!(json["entries"][1]["resolved_as"], "glBindVertexArrayOES");
    assert_eq!(json["entries"][1]["address"], "0x200");
    assert!(json["entries"][0].get("resolved_as").is_none());
    assert_eq!(json["missing_optional"].as_array().unwrap().len(), 2);
}

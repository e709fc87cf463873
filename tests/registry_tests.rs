//! Active-Context Registry Tests
//!
//! Tests for:
//! - ContextSlot: set / get / clear round trips, shared (non-owning) storage
//! - CurrentGuard: scoped activation restores the previous context
//! - current: the Gl slot, per-thread isolation

use std::sync::Arc;

use glbind::{Catalog, Gl, MapResolver, SymbolTable, bind, context_slot, current};

context_slot! {
    /// Current table for this test thread.
    static CURRENT_TABLE: Arc<SymbolTable>;
}

fn table(label: &str, address: usize) -> Arc<SymbolTable> {
    let catalog = Catalog::from_names(["Foo"]).unwrap();
    let mut resolver = MapResolver::new(label).with("Foo", address);
    Arc::new(bind(&catalog, &mut resolver).unwrap())
}

unsafe extern "system" fn noop() {}

fn stub_gl() -> Gl {
    let mut resolver = MapResolver::new("stub");
    for entry in Gl::catalog().unwrap() {
        resolver.insert(entry.name().as_str(), noop as usize);
    }
    Gl::load(&mut resolver).unwrap()
}

// ============================================================================
// ContextSlot
// ============================================================================

#[test]
fn slot_starts_empty() {
    assert!(CURRENT_TABLE.current().is_none());
    assert!(!CURRENT_TABLE.is_active());
}

#[test]
fn set_then_get_returns_same_table() {
    let t = table("a", 0x1000);

    CURRENT_TABLE.set_current(t.clone());

    assert!(Arc::ptr_eq(&CURRENT_TABLE.current().unwrap(), &t));
    CURRENT_TABLE.clear_current();
}

#[test]
fn clear_then_get_returns_none() {
    CURRENT_TABLE.set_current(table("a", 0x1000));

    CURRENT_TABLE.clear_current();

    assert!(CURRENT_TABLE.current().is_none());
}

#[test]
fn set_replaces_and_returns_previous() {
    let a = table("a", 0x1000);
    let b = table("b", 0x2000);

    assert!(CURRENT_TABLE.set_current(a.clone()).is_none());
    let previous = CURRENT_TABLE.set_current(b.clone()).unwrap();

    assert!(Arc::ptr_eq(&previous, &a));
    assert_eq!(CURRENT_TABLE.current().unwrap().resolver(), "b");
    CURRENT_TABLE.clear_current();
}

#[test]
fn slot_does_not_own_the_table() {
    let t = table("a", 0x1000);
    CURRENT_TABLE.set_current(t.clone());
    assert_eq!(Arc::strong_count(&t), 2);

    CURRENT_TABLE.clear_current();

    assert_eq!(Arc::strong_count(&t), 1);
    assert_eq!(t.lookup("Foo").unwrap().get(), 0x1000);
}

#[test]
fn guard_restores_previous_then_clears() {
    let outer = table("outer", 0x1000);
    let inner = table("inner", 0x2000);

    {
        let _outer = CURRENT_TABLE.make_current(outer.clone());
        {
            let _inner = CURRENT_TABLE.make_current(inner.clone());
            assert_eq!(CURRENT_TABLE.current().unwrap().resolver(), "inner");
        }
        assert_eq!(CURRENT_TABLE.current().unwrap().resolver(), "outer");
    }

    assert!(CURRENT_TABLE.current().is_none());
}

#[test]
fn with_current_reads_active_table() {
    let t = table("a", 0x1000);
    CURRENT_TABLE.set_current(t.clone());

    let address = CURRENT_TABLE.with_current(|c| c.and_then(|t| t.lookup("Foo")).map(|a| a.get()));

    assert_eq!(address, Some(0x1000));
    assert_eq!(Arc::strong_count(&t), 2);
    CURRENT_TABLE.clear_current();
}

#[test]
fn with_current_may_switch_the_active_table() {
    let a = table("a", 0x1000);
    let b = table("b", 0x2000);
    CURRENT_TABLE.set_current(a.clone());

    let replaced = CURRENT_TABLE.with_current(|active| {
        let replaced = CURRENT_TABLE.set_current(b.clone());
        active.map(|t| t.resolver().to_string()).zip(replaced)
    });

    let (seen, replaced) = replaced.unwrap();
    assert_eq!(seen, "a");
    assert!(Arc::ptr_eq(&replaced, &a));
    assert!(Arc::ptr_eq(&CURRENT_TABLE.current().unwrap(), &b));
    CURRENT_TABLE.clear_current();
}

// ============================================================================
// Gl Slot
// ============================================================================

#[test]
fn gl_round_trip() {
    let gl = stub_gl();

    assert!(current::set_current(&gl).is_none());
    assert!(Gl::ptr_eq(&current::current().unwrap(), &gl));
    assert!(current::is_current(&gl));

    let cleared = current::clear_current().unwrap();
    assert!(Gl::ptr_eq(&cleared, &gl));
    assert!(current::current().is_none());
    assert!(!current::is_current(&gl));
}

#[test]
fn gl_guard_scopes_activation() {
    let gl = stub_gl();

    current::with_current(|active| {
        if active.is_none() {
            current::set_current(&gl);
        }
    });
    assert!(current::is_current(&gl));
    current::clear_current();

    {
        let _guard = current::make_current(&gl);
        assert!(current::with_current(|c| c.is_some_and(|c| Gl::ptr_eq(c, &gl))));
    }

    assert!(current::current().is_none());
}

#[test]
fn gl_activation_is_thread_local() {
    let gl = stub_gl();
    let _guard = current::make_current(&gl);

    let other = gl.clone();
    let seen_elsewhere = std::thread::spawn(move || {
        let before = current::current().is_some();
        let _local = current::make_current(&other);
        before
    })
    .join()
    .unwrap();

    assert!(!seen_elsewhere);
    assert!(current::is_current(&gl));
}

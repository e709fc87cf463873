//! Active-Context Registry
//!
//! A [`ContextSlot`] remembers which binding is "current" so call sites need
//! not carry it explicitly. Each slot is backed by a `thread_local!`, matching
//! the native model where one thread owns one context at a time: activating a
//! binding on one thread never affects another.
//!
//! # Lifecycle
//!
//! - Activate when the native context is made current on this thread
//!   ([`ContextSlot::set_current`] or the scoped [`ContextSlot::make_current`]).
//! - Clear before the native context is destroyed
//!   ([`ContextSlot::clear_current`], or drop the guard).
//!
//! The slot stores a clone of a shared handle (`Arc<_>`, `Gl`, ...). It never
//! owns the only reference, so clearing it does not tear anything down.
//!
//! ```rust,ignore
//! glbind_core::context_slot! {
//!     /// Current table for this thread.
//!     pub static CURRENT_TABLE: std::sync::Arc<SymbolTable>;
//! }
//!
//! let _guard = CURRENT_TABLE.make_current(table.clone());
//! assert!(CURRENT_TABLE.is_active());
//! ```

use std::cell::RefCell;
use std::marker::PhantomData;
use std::thread::LocalKey;

/// Thread-affine slot holding zero or one shared handle.
pub struct ContextSlot<T: Clone + 'static> {
    key: &'static LocalKey<RefCell<Option<T>>>,
}

impl<T: Clone + 'static> ContextSlot<T> {
    /// Wraps a thread-local key. Prefer [`context_slot!`](crate::context_slot).
    pub const fn new(key: &'static LocalKey<RefCell<Option<T>>>) -> Self {
        Self { key }
    }

    /// Activates `value`, returning whatever was active before.
    pub fn set_current(&self, value: T) -> Option<T> {
        log::debug!("Activating context on {:?}", std::thread::current().id());
        self.key.with(|slot| slot.borrow_mut().replace(value))
    }

    /// Deactivates the current value, returning it.
    pub fn clear_current(&self) -> Option<T> {
        let previous = self.key.with(|slot| slot.borrow_mut().take());
        if previous.is_some() {
            log::debug!("Cleared context on {:?}", std::thread::current().id());
        }
        previous
    }

    pub fn current(&self) -> Option<T> {
        self.key.with(|slot| slot.borrow().clone())
    }

    pub fn is_active(&self) -> bool {
        self.key.with(|slot| slot.borrow().is_some())
    }

    /// Runs `f` against the current value.
    ///
    /// `f` sees a snapshot taken before it runs, so it may itself activate or
    /// clear this slot.
    pub fn with_current<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        let current = self.current();
        f(current.as_ref())
    }

    /// Activates `value` until the returned guard drops, then restores the
    /// previously active value.
    pub fn make_current(&'static self, value: T) -> CurrentGuard<T> {
        let previous = self.set_current(value);
        CurrentGuard {
            slot: self,
            previous,
            _not_send: PhantomData,
        }
    }
}

/// Restores the previously active value on drop. Not `Send`: it must drop
/// on the thread whose slot it changed.
#[must_use = "the previous context is restored as soon as the guard drops"]
pub struct CurrentGuard<T: Clone + 'static> {
    slot: &'static ContextSlot<T>,
    previous: Option<T>,
    _not_send: PhantomData<*const ()>,
}

impl<T: Clone + 'static> Drop for CurrentGuard<T> {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(previous) => {
                self.slot.set_current(previous);
            }
            None => {
                self.slot.clear_current();
            }
        }
    }
}

/// Declares a static [`ContextSlot`] backed by its own thread-local.
#[macro_export]
macro_rules! context_slot {
    ($(#[$meta:meta])* $vis:vis static $name:ident : $ty:ty ;) => {
        $(#[$meta])*
        $vis static $name: $crate::registry::ContextSlot<$ty> = {
            ::std::thread_local! {
                static SLOT: ::std::cell::RefCell<::std::option::Option<$ty>> =
                    const { ::std::cell::RefCell::new(::std::option::Option::None) };
            }
            $crate::registry::ContextSlot::new(&SLOT)
        };
    };
}

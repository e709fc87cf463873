//! The current `Gl` for this thread.
//!
//! Activate a handle when its native context is made current on a thread and
//! clear it before that context is destroyed. The slot holds a clone of the
//! handle; it never keeps a binding alive on its own.
//!
//! ```rust,ignore
//! let _guard = glbind::current::make_current(&gl);
//! glbind::current::with_current(|gl| unsafe { gl.unwrap().flush() });
//! ```

use glbind_core::CurrentGuard;

use crate::gl::Gl;

glbind_core::context_slot! {
    static CURRENT: Gl;
}

/// Activates `gl`, returning the previously active handle.
pub fn set_current(gl: &Gl) -> Option<Gl> {
    CURRENT.set_current(gl.clone())
}

/// Deactivates the current handle, returning it.
pub fn clear_current() -> Option<Gl> {
    CURRENT.clear_current()
}

pub fn current() -> Option<Gl> {
    CURRENT.current()
}

/// Whether `gl` is the active handle on this thread.
pub fn is_current(gl: &Gl) -> bool {
    CURRENT.with_current(|active| active.is_some_and(|active| Gl::ptr_eq(active, gl)))
}

/// Activates `gl` until the guard drops.
pub fn make_current(gl: &Gl) -> CurrentGuard<Gl> {
    CURRENT.make_current(gl.clone())
}

/// Runs `f` against the active handle. `f` may switch the active handle.
pub fn with_current<R>(f: impl FnOnce(Option<&Gl>) -> R) -> R {
    CURRENT.with_current(f)
}

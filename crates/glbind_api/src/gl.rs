//! The `Gl` handle.
//!
//! A [`Gl`] is a bound [`SymbolTable`] plus the typed pointers pinned from it.
//! Cloning is cheap (`Arc`); every clone dispatches through the same
//! addresses, those resolved when the handle was created.
//!
//! ```rust,ignore
//! let gl = Gl::load_with(|name| window.get_proc_address(name))?;
//!
//! unsafe {
//!     gl.clear_color(0.1, 0.1, 0.1, 1.0);
//!     gl.clear(consts::COLOR_BUFFER_BIT);
//! }
//! ```

use std::ffi::{CStr, c_void};
use std::fmt;
use std::sync::Arc;

use glbind_core::{BindSettings, Binder, Catalog, Resolver, Result, SymbolTable};

use crate::functions::{self, GlFns};
use crate::types::GLenum;

/// Shared handle to one bound GL context.
#[derive(Clone)]
pub struct Gl {
    inner: Arc<GlInner>,
}

struct GlInner {
    table: SymbolTable,
    fns: GlFns,
}

impl Gl {
    /// The catalog every `Gl` is bound from.
    pub fn catalog() -> Result<&'static Catalog> {
        functions::catalog()
    }

    /// Binds through `resolver` with default settings.
    pub fn load<R>(resolver: &mut R) -> Result<Self>
    where
        R: Resolver + ?Sized,
    {
        Self::load_with_settings(resolver, &BindSettings::default())
    }

    /// Binds through a `name -> address` closure.
    pub fn load_with<F>(mut resolve: F) -> Result<Self>
    where
        F: FnMut(&str) -> *const c_void,
    {
        Self::load(&mut resolve)
    }

    pub fn load_with_settings<R>(resolver: &mut R, settings: &BindSettings) -> Result<Self>
    where
        R: Resolver + ?Sized,
    {
        let table = Binder::new(settings.clone()).bind(Self::catalog()?, resolver)?;
        Self::from_table(table)
    }

    /// Wraps an existing table, pinning every entry point once.
    ///
    /// Fails if a required entry of [`Gl::catalog`] is not bound in `table`.
    pub fn from_table(table: SymbolTable) -> Result<Self> {
        let fns = GlFns::pin(&table)?;
        log::debug!(
            "GL context '{}' ready ({}/{} entry points)",
            table.context(),
            table.loaded_count(),
            table.len()
        );
        Ok(Self {
            inner: Arc::new(GlInner { table, fns }),
        })
    }

    #[inline]
    pub fn table(&self) -> &SymbolTable {
        &self.inner.table
    }

    #[inline]
    pub fn context(&self) -> &str {
        self.inner.table.context()
    }

    /// Whether the entry point named `name` (e.g. `"glObjectLabel"`) is bound.
    #[inline]
    pub fn is_loaded(&self, name: &str) -> bool {
        self.inner.table.is_loaded(name)
    }

    /// Whether both handles share one binding.
    #[inline]
    pub fn ptr_eq(a: &Gl, b: &Gl) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    #[inline]
    pub(crate) fn fns(&self) -> &GlFns {
        &self.inner.fns
    }

    /// `glGetString` copied into an owned string. `None` if GL returned null.
    ///
    /// # Safety
    ///
    /// The native context this handle was bound for must be current.
    pub unsafe fn get_string_lossy(&self, name: GLenum) -> Option<String> {
        // SAFETY: forwarded; GL strings are NUL-terminated and static.
        unsafe {
            let ptr = self.get_string(name);
            if ptr.is_null() {
                None
            } else {
                Some(CStr::from_ptr(ptr.cast()).to_string_lossy().into_owned())
            }
        }
    }
}

impl fmt::Debug for Gl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gl")
            .field("context", &self.context())
            .field("loaded", &self.inner.table.loaded_count())
            .field("total", &self.inner.table.len())
            .finish()
    }
}

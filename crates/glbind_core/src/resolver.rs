//! Resolvers
//!
//! A [`Resolver`] maps a symbol name to a native address, returning null when
//! the name is unknown. It is supplied by the embedding application, usually
//! wrapping the platform's "get proc address" facility (`eglGetProcAddress`,
//! `glXGetProcAddress`, `wglGetProcAddress`, a windowing library, ...).
//!
//! Any `FnMut(&str) -> *const c_void` closure is a resolver:
//!
//! ```rust,ignore
//! let table = glbind_core::bind(&catalog, &mut |name: &str| window.get_proc_address(name))?;
//! ```
//!
//! Resolution is synchronous and may be slow; the binder calls it once per
//! candidate name and never from more than one thread.

use std::borrow::Cow;
use std::ffi::c_void;

use rustc_hash::FxHashMap;

use crate::address::Address;

/// Maps a symbol name to a native address. Null means "not found".
pub trait Resolver {
    /// Must not panic for unknown names; return null instead.
    fn resolve(&mut self, name: &str) -> *const c_void;

    /// Human-readable origin used in diagnostics.
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed("resolver")
    }
}

impl<F> Resolver for F
where
    F: FnMut(&str) -> *const c_void,
{
    #[inline]
    fn resolve(&mut self, name: &str) -> *const c_void {
        self(name)
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed("closure")
    }
}

// ============================================================================
// MapResolver
// ============================================================================

/// Deterministic in-memory resolver.
///
/// Useful for headless embedders that already hold their entry points, and
/// for exercising the binder without a native library.
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    label: String,
    symbols: FxHashMap<String, usize>,
}

impl MapResolver {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            symbols: FxHashMap::default(),
        }
    }

    /// Registers `name`. A zero address registers the name as explicitly
    /// unresolvable.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, address: usize) -> Self {
        self.insert(name, address);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, address: usize) -> Option<usize> {
        self.symbols.insert(name.into(), address)
    }

    pub fn remove(&mut self, name: &str) -> Option<usize> {
        self.symbols.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<Address> {
        self.symbols.get(name).copied().and_then(Address::new)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, usize)> for MapResolver {
    fn from_iter<T: IntoIterator<Item = (N, usize)>>(iter: T) -> Self {
        let mut resolver = MapResolver::new("map");
        for (name, address) in iter {
            resolver.insert(name, address);
        }
        resolver
    }
}

impl Resolver for MapResolver {
    fn resolve(&mut self, name: &str) -> *const c_void {
        self.symbols
            .get(name)
            .map_or(std::ptr::null(), |&address| address as *const c_void)
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }
}

// ============================================================================
// LibraryResolver
// ============================================================================

#[cfg(feature = "dylib")]
pub use library::LibraryResolver;

#[cfg(feature = "dylib")]
mod library {
    use std::borrow::Cow;
    use std::ffi::c_void;

    use super::Resolver;
    use crate::errors::{BindError, Result};

    /// Resolves exported symbols of a shared library opened by path.
    ///
    /// Addresses handed out stay valid only while this resolver is alive;
    /// keep it around for as long as any table bound from it is in use.
    pub struct LibraryResolver {
        path: String,
        library: libloading::Library,
    }

    impl LibraryResolver {
        /// Opens `path` with the platform dynamic loader.
        pub fn open(path: impl Into<String>) -> Result<Self> {
            let path = path.into();
            // SAFETY: running a library's initializers is inherent to loading
            // it; the caller chose the library.
            let library = unsafe { libloading::Library::new(&path) }.map_err(|e| {
                BindError::LibraryLoad {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            })?;
            log::debug!("Opened native library '{path}'");
            Ok(Self { path, library })
        }

        /// Tries each candidate in order and keeps the first that opens.
        pub fn open_first<'a>(candidates: impl IntoIterator<Item = &'a str>) -> Result<Self> {
            let mut last_err = None;
            for candidate in candidates {
                match Self::open(candidate) {
                    Ok(resolver) => return Ok(resolver),
                    Err(e) => {
                        log::debug!("{e}");
                        last_err = Some(e);
                    }
                }
            }
            Err(last_err.unwrap_or_else(|| BindError::LibraryLoad {
                path: String::new(),
                reason: "no candidate library names given".to_string(),
            }))
        }

        pub fn path(&self) -> &str {
            &self.path
        }
    }

    impl Resolver for LibraryResolver {
        fn resolve(&mut self, name: &str) -> *const c_void {
            let mut symbol = Vec::with_capacity(name.len() + 1);
            symbol.extend_from_slice(name.as_bytes());
            symbol.push(0);

            // SAFETY: the symbol is read as an untyped address and never
            // dereferenced here.
            match unsafe { self.library.get::<*const c_void>(&symbol) } {
                Ok(sym) => *sym,
                Err(_) => std::ptr::null(),
            }
        }

        fn label(&self) -> Cow<'_, str> {
            Cow::Borrowed(&self.path)
        }
    }
}

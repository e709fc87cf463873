//! glbind
//!
//! Build-once OpenGL symbol binding.
//!
//! At startup every entry point the API surface needs is resolved by name
//! through a caller-supplied [`Resolver`]. Either all required entry points
//! resolve and an immutable [`SymbolTable`] is produced, or the bind fails with
//! [`BindError::MissingSymbol`] naming the first one that did not. The typed
//! [`Gl`] handle pins its function pointers once, at bind time, and the
//! [`current`] module tracks which handle is active on each thread.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use glbind::{consts, Gl};
//!
//! let gl = Gl::load_with(|name| window.get_proc_address(name))?;
//! let _active = glbind::current::make_current(&gl);
//!
//! unsafe {
//!     gl.clear_color(0.0, 0.0, 0.0, 1.0);
//!     gl.clear(consts::COLOR_BUFFER_BIT);
//! }
//! ```
//!
//! # Lower Level
//!
//! Any catalog can be bound without the GL surface:
//!
//! ```rust,ignore
//! use glbind::{bind, Catalog, MapResolver};
//!
//! let catalog = Catalog::from_names(["Foo", "Bar"])?;
//! let mut resolver = MapResolver::new("demo").with("Foo", 0x1000).with("Bar", 0x2000);
//! let table = bind(&catalog, &mut resolver)?;
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub use glbind_core::{
    Address, BindError, BindReport, BindSettings, Binder, BoundEntry, Catalog, CatalogEntry,
    ContextSlot, CurrentGuard, FnPtr, MapResolver, NotLoaded, OptionalPolicy, ReportEntry,
    Requirement, Resolver, Result, SymbolName, SymbolTable, bind, context_slot,
};
#[cfg(feature = "dylib")]
pub use glbind_core::LibraryResolver;

pub use glbind_api::{Gl, consts, current, types};

/// Error types.
pub mod errors {
    pub use glbind_core::errors::{BindError, NotLoaded, Result};
}

#[cfg(target_os = "windows")]
const DEFAULT_LIBRARY_NAMES: &[&str] = &["opengl32.dll"];
#[cfg(target_os = "macos")]
const DEFAULT_LIBRARY_NAMES: &[&str] = &["/System/Library/Frameworks/OpenGL.framework/OpenGL"];
#[cfg(target_os = "android")]
const DEFAULT_LIBRARY_NAMES: &[&str] = &["libGLESv3.so", "libGLESv2.so"];
#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "android")))]
const DEFAULT_LIBRARY_NAMES: &[&str] = &["libGL.so.1", "libGL.so", "libOpenGL.so.0"];

/// Platform library names tried, in order, when no explicit path is given.
pub fn default_library_names() -> &'static [&'static str] {
    DEFAULT_LIBRARY_NAMES
}

/// Opens the platform GL library and binds [`Gl::catalog`] from it.
///
/// The returned resolver owns the library handle; keep it alive for as long
/// as the [`Gl`] is used.
#[cfg(feature = "dylib")]
pub fn load_system(settings: &BindSettings) -> Result<(Gl, LibraryResolver)> {
    let mut resolver = LibraryResolver::open_first(default_library_names().iter().copied())?;
    log::info!("Binding GL from '{}'", resolver.path());
    let gl = Gl::load_with_settings(&mut resolver, settings)?;
    Ok((gl, resolver))
}

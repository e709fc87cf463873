//! glbind core
//!
//! The engine-agnostic half of glbind:
//!
//! - [`Catalog`]: the ordered list of entry points an API surface needs
//! - [`Resolver`]: caller-supplied `name -> address` lookup
//! - [`Binder`] / [`bind`]: all-or-nothing resolution of a catalog
//! - [`SymbolTable`]: the immutable result, with typed pinning through [`FnPtr`]
//! - [`ContextSlot`]: the thread-affine "currently active" registry
//!
//! ```rust,ignore
//! use glbind_core::{bind, Catalog, MapResolver};
//!
//! let catalog = Catalog::from_names(["Foo", "Bar"])?;
//! let mut resolver = MapResolver::new("demo").with("Foo", 0x1000).with("Bar", 0x2000);
//! let table = bind(&catalog, &mut resolver)?;
//! assert_eq!(table.lookup("Bar").map(|a| a.get()), Some(0x2000));
//! ```

pub mod address;
pub mod binder;
pub mod catalog;
pub mod errors;
pub mod registry;
pub mod resolver;
pub mod settings;
pub mod table;

pub use address::{Address, FnPtr};
pub use binder::{bind, Binder};
pub use catalog::{Catalog, CatalogEntry, Requirement, SymbolName};
pub use errors::{BindError, NotLoaded, Result};
pub use registry::{ContextSlot, CurrentGuard};
#[cfg(feature = "dylib")]
pub use resolver::LibraryResolver;
pub use resolver::{MapResolver, Resolver};
pub use settings::{BindSettings, OptionalPolicy};
pub use table::{BindReport, BoundEntry, ReportEntry, SymbolTable};

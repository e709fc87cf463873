//! Error Types
//!
//! This module defines the error types produced while building a binding.
//!
//! # Overview
//!
//! The main error type [`BindError`] covers every failure mode of the loader:
//! - A required entry point that no resolver attempt could find
//! - A malformed catalog (duplicate entry names)
//! - A native library that could not be opened (feature `dylib`)
//!
//! Calls through an optional entry point that was absent at bind time return
//! [`NotLoaded`] instead of dispatching.
//!
//! # Usage
//!
//! ```rust,ignore
//! use glbind_core::{bind, BindError, Catalog};
//!
//! match bind(&catalog, &mut resolver) {
//!     Ok(table) => { /* ... */ }
//!     Err(BindError::MissingSymbol { name, context, .. }) => {
//!         log::error!("{name} is unavailable on context '{context}'");
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```

use thiserror::Error;

use crate::catalog::SymbolName;

/// The main error type for binding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    // ========================================================================
    // Resolution Errors
    // ========================================================================
    /// A required entry point could not be resolved. `name` is the first
    /// unresolved entry in catalog order.
    #[error("Missing symbol '{name}' (context '{context}', resolver '{resolver}')")]
    MissingSymbol {
        /// Primary catalog name of the entry
        name: SymbolName,
        /// Label of the native context the bind was attempted for
        context: String,
        /// Label of the resolver that was consulted
        resolver: String,
    },

    // ========================================================================
    // Catalog Errors
    // ========================================================================
    /// The same primary name was declared twice in one catalog.
    #[error("Duplicate catalog symbol: {0}")]
    DuplicateSymbol(SymbolName),

    // ========================================================================
    // Platform Errors
    // ========================================================================
    /// Failed to open a native library for resolution.
    #[cfg(feature = "dylib")]
    #[error("Failed to load native library '{path}': {reason}")]
    LibraryLoad {
        /// Path or soname that was requested
        path: String,
        /// Loader diagnostic
        reason: String,
    },
}

impl BindError {
    /// Shorthand for the missing-symbol variant.
    pub fn missing_symbol(
        name: impl Into<SymbolName>,
        context: impl Into<String>,
        resolver: impl Into<String>,
    ) -> Self {
        BindError::MissingSymbol {
            name: name.into(),
            context: context.into(),
            resolver: resolver.into(),
        }
    }

    /// Name of the offending symbol, if the error is tied to one.
    pub fn symbol(&self) -> Option<&SymbolName> {
        match self {
            BindError::MissingSymbol { name, .. } | BindError::DuplicateSymbol(name) => Some(name),
            #[cfg(feature = "dylib")]
            BindError::LibraryLoad { .. } => None,
        }
    }
}

/// Returned by a call through an optional entry point that was absent when
/// the table was bound.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Function not loaded: {0}")]
pub struct NotLoaded(pub &'static str);

/// Alias for `Result<T, BindError>`.
pub type Result<T> = std::result::Result<T, BindError>;

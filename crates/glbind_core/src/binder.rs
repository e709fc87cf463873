//! Binder
//!
//! Resolves every entry of a [`Catalog`] through a [`Resolver`] and produces a
//! [`SymbolTable`], or fails without producing anything.
//!
//! # Algorithm
//!
//! 1. Walk the catalog in declaration order.
//! 2. For each entry, ask the resolver for the primary name, then for each
//!    fallback, until one yields an address accepted by the settings.
//! 3. A required entry with no accepted address aborts the attempt with
//!    [`BindError::MissingSymbol`]; everything gathered so far is dropped.
//! 4. An optional entry with no accepted address is recorded as absent.
//! 5. Once the walk completes, the entries are frozen into a table.
//!
//! No state survives between calls and nothing is retried: the caller decides
//! whether to try another resolver, degrade, or abort.

use crate::address::Address;
use crate::catalog::{Catalog, CatalogEntry, Requirement};
use crate::errors::{BindError, Result};
use crate::resolver::Resolver;
use crate::settings::{BindSettings, OptionalPolicy};
use crate::table::{BoundEntry, SymbolTable};

/// Binds `catalog` with default [`BindSettings`].
pub fn bind<R>(catalog: &Catalog, resolver: &mut R) -> Result<SymbolTable>
where
    R: Resolver + ?Sized,
{
    Binder::default().bind(catalog, resolver)
}

/// Binds catalogs under a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Binder {
    settings: BindSettings,
}

impl Binder {
    pub fn new(settings: BindSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &BindSettings {
        &self.settings
    }

    pub fn bind<R>(&self, catalog: &Catalog, resolver: &mut R) -> Result<SymbolTable>
    where
        R: Resolver + ?Sized,
    {
        let context = self.settings.context_label.as_ref();
        let resolver_label = resolver.label().into_owned();

        log::debug!(
            "Binding {} symbols ({} required) for context '{}' via '{}'",
            catalog.len(),
            catalog.required_count(),
            context,
            resolver_label
        );

        let mut entries = Vec::with_capacity(catalog.len());

        for entry in catalog {
            let resolved = self.resolve_entry(entry, resolver);

            let requirement = match self.settings.optional_policy {
                OptionalPolicy::Require => Requirement::Required,
                OptionalPolicy::Tolerate => entry.requirement(),
            };

            match resolved {
                Some((address, resolved_as)) => {
                    log::trace!("{} -> {}", entry.name(), address);
                    entries.push(BoundEntry {
                        name: entry.name().clone(),
                        requirement: entry.requirement(),
                        resolved_as,
                        address: Some(address),
                    });
                }
                None if requirement == Requirement::Required => {
                    log::debug!(
                        "Bind for context '{}' aborted at '{}' after {} of {} symbols",
                        context,
                        entry.name(),
                        entries.len(),
                        catalog.len()
                    );
                    return Err(BindError::missing_symbol(
                        entry.name().clone(),
                        context,
                        resolver_label,
                    ));
                }
                None => {
                    log::warn!(
                        "Optional symbol '{}' is unavailable on context '{}'",
                        entry.name(),
                        context
                    );
                    entries.push(BoundEntry {
                        name: entry.name().clone(),
                        requirement: entry.requirement(),
                        resolved_as: None,
                        address: None,
                    });
                }
            }
        }

        let table = SymbolTable::from_entries(context.to_owned(), resolver_label, entries);
        log::debug!(
            "Bound {}/{} symbols for context '{}'",
            table.loaded_count(),
            table.len(),
            table.context()
        );
        Ok(table)
    }

    /// First accepted candidate; `resolved_as` is set only for fallbacks.
    fn resolve_entry<R>(
        &self,
        entry: &CatalogEntry,
        resolver: &mut R,
    ) -> Option<(Address, Option<&'static str>)>
    where
        R: Resolver + ?Sized,
    {
        let raw = resolver.resolve(entry.name().as_str()) as usize;
        if self.settings.accepts(raw) {
            return Address::new(raw).map(|address| (address, None));
        }

        for &fallback in entry.fallbacks() {
            let raw = resolver.resolve(fallback) as usize;
            if self.settings.accepts(raw) {
                log::debug!("'{}' resolved through fallback '{}'", entry.name(), fallback);
                return Address::new(raw).map(|address| (address, Some(fallback)));
            }
        }

        None
    }
}

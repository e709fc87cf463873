// src/macros.rs

/// Declarative entry point table.
///
/// Each row names the Rust method, the registry name without its `gl`
/// prefix, the native signature and optional fallback aliases:
///
/// ```rust,ignore
/// gl_api! {
///     required {
///         fn clear = Clear(mask: GLbitfield);
///     }
///     optional {
///         fn object_label = ObjectLabel(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar),
///             or ["glObjectLabelKHR"];
///     }
/// }
/// ```
///
/// Generates:
/// - `catalog()`: the validated [`Catalog`](glbind_core::Catalog), built once
/// - `GlFns`: one pinned pointer per row (`Option` for optional rows)
/// - one `unsafe fn` per row on [`Gl`](crate::Gl); optional rows return
///   `Result<_, NotLoaded>` and get a `has_*` probe
macro_rules! gl_api {
    (@ret) => { () };
    (@ret $ret:ty) => { $ret };

    (
        required {
            $(
                $(#[$rmeta:meta])*
                fn $rmethod:ident = $rsym:ident ( $($rarg:ident : $rty:ty),* $(,)? ) $(-> $rret:ty)?
                    $(, or [ $($rfb:literal),+ $(,)? ])? ;
            )*
        }
        optional {
            $(
                $(#[$ometa:meta])*
                fn $omethod:ident = $osym:ident ( $($oarg:ident : $oty:ty),* $(,)? ) $(-> $oret:ty)?
                    $(, or [ $($ofb:literal),+ $(,)? ])? ;
            )*
        }
    ) => {
        fn catalog_entries() -> ::std::vec::Vec<glbind_core::CatalogEntry> {
            ::std::vec![
                $(
                    glbind_core::CatalogEntry::required(concat!("gl", stringify!($rsym)))
                        .with_fallbacks(&[$($($rfb),+)?]),
                )*
                $(
                    glbind_core::CatalogEntry::optional(concat!("gl", stringify!($osym)))
                        .with_fallbacks(&[$($($ofb),+)?]),
                )*
            ]
        }

        static CATALOG: ::std::sync::LazyLock<glbind_core::Result<glbind_core::Catalog>> =
            ::std::sync::LazyLock::new(|| glbind_core::Catalog::new(catalog_entries()));

        /// Every entry point [`Gl`](crate::Gl) binds, in declaration order.
        pub fn catalog() -> glbind_core::Result<&'static glbind_core::Catalog> {
            CATALOG.as_ref().map_err(::std::clone::Clone::clone)
        }

        /// Typed pointers pinned once per bind.
        #[derive(Clone, Copy)]
        pub(crate) struct GlFns {
            $( $rmethod: unsafe extern "system" fn($($rty),*) $(-> $rret)?, )*
            $( $omethod: ::std::option::Option<unsafe extern "system" fn($($oty),*) $(-> $oret)?>, )*
        }

        impl GlFns {
            pub(crate) fn pin(table: &glbind_core::SymbolTable) -> glbind_core::Result<Self> {
                // SAFETY: every row's signature is the registry signature of
                // the entry point it is pinned from.
                unsafe {
                    Ok(Self {
                        $(
                            $rmethod: table
                                .pin(concat!("gl", stringify!($rsym)))
                                .ok_or_else(|| glbind_core::BindError::missing_symbol(
                                    concat!("gl", stringify!($rsym)),
                                    table.context(),
                                    table.resolver(),
                                ))?,
                        )*
                        $( $omethod: table.pin(concat!("gl", stringify!($osym))), )*
                    })
                }
            }
        }

        impl $crate::gl::Gl {
            $(
                $(#[$rmeta])*
                #[inline]
                pub unsafe fn $rmethod(&self, $($rarg: $rty),*) $(-> $rret)? {
                    unsafe { (self.fns().$rmethod)($($rarg),*) }
                }
            )*

            $(
                $(#[$ometa])*
                #[inline]
                pub unsafe fn $omethod(
                    &self,
                    $($oarg: $oty),*
                ) -> ::std::result::Result<gl_api!(@ret $($oret)?), glbind_core::NotLoaded> {
                    match self.fns().$omethod {
                        Some(f) => Ok(unsafe { f($($oarg),*) }),
                        None => Err(glbind_core::NotLoaded(concat!("gl", stringify!($osym)))),
                    }
                }
            )*
        }

        paste::paste! {
            impl $crate::gl::Gl {
                $(
                    /// Whether this optional entry point was bound.
                    #[inline]
                    pub fn [<has_ $omethod>](&self) -> bool {
                        self.fns().$omethod.is_some()
                    }
                )*
            }
        }
    };
}

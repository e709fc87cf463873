//! Binder Settings
//!
//! [`BindSettings`] configures one bind attempt: how the native context is
//! labelled in diagnostics, which raw addresses count as "not found", and
//! whether optional catalog entries may be absent.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use glbind_core::{Binder, BindSettings, OptionalPolicy};
//!
//! // Defaults: optional entries tolerated, only null counts as "not found"
//! let settings = BindSettings::default();
//!
//! // Treat every entry as mandatory and label the context for error reports
//! let settings = BindSettings::default()
//!     .with_context_label("offscreen-egl")
//!     .with_optional_policy(OptionalPolicy::Require);
//!
//! // Resolving through wglGetProcAddress
//! let settings = BindSettings::default().with_platform_sentinels_rejected(true);
//!
//! let table = Binder::new(settings).bind(&catalog, &mut resolver)?;
//! ```

use std::borrow::Cow;

/// How absent optional entries are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OptionalPolicy {
    /// Record the absence in the table and keep binding.
    #[default]
    Tolerate,
    /// Treat every catalog entry as required.
    Require,
}

/// Configuration for a [`Binder`](crate::Binder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindSettings {
    /// Name of the native context, carried by the table and by errors.
    pub context_label: Cow<'static, str>,

    /// Also treat `1`, `2`, `3` and `usize::MAX` as "not found".
    ///
    /// Some `wglGetProcAddress` implementations return these instead of null
    /// for unsupported names. Off by default; enable it for WGL resolvers.
    pub reject_platform_sentinels: bool,

    pub optional_policy: OptionalPolicy,
}

impl Default for BindSettings {
    fn default() -> Self {
        Self {
            context_label: Cow::Borrowed("default"),
            reject_platform_sentinels: false,
            optional_policy: OptionalPolicy::Tolerate,
        }
    }
}

impl BindSettings {
    #[must_use]
    pub fn with_context_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.context_label = label.into();
        self
    }

    #[must_use]
    pub fn with_platform_sentinels_rejected(mut self, reject: bool) -> Self {
        self.reject_platform_sentinels = reject;
        self
    }

    #[must_use]
    pub fn with_optional_policy(mut self, policy: OptionalPolicy) -> Self {
        self.optional_policy = policy;
        self
    }

    /// Whether a raw resolver result is usable under these settings.
    pub(crate) fn accepts(&self, raw: usize) -> bool {
        match raw {
            0 => false,
            1 | 2 | 3 | usize::MAX => !self.reject_platform_sentinels,
            _ => true,
        }
    }
}

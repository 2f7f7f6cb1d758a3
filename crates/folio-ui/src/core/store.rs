//! Theme persistence seam.
//!
//! # Design
//! - Storage is reached through [`ThemeStore`] so the browser backend stays in `app`.
//! - [`ThemeSync`] writes once per observed change; repeated observations of the same
//!   mode are no-ops.

use std::cell::Cell;

use crate::core::theme::{ThemeMode, resolve_theme};

/// Storage key holding the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Single-key persistence for the selected theme.
pub trait ThemeStore {
    /// Raw persisted value, if any.
    fn load(&self) -> Option<String>;

    /// Persist `theme`. Failures are the backend's to report; callers do not retry.
    fn save(&self, theme: ThemeMode);
}

/// Resolve the start-up theme from `store`, consulting `system` only when needed.
#[must_use]
pub fn initial_theme<S: ThemeStore>(
    store: &S,
    system: impl FnOnce() -> Option<ThemeMode>,
) -> ThemeMode {
    resolve_theme(store.load().as_deref(), system)
}

/// Mirrors the in-memory theme into a [`ThemeStore`].
#[derive(Debug)]
pub struct ThemeSync<S> {
    store: S,
    last_written: Cell<Option<ThemeMode>>,
}

impl<S: ThemeStore> ThemeSync<S> {
    /// Wrap `store`; nothing is written until the first [`ThemeSync::persist`].
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            last_written: Cell::new(None),
        }
    }

    /// Write `theme` unless it is already the last value written.
    /// Returns whether a write happened.
    pub fn persist(&self, theme: ThemeMode) -> bool {
        if self.last_written.get() == Some(theme) {
            return false;
        }
        self.store.save(theme);
        self.last_written.set(Some(theme));
        true
    }

    /// Backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

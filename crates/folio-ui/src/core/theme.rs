//! Light/dark theme mode and its start-up resolution.
//!
//! # Design
//! - The stored preference wins when it is exactly `light` or `dark`.
//! - Otherwise the host color-scheme preference is consulted, lazily.
//! - Anything left unresolved lands on [`ThemeMode::Dark`].

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    #[default]
    Dark,
}

impl ThemeMode {
    /// String identifier used for CSS classes and the persisted value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Only the exact literals are accepted.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the theme switch; it hints at the mode a click switches to.
    #[must_use]
    pub const fn switch_icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    /// Accessible label for the theme switch.
    #[must_use]
    pub const fn switch_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }
}

/// Resolve the initial theme from the stored value, then the system preference.
///
/// `system` is only invoked when the stored value is missing or unrecognised.
/// A light system preference is honoured; dark applies only when `system` yields nothing.
#[must_use]
pub fn resolve_theme(
    stored: Option<&str>,
    system: impl FnOnce() -> Option<ThemeMode>,
) -> ThemeMode {
    stored
        .and_then(ThemeMode::from_stored)
        .or_else(system)
        .unwrap_or_default()
}

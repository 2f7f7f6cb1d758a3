//! Root UI state owned by the app component.
//!
//! # Design
//! - Theme and loading phase are independent; each action touches exactly one of them.
//! - Reducers are pure so they can be exercised without a DOM.

use std::rc::Rc;

use yew::prelude::Reducible;

use crate::core::splash::LoadingPhase;
use crate::core::theme::ThemeMode;

/// Theme and loading phase for the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SiteState {
    /// Active theme.
    pub theme: ThemeMode,
    /// Splash or main content.
    pub phase: LoadingPhase,
}

/// Events that mutate [`SiteState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteAction {
    /// User clicked the theme switch.
    ToggleTheme,
    /// The splash timer fired.
    SplashElapsed,
}

impl SiteState {
    /// Fresh state for a new session: the resolved theme and the splash phase.
    #[must_use]
    pub const fn new(theme: ThemeMode) -> Self {
        Self {
            theme,
            phase: LoadingPhase::Splash,
        }
    }

    /// State after `action`.
    #[must_use]
    pub const fn apply(self, action: SiteAction) -> Self {
        match action {
            SiteAction::ToggleTheme => Self {
                theme: self.theme.toggled(),
                ..self
            },
            SiteAction::SplashElapsed => Self {
                phase: self.phase.advance(),
                ..self
            },
        }
    }
}

impl Reducible for SiteState {
    type Action = SiteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

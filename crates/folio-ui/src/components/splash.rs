//! Splash screen shown while the page warms up.

use yew::prelude::*;

use crate::core::splash::splash_duration_style;

/// Props for [`SplashScreen`].
#[derive(Properties, PartialEq)]
pub struct SplashScreenProps {
    /// Owner name.
    pub name: AttrValue,
    /// Role line.
    pub role: AttrValue,
}

/// Decorative splash with a progress bar animated over the splash duration.
#[function_component(SplashScreen)]
pub fn splash_screen(props: &SplashScreenProps) -> Html {
    html! {
        <div class="splash" role="status" aria-live="polite">
            <div class="splash-content">
                <div class="splash-logo">
                    <span class="splash-name">{props.name.clone()}</span>
                </div>
                <p class="splash-role">{props.role.clone()}</p>
                <div class="splash-bar">
                    <div class="splash-bar-fill" style={splash_duration_style()} />
                </div>
            </div>
        </div>
    }
}

use crate::components::SiteView;
use crate::core::content::SiteContent;
use crate::core::splash::SplashTimer;
use crate::core::state::{SiteAction, SiteState};
use crate::core::store::{ThemeSync, initial_theme};
use crate::core::theme::ThemeMode;
use gloo::console;
use gloo::utils::window;
use js_sys::Date;
use preferences::{BrowserThemeStore, system_theme};
use timers::BrowserScheduler;
use yew::prelude::*;

mod preferences;
mod timers;

#[function_component(PortfolioApp)]
fn portfolio_app() -> Html {
    let content = use_memo(|_| load_content(), ());
    let state = use_reducer(|| SiteState::new(initial_theme(&BrowserThemeStore, system_theme)));
    let theme_sync = use_mut_ref(|| ThemeSync::new(BrowserThemeStore));

    {
        let theme_sync = theme_sync.clone();
        use_effect_with_deps(
            move |theme: &ThemeMode| {
                apply_theme(*theme);
                if theme_sync.borrow().persist(*theme) {
                    console::debug!("theme stored", theme.as_str());
                }
                || ()
            },
            state.theme,
        );
    }
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let timer = SplashTimer::arm(&BrowserScheduler, move || {
                    console::debug!("splash elapsed");
                    state.dispatch(SiteAction::SplashElapsed);
                });
                move || drop(timer)
            },
            (),
        );
    }

    let on_toggle_theme = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(SiteAction::ToggleTheme))
    };

    html! {
        <SiteView
            state={*state}
            content={content}
            year={current_year()}
            on_toggle_theme={on_toggle_theme}
        />
    }
}

fn load_content() -> SiteContent {
    match SiteContent::embedded() {
        Ok(content) => content,
        Err(err) => {
            console::error!("site content rejected", err.to_string());
            SiteContent::fallback()
        }
    }
}

fn apply_theme(theme: ThemeMode) {
    if let Some(body) = window().document().and_then(|document| document.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

fn current_year() -> u32 {
    Date::new_0().get_full_year()
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<PortfolioApp>::with_root(root).render();
    } else {
        yew::Renderer::<PortfolioApp>::new().render();
    }
}

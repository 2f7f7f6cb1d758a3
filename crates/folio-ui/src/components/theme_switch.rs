//! Light/dark toggle button.

use yew::prelude::*;

use crate::core::theme::ThemeMode;

/// Props for [`ThemeSwitch`].
#[derive(Properties, PartialEq)]
pub struct ThemeSwitchProps {
    /// Active theme.
    pub theme: ThemeMode,
    /// Fired on click.
    pub on_toggle: Callback<()>,
}

/// Track-and-thumb light/dark switch.
#[function_component(ThemeSwitch)]
pub fn theme_switch(props: &ThemeSwitchProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let pressed = if props.theme == ThemeMode::Dark {
        "true"
    } else {
        "false"
    };

    html! {
        <button
            type="button"
            class="theme-switch"
            aria-label={props.theme.switch_label()}
            aria-pressed={pressed}
            onclick={onclick}
        >
            <span class="switch-track">
                <span class={classes!("switch-thumb", props.theme.as_str())} />
            </span>
            <span class="switch-icon" aria-hidden="true">{props.theme.switch_icon()}</span>
        </button>
    }
}

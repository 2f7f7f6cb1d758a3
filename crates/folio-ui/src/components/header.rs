//! Sticky header: logo, in-page navigation and the theme switch.

use yew::prelude::*;

use crate::components::theme_switch::ThemeSwitch;
use crate::core::content::Section;
use crate::core::theme::ThemeMode;

/// Props for [`SiteHeader`].
#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    /// Logo text.
    pub name: AttrValue,
    /// Active theme.
    pub theme: ThemeMode,
    /// Fired when the theme switch is clicked.
    pub on_toggle_theme: Callback<()>,
}

/// Logo, in-page navigation and the theme switch.
#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="logo-block">
                <span class="logo-text">{props.name.clone()}</span>
            </div>
            <nav class="nav">
                {for Section::ALL.iter().map(|section| html! {
                    <a href={section.href()} class="nav-link">{section.label()}</a>
                })}
                <ThemeSwitch theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
            </nav>
        </header>
    }
}

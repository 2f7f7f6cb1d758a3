//! Page footer with the copyright line.

use yew::prelude::*;

/// Props for [`SiteFooter`].
#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
    /// Copyright holder.
    pub name: AttrValue,
    /// Copyright year.
    pub year: u32,
}

/// Copyright line.
#[function_component(SiteFooter)]
pub fn site_footer(props: &SiteFooterProps) -> Html {
    html! {
        <footer>
            <p>{format!("© {} {}", props.year, props.name)}</p>
        </footer>
    }
}

//! Fixed rail of social profile links.

use yew::prelude::*;

use crate::components::icons::social_icon;
use crate::components::link_target;
use crate::core::content::SocialLink;

/// Props for [`SocialRail`].
#[derive(Properties, PartialEq)]
pub struct SocialRailProps {
    /// Links in display order.
    pub links: Vec<SocialLink>,
}

/// Fixed rail of profile and contact icons on the left edge.
#[function_component(SocialRail)]
pub fn social_rail(props: &SocialRailProps) -> Html {
    html! {
        <div class="social-left">
            {for props.links.iter().map(|link| {
                let (target, rel) = link_target(&link.href);
                html! {
                    <a
                        href={link.href.clone()}
                        target={target}
                        rel={rel}
                        aria-label={link.label.clone()}
                    >
                        {social_icon(link.kind, classes!("social-icon"))}
                    </a>
                }
            })}
        </div>
    }
}

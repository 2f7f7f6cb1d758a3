//! Outline SVG icons for the social rail.

use yew::prelude::*;

use crate::core::content::SocialKind;

/// Shared icon props.
#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Extra CSS classes for the SVG.
    #[prop_or_default]
    pub class: Classes,
    /// Accessible title; the icon is hidden from assistive tech when absent.
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={props.class.clone()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

/// GitHub mark.
#[function_component(IconGithub)]
pub fn icon_github(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5c.08-1.25-.27-2.48-1-3.5c.28-1.15.28-2.35 0-3.5c0 0-1 0-3 1.5c-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5c-.39.49-.68 1.05-.85 1.65S8.93 17.38 9 18v4" />
            <path d="M9 18c-4.51 2-5-2-7-2" />
        </> },
    )
}

/// `LinkedIn` mark.
#[function_component(IconLinkedin)]
pub fn icon_linkedin(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2a2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6M2 9h4v12H2z" />
            <circle cx="4" cy="4" r="2" />
        </> },
    )
}

/// Envelope.
#[function_component(IconEnvelope)]
pub fn icon_envelope(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <rect width="20" height="16" x="2" y="4" rx="2" />
            <path d="m22 7l-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        </> },
    )
}

/// Icon for a [`SocialKind`].
#[must_use]
pub fn social_icon(kind: SocialKind, class: Classes) -> Html {
    match kind {
        SocialKind::Github => html! { <IconGithub class={class} /> },
        SocialKind::Linkedin => html! { <IconLinkedin class={class} /> },
        SocialKind::Email => html! { <IconEnvelope class={class} /> },
    }
}

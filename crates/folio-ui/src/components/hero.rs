//! Hero block at the top of the main view.

use yew::prelude::*;

use crate::core::content::Hero;

/// Props for [`HeroSection`].
#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    /// Hero copy.
    pub hero: Hero,
}

/// Landing headline block.
#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let hero = &props.hero;
    html! {
        <section class="hero">
            <p class="hero-kicker">{hero.kicker.clone()}</p>
            <h1 class="hero-title">{hero.title.clone()}</h1>
            <h2 class="hero-subtitle">{hero.subtitle.clone()}</h2>
            <p class="hero-text">{hero.text.clone()}</p>
        </section>
    }
}

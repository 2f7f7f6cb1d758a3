//! Root view: a pure function of [`SiteState`] and the site content.

use std::rc::Rc;

use yew::prelude::*;

use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::components::hero::HeroSection;
use crate::components::sections::{AboutSection, ProjectsSection, SkillsSection};
use crate::components::social::SocialRail;
use crate::components::splash::SplashScreen;
use crate::core::content::SiteContent;
use crate::core::state::SiteState;

/// Props for [`SiteView`].
#[derive(Properties, PartialEq)]
pub struct SiteViewProps {
    /// Theme and phase to render.
    pub state: SiteState,
    /// Validated site content.
    pub content: Rc<SiteContent>,
    /// Year printed in the footer.
    pub year: u32,
    /// Fired when the theme switch is clicked.
    pub on_toggle_theme: Callback<()>,
}

/// Themed root container holding either the splash or the main site.
#[function_component(SiteView)]
pub fn site_view(props: &SiteViewProps) -> Html {
    let content = &props.content;
    let theme = props.state.theme;
    let body = if props.state.phase.is_splash() {
        html! {
            <SplashScreen
                name={content.name.clone()}
                role={content.role.clone()}
            />
        }
    } else {
        html! {
            <>
                <SocialRail links={content.socials.clone()} />
                <div class="container">
                    <SiteHeader
                        name={content.name.clone()}
                        theme={theme}
                        on_toggle_theme={props.on_toggle_theme.clone()}
                    />
                    <main>
                        <HeroSection hero={content.hero.clone()} />
                        <AboutSection paragraphs={content.about.clone()} />
                        <ProjectsSection projects={content.projects.clone()} />
                        <SkillsSection groups={content.skills.clone()} />
                    </main>
                    <SiteFooter name={content.name.clone()} year={props.year} />
                </div>
            </>
        }
    };

    html! {
        <div class={classes!("app", theme.as_str())}>
            {body}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::core::splash::LoadingPhase;
    use crate::core::theme::ThemeMode;
    use yew::ServerRenderer;

    async fn render(state: SiteState) -> String {
        ServerRenderer::<SiteView>::with_props(move || SiteViewProps {
            state,
            content: Rc::new(SiteContent::embedded().unwrap_or_else(|_| SiteContent::fallback())),
            year: 2025,
            on_toggle_theme: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn splash_phase_renders_only_the_splash() {
        let html = render(SiteState::new(ThemeMode::Dark)).await;
        assert!(html.contains("class=\"app dark\""));
        assert!(html.contains("splash-bar-fill"));
        assert!(html.contains("--splash-duration: 2600ms"));
        assert!(html.contains("Junior Software Developer"));
        assert!(!html.contains("theme-switch"));
        assert!(!html.contains("project-card"));
    }

    #[tokio::test]
    async fn main_phase_renders_sections_with_theme_class() {
        let html = render(SiteState {
            theme: ThemeMode::Light,
            phase: LoadingPhase::Main,
        })
        .await;
        assert!(html.contains("class=\"app light\""));
        assert!(!html.contains("splash-bar"));
        for id in ["id=\"about\"", "id=\"projects\"", "id=\"skills\""] {
            assert!(html.contains(id), "missing {id}");
        }
        assert!(html.contains("01."));
        assert!(html.contains("03."));
        assert!(html.contains("© 2025 Arslaan Ahmed"));
        assert!(html.contains("🌙"));
        assert!(html.contains("switch-thumb light"));
    }

    #[tokio::test]
    async fn main_phase_renders_every_outbound_link() {
        let html = render(SiteState {
            theme: ThemeMode::Dark,
            phase: LoadingPhase::Main,
        })
        .await;
        let content = SiteContent::embedded().unwrap_or_else(|_| SiteContent::fallback());
        for project in &content.projects {
            assert!(html.contains(&project.link.href), "missing {}", project.link.href);
        }
        assert!(html.contains("href=\"mailto:arslaanahmed24@gmail.com\""));
        assert!(html.contains("rel=\"noreferrer\""));
        assert!(html.contains("☀️"));
    }
}

//! About, projects and skills sections of the main view.

use yew::prelude::*;

use crate::components::link_target;
use crate::components::section_title::SectionTitle;
use crate::core::content::{Project, Section, SkillGroup};

/// Props for [`AboutSection`].
#[derive(Properties, PartialEq)]
pub struct AboutSectionProps {
    /// Paragraphs in order.
    pub paragraphs: Vec<String>,
}

/// "About" prose.
#[function_component(AboutSection)]
pub fn about_section(props: &AboutSectionProps) -> Html {
    html! {
        <section id={Section::About.id()}>
            <SectionTitle section={Section::About} />
            {for props.paragraphs.iter().map(|text| html! { <p>{text.clone()}</p> })}
        </section>
    }
}

/// Props for [`ProjectCard`].
#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    /// Project to show.
    pub project: Project,
}

/// One showcase card.
#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let (target, rel) = link_target(&project.link.href);
    html! {
        <article class="project-card">
            <p class="project-label">{project.label.clone()}</p>
            <h3 class="project-title">{project.title.clone()}</h3>
            <ul class="project-points">
                {for project.points.iter().map(|point| html! { <li>{point.clone()}</li> })}
            </ul>
            <p class="project-tech">{project.tech_line()}</p>
            <a
                href={project.link.href.clone()}
                target={target}
                rel={rel}
                class="project-link"
            >
                {project.link.label.clone()}
            </a>
        </article>
    }
}

/// Props for [`ProjectsSection`].
#[derive(Properties, PartialEq)]
pub struct ProjectsSectionProps {
    /// Cards in display order.
    pub projects: Vec<Project>,
}

/// Project showcase.
#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsSectionProps) -> Html {
    html! {
        <section id={Section::Projects.id()}>
            <SectionTitle section={Section::Projects} />
            <div class="project-list">
                {for props.projects.iter().map(|project| html! {
                    <ProjectCard key={project.title.clone()} project={project.clone()} />
                })}
            </div>
        </section>
    }
}

/// Props for [`SkillsSection`].
#[derive(Properties, PartialEq)]
pub struct SkillsSectionProps {
    /// Skill columns in display order.
    pub groups: Vec<SkillGroup>,
}

/// Skills grid.
#[function_component(SkillsSection)]
pub fn skills_section(props: &SkillsSectionProps) -> Html {
    html! {
        <section id={Section::Skills.id()}>
            <SectionTitle section={Section::Skills} />
            <div class="skills-grid">
                {for props.groups.iter().map(|group| html! {
                    <div class="skills-column">
                        <h4>{group.title.clone()}</h4>
                        <ul>
                            {for group.items.iter().map(|item| html! { <li>{item.clone()}</li> })}
                        </ul>
                    </div>
                })}
            </div>
        </section>
    }
}

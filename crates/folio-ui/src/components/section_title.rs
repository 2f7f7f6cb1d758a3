//! Numbered section heading shared by the content sections.

use yew::prelude::*;

use crate::core::content::Section;

/// Props for [`SectionTitle`].
#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    /// Section being titled.
    pub section: Section,
}

/// Numbered heading with a trailing rule, e.g. `01. About ———`.
#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            <span class="section-index">{props.section.marker()}</span>
            <h2>{props.section.label()}</h2>
            <div class="section-line" />
        </div>
    }
}

//! Yew view components. Every component is a pure function of its props.

pub mod footer;
pub mod header;
pub mod hero;
pub mod icons;
pub mod section_title;
pub mod sections;
pub mod social;
pub mod splash;
pub mod theme_switch;
pub mod view;

pub use view::{SiteView, SiteViewProps};

use crate::core::content::opens_new_tab;

/// `target`/`rel` attributes for an outbound href; external pages open in a new tab.
pub(crate) fn link_target(href: &str) -> (Option<&'static str>, Option<&'static str>) {
    if opens_new_tab(href) {
        (Some("_blank"), Some("noreferrer"))
    } else {
        (None, None)
    }
}

//! Site content model, embedded data, and validation.
//!
//! # Design
//! - Content ships as `content/site.json`, embedded at compile time.
//! - Validation runs once at load; views assume validated content.
//! - A rejected file degrades to [`SiteContent::fallback`] rather than a blank page.

use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_SITE: &str = include_str!("../../content/site.json");

const FALLBACK_NAME: &str = "Portfolio";

/// Separator between technology names on project cards.
pub const TECH_SEPARATOR: &str = " · ";

/// Errors raised while loading site content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content document is not valid JSON for the model.
    #[error("site content could not be parsed")]
    Parse {
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// A required text field was blank.
    #[error("site content field is empty")]
    EmptyField {
        /// Name of the blank field.
        field: &'static str,
    },
    /// A page section has nothing to show.
    #[error("site content section has no entries")]
    EmptySection {
        /// Section identifier.
        section: &'static str,
    },
    /// A link target uses an unsupported scheme.
    #[error("unsupported link target")]
    UnsupportedLink {
        /// Offending href.
        href: String,
    },
    /// A project card has no highlight bullets.
    #[error("project has no highlights")]
    ProjectWithoutPoints {
        /// Project title.
        title: String,
    },
    /// A skill group lists no skills.
    #[error("skill group has no items")]
    EmptySkillGroup {
        /// Skill group title.
        title: String,
    },
}

/// Everything the main view renders.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteContent {
    /// Owner name, shown on the splash, header and footer.
    pub name: String,
    /// Role line under the splash name.
    pub role: String,
    /// Landing hero copy.
    pub hero: Hero,
    /// About paragraphs.
    pub about: Vec<String>,
    /// Social profile and contact links.
    pub socials: Vec<SocialLink>,
    /// Project cards.
    pub projects: Vec<Project>,
    /// Skill groups.
    pub skills: Vec<SkillGroup>,
}

/// Hero copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    /// Small greeting line above the title.
    pub kicker: String,
    /// Headline.
    pub title: String,
    /// Secondary headline.
    pub subtitle: String,
    /// Intro paragraph.
    pub text: String,
}

/// Kind of social link, selecting the icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    /// GitHub profile.
    Github,
    /// `LinkedIn` profile.
    Linkedin,
    /// Email contact.
    Email,
}

/// Social profile or contact link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Icon selector.
    pub kind: SocialKind,
    /// Link target.
    pub href: String,
    /// Accessible label.
    pub label: String,
}

/// Outbound link with visible text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    /// Link target.
    pub href: String,
    /// Visible text.
    pub label: String,
}

/// Project showcase card.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Eyebrow label (e.g. "Featured Project").
    pub label: String,
    /// Project title.
    pub title: String,
    /// Highlight bullets.
    pub points: Vec<String>,
    /// Technologies used.
    pub tech: Vec<String>,
    /// Repository or demo link.
    pub link: Link,
}

impl Project {
    /// Technologies joined for display.
    #[must_use]
    pub fn tech_line(&self) -> String {
        self.tech.join(TECH_SEPARATOR)
    }
}

/// Titled list of skills.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillGroup {
    /// Column heading.
    pub title: String,
    /// Skills in the group.
    pub items: Vec<String>,
}

/// Numbered, anchored sections of the main view, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    /// About section.
    About,
    /// Projects section.
    Projects,
    /// Skills section.
    Skills,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Self; 3] = [Self::About, Self::Projects, Self::Skills];

    /// Element id used for in-page anchors.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
        }
    }

    /// Navigation and heading label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
        }
    }

    /// One-based position on the page.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::About => 1,
            Self::Projects => 2,
            Self::Skills => 3,
        }
    }

    /// In-page anchor href.
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Heading marker such as `01.`.
    #[must_use]
    pub fn marker(self) -> String {
        section_marker(self.index())
    }
}

/// Zero-padded, dot-terminated section number.
#[must_use]
pub fn section_marker(index: u8) -> String {
    format!("{index:02}.")
}

/// Whether `href` is a target the views are allowed to render.
#[must_use]
pub fn is_supported_href(href: &str) -> bool {
    ["https://", "http://", "mailto:"]
        .iter()
        .any(|scheme| href.len() > scheme.len() && href.starts_with(scheme))
}

/// Whether `href` leaves the site and should open in a new tab.
#[must_use]
pub fn opens_new_tab(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}

impl SiteContent {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    /// Returns [`ContentError`] when the document does not decode or fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self =
            serde_json::from_str(raw).map_err(|source| ContentError::Parse { source })?;
        content.validate()?;
        Ok(content)
    }

    /// Content compiled into the binary.
    ///
    /// # Errors
    /// Returns [`ContentError`] if the embedded document is malformed.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_SITE)
    }

    /// Minimal content rendered when the embedded document is rejected.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            name: FALLBACK_NAME.to_string(),
            role: String::new(),
            hero: Hero {
                title: FALLBACK_NAME.to_string(),
                ..Hero::default()
            },
            about: Vec::new(),
            socials: Vec::new(),
            projects: Vec::new(),
            skills: Vec::new(),
        }
    }

    /// Check the invariants the views rely on.
    ///
    /// # Errors
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ContentError> {
        require_text("name", &self.name)?;
        require_text("role", &self.role)?;
        require_text("hero.title", &self.hero.title)?;
        require_entries("about", &self.about)?;
        require_entries("projects", &self.projects)?;
        require_entries("skills", &self.skills)?;

        for social in &self.socials {
            require_href(&social.href)?;
        }
        for project in &self.projects {
            require_text("project.title", &project.title)?;
            if project.points.is_empty() {
                return Err(ContentError::ProjectWithoutPoints {
                    title: project.title.clone(),
                });
            }
            require_href(&project.link.href)?;
        }
        for group in &self.skills {
            if group.items.is_empty() {
                return Err(ContentError::EmptySkillGroup {
                    title: group.title.clone(),
                });
            }
        }
        Ok(())
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField { field });
    }
    Ok(())
}

fn require_entries<T>(section: &'static str, entries: &[T]) -> Result<(), ContentError> {
    if entries.is_empty() {
        return Err(ContentError::EmptySection { section });
    }
    Ok(())
}

fn require_href(href: &str) -> Result<(), ContentError> {
    if is_supported_href(href) {
        Ok(())
    } else {
        Err(ContentError::UnsupportedLink {
            href: href.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> SiteContent {
        match SiteContent::embedded() {
            Ok(content) => content,
            Err(err) => panic!("embedded content rejected: {err:?}"),
        }
    }

    #[test]
    fn embedded_content_is_valid() {
        let content = embedded();
        assert_eq!(content.name, "Arslaan Ahmed");
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.skills.len(), 3);
        assert_eq!(content.socials.len(), 3);
        assert_eq!(content.socials[2].kind, SocialKind::Email);
    }

    #[test]
    fn section_markers_are_zero_padded() {
        let markers: Vec<String> = Section::ALL.iter().map(|s| s.marker()).collect();
        assert_eq!(markers, ["01.", "02.", "03."]);
        assert_eq!(section_marker(12), "12.");
        assert_eq!(Section::Projects.href(), "#projects");
    }

    #[test]
    fn tech_line_joins_with_middle_dot() {
        let content = embedded();
        assert_eq!(
            content.projects[0].tech_line(),
            "Java · Android · SQLite · Firebase/Firestore"
        );
    }

    #[test]
    fn href_schemes() {
        assert!(is_supported_href("https://example.com"));
        assert!(is_supported_href("mailto:someone@example.com"));
        assert!(!is_supported_href("javascript:alert(1)"));
        assert!(!is_supported_href("https://"));
        assert!(!is_supported_href("/relative"));
        assert!(opens_new_tab("https://example.com"));
        assert!(!opens_new_tab("mailto:someone@example.com"));
    }

    #[test]
    fn unsupported_link_is_rejected() {
        let mut content = embedded();
        content.projects[1].link.href = "ftp://files.example.com".to_string();
        assert!(matches!(
            content.validate(),
            Err(ContentError::UnsupportedLink { href }) if href == "ftp://files.example.com"
        ));
    }

    #[test]
    fn empty_sections_are_rejected() {
        let mut content = embedded();
        content.skills.clear();
        assert!(matches!(
            content.validate(),
            Err(ContentError::EmptySection { section: "skills" })
        ));

        let mut content = embedded();
        content.projects[0].points.clear();
        assert!(matches!(
            content.validate(),
            Err(ContentError::ProjectWithoutPoints { .. })
        ));

        let mut content = embedded();
        content.skills[0].items.clear();
        assert!(matches!(
            content.validate(),
            Err(ContentError::EmptySkillGroup { .. })
        ));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut content = embedded();
        content.name = "   ".to_string();
        assert!(matches!(
            content.validate(),
            Err(ContentError::EmptyField { field: "name" })
        ));
    }

    #[test]
    fn unknown_fields_fail_to_parse() {
        let result = SiteContent::from_json(r#"{"name":"x","unexpected":true}"#);
        assert!(matches!(result, Err(ContentError::Parse { .. })));
    }

    #[test]
    fn fallback_keeps_a_name() {
        let fallback = SiteContent::fallback();
        assert_eq!(fallback.name, "Portfolio");
        assert!(fallback.projects.is_empty());
    }
}

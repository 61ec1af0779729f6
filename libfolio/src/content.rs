//! Portfolio content model
//!
//! All portfolio copy (hero, about, experience, projects) is data, parsed
//! from a TOML document. A content file ships embedded in the binary and
//! can be overridden via `content_path` in the config.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{ContentError, Result};

const BUILTIN_CONTENT: &str = include_str!("../content/portfolio.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub about: AboutSection,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub location: String,
    /// Lines for the hero typewriter, in play order. The last line stays
    /// on screen once typed.
    pub intro: Vec<IntroLine>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroLine {
    pub text: String,
    /// Optional named color for this line
    #[serde(default)]
    pub color: Option<String>,
    /// Render the line emphasized (the hero name line)
    #[serde(default)]
    pub emphasis: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutSection {
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub period: String,
    pub role: String,
    pub organization: String,
    pub summary: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    /// Unique, stable identifier
    pub id: String,
    pub title: String,
    pub category: String,
    /// Short description shown in the summary row
    pub summary: String,
    /// Long-form paragraphs shown in the expanded overlay
    pub details: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    /// Ordered media strip for the overlay carousel; empty means no carousel
    #[serde(default)]
    pub media: Vec<MediaRef>,
}

impl ProjectEntry {
    pub fn has_carousel(&self) -> bool {
        !self.media.is_empty()
    }
}

/// Per-project link affordances
///
/// An explicit variant instead of branching on project identity: store
/// badges, a code/demo pair, or nothing at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ProjectLinks {
    Store {
        app_store: String,
        play_store: String,
    },
    CodeAndDemo {
        repo: String,
        demo: String,
    },
    #[default]
    None,
}

/// Opaque reference to a media asset
///
/// `width` is the rendered width in terminal cells; the carousel measures
/// its strip from these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRef {
    pub path: String,
    pub caption: String,
    pub width: u16,
}

impl PortfolioContent {
    /// Parse the embedded content document
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_CONTENT)
    }

    /// Load a content override file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(ContentError::ReadError)?;
        Self::from_toml(&text)
    }

    fn from_toml(text: &str) -> Result<Self> {
        let content: PortfolioContent =
            toml::from_str(text).map_err(ContentError::ParseError)?;
        content.validate()?;
        Ok(content)
    }

    /// Enforce content invariants: unique project ids, no zero-width media
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProjectId(project.id.clone()).into());
            }
            if project.media.iter().any(|m| m.width == 0) {
                return Err(ContentError::ZeroWidthMedia(project.id.clone()).into());
            }
        }
        Ok(())
    }

    pub fn project(&self, id: &str) -> Option<&ProjectEntry> {
        self.projects.iter().find(|p| p.id == id)
    }
}

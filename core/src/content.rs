use crate::typewriter::TypewriterConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    /// Proficiency in percent, `0..=100`.
    pub level: u8,
    pub skills: &'static [&'static str],
}

/// Label and value pair, used by the about highlights and project metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AboutContent {
    pub headline: &'static str,
    pub subtitle: &'static str,
    pub profile_image: Option<&'static str>,
    pub paragraphs: &'static [&'static str],
    pub highlights: &'static [Stat],
    pub quote: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TechCategory {
    Core,
    Ml,
    Data,
    Deployment,
}

impl TechCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TechCategory::Core => "core",
            TechCategory::Ml => "ml",
            TechCategory::Data => "data",
            TechCategory::Deployment => "deployment",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechItem {
    pub name: &'static str,
    pub category: TechCategory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    /// Short text for the card.
    pub description: &'static str,
    /// Longer text for the detail view, when there is one.
    pub full_description: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub architecture_image: Option<&'static str>,
    pub demo_video: Option<&'static str>,
    pub tech_stack: &'static [&'static str],
    pub metrics: &'static [Stat],
    pub problem: &'static str,
    pub solution: &'static str,
    pub github_url: &'static str,
    pub demo_url: Option<&'static str>,
    pub report_url: Option<&'static str>,
    pub spotlight: bool,
}

/// Tags shown on a project card; the detail view shows all of them.
pub const CARD_TAG_LIMIT: usize = 2;

impl Project {
    pub fn card_tags(&self) -> &'static [&'static str] {
        &self.tags[..self.tags.len().min(CARD_TAG_LIMIT)]
    }

    pub fn summary(&self) -> &'static str {
        self.full_description.unwrap_or(self.description)
    }

    /// `"#"` is the placeholder for a project without public code.
    pub fn code_url(&self) -> Option<&'static str> {
        match self.github_url.trim() {
            "" | "#" => None,
            _ => Some(self.github_url),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub id: &'static str,
    pub period: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub active: bool,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Honor {
    pub id: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub image: Option<&'static str>,
    pub description: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

impl SocialLink {
    /// Mail links stay in the current tab.
    pub fn opens_new_tab(&self) -> bool {
        !self.url.starts_with("mailto:")
    }
}

include!(concat!(env!("OUT_DIR"), "/portfolio_content.rs"));

pub fn skill_levels() -> Vec<u8> {
    SKILL_CATEGORIES.iter().map(|entry| entry.level).collect()
}

pub fn project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

/// The tech list twice over, so a strip scrolled by half its width loops
/// without a visible seam.
pub fn marquee_items() -> impl Iterator<Item = &'static TechItem> {
    TECH_STACK.iter().chain(TECH_STACK.iter())
}

pub fn copyright_line() -> String {
    format!("\u{a9} {COPYRIGHT_YEAR} {OWNER_NAME}. All rights reserved.")
}

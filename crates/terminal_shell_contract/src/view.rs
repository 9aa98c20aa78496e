//! Renderer-agnostic structured views produced by command handlers.

use serde::{Deserialize, Serialize};

/// Pre-built panel placed verbatim in the scrollback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum StructuredView {
    /// Command listing produced by `help`.
    Help {
        /// One row per public command.
        rows: Vec<HelpRow>,
    },
    /// Profile summary card.
    Profile(ProfileCard),
    /// Project cards.
    ProjectList {
        /// Cards in display order.
        items: Vec<ProjectCard>,
    },
    /// Single project with its full description.
    ProjectDetail(ProjectCard),
    /// Skill bars grouped by category.
    SkillBars {
        /// Categories in display order.
        categories: Vec<SkillCategory>,
    },
    /// Work history timeline.
    Experience {
        /// Positions, newest first.
        items: Vec<ExperienceItem>,
    },
    /// Certificates list.
    Certificates {
        /// Certificates in display order.
        items: Vec<CertificateItem>,
    },
    /// Recommendation quotes.
    Recommendations {
        /// Quotes in display order.
        items: Vec<RecommendationItem>,
    },
    /// Contact channels.
    Contact {
        /// Links in display order.
        links: Vec<ContactLink>,
    },
}

/// One command row in the help listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpRow {
    /// Command name.
    pub name: String,
    /// Summary sentence.
    pub description: String,
    /// Optional usage string.
    pub usage: Option<String>,
}

/// Profile summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCard {
    /// Display name.
    pub name: String,
    /// Headline or job title.
    pub title: String,
    /// Location line.
    pub location: Option<String>,
    /// Bio paragraphs.
    pub bio: Vec<String>,
}

/// Project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    /// 1-based position used by `projects <n>`.
    pub index: usize,
    /// Project title.
    pub title: String,
    /// Short or full description.
    pub description: String,
    /// Technology tags.
    pub technologies: Vec<String>,
    /// Source repository link.
    pub repository_url: Option<String>,
    /// Live demo link.
    pub demo_url: Option<String>,
}

/// Skill category with its bars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Category label.
    pub name: String,
    /// Bars in display order.
    pub skills: Vec<SkillBar>,
}

/// One skill bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBar {
    /// Skill name.
    pub name: String,
    /// Proficiency in the `0..=100` range.
    pub level: u8,
}

impl SkillBar {
    /// Fixed-width text gauge such as `[########--]`.
    pub fn gauge(&self, width: usize) -> String {
        let filled = (usize::from(self.level.min(100)) * width + 50) / 100;
        format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
    }
}

/// One position in the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    /// Role title.
    pub role: String,
    /// Employer.
    pub company: String,
    /// Human-readable period such as `2021 - present`.
    pub period: String,
    /// Highlights.
    pub highlights: Vec<String>,
}

/// One certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateItem {
    /// Certificate title.
    pub title: String,
    /// Issuing organization.
    pub issuer: String,
    /// Issue date text.
    pub issued: String,
    /// Verification link.
    pub credential_url: Option<String>,
}

/// One recommendation quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationItem {
    /// 1-based position used by `recommendations <n>`.
    pub index: usize,
    /// Author name.
    pub author: String,
    /// Author role and relation.
    pub relation: String,
    /// Quote text.
    pub quote: String,
}

/// One contact channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    /// Channel label such as `GitHub`.
    pub label: String,
    /// Target URL (`mailto:` for email).
    pub url: String,
}

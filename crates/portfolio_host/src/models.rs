//! Portfolio data models shared by the data adapters and the command runtime.

use serde::{Deserialize, Serialize};

/// Owner profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Headline or job title.
    pub title: String,
    /// Location line.
    #[serde(default)]
    pub location: Option<String>,
    /// Contact email.
    pub email: String,
    /// Bio paragraphs.
    #[serde(default)]
    pub bio: Vec<String>,
    /// Social and code-hosting links.
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

/// One social link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform label.
    pub label: String,
    /// Profile URL.
    pub url: String,
}

/// Portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project title.
    pub title: String,
    /// One-line summary.
    pub summary: String,
    /// Longer description shown in the detail view.
    #[serde(default)]
    pub description: Option<String>,
    /// Technology tags.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Source repository.
    #[serde(default)]
    pub repository_url: Option<String>,
    /// Live demo.
    #[serde(default)]
    pub demo_url: Option<String>,
    /// Whether the project is listed first.
    #[serde(default)]
    pub featured: bool,
}

/// Skills under one heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Category label.
    pub category: String,
    /// Skills in display order.
    pub skills: Vec<Skill>,
}

/// One skill with a proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name.
    pub name: String,
    /// Proficiency in the `0..=100` range; larger values are clamped.
    pub level: u8,
}

/// One position held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Role title.
    pub role: String,
    /// Employer.
    pub company: String,
    /// Start, e.g. `2021`.
    pub start: String,
    /// End; `None` for the current position.
    #[serde(default)]
    pub end: Option<String>,
    /// Highlights.
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Experience {
    /// Human-readable period such as `2021 - present`.
    pub fn period(&self) -> String {
        format!(
            "{} - {}",
            self.start,
            self.end.as_deref().unwrap_or("present")
        )
    }
}

/// One certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Certificate title.
    pub title: String,
    /// Issuing organization.
    pub issuer: String,
    /// Issue date text.
    pub issued: String,
    /// Verification link.
    #[serde(default)]
    pub credential_url: Option<String>,
}

/// One recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Author name.
    pub author: String,
    /// Author role and relation.
    pub relation: String,
    /// Quote text.
    pub quote: String,
}

/// Complete portfolio document as stored in the mock data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Owner profile.
    pub profile: Profile,
    /// Projects in display order.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Skill groups.
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    /// Positions, newest first.
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// Certificates.
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    /// Recommendations.
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    /// Fun facts served by `funfact`.
    #[serde(default)]
    pub fun_facts: Vec<String>,
}

use rust_embed::Embed;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

use crate::gallery::Categorized;
use crate::nav::Route;

const DOCUMENT: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::load().unwrap_or_else(|e| {
        log::error!("couldn't load portfolio content: {e}");
        Portfolio::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Portfolio content is missing")]
    Missing,
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(String),
    #[error("Duplicate project id: {0}")]
    DuplicateProject(String),
    #[error("Project not found: {0}")]
    ProjectNotFound(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub dribbble: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub portfolio: Option<String>,
}

impl SocialLinks {
    /// (platform, url) pairs for every link that is actually set.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("LinkedIn", &self.linkedin),
            ("GitHub", &self.github),
            ("Dribbble", &self.dribbble),
            ("Twitter", &self.twitter),
            ("Portfolio", &self.portfolio),
        ]
        .into_iter()
        .filter_map(|(name, url)| {
            url.as_deref()
                .filter(|u| !u.trim().is_empty())
                .map(|u| (name, u))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub social_links: SocialLinks,
}

impl Profile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    pub fn bio_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.bio.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HeroStats {
    pub projects: String,
    pub experience: String,
    pub clients: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Experience {
    pub fn period(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub graduation_date: String,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub honors: Vec<String>,
    #[serde(default)]
    pub relevant_coursework: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub level: u8,
    pub icon: String,
}

impl Skill {
    /// Proficiency for display, capped at 100.
    pub fn level(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub long_description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub year: String,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
}

impl Project {
    /// Link to this project's case study, under the deployment base.
    pub fn href(&self) -> String {
        Route::CaseStudy(self.id.clone()).href()
    }

    pub fn image(&self) -> Option<&str> {
        Some(self.image.as_str()).filter(|s| !s.is_empty())
    }
}

impl Categorized for Project {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for Skill {
    fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub hero_stats: HeroStats,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(DOCUMENT).ok_or(ContentError::Missing)?;
        let text = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::from_json(text)
    }

    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let portfolio: Self =
            serde_json::from_str(text).map_err(|e| ContentError::Parse(e.to_string()))?;
        let mut seen = HashSet::new();
        if let Some(dup) = portfolio.projects.iter().find(|p| !seen.insert(p.id.as_str())) {
            return Err(ContentError::DuplicateProject(dup.id.clone()));
        }
        Ok(portfolio)
    }

    pub fn project(&self, id: &str) -> Result<&Project, ContentError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ContentError::ProjectNotFound(id.to_string()))
    }

    /// The project after `id` in listing order, wrapping around. `None` when
    /// `id` is unknown or is the only project.
    pub fn next_project(&self, id: &str) -> Option<&Project> {
        let len = self.projects.len();
        if len < 2 {
            return None;
        }
        let i = self.projects.iter().position(|p| p.id == id)?;
        self.projects.get((i + 1) % len)
    }
}

/// Process-wide content, parsed on first access.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "profile": {
            "name": "Ada Lovelace",
            "title": "Analyst",
            "subtitle": "",
            "bio": "First paragraph.\n\nSecond paragraph.\n\n",
            "location": "London",
            "email": "ada@example.com",
            "phone": "",
            "social_links": { "github": "https://github.com/ada", "twitter": "" }
        },
        "projects": [
            { "id": "a", "title": "A", "category": "AR/VR", "description": "", "long_description": "", "year": "2024" },
            { "id": "b", "title": "B", "category": "Web Development", "description": "", "long_description": "", "year": "2024" },
            { "id": "c", "title": "C", "category": "AR/VR", "description": "", "long_description": "", "year": "2023" }
        ]
    }"#;

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = Portfolio::load().expect("embedded content should parse");
        assert!(!portfolio.profile.name.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.skills.is_empty());
        assert!(portfolio.skills.iter().all(|s| s.level() <= 100));
    }

    #[test]
    fn test_project_lookup() {
        let portfolio = Portfolio::from_json(SMALL).unwrap();
        assert_eq!(portfolio.project("b").unwrap().title, "B");
        assert_eq!(
            portfolio.project("zzz").unwrap_err(),
            ContentError::ProjectNotFound("zzz".to_string())
        );
        assert_eq!(
            portfolio.project("b").unwrap().href(),
            crate::config::with_base("/case-study/b")
        );
    }

    #[test]
    fn test_next_project_wraps() {
        let portfolio = Portfolio::from_json(SMALL).unwrap();
        assert_eq!(portfolio.next_project("a").unwrap().id, "b");
        assert_eq!(portfolio.next_project("c").unwrap().id, "a");
        assert!(portfolio.next_project("missing").is_none());
    }

    #[test]
    fn test_duplicate_project_rejected() {
        let doc = SMALL.replace(r#""id": "c""#, r#""id": "a""#);
        assert_eq!(
            Portfolio::from_json(&doc).unwrap_err(),
            ContentError::DuplicateProject("a".to_string())
        );
    }

    #[test]
    fn test_malformed_content() {
        assert!(matches!(
            Portfolio::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_profile_helpers() {
        let portfolio = Portfolio::from_json(SMALL).unwrap();
        let profile = &portfolio.profile;
        assert_eq!(profile.first_name(), "Ada");
        let paragraphs: Vec<&str> = profile.bio_paragraphs().collect();
        assert_eq!(paragraphs, vec!["First paragraph.", "Second paragraph."]);

        let links: Vec<_> = profile.social_links.iter().collect();
        assert_eq!(links, vec![("GitHub", "https://github.com/ada")]);
    }

    #[test]
    fn test_skill_level_capped() {
        let skill = Skill {
            name: "Rust".to_string(),
            category: "Backend".to_string(),
            level: 250,
            icon: "🦀".to_string(),
        };
        assert_eq!(skill.level(), 100);
    }
}

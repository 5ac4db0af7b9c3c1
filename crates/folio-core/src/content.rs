//! Static portfolio content and the filters applied to it for display.
//!
//! Content is bundled as JSON, parsed into typed records and validated once
//! at load time, so renderers can rely on every required field.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ContentError;

const BUNDLED_CONTENT: &str = include_str!("../assets/content.json");

/// Owner of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub first_name: String,
    pub role: String,
    pub tagline: String,
    pub email: String,
    /// Paragraphs of the about section.
    pub about: Vec<String>,
    /// Technologies listed under "Currently Mastering".
    #[serde(default)]
    pub mastering: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub description: String,
    pub icon: String,
}

impl SocialLink {
    /// Mail links open in place; everything else in a new window.
    pub fn opens_externally(&self) -> bool {
        !self.url.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    App,
}

impl ProjectCategory {
    pub fn key(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::App => "app",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "✅ Completed",
            ProjectStatus::InProgress => "🚧 In Progress",
            ProjectStatus::Planned => "📅 Planned",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "status-completed",
            ProjectStatus::InProgress => "status-in-progress",
            ProjectStatus::Planned => "status-planned",
        }
    }
}

/// Technologies a project used in one area, e.g. "frontend".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechGroup {
    pub area: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    /// Card blurb.
    pub description: String,
    /// Full write-up shown in the detail view.
    pub long_description: String,
    pub emoji: String,
    pub category: ProjectCategory,
    pub tags: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    #[serde(default)]
    pub featured: bool,
    pub status: ProjectStatus,
    /// When the project started, as displayed ("December 2024").
    pub date: String,
    pub duration: String,
    pub features: Vec<String>,
    pub challenges: Vec<String>,
    /// Technology groups in display order.
    pub technologies: Vec<TechGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage, 0..=100.
    pub level: u32,
    pub icon: String,
    #[serde(default)]
    pub experience: Option<String>,
}

impl Skill {
    pub fn tier(&self) -> SkillTier {
        SkillTier::from_level(self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub description: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningGoal {
    pub goal: String,
    pub icon: String,
    /// Completion percentage, 0..=100.
    pub progress: u32,
}

/// Everything the sections render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub socials: Vec<SocialLink>,
    pub highlights: Vec<Highlight>,
    pub stats: Vec<Stat>,
    pub projects: Vec<Project>,
    pub skill_categories: Vec<SkillCategory>,
    pub learning_goals: Vec<LearningGoal>,
}

impl PortfolioContent {
    /// Parses and validates the content shipped with the site.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_CONTENT)
    }

    /// Parses and validates a content document.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: PortfolioContent = serde_json::from_str(json)?;
        content.validate()?;
        debug!(
            projects = content.projects.len(),
            skill_categories = content.skill_categories.len(),
            "Loaded portfolio content"
        );
        Ok(content)
    }

    /// Checks required fields, id uniqueness and percentage ranges.
    ///
    /// There must be at least one skill category, since the skills section
    /// always has a tab selected.
    pub fn validate(&self) -> Result<(), ContentError> {
        require("profile", "name", &self.profile.name)?;
        require("profile", "email", &self.profile.email)?;

        for social in &self.socials {
            require("social link", "name", &social.name)?;
            require("social link", "url", &social.url)?;
        }
        for highlight in &self.highlights {
            require("highlight", "title", &highlight.title)?;
        }

        let mut project_ids = HashSet::new();
        for project in &self.projects {
            require("project", "title", &project.title)?;
            require("project", "description", &project.description)?;
            require("project", "long_description", &project.long_description)?;
            require("project", "date", &project.date)?;
            require("project", "duration", &project.duration)?;
            require_entries("project", "features", &project.features)?;
            require_entries("project", "challenges", &project.challenges)?;
            if project.technologies.is_empty() {
                return Err(ContentError::EmptyList {
                    kind: "project",
                    field: "technologies",
                });
            }
            for group in &project.technologies {
                require("technology group", "area", &group.area)?;
                require_entries("technology group", "items", &group.items)?;
            }
            if !project_ids.insert(project.id) {
                return Err(ContentError::DuplicateId {
                    kind: "project",
                    id: project.id.to_string(),
                });
            }
        }

        if self.skill_categories.is_empty() {
            return Err(ContentError::EmptyList {
                kind: "content",
                field: "skill_categories",
            });
        }
        let mut category_ids = HashSet::new();
        for category in &self.skill_categories {
            require("skill category", "id", &category.id)?;
            require("skill category", "title", &category.title)?;
            require("skill category", "description", &category.description)?;
            if !category_ids.insert(category.id.as_str()) {
                return Err(ContentError::DuplicateId {
                    kind: "skill category",
                    id: category.id.clone(),
                });
            }
            for skill in &category.skills {
                require("skill", "name", &skill.name)?;
                check_percent(&skill.name, skill.level)?;
            }
        }

        for goal in &self.learning_goals {
            require("learning goal", "goal", &goal.goal)?;
            check_percent(&goal.goal, goal.progress)?;
        }
        Ok(())
    }

    /// Looks up a skills tab by id.
    pub fn skill_category(&self, id: &str) -> Result<&SkillCategory, ContentError> {
        self.skill_categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| ContentError::UnknownCategory {
                category: id.to_string(),
            })
    }
}

fn require(kind: &'static str, field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField { kind, field });
    }
    Ok(())
}

fn require_entries(
    kind: &'static str,
    field: &'static str,
    entries: &[String],
) -> Result<(), ContentError> {
    if entries.is_empty() {
        return Err(ContentError::EmptyList { kind, field });
    }
    for entry in entries {
        require(kind, field, entry)?;
    }
    Ok(())
}

fn check_percent(name: &str, level: u32) -> Result<(), ContentError> {
    if level > 100 {
        return Err(ContentError::LevelOutOfRange {
            name: name.to_string(),
            level,
        });
    }
    Ok(())
}

/// Category filter on the projects grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    /// Filter buttons in display order.
    pub fn options() -> [ProjectFilter; 3] {
        [
            ProjectFilter::All,
            ProjectFilter::Category(ProjectCategory::Web),
            ProjectFilter::Category(ProjectCategory::App),
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Category(c) => c.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Category(ProjectCategory::Web) => "Web Apps",
            ProjectFilter::Category(ProjectCategory::App) => "Mobile Apps",
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(c) => project.category == *c,
        }
    }
}

/// Projects passing `filter`, in their original order.
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Proficiency bucket of a skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTier {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillTier {
    pub fn from_level(level: u32) -> Self {
        match level {
            80..=u32::MAX => SkillTier::Expert,
            60..=79 => SkillTier::Advanced,
            40..=59 => SkillTier::Intermediate,
            _ => SkillTier::Beginner,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillTier::Beginner => "Beginner",
            SkillTier::Intermediate => "Intermediate",
            SkillTier::Advanced => "Advanced",
            SkillTier::Expert => "Expert",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SkillTier::Beginner => "tier-beginner",
            SkillTier::Intermediate => "tier-intermediate",
            SkillTier::Advanced => "tier-advanced",
            SkillTier::Expert => "tier-expert",
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use crate::entities::{
    experience::WorkExperience,
    links::ProfileLinks,
    project::ProjectResponse,
    skill::SkillSummary,
};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Profile {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub education: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

/// The composed read model served by `GET /api/profile`.
#[derive(Debug, Serialize)]
pub struct FullProfileResponse {
    #[serde(flatten)]
    pub profile: Profile,
    pub skills: Vec<SkillSummary>,
    pub projects: Vec<ProjectResponse>,
    pub work: Vec<WorkExperience>,
    #[serde(serialize_with = "links_or_empty_object")]
    pub links: Option<ProfileLinks>,
}

impl FullProfileResponse {
    pub fn compose(
        profile: Profile,
        skills: Vec<SkillSummary>,
        projects: Vec<ProjectResponse>,
        work: Vec<WorkExperience>,
        links: Option<ProfileLinks>,
    ) -> Self {
        Self { profile, skills, projects, work, links }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileUpdatedResponse {
    pub message: String,
    pub updated_at: DateTime<Utc>,
}

// ───── Input ─────────────────────────────────────────────────────────

/// Body of `PUT /api/profile`. Absent or null fields are written as NULL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
}

// ───── Helper Functions ─────────────────────────────────────────────

fn links_or_empty_object<S>(links: &Option<ProfileLinks>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match links {
        Some(links) => links.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

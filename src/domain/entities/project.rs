use serde::{Deserialize, Serialize};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Project {
    pub id: i32,
    pub profile_id: i32,
    pub title: String,
    pub description: Option<String>,
    /// JSON array of `{name, url}` pairs, stored as text.
    pub links: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub name: String,
    pub url: String,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: i32,
    pub profile_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub links: Vec<ProjectLink>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        let links = parse_project_links(project.id, project.links.as_deref());
        Self {
            id: project.id,
            profile_id: project.profile_id,
            title: project.title,
            description: project.description,
            links,
        }
    }
}

// ───── Helper Functions ─────────────────────────────────────────────

/// Parses a stored links blob. Missing or malformed blobs yield no links.
pub fn parse_project_links(project_id: i32, raw: Option<&str>) -> Vec<ProjectLink> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::debug!("Ignoring malformed links on project {}: {}", project_id, e);
        Vec::new()
    })
}

pub fn serialize_project_links(links: &[ProjectLink]) -> Result<String, serde_json::Error> {
    serde_json::to_string(links)
}

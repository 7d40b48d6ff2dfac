use serde::Deserialize;

use crate::entities::project::ProjectLink;

/// A complete profile document loaded by the `seed` binary.
#[derive(Debug, Deserialize)]
pub struct SeedData {
    pub profile: SeedProfile,
    #[serde(default)]
    pub skills: Vec<SeedSkill>,
    #[serde(default)]
    pub projects: Vec<SeedProject>,
    #[serde(default)]
    pub work: Vec<SeedWorkExperience>,
    #[serde(default)]
    pub links: Option<SeedLinks>,
}

#[derive(Debug, Deserialize)]
pub struct SeedProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub education: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedSkill {
    pub name: String,
    pub proficiency: i32,
}

#[derive(Debug, Deserialize)]
pub struct SeedProject {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    /// Names of seeded skills this project is linked to.
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedWorkExperience {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

impl SeedData {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Project skill names that do not match any seeded skill.
    pub fn unknown_project_skills(&self) -> Vec<(&str, &str)> {
        self.projects
            .iter()
            .flat_map(|project| {
                project.skills.iter().filter_map(move |skill| {
                    let known = self.skills.iter().any(|s| &s.name == skill);
                    (!known).then_some((project.title.as_str(), skill.as_str()))
                })
            })
            .collect()
    }
}

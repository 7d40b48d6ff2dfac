use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{experience::WorkExperience, project::ProjectResponse, skill::Skill};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct SkillFilterQuery {
    #[validate(
        required(message = "Skill parameter is required"),
        length(min = 1, message = "Skill parameter is required")
    )]
    pub skill: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(
        required(message = "Query parameter is required"),
        length(min = 1, message = "Query parameter is required")
    )]
    pub q: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchResults {
    pub projects: Vec<ProjectResponse>,
    pub skills: Vec<Skill>,
    pub work: Vec<WorkExperience>,
}

/// Builds an `ILIKE` pattern that matches `term` literally anywhere in a column.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: i32,
    pub profile_id: i32,
    pub name: String,
    pub proficiency: i32,
}

/// Name and proficiency only, as listed on the profile and in the top skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SkillSummary {
    pub name: String,
    pub proficiency: i32,
}

impl SkillSummary {
    pub fn new(name: impl Into<String>, proficiency: i32) -> Self {
        Self { name: name.into(), proficiency }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkExperience {
    pub id: i32,
    pub profile_id: i32,
    pub company: String,
    pub position: String,
    pub duration: Option<String>,
    pub description: Option<String>,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProfileLinks {
    pub id: i32,
    pub profile_id: i32,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

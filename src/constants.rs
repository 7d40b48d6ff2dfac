use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const AVAILABLE_ENDPOINTS: [&str; 6] = [
    "GET /api/health",
    "GET /api/profile",
    "PUT /api/profile",
    "GET /api/projects?skill={skill}",
    "GET /api/skills/top",
    "GET /api/search?q={query}",
];

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    entities::{
        experience::WorkExperience,
        links::ProfileLinks,
        profile::{Profile, UpdateProfileRequest},
        project::Project,
        search::contains_pattern,
        skill::{Skill, SkillSummary},
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxProfileRepo,
};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;

    async fn get_profile(&self, id: i32) -> Result<Option<Profile>, AppError>;

    /// Skills in insertion order
    async fn get_skills(&self, id: i32) -> Result<Vec<SkillSummary>, AppError>;

    async fn get_projects(&self, id: i32) -> Result<Vec<Project>, AppError>;

    /// Projects linked to a skill with exactly this name (case-sensitive)
    async fn get_projects_by_skill_name(&self, id: i32, skill_name: &str) -> Result<Vec<Project>, AppError>;

    async fn get_work(&self, id: i32) -> Result<Vec<WorkExperience>, AppError>;

    async fn get_links(&self, id: i32) -> Result<Option<ProfileLinks>, AppError>;

    /// Highest proficiency first, ties in insertion order
    async fn get_top_skills(&self, id: i32, limit: i64) -> Result<Vec<SkillSummary>, AppError>;

    /// Writes the fields as given and returns the refreshed `updated_at`
    async fn update_profile(&self, id: i32, update: &UpdateProfileRequest) -> Result<DateTime<Utc>, AppError>;

    async fn search_projects(&self, id: i32, term: &str) -> Result<Vec<Project>, AppError>;

    async fn search_skills(&self, id: i32, term: &str) -> Result<Vec<Skill>, AppError>;

    async fn search_work(&self, id: i32, term: &str) -> Result<Vec<WorkExperience>, AppError>;
}

impl SqlxProfileRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProfileRepo { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn get_profile(&self, id: i32) -> Result<Option<Profile>, AppError> {
        sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, name, email, education, created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_skills(&self, id: i32) -> Result<Vec<SkillSummary>, AppError> {
        sqlx::query_as::<_, SkillSummary>(
            "SELECT name, proficiency FROM skills WHERE profile_id = $1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_projects(&self, id: i32) -> Result<Vec<Project>, AppError> {
        sqlx::query_as::<_, Project>(
            r#"
            SELECT id, profile_id, title, description, links
            FROM projects
            WHERE profile_id = $1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_projects_by_skill_name(&self, id: i32, skill_name: &str) -> Result<Vec<Project>, AppError> {
        sqlx::query_as::<_, Project>(
            r#"
            SELECT p.id, p.profile_id, p.title, p.description, p.links
            FROM projects p
            WHERE p.profile_id = $1
              AND EXISTS (
                SELECT 1
                FROM project_skills ps
                JOIN skills s ON ps.skill_id = s.id
                WHERE ps.project_id = p.id
                  AND s.profile_id = $1
                  AND s.name = $2
              )
            ORDER BY p.id
            "#,
        )
        .bind(id)
        .bind(skill_name)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_work(&self, id: i32) -> Result<Vec<WorkExperience>, AppError> {
        sqlx::query_as::<_, WorkExperience>(
            r#"
            SELECT id, profile_id, company, position, duration, description
            FROM work_experience
            WHERE profile_id = $1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_links(&self, id: i32) -> Result<Option<ProfileLinks>, AppError> {
        sqlx::query_as::<_, ProfileLinks>(
            "SELECT id, profile_id, github, linkedin, portfolio FROM profile_links WHERE profile_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_top_skills(&self, id: i32, limit: i64) -> Result<Vec<SkillSummary>, AppError> {
        sqlx::query_as::<_, SkillSummary>(
            r#"
            SELECT name, proficiency
            FROM skills
            WHERE profile_id = $1
            ORDER BY proficiency DESC, id ASC
            LIMIT $2
            "#,
        )
        .bind(id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn update_profile(&self, id: i32, update: &UpdateProfileRequest) -> Result<DateTime<Utc>, AppError> {
        let updated_at: Option<DateTime<Utc>> = sqlx::query_scalar(
            r#"
            UPDATE profiles
            SET
                name = $1,
                email = $2,
                education = $3,
                updated_at = NOW()
            WHERE id = $4
            RETURNING updated_at
            "#,
        )
        .bind(&update.name)
        .bind(&update.email)
        .bind(&update.education)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        updated_at.ok_or_else(|| AppError::NotFound("Profile not found".into()))
    }

    async fn search_projects(&self, id: i32, term: &str) -> Result<Vec<Project>, AppError> {
        sqlx::query_as::<_, Project>(
            r#"
            SELECT id, profile_id, title, description, links
            FROM projects
            WHERE profile_id = $1
              AND (title ILIKE $2 OR description ILIKE $2)
            ORDER BY id
            "#,
        )
        .bind(id)
        .bind(contains_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn search_skills(&self, id: i32, term: &str) -> Result<Vec<Skill>, AppError> {
        sqlx::query_as::<_, Skill>(
            r#"
            SELECT id, profile_id, name, proficiency
            FROM skills
            WHERE profile_id = $1 AND name ILIKE $2
            ORDER BY id
            "#,
        )
        .bind(id)
        .bind(contains_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn search_work(&self, id: i32, term: &str) -> Result<Vec<WorkExperience>, AppError> {
        sqlx::query_as::<_, WorkExperience>(
            r#"
            SELECT id, profile_id, company, position, duration, description
            FROM work_experience
            WHERE profile_id = $1
              AND (company ILIKE $2 OR position ILIKE $2 OR description ILIKE $2)
            ORDER BY id
            "#,
        )
        .bind(id)
        .bind(contains_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }
}

use derive_more::Display;
use sqlx::{PgPool, Postgres, Transaction};
use std::collections::HashMap;

use crate::entities::{project::serialize_project_links, seed::SeedData};

#[derive(Debug, Display)]
pub enum SeedError {
    #[display("Unknown skill '{_1}' referenced by project '{_0}'")]
    UnknownSkill(String, String),

    #[display("Invalid project links: {_0}")]
    InvalidLinks(String),

    #[display("Database error: {_0}")]
    Database(String),
}

impl std::error::Error for SeedError {}

impl From<sqlx::Error> for SeedError {
    fn from(err: sqlx::Error) -> Self {
        SeedError::Database(err.to_string())
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct SeedSummary {
    pub skills: usize,
    pub projects: usize,
    pub project_skills: usize,
    pub work: usize,
    pub links: bool,
}

/// Replaces the profile `profile_id` and all of its related records with `data`.
///
/// Runs in a single transaction, so a failed seed leaves the previous data intact.
pub async fn seed_profile(pool: &PgPool, profile_id: i32, data: &SeedData) -> Result<SeedSummary, SeedError> {
    if let Some((project, skill)) = data.unknown_project_skills().first() {
        return Err(SeedError::UnknownSkill(project.to_string(), skill.to_string()));
    }

    let mut tx = pool.begin().await?;

    upsert_profile(&mut tx, profile_id, data).await?;
    clear_related(&mut tx, profile_id).await?;

    let mut summary = SeedSummary::default();
    let mut skill_ids: HashMap<&str, Vec<i32>> = HashMap::new();

    for skill in &data.skills {
        let skill_id: i32 = sqlx::query_scalar(
            "INSERT INTO skills (profile_id, name, proficiency) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(profile_id)
        .bind(&skill.name)
        .bind(skill.proficiency)
        .fetch_one(&mut *tx)
        .await?;

        skill_ids.entry(skill.name.as_str()).or_default().push(skill_id);
        summary.skills += 1;
    }

    for project in &data.projects {
        let links = serialize_project_links(&project.links)
            .map_err(|e| SeedError::InvalidLinks(e.to_string()))?;

        let project_id: i32 = sqlx::query_scalar(
            "INSERT INTO projects (profile_id, title, description, links) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(profile_id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(links)
        .fetch_one(&mut *tx)
        .await?;
        summary.projects += 1;

        for skill_name in &project.skills {
            for skill_id in skill_ids.get(skill_name.as_str()).into_iter().flatten() {
                sqlx::query(
                    "INSERT INTO project_skills (project_id, skill_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
                )
                .bind(project_id)
                .bind(*skill_id)
                .execute(&mut *tx)
                .await?;
                summary.project_skills += 1;
            }
        }
    }

    for work in &data.work {
        sqlx::query(
            r#"
            INSERT INTO work_experience (profile_id, company, position, duration, description)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(profile_id)
        .bind(&work.company)
        .bind(&work.position)
        .bind(&work.duration)
        .bind(&work.description)
        .execute(&mut *tx)
        .await?;
        summary.work += 1;
    }

    if let Some(links) = &data.links {
        sqlx::query(
            "INSERT INTO profile_links (profile_id, github, linkedin, portfolio) VALUES ($1, $2, $3, $4)",
        )
        .bind(profile_id)
        .bind(&links.github)
        .bind(&links.linkedin)
        .bind(&links.portfolio)
        .execute(&mut *tx)
        .await?;
        summary.links = true;
    }

    tx.commit().await?;

    tracing::info!("Seeded profile {}: {:?}", profile_id, summary);
    Ok(summary)
}

async fn upsert_profile(
    tx: &mut Transaction<'_, Postgres>,
    profile_id: i32,
    data: &SeedData,
) -> Result<(), SeedError> {
    sqlx::query(
        r#"
        INSERT INTO profiles (id, name, email, education)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (id) DO UPDATE
        SET name = EXCLUDED.name,
            email = EXCLUDED.email,
            education = EXCLUDED.education,
            updated_at = NOW()
        "#,
    )
    .bind(profile_id)
    .bind(&data.profile.name)
    .bind(&data.profile.email)
    .bind(&data.profile.education)
    .execute(&mut **tx)
    .await?;

    // Explicit ids bypass the sequence; keep it ahead of them.
    sqlx::query("SELECT setval(pg_get_serial_sequence('profiles', 'id'), GREATEST((SELECT MAX(id) FROM profiles), 1))")
        .execute(&mut **tx)
        .await?;

    Ok(())
}

async fn clear_related(tx: &mut Transaction<'_, Postgres>, profile_id: i32) -> Result<(), SeedError> {
    for table in ["skills", "projects", "work_experience", "profile_links"] {
        sqlx::query(&format!("DELETE FROM {table} WHERE profile_id = $1"))
            .bind(profile_id)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

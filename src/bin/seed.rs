use anyhow::Context;

use resume_profile_api::{
    db::{
        postgres::{create_pool, run_migrations},
        seed::seed_profile,
    },
    entities::seed::SeedData,
    logging::init_tracing,
    settings::AppConfig,
};

/// Loads the seed document into the configured profile, replacing its current data.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Invalid configuration")?;
    init_tracing(&config);

    let path = std::env::args().nth(1).unwrap_or_else(|| config.seed_path().to_string());
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read seed file {}", path))?;
    let data = SeedData::from_json(&raw)
        .with_context(|| format!("Seed file {} is not a valid profile document", path))?;

    let pool = create_pool(&config.database_url, 1)
        .await
        .context("Failed to create database connection pool")?;
    run_migrations(&pool).await.context("Failed to apply database migrations")?;

    let summary = seed_profile(&pool, config.profile_id, &data).await?;

    tracing::info!(
        "✅ Seeded profile {} from {}: {} skills, {} projects ({} skill links), {} work entries, links: {}",
        config.profile_id,
        path,
        summary.skills,
        summary.projects,
        summary.project_skills,
        summary.work,
        summary.links
    );

    pool.close().await;
    Ok(())
}

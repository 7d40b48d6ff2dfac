use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};
use std::time::Duration;

const MAX_CONNECT_RETRIES: u32 = 5;

/// Connects to Postgres, retrying with exponential backoff while the database comes up.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let mut retry_count = 0;
    let mut wait_seconds = 2;

    loop {
        match PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                info!("Database connection established.");
                return Ok(pool);
            }
            Err(e) if retry_count < MAX_CONNECT_RETRIES => {
                retry_count += 1;
                warn!(
                    "Failed to connect to database (attempt {}/{}): {}. Retrying in {}s...",
                    retry_count, MAX_CONNECT_RETRIES, e, wait_seconds
                );

                tokio::time::sleep(Duration::from_secs(wait_seconds)).await;

                wait_seconds *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Applies the schema in `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database schema is up to date.");
    Ok(())
}

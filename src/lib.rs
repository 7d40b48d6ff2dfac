mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, logging};

use repositories::{profile::ProfileRepository, sqlx_repo::SqlxProfileRepo};
use use_cases::profile::ProfileHandler;

pub struct AppState<R = SqlxProfileRepo>
where
    R: ProfileRepository,
{
    pub profile_handler: ProfileHandler<R>,
}

impl AppState<SqlxProfileRepo> {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        Self::with_repo(SqlxProfileRepo::new(pool), config.profile_id)
    }
}

impl<R> AppState<R>
where
    R: ProfileRepository,
{
    /// Builds the state around any store implementation.
    pub fn with_repo(profile_repo: R, profile_id: i32) -> Self {
        AppState {
            profile_handler: ProfileHandler::new(profile_repo, profile_id),
        }
    }
}

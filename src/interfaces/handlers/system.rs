use actix_web::{web, HttpResponse, Responder};
use humantime::format_duration;
use chrono::Utc;
use serde::Serialize;
use std::time::Duration;

use crate::{constants::START_TIME, repositories::profile::ProfileRepository, AppState};

#[derive(Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    timestamp: String,
    uptime: String,
    start_at: String,
    version: &'static str,
    database: &'static str,
}

/// Liveness probe. Always answers 200; the store status is informational.
pub async fn health_check<R>(state: web::Data<AppState<R>>) -> impl Responder
where
    R: ProfileRepository + 'static,
{
    let now_utc = Utc::now();
    let uptime_secs = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;

    let database = match state.profile_handler.check_store().await {
        Ok(_) => "OK",
        Err(e) => {
            tracing::warn!("Health check could not reach the database: {}", e);
            "Unavailable"
        }
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "OK",
        timestamp: now_utc.to_rfc3339(),
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

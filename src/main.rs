use actix_cors::Cors;
use actix_web::{http::header, middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use resume_profile_api::{
    db::postgres::{create_pool, run_migrations},
    errors::expose_internal_details,
    graceful_shutdown::shutdown_signal,
    logging::init_tracing,
    repositories::sqlx_repo::SqlxProfileRepo,
    routes::configure_routes,
    settings::AppConfig,
    AppState,
};

fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "PUT", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        cors.allow_any_origin()
    } else {
        origins.iter().fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);

    expose_internal_details(config.is_development());

    let pool = create_pool(&config.database_url, config.max_db_connections)
        .await
        .context("Failed to create database connection pool")?;

    run_migrations(&pool)
        .await
        .context("Failed to apply database migrations")?;

    let app_state = web::Data::new(AppState::new(&config, pool.clone()));
    let cors_origins = config.cors_origins();

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting {} v{} on {} (profile {})",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr,
        config.profile_id
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&cors_origins))
            .wrap(TracingLogger::default())
            .configure(configure_routes::<SqlxProfileRepo>)
    })
    .workers(config.worker_count)
    .disable_signals()
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run();

    let handle = server.handle();
    tokio::spawn(async move {
        shutdown_signal().await;
        handle.stop(true).await;
    });

    server.await.context("HTTP server terminated with an error")?;

    pool.close().await;
    tracing::info!("Database connections closed. Bye.");
    Ok(())
}

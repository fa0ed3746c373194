use crate::model::{DbConnection, ModelManager, run_migrations};
use crate::utils::signal::shutdown_signal;
use crate::{error::AppResult, web::AppState};
use axum::Router;
use tokio::net::TcpListener;

pub mod config;
pub use config::{Config, ConfigError, ConfigResult};

pub mod auth;
pub mod error;
pub mod model;
pub mod utils;
pub mod web;

static APPLICATION_NAME: &str = "lingua";

/// Connects (lazily) to the configured database, applies migrations when enabled and builds
/// the router.
pub async fn build_server(config: &Config) -> AppResult<(AppState, Router)> {
    let (state, app) = build_server_with_pool(DbConnection::connect(config.database()), config);

    if config.database().migrate() {
        run_migrations(state.mm().connection()).await?;
    }

    Ok((state, app))
}

pub fn build_server_with_pool(db: DbConnection, config: &Config) -> (AppState, Router) {
    let state: AppState = ModelManager::new(db).into();
    let app = web::routes::build_app(state.clone(), config);
    (state, app)
}

#[tracing::instrument(skip(config))]
pub async fn setup_workers(config: &Config) -> AppResult<()> {
    let (_, app) = build_server(config).await?;
    let listener = TcpListener::bind(config.host().bindto()).await?;

    tracing::info!("axum is starting at: {}", config.host().bindto());
    if config.app().docs() {
        tracing::info!("swagger ui is served at /docs");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn setup_trace() {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

    // load .env file for RUST_LOG, DB_* etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .with(ErrorLayer::default())
        .init();

    tracing::debug!("tracing initialized.");
}

#[tracing::instrument]
pub async fn run() -> AppResult<()> {
    setup_trace();
    let config = Config::load(cfg!(debug_assertions))?;
    setup_workers(&config).await?;
    Ok(())
}

//! Anidle API server entry point.

use std::sync::{Arc, Mutex};

use anidle_api::config::Config;
use anidle_api::error::AppError;
use anidle_api::routes;
use anidle_api::state::AppState;
use anidle_catalog::application::loader;
use anidle_core::clock::{Clock, SystemClock};
use anidle_core::rng::{DeterministicRng, StdRandom};
use anidle_round::domain::round::RoundRules;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Anidle API server");

    let config = Config::from_env()?;
    let catalog = loader::load_catalog(&config.catalog_path)?;

    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = match config.rng_seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded RNG");
            Arc::new(Mutex::new(StdRandom::seeded(seed)))
        }
        None => Arc::new(Mutex::new(StdRandom::from_os_rng())),
    };
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(SystemClock);

    let app_state = AppState::new(Arc::new(catalog), RoundRules::default(), clock, rng);

    // TODO: Replace CorsLayer::permissive() with the UI origin once it is deployed separately.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/catalog", routes::catalog::router())
        .nest("/api/v1/round", routes::round::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}

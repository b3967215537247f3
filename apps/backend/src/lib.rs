pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::ApiError;
use crate::services::rounds::RoundSessions;
use crate::services::store::SetStore;

/// Shared application state
///
/// Handlers that need both locks take `rounds` before `store`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<SetStore>>,
    pub rounds: Arc<Mutex<RoundSessions>>,
}

impl AppState {
    pub fn new(store: SetStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            rounds: Arc::new(Mutex::new(RoundSessions::new())),
        }
    }

    /// Lock the set store. Never hold the guard across an `.await`.
    pub fn store(&self) -> Result<MutexGuard<'_, SetStore>, ApiError> {
        self.store
            .lock()
            .map_err(|_| ApiError::Internal("set store lock poisoned".to_string()))
    }

    /// Lock the round table. Never hold the guard across an `.await`.
    pub fn rounds(&self) -> Result<MutexGuard<'_, RoundSessions>, ApiError> {
        self.rounds
            .lock()
            .map_err(|_| ApiError::Internal("round table lock poisoned".to_string()))
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Set routes
        .route("/api/sets", get(routes::sets::list).post(routes::sets::create))
        .route("/api/current-set", put(routes::sets::select))
        .route("/api/sets/:name", delete(routes::sets::delete))
        // Card routes
        .route(
            "/api/sets/:name/cards",
            get(routes::cards::list).post(routes::cards::add),
        )
        .route(
            "/api/sets/:name/cards/:position",
            put(routes::cards::edit).delete(routes::cards::remove),
        )
        .route("/api/sets/:name/cards/:position/star", put(routes::cards::star))
        // Round routes
        .route("/api/sets/:name/rounds", post(routes::rounds::start))
        .route(
            "/api/rounds/:id",
            get(routes::rounds::show).delete(routes::rounds::discard),
        )
        .route("/api/rounds/:id/answer", post(routes::rounds::answer))
        .route("/api/rounds/:id/next", post(routes::rounds::next))
        .route("/api/rounds/:id/finish", post(routes::rounds::finish))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Opening sets file {}", config.data_path.display());
    let store = SetStore::open(&config.data_path)?;

    let app = router(AppState::new(store))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

#![forbid(unsafe_code)]

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

pub mod config;
mod http;
pub mod store;

pub use config::AppConfig;
pub use store::{
    MemoryBackend, MongoBackend, RosterError, StoreError, TeamStore, TeamStoreBackend,
    DEFAULT_TEAM_KEY,
};

pub const CRATE_NAME: &str = "soccer-builder-server";

/// Per-process server state. The store handle is constructed once at startup
/// and injected here so tests can swap in an in-memory backend.
#[derive(Clone)]
pub struct AppState {
    pub store: TeamStore,
    pub cors_allowed_origins: Arc<Vec<String>>,
    pub request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: TeamStore) -> Self {
        Self::with_config(store, &AppConfig::default())
    }

    #[must_use]
    pub fn with_config(store: TeamStore, config: &AppConfig) -> Self {
        Self {
            store,
            cors_allowed_origins: Arc::new(config.cors_allowed_origins.clone()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/api", get(http::handlers::api_root_handler))
        .route(
            "/api/team",
            get(http::handlers::get_team_handler).post(http::handlers::save_team_handler),
        )
        .route(
            "/api/player/:player_id",
            get(http::handlers::get_player_handler),
        )
        .route(
            "/api/player/:player_id/vote",
            post(http::handlers::record_vote_handler),
        )
        .layer(from_fn_with_state(state.clone(), http::cors::cors_middleware))
        .with_state(state)
}

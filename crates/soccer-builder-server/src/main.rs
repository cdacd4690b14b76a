#![forbid(unsafe_code)]

use soccer_builder_server::{
    build_router, AppConfig, AppState, MemoryBackend, MongoBackend, TeamStore, TeamStoreBackend,
};
use std::env;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_origin_list(name: &str) -> Vec<String> {
    env::var(name)
        .unwrap_or_else(|_| "*".to_string())
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = AppConfig {
        bind_addr: env_string("SOCCER_BIND", "0.0.0.0:8080"),
        mongo_url: env::var("MONGO_URL").ok(),
        db_name: env_string("DB_NAME", "soccer_builder"),
        cors_allowed_origins: env_origin_list("CORS_ORIGINS"),
        log_json: env_bool("SOCCER_LOG_JSON", true),
    };
    init_tracing(config.log_json);

    let backend: Arc<dyn TeamStoreBackend> = match config.mongo_url.as_deref() {
        Some(url) => Arc::new(
            MongoBackend::connect(url, &config.db_name)
                .await
                .map_err(|e| format!("store connect failed: {e}"))?,
        ),
        None => {
            warn!("MONGO_URL not set; roster data will not survive a restart");
            Arc::new(MemoryBackend::default())
        }
    };
    let store = TeamStore::new(backend);
    info!(backend = store.backend_tag(), "store ready");

    let state = AppState::with_config(store, &config);
    let app = build_router(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| format!("bind failed on {}: {e}", config.bind_addr))?;
    info!("soccer-builder-server listening on {}", config.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}

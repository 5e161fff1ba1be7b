//! inferd HTTP server
//!
//! Loads the model artifact once at startup and serves the prediction REST
//! API. The artifact is shared read-only state; handlers never mutate it, so
//! no locking is involved.

mod api;
mod error;
mod state;
mod handlers;

pub use api::create_router;
pub use error::ServerError;
pub use state::AppState;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{info, warn};

use crate::artifact::LinearModel;
use crate::error::InferdError;
use crate::schema::{SchemaKind, AIR_QUALITY_FEATURES};

/// What to do when the artifact fails to load at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Load failure aborts startup
    Strict,
    /// Service starts anyway; every prediction returns 503 until redeployed
    Lenient,
}

impl FromStr for LoadMode {
    type Err = InferdError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(LoadMode::Strict),
            "lenient" => Ok(LoadMode::Lenient),
            other => Err(InferdError::InvalidInput(format!(
                "unknown load mode: {} (expected strict or lenient)",
                other
            ))),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model_path: PathBuf,
    pub schema: SchemaKind,
    pub load_mode: LoadMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            model_path: std::env::var("MODEL_PATH")
                .unwrap_or_else(|_| "model.json".to_string())
                .into(),
            schema: std::env::var("INPUT_SCHEMA")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(SchemaKind::Features),
            load_mode: std::env::var("MODEL_LOAD_MODE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(LoadMode::Strict),
        }
    }
}

/// Load the artifact according to the configured load mode.
///
/// Strict: any load failure is returned. Lenient: the failure is logged and
/// the artifact is recorded as absent, deferring the error to first use.
pub fn load_artifact(config: &ServerConfig) -> anyhow::Result<Option<LinearModel>> {
    match LinearModel::load(&config.model_path) {
        Ok(model) => {
            info!(
                path = %config.model_path.display(),
                n_features = model.n_features(),
                "Model artifact loaded"
            );
            if config.schema == SchemaKind::AirQuality
                && model.n_features() != AIR_QUALITY_FEATURES.len()
            {
                warn!(
                    n_features = model.n_features(),
                    expected = AIR_QUALITY_FEATURES.len(),
                    "Artifact arity does not match the air-quality schema; predictions will fail"
                );
            }
            Ok(Some(model))
        }
        Err(e) => match config.load_mode {
            LoadMode::Strict => Err(anyhow::Error::new(e).context(format!(
                "failed to load model artifact from {}",
                config.model_path.display()
            ))),
            LoadMode::Lenient => {
                warn!(
                    path = %config.model_path.display(),
                    detail = %e,
                    "Model artifact unavailable, serving 503 on /predict"
                );
                Ok(None)
            }
        },
    }
}

/// Start the server with the given configuration
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let start_time = chrono::Utc::now();
    info!(
        model_path = %config.model_path.display(),
        schema = ?config.schema,
        load_mode = ?config.load_mode,
        started_at = %start_time.to_rfc3339(),
        "Initializing server"
    );

    let model = load_artifact(&config)?;
    let state = Arc::new(AppState::new(config.clone(), model));
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!(
        host = %config.host,
        port = config.port,
        address = %addr,
        "inferd server starting"
    );
    info!(url = %format!("http://{}/health", addr), "Health endpoint available");
    info!(url = %format!("http://{}/predict", addr), "Prediction endpoint available");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, pid = std::process::id(), "Server listening and ready to accept connections");

    // Graceful shutdown on ctrl+c
    let shutdown_signal = async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        let stop_time = chrono::Utc::now();
        let uptime = stop_time.signed_duration_since(start_time);
        info!(
            stopped_at = %stop_time.to_rfc3339(),
            uptime_secs = uptime.num_seconds(),
            "Shutdown signal received, stopping server gracefully"
        );
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shut down cleanly");
    Ok(())
}

//! Application state shared across handlers

use std::sync::Arc;

use crate::artifact::LinearModel;

use super::ServerConfig;

/// Application state shared across handlers.
///
/// The artifact is constructed before the router and injected here; it is
/// never mutated after load, so concurrent reads are safe without locking.
/// In lenient mode with a failed load it stays `None` for the process
/// lifetime.
pub struct AppState {
    pub config: ServerConfig,
    pub model: Option<Arc<LinearModel>>,
}

impl AppState {
    pub fn new(config: ServerConfig, model: Option<LinearModel>) -> Self {
        Self {
            config,
            model: model.map(Arc::new),
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }
}

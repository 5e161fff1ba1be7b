//! HTTP request handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;

use super::error::{Result, ServerError};
use super::state::AppState;

/// Health check. Always succeeds and never touches the prediction
/// capability; `model_loaded` reflects whether startup loading succeeded.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "model_loaded": state.model_loaded(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Run one prediction: validate the payload against the configured schema,
/// map it to the artifact's feature row, predict, and render the response.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>> {
    let model = state
        .model
        .as_ref()
        .ok_or_else(|| ServerError::Unavailable("model artifact not loaded".to_string()))?;

    let input = state
        .config
        .schema
        .parse(body)
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;

    let row = input.row();
    let prediction = model.predict(&row)?;
    debug!(n_features = row.len(), prediction, "Prediction served");

    Ok(Json(input.response(prediction)))
}

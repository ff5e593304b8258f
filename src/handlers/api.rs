//! Service info and health check handlers

use axum::{Json, extract::State};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::state::AppState;

/// Service name reported by the root endpoint
const SERVICE_NAME: &str = "Vox TTS Gateway";

/// Root endpoint handler
///
/// Returns service identification and coarse status. Public: no API key
/// required, so load balancers and humans can poke it.
pub async fn root(State(state): State<Arc<AppState>>) -> Json<Value> {
    let status = if state.engine_status.is_ready() {
        "online"
    } else {
        "tts_unavailable"
    };

    Json(json!({
        "service": SERVICE_NAME,
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Health check endpoint handler
///
/// Returns a JSON response indicating the service is running and which TTS
/// engine is loaded, or `null` if engine initialization failed.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let status = if state.engine_status.is_ready() {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(json!({
        "status": status,
        "tts_engine": state.engine.as_ref().map(|engine| engine.name()),
    }))
}

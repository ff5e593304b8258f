use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{tts, voices};
use crate::state::AppState;
use std::sync::Arc;

/// Create the API router with protected routes
///
/// Note: Authentication middleware should be applied in main.rs after state is available
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Protected routes (X-API-Key required)
        .route("/tts", post(tts::synthesize))
        .route("/tts/stream", post(tts::synthesize_stream))
        .route("/tts/preview", post(tts::preview_voice))
        .route("/voices", get(voices::list_voices))
        .layer(TraceLayer::new_for_http())
}

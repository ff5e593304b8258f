use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Authentication failures produced by the API key middleware
#[derive(Debug, Error)]
pub enum AuthError {
    /// No `X-API-Key` header was supplied
    #[error("missing API key")]
    MissingApiKey,
    /// The supplied key did not match the configured secret
    #[error("invalid API key")]
    InvalidApiKey,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // Missing and mismatched keys are indistinguishable to the client
        let body = Json(json!({ "detail": "Invalid API key" }));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

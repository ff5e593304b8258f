use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::core::tts::TtsError;

/// Request-level errors mapped to HTTP responses
///
/// Every variant is rendered as `{"detail": <message>}` with the matching
/// status code.
#[derive(Debug, Error)]
pub enum AppError {
    /// The synthesis engine failed to initialize at startup
    #[error("TTS engine not available")]
    EngineUnavailable,
    /// Synthesis or encoding failed for this request
    #[error("TTS generation failed: {0}")]
    GenerationFailed(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::EngineUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::GenerationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TtsError> for AppError {
    fn from(err: TtsError) -> Self {
        match err {
            TtsError::EngineUnavailable => AppError::EngineUnavailable,
            other => AppError::GenerationFailed(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_unavailable_maps_to_503() {
        let response = AppError::EngineUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_generation_failure_maps_to_500() {
        let err = AppError::GenerationFailed("voice model missing".to_string());
        assert_eq!(
            err.to_string(),
            "TTS generation failed: voice model missing"
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_tts_error_conversion() {
        let err: AppError = TtsError::EngineUnavailable.into();
        assert!(matches!(err, AppError::EngineUnavailable));

        let err: AppError = TtsError::Synthesis("backend crashed".to_string()).into();
        assert!(matches!(err, AppError::GenerationFailed(_)));
    }
}

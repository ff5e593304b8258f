use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;

use crate::core::tts::VoiceInfo;
use crate::errors::AppError;
use crate::state::AppState;

/// Response body for GET /voices
#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    /// Voices offered by the active engine
    pub voices: Vec<VoiceInfo>,
    /// Identifier used when a request names no voice
    pub default: String,
}

/// Handler for GET /voices - returns the active engine's voice catalog
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<VoicesResponse>, AppError> {
    let engine = state.require_engine()?;

    Ok(Json(VoicesResponse {
        voices: engine.voices(),
        default: engine.default_voice().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serialization_shape() {
        let response = VoicesResponse {
            voices: vec![VoiceInfo {
                id: "af_sarah".to_string(),
                name: "Af Sarah".to_string(),
            }],
            default: "af_sarah".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["voices"][0]["id"], "af_sarah");
        assert_eq!(json["voices"][0]["name"], "Af Sarah");
        assert_eq!(json["default"], "af_sarah");
    }
}

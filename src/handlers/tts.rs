//! Text-to-speech synthesis handlers

use axum::{
    Json,
    body::Body,
    extract::{Query, State},
    http::header::{CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS},
    response::{IntoResponse, Response},
};
use futures::TryStreamExt;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::errors::AppError;
use crate::state::AppState;

/// Fixed text spoken by the voice preview endpoint
const PREVIEW_TEXT: &str =
    "Hello, this is a preview of my voice. I can help answer questions about web pages.";

/// Request body for the synthesis endpoints
#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    /// Text to synthesize
    pub text: String,
    /// Voice identifier; unknown values fall back to the engine default
    #[serde(default)]
    pub voice: Option<String>,
    /// Playback speed factor, clamped to the supported range
    #[serde(default)]
    pub speed: Option<f32>,
    /// Accepted for forward compatibility; synthesis currently ignores it
    #[serde(default)]
    pub language: Option<String>,
}

/// Query parameters for the voice preview endpoint
#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    /// Voice to preview; required
    pub voice: String,
}

/// Build the response for a complete MP3 payload.
///
/// Full synthesis results are content-addressed by their request, so clients
/// may cache them; the attachment disposition gives downloads a stable name.
fn mp3_attachment_response(audio: Vec<u8>) -> Response {
    (
        [
            (CONTENT_TYPE, "audio/mpeg"),
            (CONTENT_DISPOSITION, "attachment; filename=\"speech.mp3\""),
            (CACHE_CONTROL, "public, max-age=3600"),
        ],
        audio,
    )
        .into_response()
}

/// POST /api/tts - synthesize the full text into one MP3 payload
pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TtsRequest>,
) -> Result<Response, AppError> {
    let engine = state.require_engine()?;
    let voice = request
        .voice
        .as_deref()
        .unwrap_or_else(|| engine.default_voice());
    let speed = request.speed.unwrap_or(1.0);

    info!(
        voice = %voice,
        speed = speed,
        text_len = request.text.len(),
        "TTS synthesis requested"
    );

    let audio = engine
        .synthesize(&request.text, voice, speed)
        .await
        .map_err(|e| {
            error!(voice = %voice, error = %e, "TTS synthesis failed");
            AppError::from(e)
        })?;

    Ok(mp3_attachment_response(audio))
}

/// POST /api/tts/stream - synthesize sentence by sentence, streaming each
/// MP3 chunk as soon as it is ready
pub async fn synthesize_stream(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TtsRequest>,
) -> Result<Response, AppError> {
    let engine = state.require_engine()?;
    let voice = request
        .voice
        .as_deref()
        .unwrap_or_else(|| engine.default_voice());
    let speed = request.speed.unwrap_or(1.0);

    info!(
        voice = %voice,
        speed = speed,
        text_len = request.text.len(),
        "TTS streaming synthesis requested"
    );

    let stream = engine
        .clone()
        .synthesize_stream(&request.text, voice, speed)
        .inspect_err(|e| error!(error = %e, "TTS streaming failed mid-response"));

    // Headers are committed before synthesis runs; failures after the first
    // chunk surface as a truncated body, which inspect_err records above.
    Ok((
        [
            (CONTENT_TYPE, "audio/mpeg"),
            (CACHE_CONTROL, "no-cache"),
            (X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        Body::from_stream(stream),
    )
        .into_response())
}

/// POST /api/tts/preview - speak a fixed sample so clients can audition a voice
pub async fn preview_voice(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PreviewParams>,
) -> Result<Response, AppError> {
    let engine = state.require_engine()?;

    info!(voice = %params.voice, "Voice preview requested");

    let audio = engine
        .synthesize(PREVIEW_TEXT, &params.voice, 1.0)
        .await
        .map_err(|e| {
            error!(voice = %params.voice, error = %e, "Voice preview failed");
            AppError::from(e)
        })?;

    Ok(mp3_attachment_response(audio))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_optional_fields_default_to_none() {
        let request: TtsRequest = serde_json::from_str(r#"{"text": "Hello"}"#).unwrap();
        assert_eq!(request.text, "Hello");
        assert!(request.voice.is_none());
        assert!(request.speed.is_none());
        assert!(request.language.is_none());
    }

    #[test]
    fn test_request_full_body() {
        let request: TtsRequest = serde_json::from_str(
            r#"{"text": "Hi", "voice": "af_sky", "speed": 1.5, "language": "en"}"#,
        )
        .unwrap();
        assert_eq!(request.voice.as_deref(), Some("af_sky"));
        assert_eq!(request.speed, Some(1.5));
        assert_eq!(request.language.as_deref(), Some("en"));
    }

    #[test]
    fn test_request_rejects_missing_text() {
        let result = serde_json::from_str::<TtsRequest>(r#"{"voice": "af_sky"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_preview_text_is_stable() {
        // Preview audio is cached under this exact text; changing it
        // invalidates every cached preview.
        assert!(PREVIEW_TEXT.starts_with("Hello, this is a preview"));
    }
}

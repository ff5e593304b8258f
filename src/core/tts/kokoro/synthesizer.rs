//! Kokoro backend implementation over the sidecar's HTTP API.
//!
//! # API Reference
//!
//! - Endpoint: `POST {KOKORO_URL}/v1/audio/speech`
//! - Body: OpenAI-compatible speech request (model, input, voice,
//!   response_format, speed)
//! - Response: WAV bytes

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::config::KokoroVoice;
use crate::config::ServerConfig;
use crate::core::audio::{RawAudio, decode_wav};
use crate::core::tts::base::{RawSynthesizer, TtsError, TtsResult, VoiceInfo};

/// Path of the sidecar's speech endpoint
const SPEECH_ENDPOINT: &str = "/v1/audio/speech";

/// Model name the sidecar expects
const MODEL_NAME: &str = "kokoro";

/// Request body for the sidecar's speech endpoint
#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
    speed: f32,
}

/// Kokoro synthesis backend.
///
/// Posts each synthesis unit to the locally-running sidecar and decodes the
/// WAV response. The model applies the speed factor itself, so the engine
/// encodes Kokoro output at a neutral playback rate.
pub struct KokoroSynthesizer {
    client: reqwest::Client,
    speech_url: String,
}

impl KokoroSynthesizer {
    /// Create a backend targeting the sidecar at `config.kokoro_url`.
    pub fn new(config: &ServerConfig) -> TtsResult<Self> {
        let base = config.kokoro_url.trim_end_matches('/');
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(TtsError::InvalidConfiguration(format!(
                "KOKORO_URL must be an http(s) URL, got '{}'",
                config.kokoro_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            speech_url: format!("{base}{SPEECH_ENDPOINT}"),
        })
    }

    /// Full URL of the speech endpoint this backend posts to.
    pub fn speech_url(&self) -> &str {
        &self.speech_url
    }
}

#[async_trait]
impl RawSynthesizer for KokoroSynthesizer {
    fn name(&self) -> &'static str {
        "kokoro"
    }

    fn default_voice(&self) -> &'static str {
        KokoroVoice::default().as_str()
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        KokoroVoice::all()
            .iter()
            .map(|voice| VoiceInfo {
                id: voice.as_str().to_string(),
                name: voice.display_name().to_string(),
            })
            .collect()
    }

    fn resolve_voice(&self, requested: &str) -> String {
        KokoroVoice::from_str_or_default(requested)
            .as_str()
            .to_string()
    }

    fn applies_speed(&self) -> bool {
        true
    }

    async fn synthesize_raw(&self, text: &str, voice: &str, speed: f32) -> TtsResult<RawAudio> {
        let request = SpeechRequest {
            model: MODEL_NAME,
            input: text,
            voice,
            response_format: "wav",
            speed,
        };

        let response = self
            .client
            .post(&self.speech_url)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TtsError::Synthesis(format!(
                "Kokoro sidecar returned {status}: {body}"
            )));
        }

        let bytes = response.bytes().await?;
        Ok(decode_wav(&bytes)?)
    }
}

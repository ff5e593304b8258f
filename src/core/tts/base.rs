//! Shared synthesis types and the backend trait.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::core::audio::{CodecError, RawAudio};

/// Result type for synthesis operations
pub type TtsResult<T> = Result<T, TtsError>;

/// Errors produced by the synthesis engine and its backends
#[derive(Debug, Error)]
pub enum TtsError {
    /// The engine failed to initialize and cannot serve requests
    #[error("TTS engine not available")]
    EngineUnavailable,
    /// The backend failed to synthesize this request
    #[error("{0}")]
    Synthesis(String),
    /// MP3 encoding or WAV decoding failed
    #[error("audio codec error: {0}")]
    Encoding(#[from] CodecError),
    /// Subprocess or file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A request to the Kokoro sidecar failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Backend construction was given unusable configuration
    #[error("Invalid TTS configuration: {0}")]
    InvalidConfiguration(String),
}

/// A voice offered by a backend, as listed by the voices endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceInfo {
    /// Stable identifier accepted by synthesis requests
    pub id: String,
    /// Human-readable display name
    pub name: String,
}

/// Lifecycle state of the synthesis engine.
///
/// Startup walks Uninitialized -> Loading -> Ready or Unavailable, and the
/// state never changes afterwards. An unavailable engine stays unavailable
/// for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineStatus {
    /// Engine construction has not started
    #[default]
    Uninitialized,
    /// Backend construction and model checks are in progress
    Loading,
    /// The engine is serving requests
    Ready,
    /// Initialization failed; TTS endpoints return 503
    Unavailable,
}

impl EngineStatus {
    /// Whether the engine can serve synthesis requests
    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, EngineStatus::Ready)
    }
}

/// Backend seam implemented by each synthesis engine.
///
/// Backends produce raw mono PCM for one unit of text; MP3 encoding, disk
/// caching and sentence streaming are layered on top by the engine.
#[async_trait]
pub trait RawSynthesizer: Send + Sync {
    /// Canonical engine name ("piper", "kokoro")
    fn name(&self) -> &'static str;

    /// Identifier of the voice used when none is requested
    fn default_voice(&self) -> &'static str;

    /// All voices this backend offers, in display order
    fn voices(&self) -> Vec<VoiceInfo>;

    /// Map a requested voice id onto a supported one.
    ///
    /// Unknown ids fall back to the backend default instead of erroring.
    fn resolve_voice(&self, requested: &str) -> String;

    /// Whether the backend applies the speed factor natively during
    /// synthesis. When false, the engine realizes speed as a playback-rate
    /// adjustment while encoding.
    fn applies_speed(&self) -> bool;

    /// Synthesize raw audio for one unit of text.
    ///
    /// `voice` is already resolved and `speed` already clamped; backends
    /// that return false from [`applies_speed`](Self::applies_speed) may
    /// ignore `speed`.
    async fn synthesize_raw(&self, text: &str, voice: &str, speed: f32) -> TtsResult<RawAudio>;
}

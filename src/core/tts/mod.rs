//! Polymorphic text-to-speech engine.
//!
//! One backend is active per process: Piper (local subprocess) or Kokoro
//! (local HTTP sidecar). The shared [`TtsEngine`] layers voice resolution,
//! speed clamping, disk caching and sentence streaming on top of the
//! [`RawSynthesizer`] seam each backend implements.

pub mod base;
pub mod engine;
pub mod kokoro;
pub mod piper;

pub use base::{EngineStatus, RawSynthesizer, TtsError, TtsResult, VoiceInfo};
pub use engine::{MAX_SPEED, MIN_SPEED, TtsEngine, clamp_speed};
pub use kokoro::{KokoroSynthesizer, KokoroVoice};
pub use piper::{PiperSynthesizer, PiperVoice};

use crate::config::{EngineKind, ServerConfig};

/// Factory function to create the configured synthesis backend.
///
/// # Supported Engines
///
/// - `piper` - Piper CLI driven as a local subprocess
/// - `kokoro` - Kokoro served by a local OpenAI-compatible HTTP sidecar
///
/// Construction validates each backend's requirements (binary and voice
/// model for Piper, a well-formed sidecar URL for Kokoro). A failure here is
/// terminal for the process: the server keeps running with the engine marked
/// unavailable.
pub fn create_synthesizer(
    kind: EngineKind,
    config: &ServerConfig,
) -> TtsResult<Box<dyn RawSynthesizer>> {
    match kind {
        EngineKind::Piper => Ok(Box::new(PiperSynthesizer::new(config)?)),
        EngineKind::Kokoro => Ok(Box::new(KokoroSynthesizer::new(config)?)),
    }
}

//! Kokoro TTS backend.
//!
//! Synthesis happens in a locally-running Kokoro sidecar exposing an
//! OpenAI-compatible speech API; this backend posts text to it and decodes
//! the WAV it returns.
//!
//! # Supported Voices
//!
//! af_sarah (default), af_nicole, af_sky, af, am_adam, am_michael, am,
//! bf_emma, bf_isabella, bf, bm_george, bm_lewis, bm

mod config;
mod synthesizer;

pub use config::KokoroVoice;
pub use synthesizer::KokoroSynthesizer;

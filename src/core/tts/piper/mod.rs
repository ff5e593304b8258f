//! Piper backend: local synthesis through the `piper` binary.
//!
//! Piper reads text on stdin and writes a WAV file. Speed is not applied by
//! the model, so the engine adjusts the playback rate during encoding.

mod config;
mod synthesizer;

pub use config::PiperVoice;
pub use synthesizer::PiperSynthesizer;

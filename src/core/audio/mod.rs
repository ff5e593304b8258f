//! Audio processing: WAV decoding, playback-rate adjustment, MP3 encoding.
//!
//! Backends hand raw mono float PCM to the engine; everything needed to turn
//! that into the MP3 bytes the API serves lives here.

mod codec;
mod wav;

pub use codec::{CodecError, apply_playback_rate, encode_mp3, pcm_to_i16};
pub use wav::decode_wav;

/// Mono float PCM with its sample rate.
///
/// Samples are nominally in [-1.0, 1.0]; the codec clamps anything outside
/// that range during conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAudio {
    /// Interleaving-free mono samples
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

//! PCM conversion and MP3 encoding.

use mp3lame_encoder::{Bitrate, Builder, FlushNoGap, MonoPcm, Quality};
use thiserror::Error;

/// Errors from audio conversion and MP3 encoding
#[derive(Debug, Error)]
pub enum CodecError {
    /// The LAME encoder could not be configured
    #[error("failed to initialize MP3 encoder: {0}")]
    EncoderInit(String),
    /// Encoding or flushing the MP3 stream failed
    #[error("MP3 encoding failed: {0}")]
    Encode(String),
    /// The WAV payload could not be parsed
    #[error("invalid WAV data: {0}")]
    Wav(#[from] hound::Error),
}

/// Resample so playback runs `rate` times faster under an unchanged sample
/// rate.
///
/// Linear interpolation over the source buffer; the output holds
/// `len / rate` samples. Because the sample rate is declared unchanged,
/// pitch scales together with duration. This mirrors the frame-rate trick
/// the service has always used for speed; it is not a time-stretch.
pub fn apply_playback_rate(samples: &[f32], rate: f32) -> Vec<f32> {
    if samples.is_empty() {
        return Vec::new();
    }

    let out_len = ((samples.len() as f32 / rate).round() as usize).max(1);
    let last = samples.len() - 1;
    let mut out = Vec::with_capacity(out_len);
    for i in 0..out_len {
        let pos = i as f32 * rate;
        let idx = (pos as usize).min(last);
        let frac = pos - idx as f32;
        let a = samples[idx];
        let b = samples[(idx + 1).min(last)];
        out.push(a + (b - a) * frac);
    }
    out
}

/// Convert float samples to 16-bit PCM.
///
/// Samples outside [-1.0, 1.0] are clamped before scaling.
pub fn pcm_to_i16(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|s| (s.clamp(-1.0, 1.0) * 32767.0) as i16)
        .collect()
}

/// Encode mono float PCM into a 128 kbps MP3.
///
/// A `playback_rate` other than 1.0 applies the pitch-shifting speed
/// adjustment before encoding. An empty input produces a valid, header-only
/// MP3.
pub fn encode_mp3(
    samples: &[f32],
    sample_rate: u32,
    playback_rate: f32,
) -> Result<Vec<u8>, CodecError> {
    let adjusted;
    let samples = if (playback_rate - 1.0).abs() > f32::EPSILON {
        adjusted = apply_playback_rate(samples, playback_rate);
        &adjusted[..]
    } else {
        samples
    };

    let pcm = pcm_to_i16(samples);

    let mut builder = Builder::new()
        .ok_or_else(|| CodecError::EncoderInit("out of memory".to_string()))?;
    builder
        .set_num_channels(1)
        .map_err(|e| CodecError::EncoderInit(format!("{e:?}")))?;
    builder
        .set_sample_rate(sample_rate)
        .map_err(|e| CodecError::EncoderInit(format!("{e:?}")))?;
    builder
        .set_brate(Bitrate::Kbps128)
        .map_err(|e| CodecError::EncoderInit(format!("{e:?}")))?;
    builder
        .set_quality(Quality::Best)
        .map_err(|e| CodecError::EncoderInit(format!("{e:?}")))?;
    let mut encoder = builder
        .build()
        .map_err(|e| CodecError::EncoderInit(format!("{e:?}")))?;

    let mut out = Vec::with_capacity(mp3lame_encoder::max_required_buffer_size(pcm.len()));
    let written = encoder
        .encode(MonoPcm(&pcm), out.spare_capacity_mut())
        .map_err(|e| CodecError::Encode(format!("{e:?}")))?;
    // SAFETY: encode initialized `written` bytes past the current length
    unsafe { out.set_len(out.len() + written) };

    let written = encoder
        .flush::<FlushNoGap>(out.spare_capacity_mut())
        .map_err(|e| CodecError::Encode(format!("{e:?}")))?;
    // SAFETY: flush initialized `written` bytes past the current length
    unsafe { out.set_len(out.len() + written) };

    Ok(out)
}

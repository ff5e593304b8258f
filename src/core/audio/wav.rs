//! WAV decoding shared by the synthesis backends.

use std::io::Cursor;

use hound::{SampleFormat, WavReader};

use super::{CodecError, RawAudio};

/// Decode an in-memory WAV file into mono float PCM.
///
/// Multi-channel input keeps only the first channel. Integer samples are
/// normalized to [-1.0, 1.0]; the sample rate comes from the WAV header.
pub fn decode_wav(bytes: &[u8]) -> Result<RawAudio, CodecError> {
    let mut reader = WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .step_by(channels)
            .collect::<Result<_, _>>()?,
        SampleFormat::Int => {
            let max = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .step_by(channels)
                .map(|s| s.map(|v| v as f32 / max))
                .collect::<Result<_, _>>()?
        }
    };

    Ok(RawAudio {
        samples,
        sample_rate: spec.sample_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wav_bytes(spec: hound::WavSpec, samples: &[i16]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for &s in samples {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_decode_mono_i16() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let bytes = wav_bytes(spec, &[0, 16384, -16384, 32767]);

        let audio = decode_wav(&bytes).unwrap();
        assert_eq!(audio.sample_rate, 22050);
        assert_eq!(audio.samples.len(), 4);
        assert!(audio.samples[0].abs() < 1e-6);
        assert!((audio.samples[1] - 0.5).abs() < 1e-3);
        assert!((audio.samples[2] + 0.5).abs() < 1e-3);
        assert!(audio.samples[3] <= 1.0);
    }

    #[test]
    fn test_decode_keeps_first_channel_of_stereo() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 24000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        // Left channel ramps, right channel is silence
        let bytes = wav_bytes(spec, &[100, 0, 200, 0, 300, 0]);

        let audio = decode_wav(&bytes).unwrap();
        assert_eq!(audio.sample_rate, 24000);
        assert_eq!(audio.samples.len(), 3);
        assert!(audio.samples[0] > 0.0);
        assert!(audio.samples[1] > audio.samples[0]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode_wav(b"definitely not a wav file");
        assert!(matches!(result, Err(CodecError::Wav(_))));
    }
}

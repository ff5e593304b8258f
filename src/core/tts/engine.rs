//! Synthesis orchestration: voice resolution, speed clamping, caching,
//! encoding, and sentence streaming.

use std::sync::Arc;

use bytes::Bytes;
use futures::Stream;
use tracing::debug;
use xxhash_rust::xxh3::xxh3_128;

use crate::core::audio::encode_mp3;
use crate::core::cache::AudioCache;
use crate::core::text::split_sentences;
use crate::core::tts::base::{RawSynthesizer, TtsError, TtsResult, VoiceInfo};

/// Minimum accepted speed factor
pub const MIN_SPEED: f32 = 0.5;
/// Maximum accepted speed factor
pub const MAX_SPEED: f32 = 2.0;

/// Clamp a requested speed factor into the supported range
#[inline]
pub fn clamp_speed(speed: f32) -> f32 {
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

/// Cache-backed synthesis engine over a single backend.
///
/// Every synthesis goes resolve voice -> clamp speed -> cache lookup ->
/// backend -> MP3 encode -> cache store. The cache key covers the resolved
/// parameters, so requests that normalize to the same synthesis share one
/// entry.
pub struct TtsEngine {
    backend: Box<dyn RawSynthesizer>,
    cache: AudioCache,
}

impl TtsEngine {
    pub fn new(backend: Box<dyn RawSynthesizer>, cache: AudioCache) -> Self {
        Self { backend, cache }
    }

    /// Canonical name of the active backend
    pub fn name(&self) -> &'static str {
        self.backend.name()
    }

    /// Default voice of the active backend
    pub fn default_voice(&self) -> &'static str {
        self.backend.default_voice()
    }

    /// Voices offered by the active backend
    pub fn voices(&self) -> Vec<VoiceInfo> {
        self.backend.voices()
    }

    /// Compute the cache key for one synthesis unit.
    ///
    /// `voice` must already be resolved and `speed` clamped. The engine name
    /// is part of the key, so Piper and Kokoro output never collide even
    /// when they share a cache directory.
    pub fn cache_key(&self, text: &str, voice: &str, speed: f32) -> String {
        let mut s = String::new();
        s.push_str(self.backend.name());
        s.push('|');
        s.push_str(voice);
        s.push('|');
        s.push_str(&format!("{speed:.3}"));
        s.push('|');
        s.push_str(text);
        let hash = xxh3_128(s.as_bytes());
        format!("{hash:032x}")
    }

    /// Synthesize one unit of text to MP3, consulting the cache first.
    pub async fn synthesize(&self, text: &str, voice: &str, speed: f32) -> TtsResult<Vec<u8>> {
        let voice = self.backend.resolve_voice(voice);
        let speed = clamp_speed(speed);
        let key = self.cache_key(text, &voice, speed);

        if let Some(bytes) = self.cache.get(&key).await {
            return Ok(bytes);
        }

        let audio = self.backend.synthesize_raw(text, &voice, speed).await?;
        debug!(
            voice = %voice,
            speed,
            samples = audio.samples.len(),
            sample_rate = audio.sample_rate,
            "Synthesized raw audio"
        );

        // Backends that apply speed natively get a neutral playback rate
        let playback_rate = if self.backend.applies_speed() {
            1.0
        } else {
            speed
        };
        let bytes = tokio::task::spawn_blocking(move || {
            encode_mp3(&audio.samples, audio.sample_rate, playback_rate)
        })
        .await
        .map_err(|e| TtsError::Synthesis(format!("encoder task failed: {e}")))??;

        self.cache.put(&key, &bytes).await;
        Ok(bytes)
    }

    /// Stream synthesis sentence by sentence.
    ///
    /// Sentences are synthesized lazily in input order through the full
    /// cached path, so each sentence is cached individually and repeated
    /// sentences come back from disk. The first failing sentence ends the
    /// stream with its error; dropping the stream cancels remaining work.
    pub fn synthesize_stream(
        self: Arc<Self>,
        text: &str,
        voice: &str,
        speed: f32,
    ) -> impl Stream<Item = TtsResult<Bytes>> + Send + 'static {
        let sentences = split_sentences(text);
        let voice = voice.to_string();
        async_stream::try_stream! {
            let total = sentences.len();
            for (index, sentence) in sentences.iter().enumerate() {
                debug!(index, total, "Streaming sentence");
                let bytes = self.synthesize(sentence, &voice, speed).await?;
                yield Bytes::from(bytes);
            }
        }
    }
}

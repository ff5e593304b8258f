pub mod audio;
pub mod cache;
pub mod text;
pub mod tts;

// Re-export commonly used types for convenience
pub use audio::{CodecError, RawAudio, decode_wav, encode_mp3};
pub use cache::AudioCache;
pub use text::split_sentences;
pub use tts::{
    EngineStatus, KokoroSynthesizer, KokoroVoice, PiperSynthesizer, PiperVoice, RawSynthesizer,
    TtsEngine, TtsError, TtsResult, VoiceInfo, create_synthesizer,
};

//! Shared application state.

use std::sync::Arc;

use tracing::{error, info};

use crate::config::ServerConfig;
use crate::core::cache::AudioCache;
use crate::core::tts::{EngineStatus, TtsEngine, create_synthesizer};
use crate::errors::AppError;

/// State shared across all request handlers.
///
/// Engine initialization happens once at startup. A failed initialization is
/// not fatal: the server still serves `/` and `/health`, and TTS endpoints
/// return 503 until a restart with a working configuration.
pub struct AppState {
    /// Server configuration loaded from the environment
    pub config: ServerConfig,
    /// The synthesis engine, if initialization succeeded
    pub engine: Option<Arc<TtsEngine>>,
    /// Engine status observed at startup
    pub engine_status: EngineStatus,
}

impl AppState {
    /// Initialize shared state from the given configuration.
    ///
    /// Never fails: backend initialization errors are logged and leave the
    /// state with no engine and `EngineStatus::Unavailable`.
    pub async fn new(config: ServerConfig) -> Arc<Self> {
        let cache = AudioCache::new(config.cache_dir.clone()).await;

        info!(engine = %config.tts_engine, "Loading TTS engine");
        let (engine, engine_status) = match create_synthesizer(config.tts_engine, &config) {
            Ok(backend) => {
                info!(
                    engine = backend.name(),
                    voices = backend.voices().len(),
                    "TTS engine ready"
                );
                (
                    Some(Arc::new(TtsEngine::new(backend, cache))),
                    EngineStatus::Ready,
                )
            }
            Err(e) => {
                error!(
                    engine = %config.tts_engine,
                    error = %e,
                    "TTS engine initialization failed; TTS endpoints will return 503"
                );
                (None, EngineStatus::Unavailable)
            }
        };

        Arc::new(Self {
            config,
            engine,
            engine_status,
        })
    }

    /// Get the engine or the 503 error TTS endpoints answer with when the
    /// engine failed to initialize.
    pub fn require_engine(&self) -> Result<&Arc<TtsEngine>, AppError> {
        self.engine.as_ref().ok_or(AppError::EngineUnavailable)
    }
}

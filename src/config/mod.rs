//! Configuration module for the Vox TTS Gateway
//!
//! Configuration comes from environment variables, with `.env` files loaded
//! at startup in `main.rs`. Priority: actual ENV vars > .env values > defaults.
//!
//! # Example
//! ```rust,no_run
//! use vox_gateway::config::ServerConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::env;
use std::path::PathBuf;

use tracing::warn;

/// Default Kokoro sidecar base URL (local OpenAI-compatible speech server)
pub const DEFAULT_KOKORO_URL: &str = "http://127.0.0.1:8880";

/// Synthesis backend selection
///
/// Exactly one backend is active per process, chosen by the `TTS_ENGINE`
/// environment variable at startup. There is no runtime switching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineKind {
    /// Piper CLI driven as a local subprocess
    #[default]
    Piper,
    /// Kokoro reached over a local HTTP sidecar
    Kokoro,
}

impl EngineKind {
    /// Get the canonical engine name
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Piper => "piper",
            EngineKind::Kokoro => "kokoro",
        }
    }

    /// Parse an engine name (case-insensitive)
    ///
    /// Unknown names are a configuration error; the message lists the
    /// supported engines.
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_lowercase().as_str() {
            "piper" => Ok(EngineKind::Piper),
            "kokoro" => Ok(EngineKind::Kokoro),
            other => Err(format!(
                "Unsupported TTS engine: '{other}'. Supported engines: piper, kokoro"
            )),
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Server configuration
///
/// Contains all configuration needed to run the Vox TTS Gateway, including:
/// - Server settings (host, port)
/// - API key authentication
/// - TTS engine selection and backend settings
/// - Data directories (voices, models, audio cache)
/// - Security settings (CORS)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // Authentication
    /// Shared secret expected in the `X-API-Key` request header
    pub api_key: String,

    // TTS engine settings
    /// Active synthesis backend (`TTS_ENGINE`: "piper" or "kokoro")
    pub tts_engine: EngineKind,
    /// Directory searched for Piper voice models (`VOICES_DIR`)
    pub voices_dir: PathBuf,
    /// Root directory for downloaded models (`MODEL_CACHE_DIR`);
    /// Piper models live under its `piper/` subdirectory
    pub model_cache_dir: PathBuf,
    /// Directory holding cached MP3 output (`CACHE_DIR`)
    pub cache_dir: PathBuf,
    /// Base URL of the Kokoro sidecar (`KOKORO_URL`)
    pub kokoro_url: String,
    /// Explicit path to the piper binary (`PIPER_BIN`);
    /// when unset the binary is looked up on PATH
    pub piper_bin: Option<PathBuf>,

    // Security configuration
    /// CORS allowed origins (comma-separated list or "*" for all)
    /// Default: "*" (allow all origins, matching typical self-hosted use)
    pub cors_allowed_origins: Option<String>,
}

/// Implement Drop to zeroize the API key when ServerConfig is dropped.
/// This ensures the shared secret is cleared from memory immediately after use.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        self.api_key.zeroize();
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// `.env` files are loaded in main.rs at application startup, so actual
    /// environment variables override `.env` values.
    ///
    /// # Errors
    /// Returns an error if:
    /// - `API_KEY` is missing or empty
    /// - `PORT` is set but not a valid port number
    /// - `TTS_ENGINE` is set to an unsupported engine name
    ///
    /// # Example
    /// ```rust,no_run
    /// use vox_gateway::config::ServerConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ServerConfig::from_env()?;
    /// println!("Engine: {}", config.tts_engine);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|e| format!("Invalid PORT value '{value}': {e}"))?,
            Err(_) => 8000,
        };

        let api_key = env::var("API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            return Err("API_KEY environment variable is required".into());
        }

        let tts_engine = match env::var("TTS_ENGINE") {
            Ok(value) => EngineKind::parse(&value)?,
            Err(_) => EngineKind::default(),
        };

        let data_dir = default_data_dir();
        let voices_dir = env::var("VOICES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("voices"));
        let model_cache_dir = env::var("MODEL_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("models"));
        let cache_dir = env::var("CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("cache"));

        let kokoro_url =
            env::var("KOKORO_URL").unwrap_or_else(|_| DEFAULT_KOKORO_URL.to_string());
        let piper_bin = env::var("PIPER_BIN").ok().map(PathBuf::from);

        let cors_allowed_origins = match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(value) if value.trim().is_empty() => None,
            Ok(value) => Some(value),
            Err(_) => Some("*".to_string()),
        };

        Ok(Self {
            host,
            port,
            api_key,
            tts_engine,
            voices_dir,
            model_cache_dir,
            cache_dir,
            kokoro_url,
            piper_bin,
            cors_allowed_origins,
        })
    }

    /// Get the server address as a string
    ///
    /// Returns the address in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Base directory for default data paths: `$HOME/vox-gateway`
///
/// Falls back to the current directory when HOME is unset.
fn default_data_dir() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join("vox-gateway"),
        None => {
            warn!("HOME not set, using current directory for data paths");
            PathBuf::from(".").join("vox-gateway")
        }
    }
}

//! Vox TTS Gateway - Self-hosted text-to-speech server.
//!
//! Exposes a small authenticated HTTP API over a single local synthesis
//! backend (Piper subprocess or Kokoro sidecar), with on-disk MP3 caching
//! and sentence-wise streaming.

pub mod config;
pub mod core;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use state::AppState;

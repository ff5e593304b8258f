//! HTTP request handlers
//!
//! This module organizes all API handlers into logical groups:
//! - `api` - Root service info and health check endpoints
//! - `tts` - Text-to-speech synthesis, streaming, and voice preview
//! - `voices` - Voice listing endpoint

pub mod api;
pub mod tts;
pub mod voices;

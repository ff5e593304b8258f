//! Piper subprocess backend.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use uuid::Uuid;

use super::config::PiperVoice;
use crate::config::ServerConfig;
use crate::core::audio::{RawAudio, decode_wav};
use crate::core::tts::base::{RawSynthesizer, TtsError, TtsResult, VoiceInfo};

/// Piper synthesis backend.
///
/// Spawns the `piper` binary per synthesis unit, feeding text on stdin and
/// reading the WAV it writes to a temporary file. Piper ignores the speed
/// parameter, so the engine compensates at encode time.
#[derive(Debug)]
pub struct PiperSynthesizer {
    binary: PathBuf,
    model_path: PathBuf,
}

impl PiperSynthesizer {
    /// Locate the `piper` binary and voice model, failing fast if either is
    /// missing so the server starts in the unavailable state instead of
    /// erroring on the first request.
    pub fn new(config: &ServerConfig) -> TtsResult<Self> {
        let binary = match &config.piper_bin {
            Some(path) => {
                if !path.is_file() {
                    return Err(TtsError::InvalidConfiguration(format!(
                        "PIPER_BIN points to '{}' which does not exist",
                        path.display()
                    )));
                }
                path.clone()
            }
            None => find_in_path("piper").ok_or_else(|| {
                TtsError::InvalidConfiguration(
                    "piper binary not found on PATH; install piper or set PIPER_BIN".to_string(),
                )
            })?,
        };

        let model_file = PiperVoice::default().model_file();
        let candidates = [
            config.model_cache_dir.join("piper").join(model_file),
            config.voices_dir.join(model_file),
        ];
        let model_path = candidates
            .iter()
            .find(|path| path.is_file())
            .cloned()
            .ok_or_else(|| {
                TtsError::InvalidConfiguration(format!(
                    "Piper voice model '{}' not found in {} or {}",
                    model_file,
                    candidates[0].display(),
                    candidates[1].display()
                ))
            })?;

        tracing::debug!(
            binary = %binary.display(),
            model = %model_path.display(),
            "Piper backend configured"
        );

        Ok(Self { binary, model_path })
    }
}

/// Search the PATH environment variable for an executable file
fn find_in_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

#[async_trait]
impl RawSynthesizer for PiperSynthesizer {
    fn name(&self) -> &'static str {
        "piper"
    }

    fn default_voice(&self) -> &'static str {
        PiperVoice::default().as_str()
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        PiperVoice::all()
            .iter()
            .map(|voice| VoiceInfo {
                id: voice.as_str().to_string(),
                name: voice.display_name().to_string(),
            })
            .collect()
    }

    fn resolve_voice(&self, requested: &str) -> String {
        PiperVoice::from_str_or_default(requested)
            .as_str()
            .to_string()
    }

    fn applies_speed(&self) -> bool {
        false
    }

    async fn synthesize_raw(&self, text: &str, _voice: &str, _speed: f32) -> TtsResult<RawAudio> {
        // Both voice identifiers resolve to the single preloaded model, so
        // the resolved voice does not change the invocation.
        let out_path = std::env::temp_dir().join(format!("piper-{}.wav", Uuid::new_v4()));

        let mut child = Command::new(&self.binary)
            .arg("-m")
            .arg(&self.model_path)
            .arg("-f")
            .arg(&out_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            // Dropping stdin closes the pipe so piper sees EOF and exits.
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            let _ = tokio::fs::remove_file(&out_path).await;
            return Err(TtsError::Synthesis(format!(
                "Piper failed: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        let wav_bytes = tokio::fs::read(&out_path).await?;
        if let Err(e) = tokio::fs::remove_file(&out_path).await {
            tracing::warn!(path = %out_path.display(), error = %e, "Failed to remove temporary WAV file");
        }

        Ok(decode_wav(&wav_bytes)?)
    }
}

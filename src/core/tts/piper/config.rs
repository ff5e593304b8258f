//! Voice definitions for the Piper backend.

use serde::{Deserialize, Serialize};

// ============================================================================
// Voice Types
// ============================================================================

/// Voices selectable on the Piper backend.
///
/// Both identifiers map onto the same preloaded Lessac model; `Default` exists
/// so clients can request a voice without knowing the model naming scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PiperVoice {
    /// English US, Lessac medium quality
    #[serde(rename = "en_US-lessac-medium")]
    Lessac,
    /// Alias for the engine default
    #[default]
    #[serde(rename = "default")]
    Default,
}

impl PiperVoice {
    /// Get the voice identifier as used in API requests
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lessac => "en_US-lessac-medium",
            Self::Default => "default",
        }
    }

    /// Human-readable voice name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Lessac => "English US (Lessac)",
            Self::Default => "Default",
        }
    }

    /// Parse a voice identifier, falling back to the default voice
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "en_us-lessac-medium" => Self::Lessac,
            "default" => Self::Default,
            _ => Self::Default,
        }
    }

    /// All selectable voices
    pub fn all() -> &'static [PiperVoice] {
        &[Self::Lessac, Self::Default]
    }

    /// File name of the ONNX model backing this voice
    pub fn model_file(&self) -> &'static str {
        // Single preloaded model for now; extend this match as voices ship.
        match self {
            Self::Lessac | Self::Default => "en_US-lessac-medium.onnx",
        }
    }
}

impl std::fmt::Display for PiperVoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_as_str() {
        assert_eq!(PiperVoice::Lessac.as_str(), "en_US-lessac-medium");
        assert_eq!(PiperVoice::Default.as_str(), "default");
    }

    #[test]
    fn test_voice_parsing() {
        assert_eq!(
            PiperVoice::from_str_or_default("en_US-lessac-medium"),
            PiperVoice::Lessac
        );
        assert_eq!(
            PiperVoice::from_str_or_default("EN_US-LESSAC-MEDIUM"),
            PiperVoice::Lessac
        );
        assert_eq!(PiperVoice::from_str_or_default("default"), PiperVoice::Default);
        assert_eq!(PiperVoice::from_str_or_default("unknown"), PiperVoice::Default);
    }

    #[test]
    fn test_both_voices_share_model() {
        assert_eq!(PiperVoice::Lessac.model_file(), "en_US-lessac-medium.onnx");
        assert_eq!(PiperVoice::Default.model_file(), "en_US-lessac-medium.onnx");
    }

    #[test]
    fn test_all_voices() {
        assert_eq!(PiperVoice::all().len(), 2);
        assert_eq!(PiperVoice::default(), PiperVoice::Default);
    }

    #[test]
    fn test_display() {
        assert_eq!(PiperVoice::Lessac.to_string(), "en_US-lessac-medium");
    }
}

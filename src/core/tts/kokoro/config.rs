//! Voice definitions for the Kokoro backend.

use serde::{Deserialize, Serialize};

// =============================================================================
// Kokoro Voices
// =============================================================================

/// Available voices for Kokoro.
///
/// Identifier prefixes encode accent and gender: `af`/`am` are American
/// female/male, `bf`/`bm` are British female/male. The bare prefixes are
/// blended voices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KokoroVoice {
    /// American female, Sarah (service default)
    #[default]
    AfSarah,
    /// American female, Nicole
    AfNicole,
    /// American female, Sky
    AfSky,
    /// American female blend
    Af,
    /// American male, Adam
    AmAdam,
    /// American male, Michael
    AmMichael,
    /// American male blend
    Am,
    /// British female, Emma
    BfEmma,
    /// British female, Isabella
    BfIsabella,
    /// British female blend
    Bf,
    /// British male, George
    BmGeorge,
    /// British male, Lewis
    BmLewis,
    /// British male blend
    Bm,
}

impl KokoroVoice {
    /// Convert to the sidecar API parameter value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AfSarah => "af_sarah",
            Self::AfNicole => "af_nicole",
            Self::AfSky => "af_sky",
            Self::Af => "af",
            Self::AmAdam => "am_adam",
            Self::AmMichael => "am_michael",
            Self::Am => "am",
            Self::BfEmma => "bf_emma",
            Self::BfIsabella => "bf_isabella",
            Self::Bf => "bf",
            Self::BmGeorge => "bm_george",
            Self::BmLewis => "bm_lewis",
            Self::Bm => "bm",
        }
    }

    /// Human-readable name shown by the voices endpoint.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AfSarah => "Af Sarah",
            Self::AfNicole => "Af Nicole",
            Self::AfSky => "Af Sky",
            Self::Af => "Af",
            Self::AmAdam => "Am Adam",
            Self::AmMichael => "Am Michael",
            Self::Am => "Am",
            Self::BfEmma => "Bf Emma",
            Self::BfIsabella => "Bf Isabella",
            Self::Bf => "Bf",
            Self::BmGeorge => "Bm George",
            Self::BmLewis => "Bm Lewis",
            Self::Bm => "Bm",
        }
    }

    /// Parse from string, with fallback to default.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "af_sarah" => Self::AfSarah,
            "af_nicole" => Self::AfNicole,
            "af_sky" => Self::AfSky,
            "af" => Self::Af,
            "am_adam" => Self::AmAdam,
            "am_michael" => Self::AmMichael,
            "am" => Self::Am,
            "bf_emma" => Self::BfEmma,
            "bf_isabella" => Self::BfIsabella,
            "bf" => Self::Bf,
            "bm_george" => Self::BmGeorge,
            "bm_lewis" => Self::BmLewis,
            "bm" => Self::Bm,
            _ => Self::default(),
        }
    }

    /// Get all available voices, in display order.
    pub fn all() -> &'static [KokoroVoice] {
        &[
            Self::AfSarah,
            Self::AfNicole,
            Self::AfSky,
            Self::Af,
            Self::AmAdam,
            Self::AmMichael,
            Self::Am,
            Self::BfEmma,
            Self::BfIsabella,
            Self::Bf,
            Self::BmGeorge,
            Self::BmLewis,
            Self::Bm,
        ]
    }
}

impl std::fmt::Display for KokoroVoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use serde::{Deserialize, Serialize};

/// Validated musician profile used as scorer input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub genres: Vec<String>,
    pub instruments: Vec<String>,
    pub experience: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl Profile {
    /// Location for prompt display, defaulting to "Not specified"
    pub fn location_or_unspecified(&self) -> &str {
        self.location.as_deref().unwrap_or("Not specified")
    }

    /// Bio for prompt display, defaulting to "Not provided"
    pub fn bio_or_unspecified(&self) -> &str {
        self.bio.as_deref().unwrap_or("Not provided")
    }
}

/// Recognized experience levels, ordered from least to most experienced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Professional,
}

impl ExperienceLevel {
    /// Parse an experience string; values outside the four levels are unranked
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            "professional" => Some(Self::Professional),
            _ => None,
        }
    }

    /// Position in the ordered level list, used for distance scoring
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// Which scorer produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSource {
    Algorithmic,
    Ai,
}

impl ScoreSource {
    /// Wire label exposed in the `model_used` response field
    pub fn model_label(self) -> &'static str {
        match self {
            Self::Algorithmic => "algorithmic_fallback",
            Self::Ai => "mistral_ai",
        }
    }
}

/// Scored compatibility result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub reasoning: String,
    pub source: ScoreSource,
    pub used_fallback: bool,
}

impl ScoreResult {
    /// Mark this result as produced by the fallback path
    pub fn into_fallback(mut self) -> Self {
        self.used_fallback = true;
        self
    }
}

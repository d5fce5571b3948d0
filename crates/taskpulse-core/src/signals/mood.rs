//! Mood normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse mood bucket derived from a free-text mood token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    /// "stressed", "sad"
    Stressed,
    /// "happy", "energetic"
    Upbeat,
    /// "excited"; fits tasks like `Upbeat` but earns no upbeat bonus in
    /// productivity scoring
    Excited,
    /// "angry"
    Angry,
    /// "neutral" and every unrecognized token
    Neutral,
}

impl MoodCategory {
    /// Map a mood token to its bucket. Absent or unknown tokens are `Neutral`.
    pub fn from_token(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return MoodCategory::Neutral;
        };

        match token.trim().to_lowercase().as_str() {
            "stressed" | "sad" => MoodCategory::Stressed,
            "happy" | "energetic" => MoodCategory::Upbeat,
            "excited" => MoodCategory::Excited,
            "angry" => MoodCategory::Angry,
            _ => MoodCategory::Neutral,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoodCategory::Stressed => "stressed",
            MoodCategory::Upbeat => "upbeat",
            MoodCategory::Excited => "excited",
            MoodCategory::Angry => "angry",
            MoodCategory::Neutral => "neutral",
        }
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! User-state signals shared by the prioritizer and the productivity analyzer.
//!
//! Mood and energy arrive from upstream collaborators as free-text tokens.
//! Both components normalize them through this module so their handling of
//! an unknown or oddly-cased token can never drift apart.

mod energy;
mod mood;

pub use energy::EnergyLevel;
pub use mood::MoodCategory;

use serde::{Deserialize, Serialize};

/// Scoring context supplied alongside a task list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    /// Free-text mood token (e.g. "happy", "Stressed").
    #[serde(default)]
    pub mood: Option<String>,
    /// Current energy token ("high", "medium", "low").
    #[serde(default)]
    pub energy_level: Option<String>,
}

impl UserState {
    pub fn new(mood: Option<&str>, energy_level: Option<&str>) -> Self {
        Self {
            mood: mood.map(str::to_string),
            energy_level: energy_level.map(str::to_string),
        }
    }

    /// Mood bucket, `Neutral` when absent or unrecognized.
    pub fn mood_category(&self) -> MoodCategory {
        MoodCategory::from_token(self.mood.as_deref())
    }

    /// Energy level, `Medium` when absent or unrecognized.
    pub fn energy(&self) -> EnergyLevel {
        EnergyLevel::from_user(self.energy_level.as_deref())
    }
}

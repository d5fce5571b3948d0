//! Energy level classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Energy level, used both for a task's demand and a user's current capacity.
///
/// Variants are declared in ascending order so `Ord` follows effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl EnergyLevel {
    /// Parse a token, ignoring case and surrounding whitespace.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "low" => Some(EnergyLevel::Low),
            "medium" => Some(EnergyLevel::Medium),
            "high" => Some(EnergyLevel::High),
            _ => None,
        }
    }

    /// Resolve a user-supplied token. Absent or unrecognized means `Medium`.
    pub fn from_user(token: Option<&str>) -> Self {
        token.and_then(Self::parse).unwrap_or(EnergyLevel::Medium)
    }

    /// Position on the 1 (low) ..= 3 (high) scale.
    pub fn scale(&self) -> u8 {
        match self {
            EnergyLevel::Low => 1,
            EnergyLevel::Medium => 2,
            EnergyLevel::High => 3,
        }
    }

    /// Steps between two levels: 0 exact, 1 adjacent, 2 opposite extremes.
    pub fn distance(&self, other: EnergyLevel) -> u8 {
        self.scale().abs_diff(other.scale())
    }

    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

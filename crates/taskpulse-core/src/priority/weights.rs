//! Named scoring constants.
//!
//! Every number the prioritizer uses lives in one of these structures so a
//! caller can substitute a variant (from configuration or in tests) without
//! touching the scoring code.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::signals::{EnergyLevel, MoodCategory};

/// Factor weights for the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for the priority tier (default 0.30)
    #[serde(default = "default_priority_weight")]
    pub priority: f64,
    /// Weight for deadline urgency (default 0.40)
    #[serde(default = "default_deadline_weight")]
    pub deadline: f64,
    /// Weight for energy fit (default 0.20)
    #[serde(default = "default_energy_fit_weight")]
    pub energy_fit: f64,
    /// Weight for mood fit (default 0.10)
    #[serde(default = "default_mood_weight")]
    pub mood: f64,
}

fn default_priority_weight() -> f64 {
    0.30
}
fn default_deadline_weight() -> f64 {
    0.40
}
fn default_energy_fit_weight() -> f64 {
    0.20
}
fn default_mood_weight() -> f64 {
    0.10
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            priority: default_priority_weight(),
            deadline: default_deadline_weight(),
            energy_fit: default_energy_fit_weight(),
            mood: default_mood_weight(),
        }
    }
}

impl ScoringWeights {
    /// Reject negative or non-finite weights.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] naming the offending weight.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("weights.priority", self.priority),
            ("weights.deadline", self.deadline),
            ("weights.energy_fit", self.energy_fit),
            ("weights.mood", self.mood),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::invalid(
                    field,
                    format!("must be a non-negative number, got {value}"),
                ));
            }
        }

        Ok(())
    }
}

/// Score per priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityScores {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for PriorityScores {
    fn default() -> Self {
        Self {
            high: 1.0,
            medium: 0.6,
            low: 0.3,
        }
    }
}

/// Urgency score per band of whole days remaining.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeadlineScores {
    /// Fewer than zero days remaining
    pub overdue: f64,
    /// Due within the current day
    pub due_today: f64,
    /// 1-3 days remaining
    pub within_three_days: f64,
    /// 4-7 days remaining
    pub within_week: f64,
    /// More than 7 days remaining
    pub later: f64,
}

impl Default for DeadlineScores {
    fn default() -> Self {
        Self {
            overdue: 1.0,
            due_today: 1.0,
            within_three_days: 0.8,
            within_week: 0.5,
            later: 0.2,
        }
    }
}

/// Score for how closely the user's energy matches the task's demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyFitScores {
    pub exact: f64,
    /// high/medium or medium/low
    pub adjacent: f64,
    /// high/low
    pub opposite: f64,
}

impl Default for EnergyFitScores {
    fn default() -> Self {
        Self {
            exact: 1.0,
            adjacent: 0.5,
            opposite: 0.1,
        }
    }
}

/// One mood row, indexed by the task's required energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyRow {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl EnergyRow {
    pub const fn new(low: f64, medium: f64, high: f64) -> Self {
        Self { low, medium, high }
    }

    pub fn get(&self, energy: EnergyLevel) -> f64 {
        match energy {
            EnergyLevel::Low => self.low,
            EnergyLevel::Medium => self.medium,
            EnergyLevel::High => self.high,
        }
    }
}

/// Mood-to-task-energy fit table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodTable {
    pub stressed: EnergyRow,
    pub upbeat: EnergyRow,
    pub angry: EnergyRow,
    pub neutral: EnergyRow,
}

impl Default for MoodTable {
    fn default() -> Self {
        Self {
            stressed: EnergyRow::new(0.8, 0.5, 0.2),
            upbeat: EnergyRow::new(0.3, 0.6, 0.9),
            angry: EnergyRow::new(0.3, 0.5, 0.8),
            neutral: EnergyRow::new(0.6, 0.7, 0.6),
        }
    }
}

impl MoodTable {
    pub fn row(&self, mood: MoodCategory) -> &EnergyRow {
        match mood {
            MoodCategory::Stressed => &self.stressed,
            MoodCategory::Upbeat | MoodCategory::Excited => &self.upbeat,
            MoodCategory::Angry => &self.angry,
            MoodCategory::Neutral => &self.neutral,
        }
    }
}

/// All lookup tables used by the component scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringTables {
    pub priority: PriorityScores,
    pub deadline: DeadlineScores,
    pub energy_fit: EnergyFitScores,
    pub mood: MoodTable,
}

impl ScoringTables {
    /// Reject component scores outside `0.0..=1.0` or not finite.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] naming the offending entry.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mood_rows = [
            ("mood.stressed", &self.mood.stressed),
            ("mood.upbeat", &self.mood.upbeat),
            ("mood.angry", &self.mood.angry),
            ("mood.neutral", &self.mood.neutral),
        ];

        let mut entries = vec![
            ("priority.high".to_string(), self.priority.high),
            ("priority.medium".to_string(), self.priority.medium),
            ("priority.low".to_string(), self.priority.low),
            ("deadline.overdue".to_string(), self.deadline.overdue),
            ("deadline.due_today".to_string(), self.deadline.due_today),
            ("deadline.within_three_days".to_string(), self.deadline.within_three_days),
            ("deadline.within_week".to_string(), self.deadline.within_week),
            ("deadline.later".to_string(), self.deadline.later),
            ("energy_fit.exact".to_string(), self.energy_fit.exact),
            ("energy_fit.adjacent".to_string(), self.energy_fit.adjacent),
            ("energy_fit.opposite".to_string(), self.energy_fit.opposite),
        ];
        for (name, row) in mood_rows {
            entries.push((format!("{name}.low"), row.low));
            entries.push((format!("{name}.medium"), row.medium));
            entries.push((format!("{name}.high"), row.high));
        }

        for (field, value) in entries {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::invalid(
                    &format!("tables.{field}"),
                    format!("must be between 0 and 1, got {value}"),
                ));
            }
        }

        Ok(())
    }
}

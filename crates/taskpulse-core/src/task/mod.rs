//! Task records consumed by the scoring core.
//!
//! Both record types are supplied fully materialized by the storage layer.
//! Identity fields are opaque and carried through untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::signals::EnergyLevel;

/// Fixed importance tier of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn name(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pending (or completed) task to be ranked.
///
/// `deadline` is required and may lie in the past; overdue tasks are treated
/// as maximally urgent rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub priority: Priority,
    pub required_energy: EnergyLevel,
    pub deadline: DateTime<Utc>,
    #[serde(default)]
    pub is_completed: bool,
}

impl Task {
    /// Create an incomplete task.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        priority: Priority,
        required_energy: EnergyLevel,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            priority,
            required_energy,
            deadline,
            is_completed: false,
        }
    }

    /// Builder: mark as completed.
    pub fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }
}

/// A historical completion fed to the productivity analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedTask {
    pub completed_at: DateTime<Utc>,
    /// 1 (low) ..= 3 (high).
    pub energy_requirement: f64,
    /// Strictly positive; higher is harder.
    pub difficulty: f64,
    /// Mood token recorded at completion time.
    #[serde(default)]
    pub mood: String,
    /// Journal sentiment in -1.0 ..= 1.0.
    #[serde(default)]
    pub journal_sentiment: f64,
}

impl CompletedTask {
    pub fn new(
        completed_at: DateTime<Utc>,
        energy_requirement: f64,
        difficulty: f64,
        mood: impl Into<String>,
        journal_sentiment: f64,
    ) -> Self {
        Self {
            completed_at,
            energy_requirement,
            difficulty,
            mood: mood.into(),
            journal_sentiment,
        }
    }

    /// Check the numeric ranges the derived score relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] naming the first field that is
    /// out of range or not finite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.energy_requirement.is_finite() || !(1.0..=3.0).contains(&self.energy_requirement) {
            return Err(ValidationError::invalid(
                "energy_requirement",
                format!("must be between 1 and 3, got {}", self.energy_requirement),
            ));
        }

        if !self.difficulty.is_finite() || self.difficulty <= 0.0 {
            return Err(ValidationError::invalid(
                "difficulty",
                format!("must be greater than 0, got {}", self.difficulty),
            ));
        }

        if !self.journal_sentiment.is_finite() || !(-1.0..=1.0).contains(&self.journal_sentiment) {
            return Err(ValidationError::invalid(
                "journal_sentiment",
                format!("must be between -1 and 1, got {}", self.journal_sentiment),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn completion(energy: f64, difficulty: f64, sentiment: f64) -> CompletedTask {
        let at = Utc.with_ymd_and_hms(2026, 2, 17, 9, 0, 0).unwrap();
        CompletedTask::new(at, energy, difficulty, "happy", sentiment)
    }

    #[test]
    fn valid_completion_passes() {
        assert!(completion(3.0, 2.0, 0.8).validate().is_ok());
        assert!(completion(1.0, 0.01, -1.0).validate().is_ok());
    }

    #[test]
    fn zero_difficulty_is_rejected() {
        let err = completion(2.0, 0.0, 0.0).validate().unwrap_err();
        assert_eq!(err.field(), "difficulty");
    }

    #[test]
    fn negative_or_nan_difficulty_is_rejected() {
        assert!(completion(2.0, -1.5, 0.0).validate().is_err());
        assert!(completion(2.0, f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn out_of_range_energy_is_rejected() {
        assert_eq!(completion(0.5, 1.0, 0.0).validate().unwrap_err().field(), "energy_requirement");
        assert_eq!(completion(4.0, 1.0, 0.0).validate().unwrap_err().field(), "energy_requirement");
    }

    #[test]
    fn out_of_range_sentiment_is_rejected() {
        assert_eq!(completion(2.0, 1.0, 1.5).validate().unwrap_err().field(), "journal_sentiment");
    }

    #[test]
    fn task_without_deadline_fails_to_deserialize() {
        let json = r#"{"id":"1","title":"x","priority":"high","required_energy":"low"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn task_deserializes_with_defaults() {
        let json = r#"{"id":"1","priority":"medium","required_energy":"high","deadline":"2026-02-17T09:00:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.required_energy, EnergyLevel::High);
        assert!(!task.is_completed);
        assert!(task.title.is_empty());
    }
}

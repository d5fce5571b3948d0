//! Component scores.
//!
//! Each function maps one factor to a value in `0.0..=1.0` using the
//! supplied [`ScoringTables`]; weighting happens in the calculator.

use chrono::{DateTime, Utc};

use super::weights::ScoringTables;
use crate::signals::{EnergyLevel, MoodCategory};
use crate::task::Priority;

const SECONDS_PER_DAY: i64 = 86_400;

/// Priority tier score: high 1.0, medium 0.6, low 0.3 by default.
pub fn priority_score(priority: Priority, tables: &ScoringTables) -> f64 {
    match priority {
        Priority::High => tables.priority.high,
        Priority::Medium => tables.priority.medium,
        Priority::Low => tables.priority.low,
    }
}

/// Whole days until the deadline, rounded toward negative infinity.
///
/// A deadline one hour away is day 0; one hour ago is day -1.
pub fn days_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    deadline
        .signed_duration_since(now)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY)
}

/// Deadline urgency score for a number of whole days remaining.
///
/// - Overdue: 1.0
/// - Due today: 1.0
/// - 1-3 days: 0.8
/// - 4-7 days: 0.5
/// - More than a week: 0.2
pub fn deadline_score(days: i64, tables: &ScoringTables) -> f64 {
    let bands = &tables.deadline;
    match days {
        d if d < 0 => bands.overdue,
        0 => bands.due_today,
        1..=3 => bands.within_three_days,
        4..=7 => bands.within_week,
        _ => bands.later,
    }
}

/// Energy fit between the user's capacity and the task's demand.
pub fn energy_fit_score(user: EnergyLevel, task: EnergyLevel, tables: &ScoringTables) -> f64 {
    match user.distance(task) {
        0 => tables.energy_fit.exact,
        1 => tables.energy_fit.adjacent,
        _ => tables.energy_fit.opposite,
    }
}

/// Mood fit for a task of the given energy demand.
pub fn mood_score(mood: MoodCategory, task: EnergyLevel, tables: &ScoringTables) -> f64 {
    tables.mood.row(mood).get(task)
}

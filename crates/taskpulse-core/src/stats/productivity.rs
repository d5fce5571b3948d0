//! Productivity window analysis.
//!
//! Buckets completed tasks by local time of day and day of week, averages a
//! derived productivity score per bucket and picks the best bucket in each
//! dimension.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::buckets::{DayOfWeek, TimeOfDay};
use crate::error::Result;
use crate::signals::MoodCategory;
use crate::task::CompletedTask;

/// Label reported when there is nothing to analyze.
pub const NO_DATA_LABEL: &str = "No data";

/// Constants of the derived productivity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductivityWeights {
    /// Starting value of every score
    pub base: f64,
    /// Multiplier on the 1-3 energy requirement
    pub energy_factor: f64,
    /// Multiplier on the -1..1 journal sentiment
    pub sentiment_factor: f64,
    pub upbeat_bonus: f64,
    pub neutral_bonus: f64,
    pub stressed_bonus: f64,
    /// Bonus for moods outside the named buckets (angry, excited)
    pub other_bonus: f64,
}

impl Default for ProductivityWeights {
    fn default() -> Self {
        Self {
            base: 1.0,
            energy_factor: 0.5,
            sentiment_factor: 0.5,
            upbeat_bonus: 1.0,
            neutral_bonus: 0.5,
            stressed_bonus: 0.0,
            other_bonus: 0.5,
        }
    }
}

impl ProductivityWeights {
    pub fn mood_adjustment(&self, mood: MoodCategory) -> f64 {
        match mood {
            MoodCategory::Upbeat => self.upbeat_bonus,
            MoodCategory::Neutral => self.neutral_bonus,
            MoodCategory::Stressed => self.stressed_bonus,
            MoodCategory::Angry | MoodCategory::Excited => self.other_bonus,
        }
    }
}

/// Count and mean score of one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub count: usize,
    /// Mean derived score, 0.0 for an empty bucket
    pub average_score: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    count: usize,
    total: f64,
}

impl Accumulator {
    fn add(&mut self, score: f64) {
        self.count += 1;
        self.total += score;
    }

    fn summary(&self) -> BucketSummary {
        let average_score = if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        };
        BucketSummary {
            count: self.count,
            average_score,
        }
    }
}

/// Result of a productivity analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityResult {
    /// Best time-of-day bucket, `None` without data
    pub best_time_of_day: Option<TimeOfDay>,
    /// Best day-of-week bucket, `None` without data
    pub best_day_of_week: Option<DayOfWeek>,
    /// All 7 time-of-day buckets
    pub time_of_day: BTreeMap<TimeOfDay, BucketSummary>,
    /// All 7 day-of-week buckets
    pub day_of_week: BTreeMap<DayOfWeek, BucketSummary>,
    pub total_completions: usize,
}

impl ProductivityResult {
    /// Explicit empty state: every bucket present and zeroed.
    pub fn no_data() -> Self {
        Self {
            best_time_of_day: None,
            best_day_of_week: None,
            time_of_day: TimeOfDay::ALL
                .iter()
                .map(|b| (*b, BucketSummary::default()))
                .collect(),
            day_of_week: DayOfWeek::ALL
                .iter()
                .map(|b| (*b, BucketSummary::default()))
                .collect(),
            total_completions: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_completions == 0
    }

    pub fn best_time_label(&self) -> &'static str {
        self.best_time_of_day.map_or(NO_DATA_LABEL, |b| b.label())
    }

    pub fn best_day_label(&self) -> &'static str {
        self.best_day_of_week.map_or(NO_DATA_LABEL, |b| b.label())
    }

    /// Render both bucket maps as an ASCII bar chart.
    pub fn render_ascii(&self) -> String {
        let mut output = String::new();

        output.push_str("\nProductivity Windows\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No productivity data available.\n");
            return output;
        }

        output.push_str(&format!("Completions analyzed: {}\n", self.total_completions));

        let max = self
            .time_of_day
            .values()
            .chain(self.day_of_week.values())
            .map(|s| s.average_score)
            .fold(0.0_f64, f64::max);

        output.push_str("\nTime of day:\n");
        for (bucket, summary) in &self.time_of_day {
            let (start, end) = bucket.hours();
            let label = format!("{} {:02}-{:02}", bucket.label(), start, end);
            output.push_str(&render_row(&label, summary, max));
        }

        output.push_str("\nDay of week:\n");
        for (bucket, summary) in &self.day_of_week {
            output.push_str(&render_row(bucket.label(), summary, max));
        }

        output.push('\n');
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "Most productive: {} on {}\n",
            self.best_time_label(),
            self.best_day_label()
        ));

        output
    }
}

fn render_row(label: &str, summary: &BucketSummary, max: f64) -> String {
    const BAR_WIDTH: f64 = 24.0;
    let bar_length = if max > 0.0 {
        ((summary.average_score / max) * BAR_WIDTH).round() as usize
    } else {
        0
    };
    format!(
        "  {:<20}{:<24} {:>5.2} ({})\n",
        label,
        "█".repeat(bar_length),
        summary.average_score,
        summary.count
    )
}

/// Pick the populated bucket with the strictly highest average.
///
/// Iteration follows canonical bucket order, so the first bucket wins ties.
fn best_bucket<K: Copy>(buckets: &BTreeMap<K, BucketSummary>) -> Option<K> {
    let mut best: Option<(K, f64)> = None;
    for (key, summary) in buckets {
        if summary.count == 0 {
            continue;
        }
        match best {
            Some((_, top)) if summary.average_score <= top => {}
            _ => best = Some((*key, summary.average_score)),
        }
    }
    best.map(|(key, _)| key)
}

/// Analyzer for productivity windows.
#[derive(Debug, Clone)]
pub struct ProductivityAnalyzer {
    weights: ProductivityWeights,
    /// Offset used to turn completion instants into local wall-clock time
    offset: FixedOffset,
}

impl Default for ProductivityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductivityAnalyzer {
    /// Create an analyzer that buckets in UTC.
    pub fn new() -> Self {
        Self {
            weights: ProductivityWeights::default(),
            offset: Utc.fix(),
        }
    }

    /// Bucket by wall-clock time at the given UTC offset.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_weights(mut self, weights: ProductivityWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Derived productivity score of one completion, floored at zero.
    ///
    /// Assumes a validated record; `difficulty` must be positive.
    pub fn derived_score(&self, task: &CompletedTask) -> f64 {
        let w = &self.weights;
        let mood = MoodCategory::from_token(Some(&task.mood));

        let score = w.base + task.energy_requirement * w.energy_factor
            + w.mood_adjustment(mood)
            + task.journal_sentiment * w.sentiment_factor
            - 1.0 / task.difficulty;

        score.max(0.0)
    }

    /// Analyze a completion history.
    ///
    /// # Errors
    ///
    /// Returns a validation error for the first record with an out-of-range
    /// field. Nothing is scored when any record is invalid.
    pub fn analyze(&self, completions: &[CompletedTask]) -> Result<ProductivityResult> {
        for (index, task) in completions.iter().enumerate() {
            task.validate().map_err(|e| e.at_record(index))?;
        }

        if completions.is_empty() {
            debug!("no completions to analyze");
            return Ok(ProductivityResult::no_data());
        }

        let mut by_time: BTreeMap<TimeOfDay, Accumulator> =
            TimeOfDay::ALL.iter().map(|b| (*b, Accumulator::default())).collect();
        let mut by_day: BTreeMap<DayOfWeek, Accumulator> =
            DayOfWeek::ALL.iter().map(|b| (*b, Accumulator::default())).collect();

        for task in completions {
            let local = task.completed_at.with_timezone(&self.offset);
            let score = self.derived_score(task);

            by_time.entry(TimeOfDay::of(&local)).or_default().add(score);
            by_day.entry(DayOfWeek::of(&local)).or_default().add(score);
        }

        let time_of_day: BTreeMap<_, _> = by_time.iter().map(|(k, a)| (*k, a.summary())).collect();
        let day_of_week: BTreeMap<_, _> = by_day.iter().map(|(k, a)| (*k, a.summary())).collect();

        let result = ProductivityResult {
            best_time_of_day: best_bucket(&time_of_day),
            best_day_of_week: best_bucket(&day_of_week),
            time_of_day,
            day_of_week,
            total_completions: completions.len(),
        };

        debug!(
            completions = result.total_completions,
            best_time = result.best_time_label(),
            best_day = result.best_day_label(),
            "analyzed productivity"
        );

        Ok(result)
    }
}

/// Convenience function: analyze in UTC with default weights.
///
/// # Errors
///
/// See [`ProductivityAnalyzer::analyze`].
pub fn analyze(completions: &[CompletedTask]) -> Result<ProductivityResult> {
    ProductivityAnalyzer::new().analyze(completions)
}

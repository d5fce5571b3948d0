//! Productivity statistics.
//!
//! Aggregates historical completions into fixed time-of-day and day-of-week
//! buckets to find a user's most productive windows.

mod buckets;
mod productivity;

pub use buckets::{DayOfWeek, TimeOfDay};
pub use productivity::{
    analyze, BucketSummary, ProductivityAnalyzer, ProductivityResult, ProductivityWeights,
    NO_DATA_LABEL,
};

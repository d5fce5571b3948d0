//! # Taskpulse Core Library
//!
//! This library provides the scoring core of the Taskpulse productivity app.
//! It follows a CLI-first philosophy: every operation is available through
//! the standalone `taskpulse` binary, with any GUI being a thin layer over
//! the same library.
//!
//! ## Architecture
//!
//! - **Prioritizer**: ranks pending tasks by priority, deadline urgency,
//!   energy fit and mood fit
//! - **Productivity stats**: buckets historical completions by time of day and
//!   day of week to find the most productive windows
//! - **Signals**: the single place mood and energy tokens are normalized
//! - **Storage**: TOML-based configuration
//!
//! Both engines are pure and synchronous. They perform no I/O, hold no state
//! between calls and never mutate their inputs.
//!
//! ## Key Components
//!
//! - [`TaskPrioritizer`]: composite task scoring and ordering
//! - [`ProductivityAnalyzer`]: time-bucketed productivity analysis
//! - [`Config`]: application configuration management

pub mod error;
pub mod priority;
pub mod signals;
pub mod stats;
pub mod storage;
pub mod task;

pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use priority::{
    prioritize, PrioritizerConfig, RankedTask, ScoreBreakdown, ScoreComponent, ScoringTables,
    ScoringWeights, TaskPrioritizer, COMPLETED_SCORE,
};
pub use signals::{EnergyLevel, MoodCategory, UserState};
pub use stats::{
    analyze, BucketSummary, DayOfWeek, ProductivityAnalyzer, ProductivityResult,
    ProductivityWeights, TimeOfDay, NO_DATA_LABEL,
};
pub use storage::Config;
pub use task::{CompletedTask, Priority, Task};

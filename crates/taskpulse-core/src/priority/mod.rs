//! Task prioritization engine.
//!
//! Stateless, pure scoring over an in-memory task list. Weights and lookup
//! tables are plain configuration values; see [`weights`].

mod calculator;
pub mod scoring;
pub mod weights;

pub use calculator::{
    prioritize, PrioritizerConfig, RankedTask, ScoreBreakdown, ScoreComponent, TaskPrioritizer,
    COMPLETED_SCORE,
};
pub use weights::{
    DeadlineScores, EnergyFitScores, EnergyRow, MoodTable, PriorityScores, ScoringTables,
    ScoringWeights,
};

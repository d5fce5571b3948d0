//! Task prioritization.
//!
//! Ranks tasks by a composite score in `0.0..=1.0`:
//! - Priority tier (30%)
//! - Deadline urgency (40%)
//! - Energy fit between user and task (20%)
//! - Mood fit (10%)
//!
//! Completed tasks receive [`COMPLETED_SCORE`], which lies below every
//! incomplete score, so they always sort last.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::scoring::{days_until, deadline_score, energy_fit_score, mood_score, priority_score};
use super::weights::{ScoringTables, ScoringWeights};
use crate::error::ValidationError;
use crate::signals::UserState;
use crate::task::Task;

/// Score assigned to completed tasks.
pub const COMPLETED_SCORE: f64 = -1.0;

/// Prioritizer configuration
#[derive(Debug, Clone)]
pub struct PrioritizerConfig {
    /// Weights for each factor
    pub weights: ScoringWeights,
    /// Component lookup tables
    pub tables: ScoringTables,
    /// Current time for deadline calculations
    pub current_time: DateTime<Utc>,
}

impl Default for PrioritizerConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            tables: ScoringTables::default(),
            current_time: Utc::now(),
        }
    }
}

impl PrioritizerConfig {
    /// Default weights and tables evaluated at a fixed instant.
    pub fn at(current_time: DateTime<Utc>) -> Self {
        Self {
            current_time,
            ..Default::default()
        }
    }

    /// Check weights and tables.
    ///
    /// # Errors
    ///
    /// Returns the first invalid weight or table entry.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.weights.validate()?;
        self.tables.validate()
    }
}

/// One factor of a score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    /// Component score before weighting (0.0-1.0)
    pub raw: f64,
    pub weight: f64,
    /// `raw * weight`
    pub weighted: f64,
}

impl ScoreComponent {
    fn new(raw: f64, weight: f64) -> Self {
        Self {
            raw,
            weight,
            weighted: raw * weight,
        }
    }
}

/// Per-factor explanation of a task's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub task_id: String,
    pub priority: ScoreComponent,
    pub deadline: ScoreComponent,
    pub energy_fit: ScoreComponent,
    pub mood: ScoreComponent,
    /// Whole days until the deadline (negative when overdue)
    pub days_until_deadline: i64,
    pub completed: bool,
    /// Final score: clamped weighted sum, or [`COMPLETED_SCORE`]
    pub total: f64,
}

/// A task paired with the score that placed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTask {
    pub task: Task,
    pub score: f64,
}

/// Prioritizer for tasks
#[derive(Debug, Clone)]
pub struct TaskPrioritizer {
    config: PrioritizerConfig,
}

impl TaskPrioritizer {
    /// Create a new prioritizer with default config
    pub fn new() -> Self {
        Self {
            config: PrioritizerConfig::default(),
        }
    }

    /// Create with custom config.
    ///
    /// The config is not checked; a weighted sum that is not a number scores
    /// 0.0. Use [`TaskPrioritizer::try_with_config`] to reject bad values.
    pub fn with_config(config: PrioritizerConfig) -> Self {
        Self { config }
    }

    /// Create with custom config after validating it.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for a negative or non-finite weight, or
    /// a table entry outside `0.0..=1.0`.
    pub fn try_with_config(config: PrioritizerConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PrioritizerConfig {
        &self.config
    }

    /// Break a task's score down into its weighted components.
    pub fn explain(&self, task: &Task, state: &UserState) -> ScoreBreakdown {
        let weights = &self.config.weights;
        let tables = &self.config.tables;

        let days = days_until(task.deadline, self.config.current_time);

        let priority = ScoreComponent::new(priority_score(task.priority, tables), weights.priority);
        let deadline = ScoreComponent::new(deadline_score(days, tables), weights.deadline);
        let energy_fit = ScoreComponent::new(
            energy_fit_score(state.energy(), task.required_energy, tables),
            weights.energy_fit,
        );
        let mood = ScoreComponent::new(
            mood_score(state.mood_category(), task.required_energy, tables),
            weights.mood,
        );

        let total = if task.is_completed {
            COMPLETED_SCORE
        } else {
            let sum = priority.weighted + deadline.weighted + energy_fit.weighted + mood.weighted;
            if sum.is_nan() {
                0.0
            } else {
                sum.clamp(0.0, 1.0)
            }
        };

        ScoreBreakdown {
            task_id: task.id.clone(),
            priority,
            deadline,
            energy_fit,
            mood,
            days_until_deadline: days,
            completed: task.is_completed,
            total,
        }
    }

    /// Composite score for a single task.
    pub fn score_task(&self, task: &Task, state: &UserState) -> f64 {
        self.explain(task, state).total
    }

    /// Score every task and order by descending score.
    ///
    /// The sort is stable: tasks with equal scores keep their input order.
    pub fn rank(&self, tasks: &[Task], state: &UserState) -> Vec<RankedTask> {
        let mut ranked: Vec<RankedTask> = tasks
            .iter()
            .map(|task| {
                let score = self.score_task(task, state);
                trace!(task_id = %task.id, score, "scored task");
                RankedTask {
                    task: task.clone(),
                    score,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            tasks = ranked.len(),
            mood = %state.mood_category(),
            energy = %state.energy(),
            "ranked tasks"
        );

        ranked
    }

    /// Return a new list holding every task once, highest score first.
    pub fn prioritize(&self, tasks: &[Task], state: &UserState) -> Vec<Task> {
        self.rank(tasks, state)
            .into_iter()
            .map(|ranked| ranked.task)
            .collect()
    }
}

impl Default for TaskPrioritizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function: rank with default weights at the current time.
pub fn prioritize(tasks: &[Task], mood: Option<&str>, energy_level: Option<&str>) -> Vec<Task> {
    TaskPrioritizer::new().prioritize(tasks, &UserState::new(mood, energy_level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::EnergyLevel;
    use crate::task::Priority;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn prioritizer() -> TaskPrioritizer {
        TaskPrioritizer::with_config(PrioritizerConfig::at(now()))
    }

    fn task(id: &str, priority: Priority, energy: EnergyLevel, due_in: Duration) -> Task {
        Task::new(id, format!("Task {id}"), priority, energy, now() + due_in)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn stressed_low_energy_scenario() {
        let a = task("A", Priority::High, EnergyLevel::High, Duration::hours(1));
        let b = task("B", Priority::Low, EnergyLevel::Low, Duration::days(10));
        let state = UserState::new(Some("stressed"), Some("low"));
        let p = prioritizer();

        // A: 0.3*1.0 + 0.4*1.0 + 0.2*0.1 + 0.1*0.2
        assert!(close(p.score_task(&a, &state), 0.74));
        // B: 0.3*0.3 + 0.4*0.2 + 0.2*1.0 + 0.1*0.8
        assert!(close(p.score_task(&b, &state), 0.45));

        let ordered = p.prioritize(&[b, a], &state);
        assert_eq!(ordered[0].id, "A");
        assert_eq!(ordered[1].id, "B");
    }

    #[test]
    fn completed_task_scores_sentinel() {
        let done = task("1", Priority::High, EnergyLevel::Medium, Duration::hours(-2)).completed();
        let score = prioritizer().score_task(&done, &UserState::default());
        assert_eq!(score, COMPLETED_SCORE);
    }

    #[test]
    fn completed_tasks_sort_after_incomplete() {
        let tasks = vec![
            task("done-high", Priority::High, EnergyLevel::Medium, Duration::hours(1)).completed(),
            task("open-low", Priority::Low, EnergyLevel::High, Duration::days(30)),
            task("done-low", Priority::Low, EnergyLevel::Low, Duration::days(2)).completed(),
        ];

        let ordered = prioritizer().prioritize(&tasks, &UserState::default());
        let ids: Vec<_> = ordered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["open-low", "done-high", "done-low"]);
    }

    #[test]
    fn all_completed_keeps_input_order() {
        let tasks: Vec<_> = ["c", "a", "b"]
            .iter()
            .map(|id| task(id, Priority::Medium, EnergyLevel::Low, Duration::days(1)).completed())
            .collect();

        let ordered = prioritizer().prioritize(&tasks, &UserState::default());
        assert_eq!(ordered, tasks);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let tasks: Vec<_> = ["3", "1", "2"]
            .iter()
            .map(|id| task(id, Priority::High, EnergyLevel::Medium, Duration::days(2)))
            .collect();

        let ordered = prioritizer().prioritize(&tasks, &UserState::default());
        let ids: Vec<_> = ordered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn overdue_is_maximally_urgent() {
        let overdue = task("1", Priority::Medium, EnergyLevel::Medium, Duration::days(-4));
        let breakdown = prioritizer().explain(&overdue, &UserState::default());
        assert_eq!(breakdown.days_until_deadline, -4);
        assert_eq!(breakdown.deadline.raw, 1.0);
    }

    #[test]
    fn unknown_tokens_fall_back_to_defaults() {
        let t = task("1", Priority::Medium, EnergyLevel::High, Duration::days(5));
        let p = prioritizer();
        let degraded = p.score_task(&t, &UserState::new(Some("???"), Some("turbo")));
        let defaults = p.score_task(&t, &UserState::new(Some("neutral"), Some("medium")));
        assert_eq!(degraded, defaults);
    }

    #[test]
    fn explain_components_sum_to_total() {
        let t = task("1", Priority::Medium, EnergyLevel::Low, Duration::days(2));
        let b = prioritizer().explain(&t, &UserState::new(Some("happy"), Some("high")));

        assert_eq!(b.priority.raw, 0.6);
        assert_eq!(b.deadline.raw, 0.8);
        assert_eq!(b.energy_fit.raw, 0.1);
        assert_eq!(b.mood.raw, 0.3);
        let sum = b.priority.weighted + b.deadline.weighted + b.energy_fit.weighted + b.mood.weighted;
        assert!(close(b.total, sum));
    }

    #[test]
    fn oversized_weights_are_clamped() {
        let config = PrioritizerConfig {
            weights: ScoringWeights {
                priority: 2.0,
                deadline: 2.0,
                energy_fit: 2.0,
                mood: 2.0,
            },
            ..PrioritizerConfig::at(now())
        };
        let t = task("1", Priority::High, EnergyLevel::Medium, Duration::hours(3));
        let score = TaskPrioritizer::with_config(config).score_task(&t, &UserState::default());
        assert_eq!(score, 1.0);
    }

    #[test]
    fn nan_weight_cannot_escape_bounds() {
        let mut config = PrioritizerConfig::at(now());
        config.weights.mood = f64::NAN;
        assert!(TaskPrioritizer::try_with_config(config.clone()).is_err());

        let p = TaskPrioritizer::with_config(config);
        let urgent = task("urgent", Priority::High, EnergyLevel::Medium, Duration::hours(1));
        let score = p.score_task(&urgent, &UserState::default());
        assert!((0.0..=1.0).contains(&score), "score {score} out of range");

        let open = task("open", Priority::Low, EnergyLevel::Low, Duration::days(30));
        let done = task("done", Priority::High, EnergyLevel::Low, Duration::days(1)).completed();
        let ordered = p.prioritize(&[done, open], &UserState::default());
        assert_eq!(ordered[0].id, "open");
    }

    #[test]
    fn infinite_weight_is_rejected_and_clamped() {
        let mut config = PrioritizerConfig::at(now());
        config.weights.deadline = f64::INFINITY;
        let err = TaskPrioritizer::try_with_config(config.clone()).unwrap_err();
        assert_eq!(err.field(), "weights.deadline");

        let t = task("1", Priority::Low, EnergyLevel::Low, Duration::days(2));
        let score = TaskPrioritizer::with_config(config).score_task(&t, &UserState::default());
        assert_eq!(score, 1.0);
    }

    #[test]
    fn bad_table_entry_is_rejected() {
        let mut config = PrioritizerConfig::at(now());
        config.tables.priority.high = -0.5;
        let err = TaskPrioritizer::try_with_config(config).unwrap_err();
        assert_eq!(err.field(), "tables.priority.high");
        assert!(TaskPrioritizer::try_with_config(PrioritizerConfig::at(now())).is_ok());
    }

    #[test]
    fn rank_reports_scores_in_order() {
        let tasks = vec![
            task("later", Priority::Medium, EnergyLevel::Medium, Duration::days(20)),
            task("soon", Priority::Medium, EnergyLevel::Medium, Duration::hours(5)),
        ];
        let ranked = prioritizer().rank(&tasks, &UserState::default());
        assert_eq!(ranked[0].task.id, "soon");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(prioritizer().prioritize(&[], &UserState::default()).is_empty());
        assert!(prioritize(&[], None, None).is_empty());
    }
}

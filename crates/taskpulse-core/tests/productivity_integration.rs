//! Integration tests for productivity window analysis.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use proptest::prelude::*;
use taskpulse_core::{
    CompletedTask, CoreError, DayOfWeek, ProductivityAnalyzer, TimeOfDay, ValidationError,
    NO_DATA_LABEL,
};

fn base() -> DateTime<Utc> {
    // Monday 00:00 UTC
    Utc.with_ymd_and_hms(2026, 2, 16, 0, 0, 0).unwrap()
}

fn completion_strategy() -> impl Strategy<Value = CompletedTask> {
    (
        0i64..(14 * 24 * 60),
        1.0f64..=3.0,
        0.05f64..10.0,
        prop_oneof![
            Just("happy"),
            Just("sad"),
            Just("neutral"),
            Just("angry"),
            Just("Energetic"),
            Just("bored"),
        ],
        -1.0f64..=1.0,
    )
        .prop_map(|(minutes, energy, difficulty, mood, sentiment)| {
            CompletedTask::new(
                base() + Duration::minutes(minutes),
                energy,
                difficulty,
                mood,
                sentiment,
            )
        })
}

proptest! {
    #[test]
    fn bucket_counts_sum_to_input_len(
        completions in prop::collection::vec(completion_strategy(), 0..60),
        offset_hours in -12i32..=14,
    ) {
        let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        let result = ProductivityAnalyzer::new()
            .with_offset(offset)
            .analyze(&completions)
            .unwrap();

        prop_assert_eq!(result.time_of_day.len(), 7);
        prop_assert_eq!(result.day_of_week.len(), 7);
        let by_time: usize = result.time_of_day.values().map(|s| s.count).sum();
        let by_day: usize = result.day_of_week.values().map(|s| s.count).sum();
        prop_assert_eq!(by_time, completions.len());
        prop_assert_eq!(by_day, completions.len());
    }

    #[test]
    fn derived_scores_are_never_negative(c in completion_strategy()) {
        prop_assert!(ProductivityAnalyzer::new().derived_score(&c) >= 0.0);
    }

    #[test]
    fn best_bucket_has_the_highest_average(
        completions in prop::collection::vec(completion_strategy(), 1..60),
    ) {
        let result = ProductivityAnalyzer::new().analyze(&completions).unwrap();

        let best = result.best_time_of_day.unwrap();
        let top = result.time_of_day[&best].average_score;
        prop_assert!(result.time_of_day[&best].count > 0);
        for (bucket, summary) in &result.time_of_day {
            if summary.count > 0 {
                prop_assert!(summary.average_score <= top);
                if summary.average_score == top {
                    prop_assert!(*bucket >= best, "tie should resolve to the earlier bucket");
                }
            }
        }

        let best_day = result.best_day_of_week.unwrap();
        let top_day = result.day_of_week[&best_day].average_score;
        for summary in result.day_of_week.values() {
            if summary.count > 0 {
                prop_assert!(summary.average_score <= top_day);
            }
        }
    }
}

#[test]
fn tuesday_morning_completion() {
    let at = Utc.with_ymd_and_hms(2026, 2, 17, 9, 0, 0).unwrap();
    let task = CompletedTask::new(at, 3.0, 2.0, "happy", 0.8);

    let result = ProductivityAnalyzer::new().analyze(&[task]).unwrap();

    assert_eq!(result.best_time_label(), "Morning");
    assert_eq!(result.best_day_label(), "Tuesday");
    let morning = result.time_of_day[&TimeOfDay::Morning];
    assert_eq!(morning.count, 1);
    assert!((morning.average_score - 3.4).abs() < 1e-9);
    assert!((result.day_of_week[&DayOfWeek::Tuesday].average_score - 3.4).abs() < 1e-9);
}

#[test]
fn empty_history_is_not_an_error() {
    let result = taskpulse_core::analyze(&[]).unwrap();
    assert_eq!(result.best_time_label(), NO_DATA_LABEL);
    assert_eq!(result.best_day_label(), NO_DATA_LABEL);
    assert!(result.time_of_day.values().all(|s| s.average_score == 0.0));
    assert!(result.day_of_week.values().all(|s| s.average_score == 0.0));
}

#[test]
fn invalid_record_fails_before_scoring() {
    let at = Utc.with_ymd_and_hms(2026, 2, 17, 9, 0, 0).unwrap();
    let tasks = vec![
        CompletedTask::new(at, 2.0, 1.0, "happy", 0.0),
        CompletedTask::new(at, 2.0, 1.0, "happy", 0.0),
        CompletedTask::new(at, 2.0, 1.0, "happy", -3.0),
    ];

    let err = ProductivityAnalyzer::new().analyze(&tasks).unwrap_err();
    match err {
        CoreError::Validation(v) => {
            assert!(matches!(v, ValidationError::InvalidRecord { index: 2, .. }));
            assert_eq!(v.field(), "journal_sentiment");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn completions_deserialize_from_json() {
    let json = r#"[
        {"completed_at": "2026-02-17T09:00:00Z", "energy_requirement": 3, "difficulty": 2,
         "mood": "happy", "journal_sentiment": 0.8},
        {"completed_at": "2026-02-21T22:15:00+00:00", "energy_requirement": 1.5, "difficulty": 4}
    ]"#;
    let tasks: Vec<CompletedTask> = serde_json::from_str(json).unwrap();
    assert_eq!(tasks[1].mood, "");
    assert_eq!(tasks[1].journal_sentiment, 0.0);

    let result = ProductivityAnalyzer::new().analyze(&tasks).unwrap();
    assert_eq!(result.time_of_day[&TimeOfDay::Night].count, 1);
    assert_eq!(result.day_of_week[&DayOfWeek::Saturday].count, 1);
}

// ABOUTME: Unit tests for set and session models
// ABOUTME: Validates set parsing, narrowing of logged sets, and workout lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use jinn_core::errors::ErrorCode;
use jinn_core::{ExerciseSession, LoggedSet, WorkingSet, WorkoutRecord};

fn bench_press() -> ExerciseSession {
    ExerciseSession::new(
        "Bench Press (Barbell)",
        vec![
            LoggedSet::new(Some(10), Some(60.0)),
            LoggedSet::new(Some(8), None),
            LoggedSet::new(None, Some(60.0)),
            LoggedSet::new(Some(6), Some(65.0)),
        ],
    )
}

#[test]
fn test_working_sets_skip_incomplete_sets() {
    let session = bench_press();
    let working = session.working_sets();
    assert_eq!(
        working,
        vec![WorkingSet::new(10, 60.0), WorkingSet::new(6, 65.0)]
    );
    // the session itself keeps every logged set
    assert_eq!(session.sets.len(), 4);
}

#[test]
fn test_session_volume_treats_missing_as_zero() {
    let session = bench_press();
    assert!((session.volume() - 990.0).abs() < f64::EPSILON);
}

#[test]
fn test_parse_working_set() {
    let set: WorkingSet = "10x42.5".parse().unwrap();
    assert_eq!(set, WorkingSet::new(10, 42.5));

    let set: WorkingSet = " 8 X 100 ".parse().unwrap();
    assert_eq!(set, WorkingSet::new(8, 100.0));
}

#[test]
fn test_parse_working_set_rejects_garbage() {
    let err = "ten by forty".parse::<WorkingSet>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert_eq!(err.code.exit_code(), 2);

    let err = "tenx40".parse::<WorkingSet>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert!(err.message.contains("reps"));

    let err = "10x-5".parse::<WorkingSet>().unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_working_set_display_round_trips_cli_notation() {
    let set = WorkingSet::new(12, 102.5);
    assert_eq!(set.to_string(), "12x102.5");
}

#[test]
fn test_workout_event_time_falls_back_to_created_at() {
    let created = Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap();
    let performed = Utc.with_ymd_and_hms(2025, 3, 1, 17, 0, 0).unwrap();

    let mut workout = WorkoutRecord {
        id: "w1".to_owned(),
        title: "Push Day".to_owned(),
        performed_at: None,
        created_at: created,
        exercises: vec![bench_press()],
    };
    assert_eq!(workout.event_time(), created);

    workout.performed_at = Some(performed);
    assert_eq!(workout.event_time(), performed);

    assert!(workout.exercise("Bench Press (Barbell)").is_some());
    assert!(workout.exercise("bench press (barbell)").is_none());
}

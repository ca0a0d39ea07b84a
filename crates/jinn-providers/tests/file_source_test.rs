// ABOUTME: Tests for the JSON-file data source and the provided lookup methods
// ABOUTME: Covers newest-first ordering, first/last lookups, titles, and I/O errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;

use jinn_providers::core::{newest_session, oldest_session, oldest_with_title};
use jinn_providers::{FileDataSource, ProviderError, WorkoutDataSource};
use tempfile::NamedTempFile;

// Deliberately out of order: the source sorts newest first on load
const EXPORT: &str = r#"{
  "workouts": [
    {
      "id": "w-1", "title": "Push Day", "start_time": "2024-08-01T17:00:00Z",
      "exercises": [
        {"title": "Bench Press (Barbell)", "sets": [{"reps": 8, "weight_kg": 35.0}, {"reps": 8, "weight_kg": 35.0}]}
      ]
    },
    {
      "id": "w-3", "title": "Push Day", "start_time": "2024-08-15T17:00:00Z",
      "exercises": [
        {"title": "Bench Press (Barbell)", "sets": [{"reps": 10, "weight_kg": 40.0}, {"reps": 10, "weight_kg": 40.0}, {"reps": 8, "weight_kg": 40.0}]},
        {"title": "Triceps Pushdown", "sets": [{"reps": 12, "weight_kg": 20.0}]}
      ]
    },
    {
      "id": "w-2", "title": "Leg Day", "start_time": "2024-08-08T17:00:00Z",
      "exercises": [
        {"title": "Leg Press Horizontal (Machine)", "sets": [{"reps": 10, "weight_kg": 100.0}]}
      ]
    }
  ]
}"#;

async fn source() -> FileDataSource {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(EXPORT.as_bytes()).unwrap();
    FileDataSource::open(file.path()).await.unwrap()
}

#[tokio::test]
async fn test_workouts_are_sorted_newest_first() {
    let source = source().await;
    let ids: Vec<&str> = source.workouts().iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["w-3", "w-2", "w-1"]);
    assert_eq!(source.name(), "file");
}

#[tokio::test]
async fn test_last_and_first_workout_by_title() {
    let source = source().await;

    let last = source.last_workout(None).await.unwrap().unwrap();
    assert_eq!(last.id, "w-3");
    let last_legs = source.last_workout(Some("Leg Day")).await.unwrap().unwrap();
    assert_eq!(last_legs.id, "w-2");

    let history = source.workout_history().await.unwrap();
    let first_push = oldest_with_title(&history, Some("Push Day")).unwrap();
    assert_eq!(first_push.id, "w-1");
    assert!(source.last_workout(Some("push day")).await.unwrap().is_none());
}

#[tokio::test]
async fn test_exercise_sessions() {
    let source = source().await;

    let history = source.workout_history().await.unwrap();

    let last = newest_session(&history, "Bench Press (Barbell)").unwrap();
    assert!((last.volume() - 1120.0).abs() < f64::EPSILON);

    let first = oldest_session(&history, "Bench Press (Barbell)").unwrap();
    assert!((first.volume() - 560.0).abs() < f64::EPSILON);

    assert!(newest_session(&history, "Deadlift").is_none());
    assert!(oldest_session(&history, "Deadlift").is_none());
}

#[tokio::test]
async fn test_distinct_sorted_titles() {
    let source = source().await;
    assert_eq!(
        source.workout_titles().await.unwrap(),
        vec!["Leg Day".to_owned(), "Push Day".to_owned()]
    );
    assert_eq!(
        source.exercise_titles().await.unwrap(),
        vec![
            "Bench Press (Barbell)".to_owned(),
            "Leg Press Horizontal (Machine)".to_owned(),
            "Triceps Pushdown".to_owned(),
        ]
    );
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FileDataSource::open(&dir.path().join("missing.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Io { provider: "file", .. }));
}

#[test]
fn test_invalid_json_is_parse_error() {
    let err = FileDataSource::from_json("{\"workouts\": 3}").unwrap_err();
    assert!(matches!(err, ProviderError::Parse { provider: "file", .. }));
}

#[tokio::test]
async fn test_recent_page_is_bounded() {
    let workouts: Vec<String> = (1..=15)
        .map(|day| {
            format!(r#"{{"id": "w-{day}", "title": "Day {day}", "start_time": "2024-09-{day:02}T08:00:00Z"}}"#)
        })
        .collect();
    let body = format!(r#"{{"workouts": [{}]}}"#, workouts.join(","));
    let source = FileDataSource::from_json(&body).unwrap();

    let recent = source.recent_workouts().await.unwrap();
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].id, "w-15");
    let history = source.workout_history().await.unwrap();
    assert_eq!(history.len(), 15);
    let first = oldest_with_title(&history, None).unwrap();
    assert_eq!(first.id, "w-1");
}

// ABOUTME: Shared fixtures for root integration tests
// ABOUTME: Provides a sample workout export, a file-backed planning service, and quiet logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]
//! Shared test utilities for `volume_jinn`

use std::env;
use std::sync::{Arc, Once};

use tracing::Level;
use volume_jinn::intelligence::ProgressionOptimizer;
use volume_jinn::planning::PlanningService;
use volume_jinn::providers::{FileDataSource, WorkoutDataSource};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Three weeks of a push/pull split
///
/// Bench press: 560 vol in the first session, 1120 in the last.
/// Pull Up is bodyweight only and Face Pull has no logged weight.
pub const EXPORT: &str = r#"{
  "page": 1,
  "page_count": 1,
  "workouts": [
    {
      "id": "w-1", "title": "Push Day", "start_time": "2024-08-01T17:00:00Z",
      "exercises": [
        {"title": "Bench Press (Barbell)", "sets": [{"reps": 8, "weight_kg": 35.0}, {"reps": 8, "weight_kg": 35.0}]}
      ]
    },
    {
      "id": "w-2", "title": "Pull Day", "start_time": "2024-08-08T17:00:00Z",
      "exercises": [
        {"title": "Pull Up", "sets": [{"reps": 10, "weight_kg": 0.0}]},
        {"title": "Face Pull", "sets": [{"reps": 15, "weight_kg": null}]}
      ]
    },
    {
      "id": "w-3", "title": "Push Day", "start_time": "2024-08-15T17:00:00Z",
      "exercises": [
        {"title": "Bench Press (Barbell)", "sets": [{"reps": 10, "weight_kg": 40.0}, {"reps": 10, "weight_kg": 40.0}, {"reps": 8, "weight_kg": 40.0}]},
        {"title": "Triceps Pushdown", "sets": [{"reps": 12, "weight_kg": 20.0}]}
      ]
    }
  ]
}"#;

/// File-backed data source over [`EXPORT`]
pub fn export_source() -> Arc<dyn WorkoutDataSource> {
    Arc::new(FileDataSource::from_json(EXPORT).unwrap())
}

/// Planning service over [`EXPORT`] with default optimizer bounds
pub fn planning_service() -> PlanningService {
    init_test_logging();
    PlanningService::new(export_source(), ProgressionOptimizer::default())
}

/// Float comparison for volumes and weights
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

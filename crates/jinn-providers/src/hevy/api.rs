// ABOUTME: Hevy workouts endpoint JSON shapes and conversion to domain records
// ABOUTME: Unknown fields are ignored; missing optional fields default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ExerciseSession, LoggedSet, WorkoutRecord};

/// One page of `GET /v1/workouts`
///
/// Local exports use the same document shape, usually without the paging
/// fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutsPage {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<u32>,
    /// Total number of pages available
    #[serde(default)]
    pub page_count: Option<u32>,
    /// Workouts on this page, newest first
    #[serde(default)]
    pub workouts: Vec<HevyWorkout>,
}

impl WorkoutsPage {
    /// Whether another page exists after this one
    #[must_use]
    pub fn has_next(&self) -> bool {
        match (self.page, self.page_count) {
            (Some(page), Some(count)) => page < count,
            _ => false,
        }
    }

    /// Convert every workout on the page, keeping order
    #[must_use]
    pub fn into_records(self) -> Vec<WorkoutRecord> {
        self.workouts.into_iter().map(WorkoutRecord::from).collect()
    }
}

/// A workout as returned by Hevy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HevyWorkout {
    /// Workout identifier
    #[serde(default)]
    pub id: String,
    /// Routine title
    pub title: String,
    /// When the workout started
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    /// When the workout ended
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// When the record was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Exercises in performed order
    #[serde(default)]
    pub exercises: Vec<HevyExercise>,
}

/// An exercise within a Hevy workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HevyExercise {
    /// Exercise name, e.g. "Bench Press (Barbell)"
    pub title: String,
    /// Template identifier
    #[serde(default)]
    pub exercise_template_id: Option<String>,
    /// Sets in performed order
    #[serde(default)]
    pub sets: Vec<HevySet>,
}

/// A set within a Hevy exercise
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HevySet {
    /// Repetitions; null for timed or distance sets
    #[serde(default)]
    pub reps: Option<u32>,
    /// Load in kilograms; null for bodyweight sets
    #[serde(default)]
    pub weight_kg: Option<f64>,
}

impl From<HevySet> for LoggedSet {
    fn from(set: HevySet) -> Self {
        Self::new(set.reps, set.weight_kg)
    }
}

impl From<HevyExercise> for ExerciseSession {
    fn from(exercise: HevyExercise) -> Self {
        Self::new(
            exercise.title,
            exercise.sets.into_iter().map(LoggedSet::from).collect(),
        )
    }
}

impl From<HevyWorkout> for WorkoutRecord {
    fn from(workout: HevyWorkout) -> Self {
        let created_at = workout
            .created_at
            .or(workout.start_time)
            .unwrap_or_default();
        Self {
            id: workout.id,
            title: workout.title,
            performed_at: workout.start_time,
            created_at,
            exercises: workout
                .exercises
                .into_iter()
                .map(ExerciseSession::from)
                .collect(),
        }
    }
}

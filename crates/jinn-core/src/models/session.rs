// ABOUTME: Exercise session and workout record models
// ABOUTME: Volume is always derived from sets, never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::set::{LoggedSet, WorkingSet};
use crate::volume::volume;

/// One exercise as performed in a single workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSession {
    /// Exercise name as shown by the tracker (exact-match key)
    pub exercise: String,
    /// Sets in the order they were performed
    pub sets: Vec<LoggedSet>,
}

impl ExerciseSession {
    /// Create a session
    pub fn new(exercise: impl Into<String>, sets: Vec<LoggedSet>) -> Self {
        Self {
            exercise: exercise.into(),
            sets,
        }
    }

    /// Total volume of the session; missing fields contribute zero
    #[must_use]
    pub fn volume(&self) -> f64 {
        volume(&self.sets)
    }

    /// Sets with both reps and weight present, in original order
    #[must_use]
    pub fn working_sets(&self) -> Vec<WorkingSet> {
        self.sets.iter().filter_map(LoggedSet::to_working).collect()
    }
}

/// A workout as fetched from a data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Source identifier
    pub id: String,
    /// Workout title (routine name)
    pub title: String,
    /// When the workout was performed, if the source records it
    pub performed_at: Option<DateTime<Utc>>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// Exercises in performed order
    pub exercises: Vec<ExerciseSession>,
}

impl WorkoutRecord {
    /// Performed time, falling back to creation time
    #[must_use]
    pub fn event_time(&self) -> DateTime<Utc> {
        self.performed_at.unwrap_or(self.created_at)
    }

    /// The session of the named exercise in this workout, if present
    #[must_use]
    pub fn exercise(&self, name: &str) -> Option<&ExerciseSession> {
        self.exercises.iter().find(|e| e.exercise == name)
    }
}

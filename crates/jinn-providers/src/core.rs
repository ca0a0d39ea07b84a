// ABOUTME: Core workout data source trait shared by every history provider
// ABOUTME: Paging is source-specific; title and exercise lookups are provided methods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::errors::provider::ProviderResult;
use crate::models::{ExerciseSession, WorkoutRecord};

/// A read-only source of logged workouts
///
/// # Ordering
///
/// Both required methods return workouts newest first. "Recent" is whatever
/// the source treats as its first page; "history" walks further back, up to
/// a source-specific limit.
///
/// # Matching
///
/// Workout titles and exercise names match exactly, including case.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one source can serve concurrent
/// planning passes.
#[async_trait]
pub trait WorkoutDataSource: Send + Sync {
    /// Source name used in logs and errors (e.g. "hevy", "file")
    fn name(&self) -> &'static str;

    /// The most recent page of workouts, newest first
    async fn recent_workouts(&self) -> ProviderResult<Vec<WorkoutRecord>>;

    /// All reachable workouts, newest first
    async fn workout_history(&self) -> ProviderResult<Vec<WorkoutRecord>>;

    /// Distinct workout titles from recent workouts, sorted
    async fn workout_titles(&self) -> ProviderResult<Vec<String>> {
        let workouts = self.recent_workouts().await?;
        let titles: BTreeSet<String> = workouts.into_iter().map(|w| w.title).collect();
        Ok(titles.into_iter().collect())
    }

    /// Distinct exercise names from recent workouts, sorted
    async fn exercise_titles(&self) -> ProviderResult<Vec<String>> {
        let workouts = self.recent_workouts().await?;
        let names: BTreeSet<String> = workouts
            .into_iter()
            .flat_map(|w| w.exercises)
            .map(|e| e.exercise)
            .collect();
        Ok(names.into_iter().collect())
    }

    /// Most recent workout, optionally restricted to one title
    async fn last_workout(&self, title: Option<&str>) -> ProviderResult<Option<WorkoutRecord>> {
        let workouts = self.recent_workouts().await?;
        Ok(newest_with_title(workouts, title))
    }
}

fn title_matches(workout: &WorkoutRecord, title: Option<&str>) -> bool {
    title.is_none_or(|t| workout.title == t)
}

/// First workout in a newest-first list with the given title
#[must_use]
pub fn newest_with_title(workouts: Vec<WorkoutRecord>, title: Option<&str>) -> Option<WorkoutRecord> {
    workouts.into_iter().find(|w| title_matches(w, title))
}

/// Last workout in a newest-first list with the given title
#[must_use]
pub fn oldest_with_title<'a>(
    workouts: &'a [WorkoutRecord],
    title: Option<&str>,
) -> Option<&'a WorkoutRecord> {
    workouts.iter().rev().find(|w| title_matches(w, title))
}

/// Session of `exercise` in the newest workout that contains it
#[must_use]
pub fn newest_session(workouts: &[WorkoutRecord], exercise: &str) -> Option<ExerciseSession> {
    workouts.iter().find_map(|w| w.exercise(exercise)).cloned()
}

/// Session of `exercise` in the oldest workout that contains it
#[must_use]
pub fn oldest_session(workouts: &[WorkoutRecord], exercise: &str) -> Option<ExerciseSession> {
    workouts.iter().rev().find_map(|w| w.exercise(exercise)).cloned()
}

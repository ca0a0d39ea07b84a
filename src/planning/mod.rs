// ABOUTME: Planning service turning fetched workout history into next-session plans
// ABOUTME: Resolves sessions, computes per-exercise targets, and runs the optimizer in parallel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planning
//!
//! A planning pass has three steps:
//!
//! 1. Resolve the sessions to plan from a [`WorkoutDataSource`], either every
//!    exercise of the last (optionally titled) workout or the last session of
//!    each named exercise. Recent workouts are fetched once per pass.
//! 2. Compute each exercise's [`ProgressionTarget`] from the chosen
//!    [`BaselineSource`]. First-session baselines fetch history once and read
//!    it through a [`FirstVolumeCache`] scoped to the pass; the same history
//!    dates the baseline workout.
//! 3. Optimize every exercise independently on the rayon pool.

/// Baseline selection and target arithmetic
pub mod baseline;
/// Per-pass cache of first-session volumes
pub mod first_volume_cache;
/// Live progress of edited rows against a target
pub mod progress;

pub use baseline::{BaselineSource, ProgressionTarget};
pub use first_volume_cache::FirstVolumeCache;
pub use progress::{ProgressStatus, VolumeProgress};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::errors::{AppError, AppResult};
use crate::intelligence::{OptimizationRequest, OptimizationResult, ProgressionOptimizer};
use crate::models::{ExerciseSession, WorkingSet, WorkoutRecord};
use crate::providers::core::{newest_session, oldest_with_title};
use crate::providers::WorkoutDataSource;

/// What to plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every exercise of the last workout, optionally with this title
    Workout(Option<String>),
    /// The last session of each named exercise
    Exercises(Vec<String>),
}

/// Input to one planning pass
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Sessions to plan
    pub selection: Selection,
    /// Volume increase in percent (5.0 = +5 %)
    pub volume_bump_percent: f64,
    /// Baseline for the increment
    pub baseline: BaselineSource,
}

/// Plan for one exercise
#[derive(Debug, Clone, Serialize)]
pub struct ExercisePlan {
    /// Exercise name
    pub exercise: String,
    /// The session the plan starts from
    pub session: ExerciseSession,
    /// Volume of the first reachable session, when the baseline needed it
    pub first_volume: Option<f64>,
    /// Target arithmetic for this exercise
    pub target: ProgressionTarget,
    /// Optimizer output, including the phase trace
    pub result: OptimizationResult,
    /// Sets to show: the optimizer's plan, or the logged sets if it produced none
    pub plan_sets: Vec<WorkingSet>,
}

impl ExercisePlan {
    fn new(
        session: ExerciseSession,
        first_volume: Option<f64>,
        target: ProgressionTarget,
        result: OptimizationResult,
    ) -> Self {
        let plan_sets = if result.final_sets.is_empty() {
            session.working_sets()
        } else {
            result.final_sets.clone()
        };
        Self {
            exercise: session.exercise.clone(),
            session,
            first_volume,
            target,
            result,
            plan_sets,
        }
    }

    /// Progress of the proposed sets against this exercise's target
    #[must_use]
    pub fn progress(&self) -> VolumeProgress {
        VolumeProgress::measure(&self.plan_sets, self.target.target_volume)
    }
}

/// Output of one planning pass
#[derive(Debug, Clone, Serialize)]
pub struct SessionPlan {
    /// Title of the workout the plan is based on, for workout selections
    pub workout_title: Option<String>,
    /// When that workout was performed, for workout selections
    pub performed_at: Option<DateTime<Utc>>,
    /// When the baseline workout was performed, for workout selections
    ///
    /// Same as `performed_at` for a last-session baseline; the oldest
    /// reachable workout with the same title for a first-session baseline.
    pub baseline_date: Option<DateTime<Utc>>,
    /// Baseline used for targets
    pub baseline: BaselineSource,
    /// Requested volume increase in percent
    pub volume_bump_percent: f64,
    /// One plan per resolved exercise, in workout or request order
    pub exercises: Vec<ExercisePlan>,
    /// Requested exercises with no recent session
    pub missing: Vec<String>,
}

/// Sessions picked by a selection, before any targets are computed
struct ResolvedSessions {
    workout_title: Option<String>,
    performed_at: Option<DateTime<Utc>>,
    sessions: Vec<ExerciseSession>,
    missing: Vec<String>,
}

/// Plans next sessions from a workout data source
pub struct PlanningService {
    source: Arc<dyn WorkoutDataSource>,
    optimizer: ProgressionOptimizer,
}

impl PlanningService {
    /// Create a service over a data source
    #[must_use]
    pub fn new(source: Arc<dyn WorkoutDataSource>, optimizer: ProgressionOptimizer) -> Self {
        Self { source, optimizer }
    }

    /// The optimizer used for every exercise
    #[must_use]
    pub const fn optimizer(&self) -> &ProgressionOptimizer {
        &self.optimizer
    }

    /// Run one planning pass
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the selected workout does not exist or
    /// none of the named exercises has a recent session, and propagates data
    /// source failures.
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn plan(&self, request: PlanRequest) -> AppResult<SessionPlan> {
        let resolved = self.resolve_sessions(&request.selection).await?;
        let sessions = resolved.sessions;

        let (first_volumes, baseline_date) = match request.baseline {
            BaselineSource::FirstSession => {
                let history = self.source.workout_history().await?;
                let baseline_date = resolved.performed_at.map(|performed_at| {
                    let title = resolved.workout_title.as_deref();
                    oldest_with_title(&history, title)
                        .map_or(performed_at, WorkoutRecord::event_time)
                });
                let mut cache = FirstVolumeCache::new(history);
                let volumes: Vec<Option<f64>> = sessions
                    .iter()
                    .map(|s| cache.first_volume(&s.exercise))
                    .collect();
                debug!(cached = cache.len(), "first-session volumes resolved");
                (volumes, baseline_date)
            }
            BaselineSource::LastSession => (vec![None; sessions.len()], resolved.performed_at),
        };

        let pct = request.volume_bump_percent / 100.0;
        let exercises: Vec<ExercisePlan> = sessions
            .into_par_iter()
            .zip(first_volumes)
            .map(|(session, first_volume)| {
                let target =
                    ProgressionTarget::compute(request.baseline, session.volume(), first_volume, pct);
                let result = self.optimizer.optimize(&OptimizationRequest::from_session(
                    &session,
                    target.effective_pct,
                ));
                ExercisePlan::new(session, first_volume, target, result)
            })
            .collect();

        info!(
            exercises = exercises.len(),
            missing = resolved.missing.len(),
            baseline = %request.baseline,
            "planning pass complete"
        );
        Ok(SessionPlan {
            workout_title: resolved.workout_title,
            performed_at: resolved.performed_at,
            baseline_date,
            baseline: request.baseline,
            volume_bump_percent: request.volume_bump_percent,
            exercises,
            missing: resolved.missing,
        })
    }

    async fn resolve_sessions(&self, selection: &Selection) -> AppResult<ResolvedSessions> {
        match selection {
            Selection::Workout(title) => {
                let workout = self
                    .source
                    .last_workout(title.as_deref())
                    .await?
                    .ok_or_else(|| {
                        AppError::not_found(title.as_ref().map_or_else(
                            || "workout".to_owned(),
                            |t| format!("workout '{t}'"),
                        ))
                    })?;
                Ok(ResolvedSessions {
                    performed_at: Some(workout.event_time()),
                    workout_title: Some(workout.title),
                    sessions: workout.exercises,
                    missing: Vec::new(),
                })
            }
            Selection::Exercises(names) => {
                let recent = self.source.recent_workouts().await?;
                let mut sessions = Vec::with_capacity(names.len());
                let mut missing = Vec::new();
                for name in names {
                    match newest_session(&recent, name) {
                        Some(session) => sessions.push(session),
                        None => {
                            warn!(exercise = %name, "no recent session found");
                            missing.push(name.clone());
                        }
                    }
                }
                if sessions.is_empty() {
                    return Err(AppError::not_found(format!(
                        "recent sessions for {}",
                        names.join(", ")
                    )));
                }
                Ok(ResolvedSessions {
                    workout_title: None,
                    performed_at: None,
                    sessions,
                    missing,
                })
            }
        }
    }
}

// ABOUTME: Request and result types for the progression optimizer
// ABOUTME: Results carry the target, the phase trace, the plan, and a feasibility status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::phase::{Phase, PhaseTrace};
use crate::models::{ExerciseSession, LoggedSet, WorkingSet};
use crate::volume::volume;

/// Input to one optimizer run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    /// Exercise name; selects the increment policy
    pub exercise: String,
    /// Prior session's sets; incomplete sets are ignored
    pub base_sets: Vec<LoggedSet>,
    /// Target fractional volume increase (0.05 = +5 %)
    pub volume_perc: f64,
}

impl OptimizationRequest {
    /// Build a request
    pub fn new(exercise: impl Into<String>, base_sets: Vec<LoggedSet>, volume_perc: f64) -> Self {
        Self {
            exercise: exercise.into(),
            base_sets,
            volume_perc,
        }
    }

    /// Build a request from a fetched session
    #[must_use]
    pub fn from_session(session: &ExerciseSession, volume_perc: f64) -> Self {
        Self::new(session.exercise.clone(), session.sets.clone(), volume_perc)
    }
}

/// Why a plan falls short of its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortfallReason {
    /// A new set contributes no volume (zero average weight or zero rep cap)
    ZeroUnitVolume,
    /// Filler sets use a rounded weight and land just under the target
    Rounding,
    /// Closing the deficit would take more new sets than one session allows
    SetLimit,
}

/// Outcome of an optimizer run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlanStatus {
    /// No set had both reps and weight; nothing to plan
    NoData,
    /// The requested increase is not a finite number; nothing was planned
    InvalidTarget,
    /// The plan reaches the target volume
    TargetMet,
    /// The plan ends below target under the configured bounds
    Shortfall {
        /// Volume still missing
        remaining: f64,
        /// Cause of the shortfall
        reason: ShortfallReason,
    },
}

/// Output of one optimizer run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Exercise the plan is for
    pub exercise: String,
    /// Volume of the usable base sets
    pub base_volume: f64,
    /// Mean weight of the usable base sets
    pub average_weight: f64,
    /// Target volume increase in absolute units
    pub delta: f64,
    /// `base_volume × (1 + volume_perc)`
    pub target_volume: f64,
    /// Phases executed, in order
    pub phases: PhaseTrace,
    /// The proposed sets
    pub final_sets: Vec<WorkingSet>,
    /// Whether the plan reaches the target
    pub status: PlanStatus,
}

impl OptimizationResult {
    /// Result for input without a single complete set
    pub fn no_data(exercise: impl Into<String>) -> Self {
        Self {
            exercise: exercise.into(),
            base_volume: 0.0,
            average_weight: 0.0,
            delta: 0.0,
            target_volume: 0.0,
            phases: PhaseTrace::new(),
            final_sets: Vec::new(),
            status: PlanStatus::NoData,
        }
    }

    /// Result for a request whose increase cannot be planned for
    pub fn invalid_target(exercise: impl Into<String>, base_volume: f64, average_weight: f64) -> Self {
        Self {
            exercise: exercise.into(),
            base_volume,
            average_weight,
            delta: 0.0,
            target_volume: base_volume,
            phases: PhaseTrace::new(),
            final_sets: Vec::new(),
            status: PlanStatus::InvalidTarget,
        }
    }

    /// Volume of the proposed sets
    #[must_use]
    pub fn final_volume(&self) -> f64 {
        volume(&self.final_sets)
    }

    /// Deficit reported by the last phase; zero when nothing ran
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.phases.last().map_or(0.0, Phase::remaining)
    }

    /// Whether the bounds prevented reaching the target
    #[must_use]
    pub const fn is_shortfall(&self) -> bool {
        matches!(self.status, PlanStatus::Shortfall { .. })
    }
}

// ABOUTME: Live volume progress of edited set rows against a target
// ABOUTME: Reports current volume, difference, fraction of goal, and below/exact/surpassed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::progression::DEFICIT_EPSILON;
use crate::volume::{volume, SetVolume};

/// Where the current volume stands relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProgressStatus {
    /// More volume is needed
    Below {
        /// Volume still to add
        remaining: f64,
    },
    /// Target hit within tolerance
    Exact,
    /// Target exceeded
    Surpassed {
        /// Volume above the target
        by: f64,
    },
}

/// Volume of a set list measured against a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeProgress {
    /// Volume of the rows as they are now
    pub current_volume: f64,
    /// Volume the plan aims for
    pub target_volume: f64,
    /// `target − current`
    pub difference: f64,
    /// `current / target`, or 0 when the target is 0
    pub fraction_of_goal: f64,
    /// Summary of the comparison
    pub status: ProgressStatus,
}

impl VolumeProgress {
    /// Measure `sets` against `target_volume`
    #[must_use]
    pub fn measure<S: SetVolume>(sets: &[S], target_volume: f64) -> Self {
        let current_volume = volume(sets);
        let difference = target_volume - current_volume;
        let fraction_of_goal = if target_volume.abs() < f64::EPSILON {
            0.0
        } else {
            current_volume / target_volume
        };
        let status = if difference > DEFICIT_EPSILON {
            ProgressStatus::Below {
                remaining: difference,
            }
        } else if difference < -DEFICIT_EPSILON {
            ProgressStatus::Surpassed { by: -difference }
        } else {
            ProgressStatus::Exact
        };
        Self {
            current_volume,
            target_volume,
            difference,
            fraction_of_goal,
            status,
        }
    }

    /// Fraction of goal clamped to `0..=1` for progress bars
    #[must_use]
    pub fn bar_fraction(&self) -> f64 {
        self.fraction_of_goal.clamp(0.0, 1.0)
    }

    /// One-line summary for the lifter
    #[must_use]
    pub fn describe(&self) -> String {
        match self.status {
            ProgressStatus::Below { remaining } => {
                format!("Add {remaining:.1} vol more to hit your target.")
            }
            ProgressStatus::Exact => "Target hit exactly.".to_owned(),
            ProgressStatus::Surpassed { by } => format!("Surpassed target by {by:.1} vol."),
        }
    }
}

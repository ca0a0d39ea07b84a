// ABOUTME: Baseline selection and target-volume arithmetic for a planning pass
// ABOUTME: First-session baselines add a constant increment; last-session baselines compound
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Which past session sets the size of the volume increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineSource {
    /// Each new session adds `first_volume × pct`, a constant amount
    FirstSession,
    /// Classic compounding: `last_volume × (1 + pct)`
    #[default]
    LastSession,
}

impl FromStr for BaselineSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" | "first_session" | "first-session" => Ok(Self::FirstSession),
            "last" | "last_session" | "last-session" => Ok(Self::LastSession),
            other => Err(AppError::invalid_input(format!(
                "unknown baseline '{other}', expected 'first' or 'last'"
            ))),
        }
    }
}

impl fmt::Display for BaselineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstSession => write!(f, "first"),
            Self::LastSession => write!(f, "last"),
        }
    }
}

/// Target volume for one exercise and the fraction handed to the optimizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionTarget {
    /// Last session's volume; zero is replaced by one
    pub last_volume: f64,
    /// Volume the increment was computed from
    pub baseline_volume: f64,
    /// Absolute volume to add
    pub increment: f64,
    /// `last_volume + increment`
    pub target_volume: f64,
    /// `max(target / last − 1, 0)`
    pub effective_pct: f64,
}

impl ProgressionTarget {
    /// Compute the target for one exercise
    ///
    /// `pct` is a fraction (0.05 for +5 %). A first-session baseline falls
    /// back to the last session when the first volume is unknown or zero.
    #[must_use]
    pub fn compute(
        baseline: BaselineSource,
        last_volume: f64,
        first_volume: Option<f64>,
        pct: f64,
    ) -> Self {
        let last_volume = if last_volume > 0.0 { last_volume } else { 1.0 };
        let (baseline_volume, target_volume) = match baseline {
            BaselineSource::FirstSession => {
                let baseline_volume = first_volume.filter(|v| *v > 0.0).unwrap_or(last_volume);
                (baseline_volume, baseline_volume.mul_add(pct, last_volume))
            }
            BaselineSource::LastSession => (last_volume, last_volume * (1.0 + pct)),
        };
        Self {
            last_volume,
            baseline_volume,
            increment: target_volume - last_volume,
            target_volume,
            effective_pct: (target_volume / last_volume - 1.0).max(0.0),
        }
    }
}

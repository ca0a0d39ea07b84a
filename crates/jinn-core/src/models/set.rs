// ABOUTME: Set types for logged and validated strength-training sets
// ABOUTME: LoggedSet tolerates missing reps/weight, WorkingSet is fully specified
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// A set with known reps and weight, as consumed and produced by the optimizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkingSet {
    /// Repetitions performed
    pub reps: u32,
    /// Load in kilograms
    pub weight_kg: f64,
}

impl WorkingSet {
    /// Create a working set
    #[must_use]
    pub const fn new(reps: u32, weight_kg: f64) -> Self {
        Self { reps, weight_kg }
    }

    /// Volume of this set (reps × weight)
    #[must_use]
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.weight_kg
    }
}

impl fmt::Display for WorkingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.reps, self.weight_kg)
    }
}

/// Parses the `REPSxWEIGHT` notation used on the command line, e.g. `10x42.5`
impl FromStr for WorkingSet {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (reps, weight) = s
            .trim()
            .split_once(['x', 'X', '*'])
            .ok_or_else(|| {
                AppError::invalid_format(format!("set '{s}' must look like REPSxWEIGHT, e.g. 10x42.5"))
            })?;
        let reps = reps
            .trim()
            .parse::<u32>()
            .map_err(|e| AppError::invalid_format(format!("invalid reps in '{s}': {e}")))?;
        let weight_kg = weight
            .trim()
            .parse::<f64>()
            .map_err(|e| AppError::invalid_format(format!("invalid weight in '{s}': {e}")))?;
        if !weight_kg.is_finite() || weight_kg < 0.0 {
            return Err(AppError::out_of_range(format!(
                "weight in '{s}' must be a non-negative number"
            )));
        }
        Ok(Self { reps, weight_kg })
    }
}

/// A set as recorded by a workout tracker; either field may be missing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoggedSet {
    /// Repetitions, absent for timed or distance sets
    pub reps: Option<u32>,
    /// Load in kilograms, absent for bodyweight sets
    pub weight_kg: Option<f64>,
}

impl LoggedSet {
    /// Create a logged set
    #[must_use]
    pub const fn new(reps: Option<u32>, weight_kg: Option<f64>) -> Self {
        Self { reps, weight_kg }
    }

    /// Narrow to a working set; `None` when reps or weight is missing
    #[must_use]
    pub fn to_working(&self) -> Option<WorkingSet> {
        match (self.reps, self.weight_kg) {
            (Some(reps), Some(weight_kg)) => Some(WorkingSet { reps, weight_kg }),
            _ => None,
        }
    }
}

impl From<WorkingSet> for LoggedSet {
    fn from(set: WorkingSet) -> Self {
        Self {
            reps: Some(set.reps),
            weight_kg: Some(set.weight_kg),
        }
    }
}

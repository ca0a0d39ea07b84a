// ABOUTME: Progress command for jinn-cli
// ABOUTME: Recomputes volume of edited rows and compares it with a target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use volume_jinn::errors::{AppError, AppResult};
use volume_jinn::models::WorkingSet;
use volume_jinn::planning::VolumeProgress;

use crate::helpers::display::{print_json, print_progress};

/// Measure `sets` against `target` and print the result
pub fn run(sets: &[WorkingSet], target: f64, json: bool) -> AppResult<()> {
    if !target.is_finite() || target < 0.0 {
        return Err(AppError::out_of_range("target volume must be a non-negative number"));
    }
    let progress = VolumeProgress::measure(sets, target);
    if json {
        print_json(&progress)
    } else {
        print_progress(&progress);
        Ok(())
    }
}

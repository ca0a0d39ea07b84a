// ABOUTME: Core data models for strength-training sets, exercise sessions, and workouts
// ABOUTME: Raw logged sets may carry missing fields; working sets are validated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! A workout is a list of exercise sessions, each an ordered list of sets.
//! Sets arrive from a data source as [`LoggedSet`] (either field may be
//! missing, e.g. bodyweight or timed sets) and are narrowed to
//! [`WorkingSet`] before optimization.

mod session;
mod set;

pub use session::{ExerciseSession, WorkoutRecord};
pub use set::{LoggedSet, WorkingSet};

// ABOUTME: Core types and constants for the Volume Jinn progression planner
// ABOUTME: Foundation crate with error handling, set/session models, and volume calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Jinn Core
//!
//! Foundation crate providing shared types and constants for Volume Jinn.
//! It changes infrequently so the optimizer and provider crates can compile
//! against it in parallel.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProviderError`
//! - **constants**: Progression defaults, environment variable names, service names
//! - **models**: Sets, exercise sessions, and workout records
//! - **volume**: The volume calculator (Σ reps × weight)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (sets, sessions, workouts)
pub mod models;

/// Training volume calculation
pub mod volume;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{ExerciseSession, LoggedSet, WorkingSet, WorkoutRecord};
pub use volume::{volume, SetVolume};

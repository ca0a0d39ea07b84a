// ABOUTME: Hevy workout tracker integration
// ABOUTME: Wire types for the workouts endpoint and the REST data source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON shapes returned by `GET /workouts` and their domain mapping
pub mod api;
/// `WorkoutDataSource` over the Hevy REST API
pub mod provider;

pub use api::{HevyExercise, HevySet, HevyWorkout, WorkoutsPage};
pub use provider::{HevyProvider, HevyProviderConfig};

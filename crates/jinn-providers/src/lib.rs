// ABOUTME: Workout history data sources for Hevy and local JSON exports
// ABOUTME: Core data source trait, shared HTTP client, and provider implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout data sources and the trait they share.
//!
//! Every source hands back [`WorkoutRecord`]s newest first. Lookups such as
//! "last workout titled X" or "first session of exercise Y" are provided
//! methods on [`WorkoutDataSource`], so a new source only implements paging.

// Re-export jinn-core modules so provider code can use `crate::errors::*` etc.
pub use jinn_core::constants;
pub use jinn_core::errors;
pub use jinn_core::models;

/// Core data source trait and lookup helpers
pub mod core;
/// Local JSON export data source
pub mod file_source;
/// Hevy REST API data source
pub mod hevy;
/// Shared HTTP client for provider API calls
pub mod http_client;

pub use crate::core::WorkoutDataSource;
pub use file_source::FileDataSource;
pub use hevy::{HevyProvider, HevyProviderConfig};
pub use http_client::{initialize_shared_client, shared_client};
pub use jinn_core::errors::provider::{ProviderError, ProviderResult};
pub use jinn_core::models::{ExerciseSession, WorkoutRecord};

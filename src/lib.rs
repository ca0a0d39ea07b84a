// ABOUTME: Main library entry point for the Volume Jinn progression planner
// ABOUTME: Wires workout data sources, the progression optimizer, config, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Volume Jinn
//!
//! Plans the next strength-training session from logged history. Given an
//! exercise's last session and a target volume increase, it proposes sets
//! whose total volume (Σ reps × weight) meets the target with the smallest
//! practical overshoot.
//!
//! ## Crates
//!
//! - **jinn-core**: errors, set/session models, volume calculator
//! - **jinn-intelligence**: the three-phase progression optimizer
//! - **jinn-providers**: Hevy and JSON-file workout data sources
//!
//! This crate adds environment configuration, logging, and the
//! [`planning::PlanningService`] that ties a data source to the optimizer.

pub use jinn_core::constants;
pub use jinn_core::errors;
pub use jinn_core::models;
pub use jinn_core::volume;

/// Progression optimizer, re-exported from `jinn-intelligence`
pub use jinn_intelligence as intelligence;
/// Workout data sources, re-exported from `jinn-providers`
pub use jinn_providers as providers;

/// Environment configuration
pub mod config;
/// Structured logging setup
pub mod logging;
/// Planning passes over fetched workout history
pub mod planning;

// ABOUTME: Configuration module for the planner binary and library
// ABOUTME: Environment-only settings for the Hevy client, planning defaults, and optimizer bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for Volume Jinn
//!
//! Every setting comes from the environment; command-line flags override
//! individual values after loading.

/// Environment-driven settings
pub mod environment;

pub use environment::{validate_percent, HevyConfig, JinnConfig, PlanningDefaults};

// ABOUTME: Volume progression optimizer for strength-training plans
// ABOUTME: Flatten, weight+rep bump, and new-set filler phases with a diagnostic trace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Jinn Intelligence
//!
//! Given a prior session's sets and a target volume increase, the
//! [`ProgressionOptimizer`] proposes the next session's sets. The search is
//! pure and synchronous: it reads its request, allocates its result, and can
//! run concurrently for independent exercises without coordination.

// Re-export jinn-core modules so callers can stay on one crate
pub use jinn_core::constants;
pub use jinn_core::errors;
pub use jinn_core::models;

/// Optimizer configuration and validation errors
pub mod config;

/// Exercise name → weight increment policy lookup
pub mod increment_policy;

/// The three-phase progression search
pub mod optimizer;

/// Volume calculator re-exported from jinn-core
pub mod volume;

pub use config::{ConfigError, ProgressionConfig};
pub use increment_policy::{IncrementPolicy, IncrementPolicyTable};
pub use optimizer::{
    BumpCandidate, FlattenPhase, NewSetFillerPhase, OptimizationRequest, OptimizationResult,
    Phase, PhaseTrace, PlanStatus, ProgressionOptimizer, ShortfallReason, WeightRepBumpPhase,
};

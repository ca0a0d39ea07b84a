// ABOUTME: Weight increment policies keyed by exact exercise name
// ABOUTME: Stepped plate increments by default, fixed increments for pin-loaded machines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Increment Policies
//!
//! Which uniform weight bumps the optimizer may try for an exercise. Most
//! lifts are loaded in plate pairs, so candidates are multiples of a fixed
//! step up to a fraction of the average working weight. Some machines only
//! move in one fixed jump; those are listed by exact name in an
//! [`IncrementPolicyTable`] so the search itself never branches on names.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::exercises::LEG_PRESS_HORIZONTAL_MACHINE;
use crate::constants::progression::{FIXED_MACHINE_INCREMENT_KG, WEIGHT_STEP_KG};

/// How an exercise's weight may be increased
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IncrementPolicy {
    /// Every multiple of `step` up to the weight-bump ceiling
    Stepped {
        /// Increment granularity in kilograms
        step: f64,
    },
    /// Exactly one candidate, regardless of the ceiling
    Fixed {
        /// The only increment this exercise accepts
        increment: f64,
    },
}

impl Default for IncrementPolicy {
    fn default() -> Self {
        Self::Stepped {
            step: WEIGHT_STEP_KG,
        }
    }
}

impl IncrementPolicy {
    /// Candidate uniform weight increments in ascending order
    ///
    /// For `Stepped`, the ceiling is `floor(max_pct × average_weight / step) × step`;
    /// an average weight too small for a single step yields no candidates.
    #[must_use]
    pub fn candidates(&self, average_weight: f64, max_pct_weight_bump: f64) -> Vec<f64> {
        match *self {
            Self::Stepped { step } => {
                if step <= 0.0 || !step.is_finite() {
                    return Vec::new();
                }
                let steps = (average_weight * max_pct_weight_bump / step).floor();
                if !steps.is_finite() || steps < 1.0 {
                    return Vec::new();
                }
                (1..=steps as u32).map(|i| step * f64::from(i)).collect()
            }
            Self::Fixed { increment } => vec![increment],
        }
    }

    /// Short description for phase explanations
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Stepped { step } => format!("multiples of {step} kg"),
            Self::Fixed { increment } => format!("fixed {increment} kg"),
        }
    }
}

/// Exact-name lookup of increment policies with a fallback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncrementPolicyTable {
    default_policy: IncrementPolicy,
    overrides: HashMap<String, IncrementPolicy>,
}

impl Default for IncrementPolicyTable {
    fn default() -> Self {
        Self::empty().with_policy(
            LEG_PRESS_HORIZONTAL_MACHINE,
            IncrementPolicy::Fixed {
                increment: FIXED_MACHINE_INCREMENT_KG,
            },
        )
    }
}

impl IncrementPolicyTable {
    /// A table with no overrides, using plate steps for every exercise
    #[must_use]
    pub fn empty() -> Self {
        Self {
            default_policy: IncrementPolicy::default(),
            overrides: HashMap::new(),
        }
    }

    /// Add or replace the policy for one exercise name
    #[must_use]
    pub fn with_policy(mut self, exercise: impl Into<String>, policy: IncrementPolicy) -> Self {
        self.overrides.insert(exercise.into(), policy);
        self
    }

    /// Replace the fallback policy
    #[must_use]
    pub fn with_default_policy(mut self, policy: IncrementPolicy) -> Self {
        self.default_policy = policy;
        self
    }

    /// Policy for an exercise; names match exactly, including case
    #[must_use]
    pub fn policy_for(&self, exercise: &str) -> IncrementPolicy {
        self.overrides
            .get(exercise)
            .copied()
            .unwrap_or(self.default_policy)
    }
}

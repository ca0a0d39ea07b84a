// ABOUTME: Default bounds for the volume progression optimizer
// ABOUTME: Rep range, weight increment granularity, and numerical tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Deficit at or below this value counts as satisfied
pub const DEFICIT_EPSILON: f64 = 1e-6;

/// Weight increment granularity in kilograms (smallest plate pair)
pub const WEIGHT_STEP_KG: f64 = 1.25;

/// Fixed increment for machines with a pin-selected stack
pub const FIXED_MACHINE_INCREMENT_KG: f64 = 9.0;

/// Largest uniform weight bump as a fraction of the average working weight
pub const DEFAULT_MAX_PCT_WEIGHT_BUMP: f64 = 0.10;

/// Minimum reps for a working set touched by the rep fill
pub const DEFAULT_REP_FLOOR: u32 = 6;

/// Maximum reps counted toward a working set
pub const DEFAULT_REP_CAP: u32 = 12;

/// Default target volume increase in percent
pub const DEFAULT_VOLUME_BUMP_PERCENT: f64 = 5.0;

/// Largest target volume increase the CLI accepts, in percent
pub const MAX_VOLUME_BUMP_PERCENT: f64 = 20.0;

/// Decimal places kept when rounding the weight of filler sets
pub const FILLER_WEIGHT_DECIMALS: i32 = 2;

/// Most new sets the filler phase may append to one exercise
pub const MAX_NEW_SETS: usize = 20;

// ABOUTME: Volume calculator summing reps × weight across a set list
// ABOUTME: Missing reps or weight contribute zero; no set is ever dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Volume Calculator
//!
//! `volume(sets) = Σ reps × weight`. Pure, order-independent, never fails.
//! The same function backs the optimizer's deficit bookkeeping and the
//! recomputation of user-edited plans.

use crate::models::{LoggedSet, WorkingSet};

/// Anything that contributes reps × weight to a volume total
pub trait SetVolume {
    /// Volume contributed by this set
    fn set_volume(&self) -> f64;
}

impl SetVolume for WorkingSet {
    fn set_volume(&self) -> f64 {
        self.volume()
    }
}

impl SetVolume for LoggedSet {
    fn set_volume(&self) -> f64 {
        match (self.reps, self.weight_kg) {
            (Some(reps), Some(weight)) => f64::from(reps) * weight,
            _ => 0.0,
        }
    }
}

impl<T: SetVolume + ?Sized> SetVolume for &T {
    fn set_volume(&self) -> f64 {
        (**self).set_volume()
    }
}

/// Total training volume of a set collection
#[must_use]
pub fn volume<S: SetVolume>(sets: &[S]) -> f64 {
    sets.iter().map(SetVolume::set_volume).sum()
}

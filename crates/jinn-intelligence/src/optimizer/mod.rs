// ABOUTME: Three-phase volume progression optimizer
// ABOUTME: Flattens over-cap sets, searches weight+rep bumps, then fills with new sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Progression Optimizer
//!
//! Produces the next session's sets for one exercise so that total volume
//! meets or minimally exceeds `base_volume × (1 + volume_perc)`.
//!
//! 1. **Flatten**: reps above the cap are clamped; the lost volume is noted.
//! 2. **Weight + rep bump**: every increment the exercise's policy allows is
//!    tried in ascending order, first alone and then with a greedy rep fill.
//! 3. **New-set filler**: whole sets at `rep_cap` reps and the average weight,
//!    plus one partial set for the remainder.
//!
//! Each phase runs only while the deficit is above the configured epsilon and
//! appends one record to the result's [`PhaseTrace`].

mod phase;
mod result;
mod search;

pub use phase::{
    BumpCandidate, FlattenPhase, NewSetFillerPhase, Phase, PhaseTrace, WeightRepBumpPhase,
};
pub use result::{OptimizationRequest, OptimizationResult, PlanStatus, ShortfallReason};

use tracing::{debug, warn};

use crate::config::ProgressionConfig;
use crate::constants::progression::{FILLER_WEIGHT_DECIMALS, MAX_NEW_SETS};
use crate::increment_policy::IncrementPolicyTable;
use crate::models::{LoggedSet, WorkingSet};
use crate::volume::volume;
use search::{search_weight_rep_bumps, RepBounds};

/// Volume progression optimizer
///
/// Holds only immutable configuration; one instance can serve any number of
/// concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct ProgressionOptimizer {
    config: ProgressionConfig,
    increments: IncrementPolicyTable,
}

impl ProgressionOptimizer {
    /// Create an optimizer with the default increment policy table
    #[must_use]
    pub fn new(config: ProgressionConfig) -> Self {
        if !config.has_floor_headroom() {
            warn!(
                rep_floor = config.rep_floor,
                rep_cap = config.rep_cap,
                "rep cap does not exceed rep floor; floor raises stop at the cap"
            );
        }
        Self {
            config,
            increments: IncrementPolicyTable::default(),
        }
    }

    /// Replace the increment policy table
    #[must_use]
    pub fn with_increment_policies(mut self, increments: IncrementPolicyTable) -> Self {
        self.increments = increments;
        self
    }

    /// Configured bounds
    #[must_use]
    pub const fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Increment policies in use
    #[must_use]
    pub const fn increment_policies(&self) -> &IncrementPolicyTable {
        &self.increments
    }

    /// Plan the next session for one exercise
    ///
    /// Never fails: input without a complete set yields
    /// [`PlanStatus::NoData`], a non-finite `volume_perc` yields
    /// [`PlanStatus::InvalidTarget`], and bounds that cannot close the deficit
    /// yield [`PlanStatus::Shortfall`] with the best plan found.
    #[must_use]
    pub fn optimize(&self, request: &OptimizationRequest) -> OptimizationResult {
        let base: Vec<WorkingSet> = request
            .base_sets
            .iter()
            .filter_map(LoggedSet::to_working)
            .collect();
        if base.is_empty() {
            debug!(exercise = %request.exercise, "no complete sets to optimize");
            return OptimizationResult::no_data(request.exercise.clone());
        }

        let epsilon = self.config.deficit_epsilon;
        let base_volume = volume(&base);
        let average_weight = base.iter().map(|s| s.weight_kg).sum::<f64>() / base.len() as f64;
        if !request.volume_perc.is_finite() {
            warn!(
                exercise = %request.exercise,
                volume_perc = request.volume_perc,
                "volume increase is not a finite number"
            );
            return OptimizationResult::invalid_target(
                request.exercise.clone(),
                base_volume,
                average_weight,
            );
        }
        let target_volume = base_volume * (1.0 + request.volume_perc);

        let mut plan = PlanBuilder {
            exercise: request.exercise.clone(),
            base_volume,
            average_weight,
            target_volume,
            phases: PhaseTrace::new(),
        };

        let flatten = flatten(&base, self.config.rep_cap, target_volume);
        debug!(
            exercise = %request.exercise,
            lost_volume = flatten.lost_volume,
            remaining = flatten.remaining,
            "phase 0 flatten"
        );
        let flattened = flatten.base_sets.clone();
        let remaining = flatten.remaining;
        plan.phases.push(Phase::Flatten(flatten));
        if remaining <= epsilon {
            return plan.finish(flattened, remaining, epsilon, None);
        }

        let policy = self.increments.policy_for(&request.exercise);
        let weight_increments = policy.candidates(average_weight, self.config.max_pct_weight_bump);
        let search = search_weight_rep_bumps(
            &flattened,
            remaining,
            &weight_increments,
            RepBounds {
                rep_floor: self.config.rep_floor,
                rep_cap: self.config.rep_cap,
                epsilon,
            },
        );
        let (carried, remaining) = match &search.winner {
            Some(winner) => (winner.final_sets.clone(), remaining - winner.total_added),
            None => (flattened, remaining),
        };
        debug!(
            exercise = %request.exercise,
            policy = %policy.describe(),
            candidates = weight_increments.len(),
            scanned = search.candidates_scanned,
            weight_increment = search.winner.as_ref().map(|w| w.weight_increment),
            remaining,
            "phase 1 weight+rep bump"
        );
        plan.phases.push(Phase::WeightRepBump(WeightRepBumpPhase {
            weight_increments,
            candidates_scanned: search.candidates_scanned,
            winner: search.winner,
            remaining,
        }));
        if remaining <= epsilon {
            return plan.finish(carried, remaining, epsilon, None);
        }

        let filler = fill_new_sets(remaining, average_weight, self.config.rep_cap, epsilon);
        debug!(
            exercise = %request.exercise,
            full_new_sets = filler.full_new_sets,
            added_volume = filler.added_volume,
            remaining = filler.remaining,
            "phase 2 new-set filler"
        );
        let reason = if filler.unit_volume <= 0.0 {
            ShortfallReason::ZeroUnitVolume
        } else if filler.full_new_sets >= MAX_NEW_SETS {
            ShortfallReason::SetLimit
        } else {
            ShortfallReason::Rounding
        };
        let remaining = filler.remaining;
        let mut final_sets = carried;
        final_sets.extend_from_slice(&filler.new_sets);
        plan.phases.push(Phase::NewSetFiller(filler));
        plan.finish(final_sets, remaining, epsilon, Some(reason))
    }
}

/// Accumulates the result while phases run
struct PlanBuilder {
    exercise: String,
    base_volume: f64,
    average_weight: f64,
    target_volume: f64,
    phases: PhaseTrace,
}

impl PlanBuilder {
    fn finish(
        self,
        final_sets: Vec<WorkingSet>,
        remaining: f64,
        epsilon: f64,
        shortfall_reason: Option<ShortfallReason>,
    ) -> OptimizationResult {
        let status = match shortfall_reason {
            Some(reason) if remaining > epsilon => {
                warn!(
                    exercise = %self.exercise,
                    remaining,
                    ?reason,
                    "plan falls short of target volume"
                );
                PlanStatus::Shortfall { remaining, reason }
            }
            _ => PlanStatus::TargetMet,
        };
        OptimizationResult {
            exercise: self.exercise,
            base_volume: self.base_volume,
            average_weight: self.average_weight,
            delta: self.target_volume - self.base_volume,
            target_volume: self.target_volume,
            phases: self.phases,
            final_sets,
            status,
        }
    }
}

/// Phase 0: clamp reps to the cap
fn flatten(base: &[WorkingSet], rep_cap: u32, target_volume: f64) -> FlattenPhase {
    let mut lost_volume = 0.0;
    let mut clamped_sets = 0;
    let base_sets: Vec<WorkingSet> = base
        .iter()
        .map(|set| {
            if set.reps > rep_cap {
                lost_volume += f64::from(set.reps - rep_cap) * set.weight_kg;
                clamped_sets += 1;
                WorkingSet::new(rep_cap, set.weight_kg)
            } else {
                *set
            }
        })
        .collect();
    let remaining = target_volume - volume(&base_sets);
    FlattenPhase {
        lost_volume,
        clamped_sets,
        base_sets,
        remaining,
    }
}

/// Phase 2: append full sets at the cap, then one partial set
///
/// A new set worth zero volume cannot close a positive deficit, so that case
/// appends nothing and leaves the whole deficit in `remaining`. At most
/// `MAX_NEW_SETS` full sets are appended; past that the partial set is
/// dropped and the rest of the deficit stays in `remaining`.
fn fill_new_sets(deficit: f64, average_weight: f64, rep_cap: u32, epsilon: f64) -> NewSetFillerPhase {
    let unit_volume = f64::from(rep_cap) * average_weight;
    if unit_volume <= 0.0 || !unit_volume.is_finite() {
        return NewSetFillerPhase {
            unit_volume,
            full_new_sets: 0,
            partial_new_set: None,
            added_volume: 0.0,
            new_sets: Vec::new(),
            remaining: deficit,
        };
    }

    let weight = round_to(average_weight, FILLER_WEIGHT_DECIMALS);
    let needed = (deficit / unit_volume).floor();
    let capped = needed >= MAX_NEW_SETS as f64;
    let full_new_sets = if capped { MAX_NEW_SETS } else { needed as usize };
    let mut new_sets = vec![WorkingSet::new(rep_cap, weight); full_new_sets];

    let remainder = (full_new_sets as f64).mul_add(-unit_volume, deficit);
    let partial_new_set = (!capped && remainder > epsilon).then(|| {
        let reps = (remainder / average_weight).ceil().min(f64::from(rep_cap)) as u32;
        WorkingSet::new(reps, weight)
    });
    new_sets.extend(partial_new_set);

    let added_volume = volume(&new_sets);
    NewSetFillerPhase {
        unit_volume,
        full_new_sets,
        partial_new_set,
        added_volume,
        new_sets,
        remaining: deficit - added_volume,
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

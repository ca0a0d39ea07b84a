// ABOUTME: Diagnostic records for each stage of the progression search
// ABOUTME: Append-only phase trace explaining why a plan was chosen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::models::WorkingSet;

/// Phase 0: sets above the rep cap were clamped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlattenPhase {
    /// Volume discarded by clamping reps to the cap
    pub lost_volume: f64,
    /// Number of sets that were clamped
    pub clamped_sets: usize,
    /// Sets after clamping; the baseline for later phases
    pub base_sets: Vec<WorkingSet>,
    /// Target volume minus flattened volume
    pub remaining: f64,
}

/// A uniform weight bump plus per-set rep additions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BumpCandidate {
    /// Weight added to every set
    pub weight_increment: f64,
    /// Reps added to each set, aligned with the base sets
    pub bump_reps: Vec<u32>,
    /// Volume added by the weight bump and the extra reps together
    pub total_added: f64,
    /// `total_added` minus the deficit; never below `-epsilon` for a winner
    pub overshoot: f64,
    /// The resulting sets
    pub final_sets: Vec<WorkingSet>,
}

impl BumpCandidate {
    /// Whether any set received extra reps
    #[must_use]
    pub fn changes_reps(&self) -> bool {
        self.bump_reps.iter().any(|&r| r > 0)
    }
}

/// Phase 1: search over uniform weight bumps with greedy rep fill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRepBumpPhase {
    /// Weight increments the policy allowed, ascending
    pub weight_increments: Vec<f64>,
    /// How many increments were evaluated before the search stopped
    pub candidates_scanned: usize,
    /// The accepted candidate, if any
    pub winner: Option<BumpCandidate>,
    /// Deficit left after applying the winner (negative means overshoot)
    pub remaining: f64,
}

/// Phase 2: whole and partial new sets at the average weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSetFillerPhase {
    /// Volume of one full new set (`rep_cap × average_weight`)
    pub unit_volume: f64,
    /// Number of full sets appended
    pub full_new_sets: usize,
    /// Trailing set with fewer reps, if the remainder needed one
    pub partial_new_set: Option<WorkingSet>,
    /// Volume added by the appended sets
    pub added_volume: f64,
    /// The appended sets in order
    pub new_sets: Vec<WorkingSet>,
    /// Deficit left after appending
    pub remaining: f64,
}

/// One stage of the progression search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Rep cap clamp
    Flatten(FlattenPhase),
    /// Weight bump with rep fill
    WeightRepBump(WeightRepBumpPhase),
    /// New set filler
    NewSetFiller(NewSetFillerPhase),
}

impl Phase {
    /// Position of this phase in the search (0, 1, 2)
    #[must_use]
    pub const fn index(&self) -> u8 {
        match self {
            Self::Flatten(_) => 0,
            Self::WeightRepBump(_) => 1,
            Self::NewSetFiller(_) => 2,
        }
    }

    /// Deficit measured at the end of this phase
    #[must_use]
    pub const fn remaining(&self) -> f64 {
        match self {
            Self::Flatten(p) => p.remaining,
            Self::WeightRepBump(p) => p.remaining,
            Self::NewSetFiller(p) => p.remaining,
        }
    }

    /// One-line explanation suitable for showing to the lifter
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Flatten(p) if p.clamped_sets == 0 => {
                format!("Phase 0: no sets above the rep cap, {:.1} vol to go", p.remaining)
            }
            Self::Flatten(p) => format!(
                "Phase 0: clamped {} set(s) to the rep cap, discarding {:.1} vol; {:.1} vol to go",
                p.clamped_sets, p.lost_volume, p.remaining
            ),
            Self::WeightRepBump(WeightRepBumpPhase {
                winner: Some(w),
                candidates_scanned,
                ..
            }) => {
                let added_reps: u32 = w.bump_reps.iter().sum();
                format!(
                    "Phase 1: +{} kg on every set and +{added_reps} rep(s) adds {:.1} vol \
                     (overshoot {:.1}) after {candidates_scanned} candidate(s)",
                    w.weight_increment, w.total_added, w.overshoot
                )
            }
            Self::WeightRepBump(p) => format!(
                "Phase 1: none of {} weight increment(s) closed the gap; {:.1} vol to go",
                p.weight_increments.len(),
                p.remaining
            ),
            Self::NewSetFiller(p) if p.new_sets.is_empty() && p.remaining > 0.0 => format!(
                "Phase 2: new sets add no volume at this weight; {:.1} vol short",
                p.remaining
            ),
            Self::NewSetFiller(p) => format!(
                "Phase 2: appended {} full set(s){} adding {:.1} vol; remaining {:.1}",
                p.full_new_sets,
                p.partial_new_set
                    .map_or_else(String::new, |s| format!(" and a partial {s}")),
                p.added_volume,
                p.remaining
            ),
        }
    }
}

/// Ordered, append-only record of the phases a search executed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhaseTrace {
    phases: Vec<Phase>,
}

impl PhaseTrace {
    pub(crate) const fn new() -> Self {
        Self { phases: Vec::new() }
    }

    pub(crate) fn push(&mut self, phase: Phase) {
        self.phases.push(phase);
    }

    /// Phases in execution order
    pub fn iter(&self) -> impl Iterator<Item = &Phase> {
        self.phases.iter()
    }

    /// Phases as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Phase] {
        &self.phases
    }

    /// The phase that ran last
    #[must_use]
    pub fn last(&self) -> Option<&Phase> {
        self.phases.last()
    }

    /// Number of phases executed
    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Whether no phase ran (no usable input)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}

impl<'a> IntoIterator for &'a PhaseTrace {
    type Item = &'a Phase;
    type IntoIter = Iter<'a, Phase>;

    fn into_iter(self) -> Self::IntoIter {
        self.phases.iter()
    }
}

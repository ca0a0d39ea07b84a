// ABOUTME: Weight bump + greedy rep fill search used by phase 1
// ABOUTME: Scans increments ascending and keeps the smallest-overshoot candidate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;

use super::phase::BumpCandidate;
use crate::models::WorkingSet;

/// Rep bounds and tolerance shared by every candidate evaluation
#[derive(Debug, Clone, Copy)]
pub(crate) struct RepBounds {
    pub rep_floor: u32,
    pub rep_cap: u32,
    pub epsilon: f64,
}

/// Outcome of scanning the increment list
pub(crate) struct BumpSearch {
    pub winner: Option<BumpCandidate>,
    pub candidates_scanned: usize,
}

/// Find the best uniform weight bump for `deficit`
///
/// Increments must be ascending: the first increment whose uniform bump
/// alone covers the deficit wins outright, since every later one only
/// overshoots further with the same (unchanged) reps.
pub(crate) fn search_weight_rep_bumps(
    base_sets: &[WorkingSet],
    deficit: f64,
    increments: &[f64],
    bounds: RepBounds,
) -> BumpSearch {
    let mut best: Option<BumpCandidate> = None;

    for (scanned, &increment) in increments.iter().enumerate() {
        let uniform_added: f64 = base_sets
            .iter()
            .map(|s| f64::from(s.reps) * increment)
            .sum();

        if deficit - uniform_added <= bounds.epsilon {
            return BumpSearch {
                winner: Some(uniform_bump(base_sets, increment, uniform_added, deficit)),
                candidates_scanned: scanned + 1,
            };
        }

        let Some(candidate) = rep_fill(base_sets, increment, uniform_added, deficit, bounds) else {
            continue;
        };
        if best
            .as_ref()
            .is_none_or(|current| improves_on(&candidate, current, bounds.epsilon))
        {
            best = Some(candidate);
        }
    }

    BumpSearch {
        winner: best,
        candidates_scanned: increments.len(),
    }
}

fn uniform_bump(
    base_sets: &[WorkingSet],
    increment: f64,
    uniform_added: f64,
    deficit: f64,
) -> BumpCandidate {
    BumpCandidate {
        weight_increment: increment,
        bump_reps: vec![0; base_sets.len()],
        total_added: uniform_added,
        overshoot: uniform_added - deficit,
        final_sets: base_sets
            .iter()
            .map(|s| WorkingSet::new(s.reps, s.weight_kg + increment))
            .collect(),
    }
}

/// Raise sets to the rep floor, then add single reps to the heaviest set
/// with headroom until the deficit closes or no headroom is left.
///
/// Returns `None` unless at least one rep changed and the candidate does not
/// undershoot the deficit.
fn rep_fill(
    base_sets: &[WorkingSet],
    increment: f64,
    uniform_added: f64,
    deficit: f64,
    bounds: RepBounds,
) -> Option<BumpCandidate> {
    let bumped_weights: Vec<f64> = base_sets.iter().map(|s| s.weight_kg + increment).collect();
    let mut bump_reps = vec![0_u32; base_sets.len()];
    let mut headroom: Vec<u32> = base_sets
        .iter()
        .map(|s| bounds.rep_cap.saturating_sub(s.reps))
        .collect();

    let mut rep_added = 0.0;
    for (i, set) in base_sets.iter().enumerate() {
        if set.reps < bounds.rep_floor {
            let need = (bounds.rep_floor - set.reps).min(headroom[i]);
            bump_reps[i] = need;
            headroom[i] -= need;
            rep_added += f64::from(need) * bumped_weights[i];
        }
    }
    let mut remaining = deficit - uniform_added - rep_added;

    // stable sort: equal weights keep their set order
    let mut heaviest_first: Vec<usize> = (0..base_sets.len()).collect();
    heaviest_first.sort_by(|&a, &b| {
        bumped_weights[b]
            .partial_cmp(&bumped_weights[a])
            .unwrap_or(Ordering::Equal)
    });

    while remaining > bounds.epsilon {
        let Some(&i) = heaviest_first.iter().find(|&&i| headroom[i] > 0) else {
            break;
        };
        bump_reps[i] += 1;
        headroom[i] -= 1;
        rep_added += bumped_weights[i];
        remaining -= bumped_weights[i];
    }

    let total_added = uniform_added + rep_added;
    let candidate = BumpCandidate {
        weight_increment: increment,
        total_added,
        overshoot: total_added - deficit,
        final_sets: base_sets
            .iter()
            .zip(&bump_reps)
            .map(|(s, &extra)| WorkingSet::new(s.reps + extra, s.weight_kg + increment))
            .collect(),
        bump_reps,
    };

    (candidate.changes_reps() && candidate.overshoot >= -bounds.epsilon).then_some(candidate)
}

/// Smaller overshoot wins; ties go to the smaller increment
fn improves_on(candidate: &BumpCandidate, current: &BumpCandidate, epsilon: f64) -> bool {
    candidate.overshoot < current.overshoot - epsilon
        || ((candidate.overshoot - current.overshoot).abs() < epsilon
            && candidate.weight_increment < current.weight_increment)
}

// ABOUTME: Read-through cache of first-session volumes for one planning pass
// ABOUTME: History is fetched once; each exercise's volume is computed at most once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use tracing::debug;

use crate::models::WorkoutRecord;
use crate::providers::core::oldest_session;

/// Exercise name → volume of its oldest reachable session
///
/// Lives for one planning pass and is dropped with it, so a later pass
/// always sees fresh history.
#[derive(Debug, Default)]
pub struct FirstVolumeCache {
    history: Vec<WorkoutRecord>,
    volumes: HashMap<String, Option<f64>>,
}

impl FirstVolumeCache {
    /// Cache over a newest-first workout history
    #[must_use]
    pub fn new(history: Vec<WorkoutRecord>) -> Self {
        Self {
            history,
            volumes: HashMap::new(),
        }
    }

    /// First-session volume of `exercise`; `None` if it never appears
    pub fn first_volume(&mut self, exercise: &str) -> Option<f64> {
        if let Some(volume) = self.volumes.get(exercise) {
            return *volume;
        }
        let volume = oldest_session(&self.history, exercise).map(|s| s.volume());
        debug!(exercise, ?volume, "computed first-session volume");
        self.volumes.insert(exercise.to_owned(), volume);
        volume
    }

    /// Number of exercises looked up so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    /// Whether nothing has been looked up yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }
}

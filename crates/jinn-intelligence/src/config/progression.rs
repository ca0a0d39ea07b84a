// ABOUTME: Progression optimizer bounds (rep floor, rep cap, weight bump ceiling)
// ABOUTME: Loads overrides from environment and validates numeric ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progression Optimizer Configuration
//!
//! Bounds applied by the optimizer while searching for the next session's
//! sets. `rep_cap <= rep_floor` is accepted; the optimizer reports
//! the resulting shortfall instead of this layer refusing the configuration.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::constants::env_config;
use crate::constants::progression::{
    DEFAULT_MAX_PCT_WEIGHT_BUMP, DEFAULT_REP_CAP, DEFAULT_REP_FLOOR, DEFICIT_EPSILON,
};

/// Bounds for the progression search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Largest uniform weight bump as a fraction of the average working weight
    pub max_pct_weight_bump: f64,
    /// Sets touched by the rep fill are raised to at least this many reps
    pub rep_floor: u32,
    /// No set in any phase may exceed this many reps
    pub rep_cap: u32,
    /// Deficits at or below this value count as satisfied
    pub deficit_epsilon: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            max_pct_weight_bump: DEFAULT_MAX_PCT_WEIGHT_BUMP,
            rep_floor: DEFAULT_REP_FLOOR,
            rep_cap: DEFAULT_REP_CAP,
            deficit_epsilon: DEFICIT_EPSILON,
        }
    }
}

impl ProgressionConfig {
    /// Load bounds from environment variables, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but not valid unicode,
    /// cannot be parsed, or fails [`Self::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            max_pct_weight_bump: env_or(
                env_config::JINN_MAX_WEIGHT_BUMP_PCT,
                defaults.max_pct_weight_bump,
            )?,
            rep_floor: env_or(env_config::JINN_REP_FLOOR, defaults.rep_floor)?,
            rep_cap: env_or(env_config::JINN_REP_CAP, defaults.rep_cap)?,
            deficit_epsilon: defaults.deficit_epsilon,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate numeric ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for a negative or non-finite bump
    /// fraction and `ConfigError::ValueOutOfRange` for a non-positive epsilon.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_pct_weight_bump.is_finite() || self.max_pct_weight_bump < 0.0 {
            return Err(ConfigError::InvalidRange(
                "max_pct_weight_bump must be a finite, non-negative fraction",
            ));
        }
        if !self.deficit_epsilon.is_finite() || self.deficit_epsilon <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "deficit_epsilon must be a small positive number",
            ));
        }
        Ok(())
    }

    /// Whether the rep range leaves any room for a floor raise
    #[must_use]
    pub const fn has_floor_headroom(&self) -> bool {
        self.rep_cap > self.rep_floor
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ConfigError::Parse(format!("{key}={raw}: {e}"))),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

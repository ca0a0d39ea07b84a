// ABOUTME: Environment configuration for the Hevy client and planning defaults
// ABOUTME: Parses and validates variables once at startup into typed settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::constants::env_config;
use crate::constants::hevy::{DEFAULT_BASE_URL, DEFAULT_MAX_PAGES};
use crate::constants::progression::{DEFAULT_VOLUME_BUMP_PERCENT, MAX_VOLUME_BUMP_PERCENT};
use crate::errors::AppResult;
use crate::intelligence::{ConfigError, ProgressionConfig};
use crate::planning::BaselineSource;
use crate::providers::hevy::HevyProviderConfig;
use crate::providers::http_client::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};

/// Hevy API connection settings
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct HevyConfig {
    /// Personal API key
    #[serde(skip)]
    pub api_key: Option<String>,
    /// REST base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Pages walked when searching history
    pub max_pages: u32,
}

// Keeps the API key out of debug logs
impl fmt::Debug for HevyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HevyConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("max_pages", &self.max_pages)
            .finish()
    }
}

impl Default for HevyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl HevyConfig {
    /// Provider settings derived from this configuration
    #[must_use]
    pub fn provider_config(&self) -> HevyProviderConfig {
        HevyProviderConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            max_pages: self.max_pages,
        }
    }
}

/// Defaults for a planning pass when the caller does not choose
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanningDefaults {
    /// Target volume increase in percent
    pub volume_bump_percent: f64,
    /// Baseline session selection
    pub baseline: BaselineSource,
}

impl Default for PlanningDefaults {
    fn default() -> Self {
        Self {
            volume_bump_percent: DEFAULT_VOLUME_BUMP_PERCENT,
            baseline: BaselineSource::LastSession,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JinnConfig {
    /// Hevy API settings
    pub hevy: HevyConfig,
    /// Planning defaults
    pub planning: PlanningDefaults,
    /// Optimizer bounds
    pub progression: ProgressionConfig,
}

impl JinnConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable is set but cannot be
    /// parsed or is out of range.
    pub fn from_env() -> AppResult<Self> {
        let hevy = HevyConfig {
            api_key: env::var(env_config::HEVY_API_KEY)
                .ok()
                .filter(|key| !key.trim().is_empty()),
            base_url: env::var(env_config::HEVY_API_BASE_URL)
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()),
            timeout_secs: env_or(env_config::HEVY_HTTP_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)?,
            connect_timeout_secs: env_or(
                env_config::HEVY_HTTP_CONNECT_TIMEOUT_SECS,
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            max_pages: env_or(env_config::HEVY_MAX_PAGES, DEFAULT_MAX_PAGES)?,
        };

        let planning = PlanningDefaults {
            volume_bump_percent: env_or(
                env_config::JINN_VOLUME_BUMP_PCT,
                DEFAULT_VOLUME_BUMP_PERCENT,
            )?,
            baseline: match env::var(env_config::JINN_BASELINE) {
                Ok(raw) => raw.parse()?,
                Err(_) => BaselineSource::default(),
            },
        };
        validate_percent(planning.volume_bump_percent)?;

        let config = Self {
            hevy,
            planning,
            progression: ProgressionConfig::from_env()?,
        };
        debug!(?config, "configuration loaded from environment");
        Ok(config)
    }
}

/// Check a volume increase percentage against `0..=20`
///
/// # Errors
///
/// Returns `ConfigError::ValueOutOfRange` outside the range.
pub fn validate_percent(percent: f64) -> Result<(), ConfigError> {
    if (0.0..=MAX_VOLUME_BUMP_PERCENT).contains(&percent) {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(
            "volume increase must be between 0 and 20 percent",
        ))
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

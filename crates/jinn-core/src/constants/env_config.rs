// ABOUTME: Environment variable names for Volume Jinn configuration
// ABOUTME: Single source of truth shared by config loaders and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Hevy API key
pub const HEVY_API_KEY: &str = "HEVY_API_KEY";
/// Hevy API base URL override
pub const HEVY_API_BASE_URL: &str = "HEVY_API_BASE_URL";
/// HTTP request timeout in seconds
pub const HEVY_HTTP_TIMEOUT_SECS: &str = "HEVY_HTTP_TIMEOUT_SECS";
/// HTTP connect timeout in seconds
pub const HEVY_HTTP_CONNECT_TIMEOUT_SECS: &str = "HEVY_HTTP_CONNECT_TIMEOUT_SECS";
/// Maximum pages walked when searching workout history
pub const HEVY_MAX_PAGES: &str = "HEVY_MAX_PAGES";

/// Default target volume increase in percent
pub const JINN_VOLUME_BUMP_PCT: &str = "JINN_VOLUME_BUMP_PCT";
/// Baseline session selection (`first` or `last`)
pub const JINN_BASELINE: &str = "JINN_BASELINE";
/// Largest uniform weight bump as a fraction of average weight
pub const JINN_MAX_WEIGHT_BUMP_PCT: &str = "JINN_MAX_WEIGHT_BUMP_PCT";
/// Rep floor
pub const JINN_REP_FLOOR: &str = "JINN_REP_FLOOR";
/// Rep cap
pub const JINN_REP_CAP: &str = "JINN_REP_CAP";

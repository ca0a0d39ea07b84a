// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Progression defaults, environment variable names, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Progression optimizer defaults
pub mod progression;

/// Environment variable names read by the configuration layer
pub mod env_config;

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the CLI in startup logs
    pub const VOLUME_JINN: &str = "volume-jinn";
}

/// Exercise names that need special treatment
pub mod exercises {
    /// Plate-loaded horizontal leg press; only accepts a fixed pin increment
    pub const LEG_PRESS_HORIZONTAL_MACHINE: &str = "Leg Press Horizontal (Machine)";
}

/// Hevy REST API constants
pub mod hevy {
    /// Provider name used in errors and logs
    pub const PROVIDER_NAME: &str = "hevy";
    /// Default API base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.hevyapp.com/v1";
    /// Header carrying the API key
    pub const API_KEY_HEADER: &str = "api-key";
    /// Workouts per page requested from the API
    pub const PAGE_SIZE: u32 = 10;
    /// Default number of pages walked when searching history
    pub const DEFAULT_MAX_PAGES: u32 = 10;
    /// Length of a response body kept in error messages
    pub const ERROR_BODY_EXCERPT_CHARS: usize = 120;
}

// ABOUTME: Configuration module for jinn-intelligence crate
// ABOUTME: Re-exports progression bounds and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

/// Rep range and weight bump bounds for the optimizer
pub mod progression;

pub use error::ConfigError;
pub use progression::ProgressionConfig;

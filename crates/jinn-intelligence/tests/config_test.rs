// ABOUTME: Tests for progression bounds loaded from the environment
// ABOUTME: Serialized because they mutate process-wide environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use jinn_intelligence::constants::env_config;
use jinn_intelligence::errors::{AppError, ErrorCode};
use jinn_intelligence::{ConfigError, ProgressionConfig};
use serial_test::serial;

fn clear_env() {
    for key in [
        env_config::JINN_MAX_WEIGHT_BUMP_PCT,
        env_config::JINN_REP_FLOOR,
        env_config::JINN_REP_CAP,
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ProgressionConfig::from_env().unwrap();
    assert_eq!(config, ProgressionConfig::default());
    assert_eq!(config.rep_floor, 6);
    assert_eq!(config.rep_cap, 12);
    assert!((config.max_pct_weight_bump - 0.10).abs() < f64::EPSILON);
    assert!(config.has_floor_headroom());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(env_config::JINN_REP_FLOOR, "8");
    env::set_var(env_config::JINN_REP_CAP, " 15 ");
    env::set_var(env_config::JINN_MAX_WEIGHT_BUMP_PCT, "0.05");

    let config = ProgressionConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.rep_floor, 8);
    assert_eq!(config.rep_cap, 15);
    assert!((config.max_pct_weight_bump - 0.05).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_value_is_rejected() {
    clear_env();
    env::set_var(env_config::JINN_REP_CAP, "twelve");
    let err = ProgressionConfig::from_env().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::Parse(ref msg) if msg.contains("JINN_REP_CAP")));
    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_negative_bump_is_rejected() {
    clear_env();
    env::set_var(env_config::JINN_MAX_WEIGHT_BUMP_PCT, "-0.1");
    let err = ProgressionConfig::from_env().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::InvalidRange(_)));
}

#[test]
fn test_cap_below_floor_is_accepted() {
    let config = ProgressionConfig {
        rep_floor: 10,
        rep_cap: 8,
        ..ProgressionConfig::default()
    };
    assert!(config.validate().is_ok());
    assert!(!config.has_floor_headroom());
}

#[test]
fn test_non_positive_epsilon_is_rejected() {
    let config = ProgressionConfig {
        deficit_epsilon: 0.0,
        ..ProgressionConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

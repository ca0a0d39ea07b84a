// ABOUTME: List commands for jinn-cli
// ABOUTME: Prints distinct workout titles or exercise names from recent workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use volume_jinn::config::JinnConfig;
use volume_jinn::errors::AppResult;

use super::open_source;
use crate::helpers::display::print_names;
use crate::SourceArgs;

/// Print workout titles
pub async fn workouts(config: &JinnConfig, args: &SourceArgs) -> AppResult<()> {
    let source = open_source(config, args).await?;
    print_names("Workouts", &source.workout_titles().await?);
    Ok(())
}

/// Print exercise names
pub async fn exercises(config: &JinnConfig, args: &SourceArgs) -> AppResult<()> {
    let source = open_source(config, args).await?;
    print_names("Exercises", &source.exercise_titles().await?);
    Ok(())
}

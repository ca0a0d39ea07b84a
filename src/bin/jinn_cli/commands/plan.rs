// ABOUTME: Plan command for jinn-cli
// ABOUTME: Runs a planning pass and prints plans with their phase trace or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use volume_jinn::config::JinnConfig;
use volume_jinn::errors::AppResult;
use volume_jinn::intelligence::ProgressionOptimizer;
use volume_jinn::planning::{BaselineSource, PlanRequest, PlanningService, Selection};

use super::open_source;
use crate::helpers::display::{print_json, print_session_plan};
use crate::SourceArgs;

/// Exercise names win when given; otherwise plan a whole workout
pub fn selection(workout: Option<String>, exercises: Vec<String>) -> Selection {
    if exercises.is_empty() {
        Selection::Workout(workout)
    } else {
        Selection::Exercises(exercises)
    }
}

/// Run one planning pass and print it
pub async fn run(
    config: &JinnConfig,
    source_args: &SourceArgs,
    selection: Selection,
    percent: Option<f64>,
    baseline: Option<BaselineSource>,
    json: bool,
) -> AppResult<()> {
    let source = open_source(config, source_args).await?;
    let service = PlanningService::new(source, ProgressionOptimizer::new(config.progression));

    let plan = service
        .plan(PlanRequest {
            selection,
            volume_bump_percent: percent.unwrap_or(config.planning.volume_bump_percent),
            baseline: baseline.unwrap_or(config.planning.baseline),
        })
        .await?;

    if json {
        print_json(&plan)
    } else {
        print_session_plan(&plan);
        Ok(())
    }
}

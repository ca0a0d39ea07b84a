// ABOUTME: Output formatting helpers for jinn-cli
// ABOUTME: Renders session plans, phase explanations, progress bars, and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use volume_jinn::errors::AppResult;
use volume_jinn::intelligence::PlanStatus;
use volume_jinn::planning::{ExercisePlan, SessionPlan, VolumeProgress};

const RULE_WIDTH: usize = 60;
const BAR_WIDTH: usize = 30;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a titled list of names, one per line
pub fn print_names(heading: &str, names: &[String]) {
    println!("{heading} ({})", names.len());
    println!("{}", "-".repeat(RULE_WIDTH));
    for name in names {
        println!("  {name}");
    }
}

/// Print every exercise plan of a pass
pub fn print_session_plan(plan: &SessionPlan) {
    if let Some(title) = &plan.workout_title {
        match plan.performed_at {
            Some(performed) => println!("Workout: {title} ({})", performed.format("%B %d, %Y %H:%M")),
            None => println!("Workout: {title}"),
        }
    }
    if let Some(baseline) = plan.baseline_date {
        println!("Baseline from: {}", baseline.format("%B %d, %Y"));
    }
    println!(
        "Target: +{}% volume over the {} session",
        plan.volume_bump_percent, plan.baseline
    );
    println!("{}", "=".repeat(RULE_WIDTH));

    for exercise in &plan.exercises {
        print_exercise_plan(exercise);
    }

    if !plan.missing.is_empty() {
        println!("No recent session for: {}", plan.missing.join(", "));
    }
}

fn print_exercise_plan(plan: &ExercisePlan) {
    println!("\n{}", plan.exercise);
    println!("{}", "-".repeat(RULE_WIDTH));
    println!(
        "  Last vol: {:.0}   Target vol: {:.0}   (+{:.1} vol)",
        plan.target.last_volume, plan.target.target_volume, plan.target.increment
    );
    if let Some(first) = plan.first_volume {
        println!("  First-session vol: {first:.0}");
    }

    println!("  Set  Reps  Weight (kg)");
    for (i, set) in plan.plan_sets.iter().enumerate() {
        println!("  {:>3}  {:>4}  {:>11}", i + 1, set.reps, set.weight_kg);
    }

    if !plan.result.phases.is_empty() {
        println!("  How this plan was built:");
        for phase in &plan.result.phases {
            println!("    {}", phase.describe());
        }
    }
    match plan.result.status {
        PlanStatus::NoData => println!("  No complete sets logged; showing the last session."),
        PlanStatus::InvalidTarget => {
            println!("  Volume increase is not a number; showing the last session.");
        }
        PlanStatus::Shortfall { remaining, reason } => println!(
            "  Warning: plan is {remaining:.1} vol short of target ({reason:?})"
        ),
        PlanStatus::TargetMet => {}
    }

    print_progress(&plan.progress());
}

/// Print a progress bar and summary line
pub fn print_progress(progress: &VolumeProgress) {
    let filled = (progress.bar_fraction() * BAR_WIDTH as f64).round() as usize;
    println!(
        "  [{}{}] {:.0} / {:.0} vol",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        progress.current_volume,
        progress.target_volume
    );
    println!("  {}", progress.describe());
}

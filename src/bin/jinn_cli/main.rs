// ABOUTME: Volume Jinn CLI - plans the next strength session from Hevy or exported history
// ABOUTME: Subcommands for planning, listing workouts/exercises, and recomputing progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Plan every exercise of the last "Push Day" workout, +5 % volume
//! jinn-cli plan --workout "Push Day"
//!
//! # Plan two exercises against their first session, +10 %
//! jinn-cli plan -e "Bench Press (Barbell)" -e "Squat (Barbell)" --percent 10 --baseline first
//!
//! # Plan offline from an exported workouts document
//! jinn-cli plan --input workouts.json --json
//!
//! # List workout titles or exercise names
//! jinn-cli list workouts
//! jinn-cli list exercises --input workouts.json
//!
//! # Recompute volume after editing rows
//! jinn-cli progress --target 1176 10x42.5 10x42.5 8x42.5
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::error;
use volume_jinn::config::environment::validate_percent;
use volume_jinn::config::JinnConfig;
use volume_jinn::errors::AppResult;
use volume_jinn::logging::LoggingConfig;
use volume_jinn::models::WorkingSet;
use volume_jinn::planning::BaselineSource;

#[derive(Parser)]
#[command(
    name = "jinn-cli",
    version,
    about = "Volume Jinn progression planner",
    long_about = "Proposes next-session sets whose total volume meets a target increase over logged history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Plan the next session
    Plan(PlanArgs),

    /// List workout titles or exercise names from recent workouts
    List {
        #[command(subcommand)]
        what: ListCommand,
    },

    /// Recompute the volume of edited rows against a target
    Progress {
        /// Target volume
        #[arg(long)]
        target: f64,

        /// Rows like `10x42.5` (reps x weight in kg)
        #[arg(required = true)]
        sets: Vec<WorkingSet>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Where workouts come from
#[derive(Args, Clone)]
pub struct SourceArgs {
    /// Read workouts from a JSON export instead of the Hevy API
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Hevy API key (overrides `HEVY_API_KEY`)
    #[arg(long)]
    pub api_key: Option<String>,
}

#[derive(Args)]
struct PlanArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Plan every exercise of the last workout with this title
    #[arg(long, conflicts_with = "exercises")]
    workout: Option<String>,

    /// Plan the last session of this exercise (repeatable)
    #[arg(long = "exercise", short = 'e')]
    exercises: Vec<String>,

    /// Volume increase in percent, 0 to 20 (default from `JINN_VOLUME_BUMP_PCT`)
    #[arg(long, value_parser = parse_percent)]
    percent: Option<f64>,

    /// Baseline session: `first` or `last` (default from `JINN_BASELINE`)
    #[arg(long)]
    baseline: Option<BaselineSource>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ListCommand {
    /// Distinct workout titles
    Workouts {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Distinct exercise names
    Exercises {
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn parse_percent(raw: &str) -> Result<f64, String> {
    let percent: f64 = raw.trim().parse().map_err(|e| format!("{e}"))?;
    validate_percent(percent).map_err(|e| e.to_string())?;
    Ok(percent)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    if let Err(e) = logging.init() {
        eprintln!("failed to initialize logging: {e}");
    }

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(command: Command) -> AppResult<()> {
    let config = JinnConfig::from_env()?;

    match command {
        Command::Plan(args) => {
            let selection = commands::plan::selection(args.workout, args.exercises);
            commands::plan::run(
                &config,
                &args.source,
                selection,
                args.percent,
                args.baseline,
                args.json,
            )
            .await
        }
        Command::List { what } => match what {
            ListCommand::Workouts { source } => commands::list::workouts(&config, &source).await,
            ListCommand::Exercises { source } => commands::list::exercises(&config, &source).await,
        },
        Command::Progress { target, sets, json } => commands::progress::run(&sets, target, json),
    }
}

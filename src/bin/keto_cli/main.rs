// ABOUTME: Keto CLI - command-line front end to the keto planner engine
// ABOUTME: Computes targets, day and plan totals, verdicts, shopping lists, and weight analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Daily macro targets for a profile
//! keto-cli targets --calories 1800 --profile perte_poids
//!
//! # Totals for the first day of a plan
//! keto-cli day --catalog catalog.json --plan plan.json --day 0
//!
//! # Check a day against the plan profile's targets
//! keto-cli validate-day --catalog catalog.json --plan plan.json --day 0 --calories 1800
//!
//! # Printable shopping list
//! keto-cli shopping --catalog catalog.json --plan plan.json --text
//!
//! # Weight trend and goal projection
//! keto-cli weight --history weights.json --start 92 --target 80
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use keto_planner::config::IntelligenceConfig;
use keto_planner::errors::AppResult;
use keto_planner::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "keto-cli",
    about = "Keto planner command-line tool",
    long_about = "Computes nutrition totals, macro targets and verdicts, shopping lists, and weight analytics from JSON catalog, plan, and weight-history files."
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
    /// Daily macro targets for a calorie goal and keto profile
    Targets {
        /// Daily calorie goal (defaults to the configured default)
        #[arg(long)]
        calories: Option<f64>,

        /// Keto profile tag (unknown tags fall back to standard)
        #[arg(long, default_value = "standard")]
        profile: String,
    },

    /// Nutrition totals for one day of a plan
    Day {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,

        /// Zero-based day index
        #[arg(long, default_value = "0")]
        day: usize,
    },

    /// Per-day and whole-plan nutrition totals
    PlanTotals {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,
    },

    /// Validate one day against the targets of the plan's keto profile
    ValidateDay {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,

        /// Zero-based day index
        #[arg(long, default_value = "0")]
        day: usize,

        /// Daily calorie goal (defaults to the configured default)
        #[arg(long)]
        calories: Option<f64>,
    },

    /// Shopping list for a plan
    Shopping {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,

        /// Print the checklist text instead of JSON
        #[arg(long)]
        text: bool,
    },

    /// Body mass index and its category
    Bmi {
        /// Height in centimetres
        #[arg(long)]
        height: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
    },

    /// Weight trend, goal progress, and projected goal date
    Weight {
        /// Weight history JSON file (array of {date, weight})
        #[arg(long)]
        history: PathBuf,

        /// Starting weight (defaults to the oldest entry)
        #[arg(long)]
        start: Option<f64>,

        /// Goal weight
        #[arg(long)]
        target: Option<f64>,

        /// Look-back window in days (defaults to the configured window)
        #[arg(long)]
        window: Option<i64>,
    },

    /// Structural check of a plan document
    CheckPlan {
        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = LoggingConfig::for_cli(log_level).init() {
        eprintln!("Logging initialization failed: {e}");
    }

    // Falls back to defaults with a warning when KETO_* overrides are invalid
    let config = IntelligenceConfig::global();
    debug!(
        default_calories = config.targets.default_calories,
        window_days = config.weight.change_window_days,
        "keto-cli configuration loaded"
    );

    match cli.command {
        Command::Targets { calories, profile } => commands::nutrition::targets(calories, &profile),
        Command::Day { catalog, plan, day } => commands::nutrition::day(&catalog, &plan, day),
        Command::PlanTotals { catalog, plan } => commands::nutrition::plan_totals(&catalog, &plan),
        Command::ValidateDay {
            catalog,
            plan,
            day,
            calories,
        } => commands::nutrition::validate_day(&catalog, &plan, day, calories),
        Command::Shopping {
            catalog,
            plan,
            text,
        } => commands::shopping::shopping(&catalog, &plan, text),
        Command::Bmi { height, weight } => commands::weight::bmi(height, weight),
        Command::Weight {
            history,
            start,
            target,
            window,
        } => commands::weight::weight(&history, start, target, window),
        Command::CheckPlan { plan } => commands::plan::check_plan(&plan),
    }
}

// ABOUTME: Nutrition commands for keto-cli
// ABOUTME: Handles targets, day totals, plan totals, and day validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use keto_planner::errors::AppResult;
use keto_planner::intelligence::{
    aggregate_day_with_ph, aggregate_plan_nutrition, compute_nutritional_targets,
    compute_nutritional_targets_for_tag, validate_macro_targets,
};
use serde_json::json;
use tracing::{info, warn};

use crate::helpers::display::print_json;
use crate::helpers::io::{load_catalog, load_plan};

/// Print daily macro targets
pub fn targets(calories: Option<f64>, profile: &str) -> AppResult<()> {
    let targets = compute_nutritional_targets_for_tag(calories, profile);
    print_json(&targets)
}

/// Print the totals of one day
pub fn day(catalog_path: &Path, plan_path: &Path, day_index: usize) -> AppResult<()> {
    let catalog = load_catalog(catalog_path)?;
    let plan = load_plan(plan_path)?;
    let day = plan.day(day_index)?;

    let summary = aggregate_day_with_ph(day, plan.diet_type, &catalog, &catalog);
    print_json(&summary)
}

/// Print per-day and whole-plan totals
pub fn plan_totals(catalog_path: &Path, plan_path: &Path) -> AppResult<()> {
    let catalog = load_catalog(catalog_path)?;
    let plan = load_plan(plan_path)?;

    let totals = aggregate_plan_nutrition(&plan, &catalog, &catalog);
    info!(plan.id = %plan.id, days = totals.days.len(), "Plan totals computed");
    print_json(&totals)
}

/// Print the verdict of one day against the plan profile's targets
pub fn validate_day(
    catalog_path: &Path,
    plan_path: &Path,
    day_index: usize,
    calories: Option<f64>,
) -> AppResult<()> {
    let catalog = load_catalog(catalog_path)?;
    let plan = load_plan(plan_path)?;
    let day = plan.day(day_index)?;

    let summary = aggregate_day_with_ph(day, plan.diet_type, &catalog, &catalog);
    let targets = compute_nutritional_targets(calories, plan.keto_profile);
    let verdict = validate_macro_targets(&summary.totals, &targets, plan.keto_profile);

    if !verdict.all_within_tolerance {
        warn!(
            day = %day.date,
            failing = ?verdict.failing_axes(),
            "Day is outside macro tolerance"
        );
    }

    print_json(&json!({
        "date": day.date,
        "totals": summary.totals,
        "targets": targets,
        "verdict": verdict,
    }))
}

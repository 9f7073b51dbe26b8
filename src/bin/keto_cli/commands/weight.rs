// ABOUTME: Weight analytics commands for keto-cli
// ABOUTME: Handles BMI lookup and weight trend with goal progress and projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use chrono::Utc;
use keto_planner::config::IntelligenceConfig;
use keto_planner::errors::{AppError, AppResult, ErrorCode};
use keto_planner::intelligence::{
    bmi_category, compute_bmi, predict_goal_date_at, weight_change_at, weight_progress,
};
use serde_json::json;

use crate::helpers::display::print_json;
use crate::helpers::io::load_weight_history;

/// Print BMI and its category
pub fn bmi(height_cm: f64, weight_kg: f64) -> AppResult<()> {
    let bmi = compute_bmi(height_cm, weight_kg);
    print_json(&json!({
        "bmi": bmi,
        "category": bmi_category(bmi),
    }))
}

/// Print weight trend, progress toward `target`, and the projected goal date
pub fn weight(
    history_path: &Path,
    start: Option<f64>,
    target: Option<f64>,
    window_days: Option<i64>,
) -> AppResult<()> {
    let mut history = load_weight_history(history_path)?;
    if history.is_empty() {
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            "Weight history is empty",
        ));
    }
    history.sort_by_key(|entry| entry.date);

    let today = Utc::now().date_naive();
    let window =
        window_days.unwrap_or(IntelligenceConfig::global().weight.change_window_days);
    let change = weight_change_at(&history, window, today);

    let (oldest, latest) = match (history.first(), history.last()) {
        (Some(oldest), Some(latest)) => (oldest.weight, latest.weight),
        _ => return Err(AppError::internal("Weight history became empty")),
    };
    let start = start.unwrap_or(oldest);

    let (progress, goal_date) = target.map_or((None, None), |target| {
        (
            Some(weight_progress(start, latest, target)),
            predict_goal_date_at(latest, target, change.weekly_rate, today),
        )
    });

    print_json(&json!({
        "current": latest,
        "start": start,
        "change": change,
        "progress": progress,
        "goalDate": goal_date,
    }))
}

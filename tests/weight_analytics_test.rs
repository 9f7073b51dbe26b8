// ABOUTME: Integration tests for body-weight analytics
// ABOUTME: BMI and bands, goal progress, windowed rate of change, and goal-date projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use chrono::Duration;
use keto_planner::config::intelligence::WeightAnalyticsConfig;
use keto_planner::intelligence::{
    bmi_category, compute_bmi, predict_goal_date_at, predict_goal_date_with, weight_change_at,
    weight_progress, BmiClass, WeightChange,
};
use keto_planner::models::WeightEntry;

mod common;

use common::date;

fn history() -> Vec<WeightEntry> {
    vec![
        WeightEntry::new(date(2024, 2, 1), 86.0),
        WeightEntry::new(date(2024, 1, 1), 90.0),
        WeightEntry::new(date(2024, 2, 10), 85.0),
        WeightEntry::new(date(2024, 1, 15), 88.0),
    ]
}

// ============================================================================
// BMI
// ============================================================================

#[test]
fn test_compute_bmi() {
    assert_eq!(compute_bmi(170.0, 70.0), 24.2);
    assert_eq!(compute_bmi(175.0, 70.0), 22.9);
    assert_eq!(compute_bmi(160.0, 95.0), 37.1);
}

#[test]
fn test_compute_bmi_rejects_missing_inputs() {
    assert_eq!(compute_bmi(0.0, 70.0), 0.0);
    assert_eq!(compute_bmi(175.0, -1.0), 0.0);
    assert_eq!(compute_bmi(f64::NAN, 70.0), 0.0);
}

#[test]
fn test_bmi_category_attributes() {
    let normal = bmi_category(22.9);
    assert_eq!(normal.category, BmiClass::Normal);
    assert_eq!(normal.description, "Poids normal");
    assert!(normal.color.starts_with('#'));

    assert_eq!(bmi_category(37.1).category, BmiClass::ObesityClass2);
    assert_eq!(bmi_category(15.0).category, BmiClass::SevereUnderweight);
    assert_eq!(bmi_category(42.0).category, BmiClass::ObesityClass3);
}

#[test]
fn test_bmi_category_serializes_snake_case() {
    let json = serde_json::to_value(bmi_category(31.0)).unwrap();
    assert_eq!(json["category"], "obesity_class1");
}

// ============================================================================
// GOAL PROGRESS
// ============================================================================

#[test]
fn test_progress_towards_loss_goal() {
    assert_eq!(weight_progress(90.0, 85.0, 80.0), 50.0);
    assert_eq!(weight_progress(90.0, 83.3, 80.0), 67.0);
}

#[test]
fn test_progress_towards_gain_goal() {
    assert_eq!(weight_progress(60.0, 63.0, 70.0), 30.0);
}

#[test]
fn test_progress_is_clamped() {
    assert_eq!(weight_progress(90.0, 92.0, 80.0), 0.0);
    assert_eq!(weight_progress(90.0, 90.0, 80.0), 0.0);
    assert_eq!(weight_progress(90.0, 78.0, 80.0), 100.0);
}

#[test]
fn test_progress_when_already_at_target() {
    assert_eq!(weight_progress(80.0, 80.0, 80.0), 100.0);
}

// ============================================================================
// RATE OF CHANGE
// ============================================================================

#[test]
fn test_change_over_window() {
    let change = weight_change_at(&history(), 30, date(2024, 2, 10));

    // 85 kg on Feb 10 against 90 kg on Jan 1 (latest entry before Jan 11)
    assert_eq!(change.change, -5.0);
    assert_eq!(change.percentage, -5.6);
    assert_eq!(change.weekly_rate, -0.9);
}

#[test]
fn test_short_window_picks_recent_entry() {
    let change = weight_change_at(&history(), 7, date(2024, 2, 10));

    // Cutoff Feb 3: the Feb 1 entry qualifies
    assert_eq!(change.change, -1.0);
    assert_eq!(change.weekly_rate, -0.8);
}

#[test]
fn test_window_longer_than_history_uses_oldest() {
    let change = weight_change_at(&history(), 365, date(2024, 2, 10));
    assert_eq!(change.change, -5.0);
}

#[test]
fn test_change_needs_two_entries() {
    let single = [WeightEntry::new(date(2024, 1, 1), 90.0)];

    assert_eq!(weight_change_at(&[], 30, date(2024, 2, 10)), WeightChange::default());
    assert_eq!(
        weight_change_at(&single, 30, date(2024, 2, 10)),
        WeightChange::default()
    );
}

#[test]
fn test_same_day_entries_have_no_rate() {
    let entries = [
        WeightEntry::new(date(2024, 1, 1), 90.0),
        WeightEntry::new(date(2024, 1, 1), 89.0),
    ];

    let change = weight_change_at(&entries, 30, date(2024, 1, 1));

    assert_eq!(change.weekly_rate, 0.0);
}

// ============================================================================
// GOAL DATE
// ============================================================================

#[test]
fn test_goal_date_projection() {
    let today = date(2024, 2, 10);

    let goal = predict_goal_date_at(90.0, 80.0, -0.5, today);

    assert_eq!(goal, Some(today + Duration::days(140)));
    assert_eq!(goal, Some(date(2024, 6, 29)));
}

#[test]
fn test_goal_date_for_gain() {
    let today = date(2024, 2, 10);
    assert_eq!(
        predict_goal_date_at(60.0, 62.0, 0.25, today),
        Some(today + Duration::days(56))
    );
}

#[test]
fn test_goal_date_unreachable() {
    let today = date(2024, 2, 10);

    assert_eq!(predict_goal_date_at(90.0, 80.0, 0.0, today), None);
    assert_eq!(predict_goal_date_at(90.0, 80.0, 0.5, today), None);
    assert_eq!(predict_goal_date_at(90.0, 80.0, f64::NAN, today), None);
}

#[test]
fn test_goal_date_beyond_horizon() {
    let today = date(2024, 2, 10);

    // 30 kg at 0.5 kg/week is 60 weeks
    assert_eq!(predict_goal_date_at(90.0, 60.0, -0.5, today), None);

    let config = WeightAnalyticsConfig {
        max_projection_weeks: 104.0,
        ..WeightAnalyticsConfig::default()
    };
    assert_eq!(
        predict_goal_date_with(90.0, 60.0, -0.5, today, &config),
        Some(today + Duration::days(420))
    );
}

#[test]
fn test_goal_date_at_target_needs_a_rate() {
    let today = date(2024, 1, 1);

    assert_eq!(predict_goal_date_at(80.0, 80.0, 0.0, today), None);
    assert_eq!(predict_goal_date_at(80.0, 80.0, -0.5, today), Some(today));
}

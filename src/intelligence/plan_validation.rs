// ABOUTME: Structural validation of meal plans, typed or as raw JSON documents
// ABOUTME: Checks id, date range, day-count invariant, day dates, and the keto profile tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use keto_core::models::{KetoProfile, MealPlan};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a plan check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanValidation {
    /// Whether the plan passed every check
    pub valid: bool,
    /// First failing check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlanValidation {
    /// Passing result
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// Failing result
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Check a typed plan
#[must_use]
pub fn validate_plan(plan: &MealPlan) -> PlanValidation {
    if plan.id.trim().is_empty() {
        return PlanValidation::failed("Plan id is missing");
    }
    if plan.start_date > plan.end_date {
        return PlanValidation::failed(format!(
            "Start date {} is after end date {}",
            plan.start_date, plan.end_date
        ));
    }

    let expected = plan.expected_day_count();
    if plan.days.len() != expected {
        return PlanValidation::failed(format!(
            "Plan covers {expected} days but has {} day entries",
            plan.days.len()
        ));
    }

    for (index, day) in plan.days.iter().enumerate() {
        if plan.date_for_index(index) != Some(day.date) {
            return PlanValidation::failed(format!(
                "Day {index} is dated {} instead of following the start date",
                day.date
            ));
        }
    }

    PlanValidation::ok()
}

/// Check an untyped plan document before deserializing it
#[must_use]
pub fn validate_plan_document(document: &Value) -> PlanValidation {
    match check_document(document) {
        Ok(plan) => validate_plan(&plan),
        Err(error) => PlanValidation::failed(error),
    }
}

fn check_document(document: &Value) -> Result<MealPlan, String> {
    let object = document
        .as_object()
        .ok_or_else(|| "Plan document must be a JSON object".to_owned())?;

    match object.get("id").and_then(Value::as_str) {
        Some(id) if !id.trim().is_empty() => {}
        _ => return Err("Plan id is missing".to_owned()),
    }

    for field in ["startDate", "endDate"] {
        let raw = object
            .get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| format!("{field} is missing"))?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| format!("{field} '{raw}' is not a YYYY-MM-DD date: {e}"))?;
    }

    if !object.get("days").is_some_and(Value::is_array) {
        return Err("days must be an array".to_owned());
    }

    if let Some(profile) = object.get("ketoProfile") {
        let tag = profile
            .as_str()
            .ok_or_else(|| "ketoProfile must be a string".to_owned())?;
        if KetoProfile::parse(tag).is_none() {
            return Err(format!("Unknown keto profile '{tag}'"));
        }
    }

    MealPlan::deserialize(document).map_err(|e| format!("Malformed plan document: {e}"))
}

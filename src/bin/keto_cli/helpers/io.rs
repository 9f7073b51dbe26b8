// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: JSON file loading helpers for keto-cli
// ABOUTME: Reads catalogs, plans, and weight histories with path context on errors

use std::fs;
use std::path::Path;

use keto_planner::errors::{AppError, AppResult, ErrorCode};
use keto_planner::intelligence::Catalog;
use keto_planner::models::{MealPlan, WeightEntry};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Read a file to a string, naming the path on failure
pub fn read_file(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AppError::new(
            ErrorCode::StorageError,
            format!("Cannot read {}: {e}", path.display()),
        )
    })
}

/// Parse a JSON file into `T`
pub fn load_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = read_file(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("{} is not valid: {e}", path.display()),
        )
    })
}

/// Load a catalog document
pub fn load_catalog(path: &Path) -> AppResult<Catalog> {
    Catalog::from_json_file(path)
}

/// Load a typed plan
pub fn load_plan(path: &Path) -> AppResult<MealPlan> {
    let plan: MealPlan = load_json(path)?;
    debug!(plan.id = %plan.id, days = plan.days.len(), "Plan loaded");
    Ok(plan)
}

/// Load a plan as an untyped document
pub fn load_plan_document(path: &Path) -> AppResult<Value> {
    load_json(path)
}

/// Load a weight history
pub fn load_weight_history(path: &Path) -> AppResult<Vec<WeightEntry>> {
    load_json(path)
}

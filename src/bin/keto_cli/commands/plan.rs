// ABOUTME: Plan document command for keto-cli
// ABOUTME: Runs the structural plan check on a raw JSON document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use keto_planner::errors::AppResult;
use keto_planner::intelligence::validate_plan_document;
use tracing::warn;

use crate::helpers::display::print_json;
use crate::helpers::io::load_plan_document;

/// Print the structural check of a plan document
pub fn check_plan(plan_path: &Path) -> AppResult<()> {
    let document = load_plan_document(plan_path)?;
    let validation = validate_plan_document(&document);
    if let Some(error) = &validation.error {
        warn!(path = %plan_path.display(), "Plan document rejected: {error}");
    }
    print_json(&validation)
}

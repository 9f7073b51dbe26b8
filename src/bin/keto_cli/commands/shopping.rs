// ABOUTME: Shopping list command for keto-cli
// ABOUTME: Generates the list for a plan as JSON or as a printable checklist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use keto_planner::errors::AppResult;
use keto_planner::intelligence::{generate_shopping_list, shopping_list_to_printable_text};
use tracing::warn;

use crate::helpers::display::print_json;
use crate::helpers::io::{load_catalog, load_plan};

/// Print the shopping list of a plan
pub fn shopping(catalog_path: &Path, plan_path: &Path, as_text: bool) -> AppResult<()> {
    let catalog = load_catalog(catalog_path)?;
    let plan = load_plan(plan_path)?;

    let list = generate_shopping_list(&plan, &catalog, &catalog);
    if !list.missing_references.is_empty() {
        warn!(
            missing = ?list.missing_references,
            "Some plan entries are not in the catalog"
        );
    }

    if as_text {
        print!("{}", shopping_list_to_printable_text(&list));
        Ok(())
    } else {
        print_json(&list)
    }
}

// ABOUTME: Main library entry point for the keto planner engine
// ABOUTME: Nutrition aggregation, macro targets and validation, shopping lists, weight analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Keto Planner
//!
//! Planning engine for ketogenic meal plans. A caller holds a `MealPlan` and read-only
//! catalogs of `Food` and `Recipe`, and gets plain data back:
//!
//! - **Aggregation**: item, meal, day, and plan nutrition totals with weighted pH
//! - **Targets**: daily macro targets per keto profile
//! - **Validation**: per-axis tolerance verdicts that never block an edit
//! - **Shopping**: consolidated, unit-normalized shopping lists
//! - **Weight**: BMI, goal progress, weekly rate, goal-date projection
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use keto_planner::errors::AppResult;
//! use keto_planner::intelligence::{aggregate_day_nutrition, Catalog};
//! use keto_planner::models::MealPlan;
//!
//! fn main() -> AppResult<()> {
//!     let catalog = Catalog::from_json_file("catalog.json")?;
//!     let plan: MealPlan = serde_json::from_str(&std::fs::read_to_string("plan.json")?)?;
//!
//!     for day in &plan.days {
//!         let totals = aggregate_day_nutrition(day, &catalog, &catalog);
//!         println!("{}: {} kcal", day.date, totals.calories);
//!     }
//!     Ok(())
//! }
//! ```

/// Engine configuration with environment overrides
pub mod config;

/// Planning engine components
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Error types shared with `keto-core`
pub use keto_core::errors;

/// Data models shared with `keto-core`
pub use keto_core::models;

/// Domain constants shared with `keto-core`
pub use keto_core::constants;

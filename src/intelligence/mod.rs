// ABOUTME: Planning engine: aggregation, macro targets, validation, shopping lists, weight analytics
// ABOUTME: Pure computations over meal plans and read-only food/recipe catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The planning engine. Every component is a pure function (or a thin struct around
//! borrowed inputs) over meal plans and catalog lookups; none keeps state between calls.
//!
//! - [`nutrition_aggregator`]: item, meal, day, and plan totals, plus weighted pH
//! - [`nutritional_needs`]: daily macro targets per keto profile
//! - [`macro_validator`]: per-axis tolerance verdicts
//! - [`shopping_list`]: consolidated, unit-normalized shopping lists
//! - [`weight_analytics`]: BMI, goal progress, rate of change, goal date
//! - [`plan_editor`] / [`plan_validation`]: plan mutation with re-validation, structural checks

/// Read-only food and recipe lookups
pub mod catalog;
/// Daily macro target validation
pub mod macro_validator;
/// Nutrition totals for items, meals, days, and plans
pub mod nutrition_aggregator;
/// Macro targets from a calorie goal and keto profile
pub mod nutritional_needs;
/// Plan editing with per-day re-validation
pub mod plan_editor;
/// Structural plan checks
pub mod plan_validation;
/// Shopping list generation and checklist helpers
pub mod shopping_list;
/// Body-weight analytics
pub mod weight_analytics;

pub use catalog::{Catalog, CatalogDocument, FoodLookup, RecipeLookup};
pub use macro_validator::{
    deviation_percent, validate_macro_targets, validate_macro_targets_with, AxisVerdict,
    MacroVerdict,
};
pub use nutrition_aggregator::{
    aggregate_day_nutrition, aggregate_day_with_ph, aggregate_meal, aggregate_meal_detailed,
    aggregate_meal_nutrition, aggregate_plan_nutrition, weighted_day_ph, DayNutrition,
    ItemOutcome, MealAggregation, NutritionAggregator, PlanNutrition,
};
pub use nutritional_needs::{
    compute_nutritional_targets, compute_nutritional_targets_for_tag,
    compute_nutritional_targets_with,
};
pub use plan_editor::PlanEditor;
pub use plan_validation::{validate_plan, validate_plan_document, PlanValidation};
pub use shopping_list::{
    generate_shopping_list, generate_shopping_list_with, shopping_list_progress,
    shopping_list_to_printable_text, toggle_item,
};
pub use weight_analytics::{
    bmi_category, compute_bmi, predict_goal_date, predict_goal_date_at, predict_goal_date_with,
    weight_change, weight_change_at, weight_progress, BmiCategory, BmiClass, WeightChange,
};

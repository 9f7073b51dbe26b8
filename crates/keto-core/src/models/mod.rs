// ABOUTME: Core data models for the keto planner
// ABOUTME: Re-exports catalog, meal plan, shopping list, and weight history types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data exchanged between the planning engine and its collaborators (UI layer,
//! catalog store, weight-history provider). All models serialize to camelCase JSON,
//! the shape the UI collaborator already uses.
//!
//! ## Core Models
//!
//! - `Food`, `Recipe`: immutable catalog reference data
//! - `MealPlan`, `Day`, `Meal`, `MealItem`: the nested plan structure
//! - `NutritionValues`, `MacroTargets`: aggregation results and targets
//! - `ShoppingList`: derived, regenerated wholesale
//! - `WeightEntry`: append-only weight history

mod catalog;
mod nutrition;
mod plan;
mod shopping;
mod weight;

pub use catalog::{Food, Recipe, RecipeIngredient};
pub use nutrition::{
    net_carbs_within, round_to_digits, MacroCache, MacroTargets, NutritionFacts, NutritionValues,
};
pub use plan::{
    Day, DietType, ItemRef, ItemSource, KetoProfile, Meal, MealItem, MealPlan, MealSlot,
};
pub use shopping::{ShoppingItem, ShoppingList};
pub use weight::WeightEntry;

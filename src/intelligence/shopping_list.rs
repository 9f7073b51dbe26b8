// ABOUTME: Shopping list derivation from a meal plan with recipe expansion and unit normalization
// ABOUTME: Also provides progress, printable text rendering, and the checked-state toggle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Shopping List Generator
//!
//! 1. Walk every day, meal, and item. Recipes expand into their ingredients
//!    multiplied by servings; foods contribute their quantity.
//! 2. Accumulate grams per food id.
//! 3. Round each total up to the next rounding step (5 g by default).
//! 4. Express the line in the food's natural unit when it covers at least
//!    `natural_unit_threshold` units, otherwise in grams.
//! 5. Group by category and sort each group by name.
//!
//! Precomputed item caches play no part here: only quantities matter.

use chrono::Utc;
use keto_core::constants::shopping::GRAM_UNIT;
use keto_core::errors::{AppError, AppResult};
use keto_core::models::{round_to_digits, ItemRef, MealPlan, ShoppingItem, ShoppingList};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use tracing::{info, warn};

use super::catalog::{FoodLookup, RecipeLookup};
use crate::config::intelligence::{IntelligenceConfig, ShoppingListConfig};

/// Slack applied before rounding up so float noise (230.000_000_1 g) does not add a step
const ROUND_UP_EPSILON: f64 = 1e-9;

/// Checkbox glyph for an unchecked line
const UNCHECKED_GLYPH: char = '☐';
/// Checkbox glyph for a checked line
const CHECKED_GLYPH: char = '☑';

/// Generate a shopping list using the global configuration
pub fn generate_shopping_list<F, R>(plan: &MealPlan, foods: &F, recipes: &R) -> ShoppingList
where
    F: FoodLookup + ?Sized,
    R: RecipeLookup + ?Sized,
{
    generate_shopping_list_with(plan, foods, recipes, &IntelligenceConfig::global().shopping)
}

/// Generate a shopping list with explicit configuration
pub fn generate_shopping_list_with<F, R>(
    plan: &MealPlan,
    foods: &F,
    recipes: &R,
    config: &ShoppingListConfig,
) -> ShoppingList
where
    F: FoodLookup + ?Sized,
    R: RecipeLookup + ?Sized,
{
    let mut missing = BTreeSet::new();
    let required = required_grams(plan, recipes, &mut missing);

    let mut categories: BTreeMap<String, Vec<ShoppingItem>> = BTreeMap::new();
    for (food_id, grams) in required {
        if grams <= 0.0 {
            continue;
        }
        let Some(food) = foods.food(&food_id) else {
            warn!(
                food.id = %food_id,
                plan.id = %plan.id,
                "Food not found in catalog, leaving it off the shopping list"
            );
            missing.insert(food_id);
            continue;
        };

        let grams = round_up_to_step(grams, config.rounding_step_g);
        let (quantity, unit) = match food.natural_unit() {
            Some((unit_weight, unit_name))
                if grams / unit_weight >= config.natural_unit_threshold =>
            {
                (round_to_digits(grams / unit_weight, 1), unit_name.to_owned())
            }
            _ => (grams, GRAM_UNIT.to_owned()),
        };

        let category = food
            .category
            .as_deref()
            .map(str::trim)
            .filter(|category| !category.is_empty())
            .unwrap_or(config.default_category.as_str())
            .to_owned();

        categories.entry(category).or_default().push(ShoppingItem {
            id: food.id.clone(),
            name: food.name.clone(),
            quantity,
            unit,
            checked: false,
        });
    }

    for items in categories.values_mut() {
        items.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
    }

    let list = ShoppingList {
        plan_id: plan.id.clone(),
        plan_name: plan.name.clone(),
        start_date: plan.start_date,
        end_date: plan.end_date,
        generated_at: Utc::now(),
        categories,
        missing_references: missing.into_iter().collect(),
    };

    info!(
        plan.id = %plan.id,
        items = list.item_count(),
        categories = list.categories.len(),
        missing = list.missing_references.len(),
        "Shopping list generated"
    );

    list
}

/// Grams required per food id across the whole plan
fn required_grams<R>(
    plan: &MealPlan,
    recipes: &R,
    missing: &mut BTreeSet<String>,
) -> BTreeMap<String, f64>
where
    R: RecipeLookup + ?Sized,
{
    let mut required: BTreeMap<String, f64> = BTreeMap::new();
    let items = plan
        .days
        .iter()
        .flat_map(|day| day.meals.iter())
        .flat_map(|meal| meal.items.iter());

    for item in items {
        match &item.reference {
            ItemRef::Food { id, quantity } => {
                if quantity.is_finite() && *quantity > 0.0 {
                    *required.entry(id.clone()).or_default() += quantity;
                }
            }
            ItemRef::Recipe { id, servings } => {
                if !servings.is_finite() || *servings <= 0.0 {
                    continue;
                }
                let Some(recipe) = recipes.recipe(id) else {
                    warn!(
                        recipe.id = %id,
                        plan.id = %plan.id,
                        "Recipe not found in catalog, skipping its ingredients"
                    );
                    missing.insert(id.clone());
                    continue;
                };
                for ingredient in &recipe.ingredients {
                    if ingredient.quantity.is_finite() && ingredient.quantity > 0.0 {
                        *required.entry(ingredient.food_id.clone()).or_default() +=
                            ingredient.quantity * servings;
                    }
                }
            }
        }
    }

    required
}

fn round_up_to_step(grams: f64, step: f64) -> f64 {
    (grams / step - ROUND_UP_EPSILON).ceil() * step
}

/// Percentage of checked lines, rounded; 0 for an empty list
#[must_use]
pub fn shopping_list_progress(list: &ShoppingList) -> f64 {
    let total = list.item_count();
    if total == 0 {
        return 0.0;
    }
    (list.checked_count() as f64 / total as f64 * 100.0).round()
}

/// Flip the checked state of one line and return the new state
///
/// # Errors
///
/// Returns `ResourceNotFound` if the category or the item id is not on the list
pub fn toggle_item(list: &mut ShoppingList, category: &str, item_id: &str) -> AppResult<bool> {
    let item = list
        .categories
        .get_mut(category)
        .ok_or_else(|| AppError::not_found(format!("Shopping category {category}")))?
        .iter_mut()
        .find(|item| item.id == item_id)
        .ok_or_else(|| {
            AppError::not_found(format!("Shopping item {item_id}"))
                .with_resource_id(item_id.to_owned())
        })?;
    item.checked = !item.checked;
    Ok(item.checked)
}

/// Print-friendly text: title, period, then one section per category
#[must_use]
pub fn shopping_list_to_printable_text(list: &ShoppingList) -> String {
    let mut text = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(text, "Liste de courses - {}", list.plan_name);
    let _ = writeln!(text, "Du {} au {}", list.start_date, list.end_date);

    for (category, items) in &list.categories {
        let _ = writeln!(text);
        let _ = writeln!(text, "{category}");
        for item in items {
            let glyph = if item.checked {
                CHECKED_GLYPH
            } else {
                UNCHECKED_GLYPH
            };
            let _ = writeln!(text, "{glyph} {} - {} {}", item.name, item.quantity, item.unit);
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_up_to_step() {
        assert!((round_up_to_step(230.0, 5.0) - 230.0).abs() < f64::EPSILON);
        assert!((round_up_to_step(231.0, 5.0) - 235.0).abs() < f64::EPSILON);
        assert!((round_up_to_step(0.1 + 0.2 + 229.7, 5.0) - 230.0).abs() < f64::EPSILON);
    }
}

// ABOUTME: Nutrition aggregation across meal items, meals, days, and whole plans
// ABOUTME: Cache-or-recompute item resolution, per-level rounding, and weighted day pH
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Aggregator
//!
//! Sums item contributions into meal, day, and plan totals.
//!
//! - Food items scale `nutritionPer100g` by `quantity / 100`.
//! - Recipe items scale `nutritionPerServing` by `servings`.
//! - An item (or meal) carrying precomputed `macros` uses them verbatim.
//! - Items whose food/recipe is missing from the catalog contribute nothing and are
//!   reported as [`ItemOutcome::SkippedMissingReference`]. Plans may outlive catalog
//!   entries, so this is never an error.
//!
//! Meal totals are rounded to one decimal, day totals to whole numbers (both
//! configurable through [`AggregationConfig`]). Day totals are the sum of the rounded
//! meal totals.

use chrono::NaiveDate;
use keto_core::constants::nutrition::CATALOG_BASIS_G;
use keto_core::models::{
    round_to_digits, Day, DietType, ItemRef, ItemSource, Meal, MealItem, MealPlan, NutritionValues,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{FoodLookup, RecipeLookup};
use crate::config::intelligence::{AggregationConfig, IntelligenceConfig};

/// How a single item was resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum ItemOutcome {
    /// The item contributed these values
    Included(NutritionValues),
    /// The referenced food or recipe is not in the catalog
    SkippedMissingReference(String),
    /// Quantity or servings is negative or not a finite number
    SkippedInvalidQuantity(String),
}

impl ItemOutcome {
    /// Values contributed by the item (zero when skipped)
    #[must_use]
    pub const fn values(&self) -> NutritionValues {
        match self {
            Self::Included(values) => *values,
            Self::SkippedMissingReference(_) | Self::SkippedInvalidQuantity(_) => {
                NutritionValues::zero()
            }
        }
    }

    /// Whether the item was skipped
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        !matches!(self, Self::Included(_))
    }
}

/// Meal totals together with the per-item outcomes that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealAggregation {
    /// Rounded meal totals
    pub totals: NutritionValues,
    /// One outcome per item, in item order
    pub outcomes: Vec<ItemOutcome>,
}

impl MealAggregation {
    /// Number of items that contributed nothing
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    /// Catalog ids that could not be resolved
    #[must_use]
    pub fn missing_references(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                ItemOutcome::SkippedMissingReference(id) => Some(id.as_str()),
                ItemOutcome::Included(_) | ItemOutcome::SkippedInvalidQuantity(_) => None,
            })
            .collect()
    }
}

/// Totals for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayNutrition {
    /// Day date
    pub date: NaiveDate,
    /// Rounded day totals
    pub totals: NutritionValues,
    /// Weighted pH, only for alkaline plans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
}

/// Totals for a whole plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanNutrition {
    /// Per-day totals in plan order
    pub days: Vec<DayNutrition>,
    /// Sum of the day totals
    pub totals: NutritionValues,
    /// Totals divided by the number of days, rounded like meal totals
    pub daily_average: NutritionValues,
}

/// Aggregates nutrition against a pair of catalog lookups
pub struct NutritionAggregator<'a, F: ?Sized, R: ?Sized> {
    foods: &'a F,
    recipes: &'a R,
    config: &'a AggregationConfig,
}

impl<'a, F, R> NutritionAggregator<'a, F, R>
where
    F: FoodLookup + ?Sized,
    R: RecipeLookup + ?Sized,
{
    /// Aggregator using the global configuration
    pub fn new(foods: &'a F, recipes: &'a R) -> Self {
        Self::with_config(foods, recipes, &IntelligenceConfig::global().nutrition)
    }

    /// Aggregator with explicit configuration
    pub const fn with_config(foods: &'a F, recipes: &'a R, config: &'a AggregationConfig) -> Self {
        Self {
            foods,
            recipes,
            config,
        }
    }

    /// Resolve one item to its nutrition contribution
    #[must_use]
    pub fn item_nutrition(&self, item: &MealItem) -> ItemOutcome {
        match item.source() {
            ItemSource::Precomputed(values) => ItemOutcome::Included(values),
            ItemSource::Reference(ItemRef::Food { id, quantity }) => {
                if !is_valid_amount(*quantity) {
                    return ItemOutcome::SkippedInvalidQuantity(id.clone());
                }
                self.foods.food(id).map_or_else(
                    || {
                        debug!(food.id = %id, "Food not found in catalog, skipping item");
                        ItemOutcome::SkippedMissingReference(id.clone())
                    },
                    |food| {
                        ItemOutcome::Included(
                            food.nutrition_per_100g.scaled(quantity / CATALOG_BASIS_G),
                        )
                    },
                )
            }
            ItemSource::Reference(ItemRef::Recipe { id, servings }) => {
                if !is_valid_amount(*servings) {
                    return ItemOutcome::SkippedInvalidQuantity(id.clone());
                }
                self.recipes.recipe(id).map_or_else(
                    || {
                        debug!(recipe.id = %id, "Recipe not found in catalog, skipping item");
                        ItemOutcome::SkippedMissingReference(id.clone())
                    },
                    |recipe| ItemOutcome::Included(recipe.nutrition_per_serving.scaled(*servings)),
                )
            }
        }
    }

    /// Aggregate a list of items, keeping per-item outcomes
    #[must_use]
    pub fn meal_items_detailed(&self, items: &[MealItem]) -> MealAggregation {
        let outcomes: Vec<ItemOutcome> = items.iter().map(|item| self.item_nutrition(item)).collect();
        let totals = outcomes
            .iter()
            .map(ItemOutcome::values)
            .sum::<NutritionValues>()
            .rounded(self.config.meal_precision_digits);
        MealAggregation { totals, outcomes }
    }

    /// Rounded totals of a list of items
    #[must_use]
    pub fn meal_items(&self, items: &[MealItem]) -> NutritionValues {
        self.meal_items_detailed(items).totals
    }

    /// Rounded totals of a meal; a meal-level cache wins over its items
    #[must_use]
    pub fn meal(&self, meal: &Meal) -> NutritionValues {
        meal.cached_values().map_or_else(
            || self.meal_items(&meal.items),
            |cached| cached.rounded(self.config.meal_precision_digits),
        )
    }

    /// Rounded totals of a day: the sum of its rounded meal totals
    #[must_use]
    pub fn day(&self, day: &Day) -> NutritionValues {
        day.meals
            .iter()
            .map(|meal| self.meal(meal))
            .sum::<NutritionValues>()
            .rounded(self.config.day_precision_digits)
    }

    /// Mass-weighted pH of everything eaten on a day
    ///
    /// Foods weigh their quantity in grams; recipes weigh
    /// `servings × recipe_serving_mass_g`. Items without a pH value are ignored.
    /// Returns the neutral pH when nothing on the day carries a pH value.
    #[must_use]
    pub fn day_ph(&self, day: &Day) -> f64 {
        let (weighted_sum, total_weight) = day
            .meals
            .iter()
            .flat_map(|meal| meal.items.iter())
            .filter_map(|item| self.item_ph_contribution(item))
            .fold((0.0, 0.0), |(sum, weight), (ph, mass)| {
                (ph.mul_add(mass, sum), weight + mass)
            });

        if total_weight <= 0.0 {
            return self.config.neutral_ph;
        }
        round_to_digits(weighted_sum / total_weight, 1)
    }

    fn item_ph_contribution(&self, item: &MealItem) -> Option<(f64, f64)> {
        match &item.reference {
            ItemRef::Food { id, quantity } => {
                let ph = self.foods.food(id)?.ph_value?;
                (is_valid_amount(*quantity) && *quantity > 0.0).then_some((ph, *quantity))
            }
            ItemRef::Recipe { id, servings } => {
                let ph = self.recipes.recipe(id)?.average_ph_value?;
                (is_valid_amount(*servings) && *servings > 0.0)
                    .then(|| (ph, servings * self.config.recipe_serving_mass_g))
            }
        }
    }

    /// Day totals, with the weighted pH when the diet tracks it
    #[must_use]
    pub fn day_summary(&self, day: &Day, diet_type: DietType) -> DayNutrition {
        DayNutrition {
            date: day.date,
            totals: self.day(day),
            ph: diet_type.tracks_ph().then(|| self.day_ph(day)),
        }
    }
}

impl<F, R> NutritionAggregator<'_, F, R>
where
    F: FoodLookup + Sync + ?Sized,
    R: RecipeLookup + Sync + ?Sized,
{
    /// Per-day and whole-plan totals; days are aggregated in parallel
    #[must_use]
    pub fn plan(&self, plan: &MealPlan) -> PlanNutrition {
        let days: Vec<DayNutrition> = plan
            .days
            .par_iter()
            .map(|day| self.day_summary(day, plan.diet_type))
            .collect();

        let totals: NutritionValues = days.iter().map(|day| day.totals).sum();
        let day_count = days.len() as f64;
        let daily_average = totals
            .divided_by(day_count)
            .rounded(self.config.meal_precision_digits);

        debug!(
            plan.id = %plan.id,
            days = days.len(),
            calories = totals.calories,
            "Plan nutrition aggregated"
        );

        PlanNutrition {
            days,
            totals,
            daily_average,
        }
    }
}

fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}

/// Rounded totals of a list of meal items
pub fn aggregate_meal_nutrition<F, R>(items: &[MealItem], foods: &F, recipes: &R) -> NutritionValues
where
    F: FoodLookup + ?Sized,
    R: RecipeLookup + ?Sized,
{
    NutritionAggregator::new(foods, recipes).meal_items(items)
}

/// Rounded totals of a list of meal items with per-item outcomes
pub fn aggregate_meal_detailed<F, R>(items: &[MealItem], foods: &F, recipes: &R) -> MealAggregation
where
    F: FoodLookup + ?Sized,
    R: RecipeLookup + ?Sized,
{
    NutritionAggregator::new(foods, recipes).meal_items_detailed(items)
}

/// Rounded totals of a meal, honoring a meal-level cache
pub fn aggregate_meal<F, R>(meal: &Meal, foods: &F, recipes: &R) -> NutritionValues
where
    F: FoodLookup + ?Sized,
    R: RecipeLookup + ?Sized,
{
    NutritionAggregator::new(foods, recipes).meal(meal)
}

/// Rounded totals of a day
pub fn aggregate_day_nutrition<F, R>(day: &Day, foods: &F, recipes: &R) -> NutritionValues
where
    F: FoodLookup + ?Sized,
    R: RecipeLookup + ?Sized,
{
    NutritionAggregator::new(foods, recipes).day(day)
}

/// Day totals plus the weighted pH for alkaline plans
pub fn aggregate_day_with_ph<F, R>(
    day: &Day,
    diet_type: DietType,
    foods: &F,
    recipes: &R,
) -> DayNutrition
where
    F: FoodLookup + ?Sized,
    R: RecipeLookup + ?Sized,
{
    NutritionAggregator::new(foods, recipes).day_summary(day, diet_type)
}

/// Mass-weighted pH of a day
pub fn weighted_day_ph<F, R>(day: &Day, foods: &F, recipes: &R) -> f64
where
    F: FoodLookup + ?Sized,
    R: RecipeLookup + ?Sized,
{
    NutritionAggregator::new(foods, recipes).day_ph(day)
}

/// Per-day and whole-plan totals
pub fn aggregate_plan_nutrition<F, R>(plan: &MealPlan, foods: &F, recipes: &R) -> PlanNutrition
where
    F: FoodLookup + Sync + ?Sized,
    R: RecipeLookup + Sync + ?Sized,
{
    NutritionAggregator::new(foods, recipes).plan(plan)
}

// ABOUTME: Meal plan editing session that re-validates the edited day after every mutation
// ABOUTME: Applies add/update/delete, aggregates the day, and returns a MacroVerdict (warn-but-proceed)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use keto_core::errors::AppResult;
use keto_core::models::{MacroTargets, Meal, MealPlan, NutritionValues};
use tracing::{info, warn};

use super::catalog::{FoodLookup, RecipeLookup};
use super::macro_validator::{validate_macro_targets, MacroVerdict};
use super::nutrition_aggregator::NutritionAggregator;
use super::nutritional_needs::compute_nutritional_targets;

/// Editing session over one plan
///
/// Mutations never get rejected for nutritional reasons: an out-of-band day is logged
/// and the verdict is handed back so the caller can decide what to do with it.
pub struct PlanEditor<'a, F: ?Sized, R: ?Sized> {
    plan: MealPlan,
    foods: &'a F,
    recipes: &'a R,
    targets: MacroTargets,
}

impl<'a, F, R> PlanEditor<'a, F, R>
where
    F: FoodLookup + ?Sized,
    R: RecipeLookup + ?Sized,
{
    /// Editor validating days against `targets`
    pub const fn new(plan: MealPlan, foods: &'a F, recipes: &'a R, targets: MacroTargets) -> Self {
        Self {
            plan,
            foods,
            recipes,
            targets,
        }
    }

    /// Editor whose targets come from the plan's keto profile
    pub fn for_calories(
        plan: MealPlan,
        foods: &'a F,
        recipes: &'a R,
        calories: Option<f64>,
    ) -> Self {
        let targets = compute_nutritional_targets(calories, plan.keto_profile);
        Self::new(plan, foods, recipes, targets)
    }

    /// Plan being edited
    pub const fn plan(&self) -> &MealPlan {
        &self.plan
    }

    /// Daily targets
    pub const fn targets(&self) -> &MacroTargets {
        &self.targets
    }

    /// End the session and take the plan back
    pub fn into_plan(self) -> MealPlan {
        self.plan
    }

    /// Add a meal and validate its day
    ///
    /// # Errors
    ///
    /// Propagates `MealPlan::add_meal` errors; the plan is unchanged on error
    pub fn add_meal(&mut self, day_index: usize, meal: Meal) -> AppResult<MacroVerdict> {
        self.plan.add_meal(day_index, meal)?;
        self.day_verdict(day_index)
    }

    /// Replace a meal and validate its day
    ///
    /// # Errors
    ///
    /// Propagates `MealPlan::update_meal` errors; the plan is unchanged on error
    pub fn update_meal(
        &mut self,
        day_index: usize,
        meal_id: &str,
        meal: Meal,
    ) -> AppResult<MacroVerdict> {
        self.plan.update_meal(day_index, meal_id, meal)?;
        self.day_verdict(day_index)
    }

    /// Remove a meal and validate its day
    ///
    /// # Errors
    ///
    /// Propagates `MealPlan::delete_meal` errors; the plan is unchanged on error
    pub fn delete_meal(&mut self, day_index: usize, meal_id: &str) -> AppResult<MacroVerdict> {
        let removed = self.plan.delete_meal(day_index, meal_id)?;
        info!(plan.id = %self.plan.id, meal.id = %removed.id, day_index, "Meal removed");
        self.day_verdict(day_index)
    }

    /// Current totals of a day
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown day index
    pub fn day_totals(&self, day_index: usize) -> AppResult<NutritionValues> {
        let day = self.plan.day(day_index)?;
        Ok(NutritionAggregator::new(self.foods, self.recipes).day(day))
    }

    /// Validate a day against the session targets, logging a warning when out of band
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown day index
    pub fn day_verdict(&self, day_index: usize) -> AppResult<MacroVerdict> {
        let totals = self.day_totals(day_index)?;
        let verdict = validate_macro_targets(&totals, &self.targets, self.plan.keto_profile);
        if !verdict.all_within_tolerance {
            warn!(
                plan.id = %self.plan.id,
                day_index,
                failing = ?verdict.failing_axes(),
                calories = totals.calories,
                "Day is outside macro tolerance"
            );
        }
        Ok(verdict)
    }
}

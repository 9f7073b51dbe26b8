// ABOUTME: Nutrition aggregation configuration for meal, day, and pH calculations
// ABOUTME: Configures rounding precision per aggregation level and the recipe mass heuristic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Aggregation Configuration
//!
//! Meal totals keep one decimal while day totals are rounded to whole numbers. Day totals
//! are built from the already-rounded meal totals, so a day can differ slightly from the
//! unrounded sum of its items. That drift is accepted to keep larger aggregates from
//! accumulating rounding noise upward.

use keto_core::constants::nutrition::{
    DAY_PRECISION_DIGITS, MEAL_PRECISION_DIGITS, NEUTRAL_PH, RECIPE_SERVING_MASS_G,
};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest supported rounding precision
const MAX_PRECISION_DIGITS: u32 = 6;

/// Nutrition aggregation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Decimal places kept on meal totals (default 1)
    pub meal_precision_digits: u32,
    /// Decimal places kept on day totals (default 0)
    pub day_precision_digits: u32,
    /// Gram-equivalent mass of one recipe serving in the weighted pH average (default 250).
    /// Recipes carry no total mass, so this is an approximation with no stated error bound.
    pub recipe_serving_mass_g: f64,
    /// pH reported when nothing on a day carries a pH value (default 7.0)
    pub neutral_ph: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            meal_precision_digits: MEAL_PRECISION_DIGITS,
            day_precision_digits: DAY_PRECISION_DIGITS,
            recipe_serving_mass_g: RECIPE_SERVING_MASS_G,
            neutral_ph: NEUTRAL_PH,
        }
    }
}

impl AggregationConfig {
    /// Validate precision and heuristic bounds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a precision above 6 digits,
    /// a non-positive recipe mass, or a neutral pH outside 0-14
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.meal_precision_digits > MAX_PRECISION_DIGITS
            || self.day_precision_digits > MAX_PRECISION_DIGITS
        {
            return Err(ConfigError::ValueOutOfRange(
                "Rounding precision must be at most 6 digits",
            ));
        }
        if self.recipe_serving_mass_g <= 0.0 || !self.recipe_serving_mass_g.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "Recipe serving mass must be positive",
            ));
        }
        if !(0.0..=14.0).contains(&self.neutral_ph) {
            return Err(ConfigError::ValueOutOfRange(
                "Neutral pH must be between 0 and 14",
            ));
        }
        Ok(())
    }
}

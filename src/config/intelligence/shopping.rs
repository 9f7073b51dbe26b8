// ABOUTME: Shopping list generation configuration
// ABOUTME: Rounding step, natural-unit threshold, and the fallback category name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use keto_core::constants::shopping::{DEFAULT_CATEGORY, NATURAL_UNIT_THRESHOLD, ROUNDING_STEP_G};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Shopping list configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingListConfig {
    /// Required grams are rounded up to a multiple of this step (default 5)
    pub rounding_step_g: f64,
    /// A line switches to the natural unit once it covers at least this many units (default 0.75)
    pub natural_unit_threshold: f64,
    /// Category for foods without one (default "Autres")
    pub default_category: String,
}

impl Default for ShoppingListConfig {
    fn default() -> Self {
        Self {
            rounding_step_g: ROUNDING_STEP_G,
            natural_unit_threshold: NATURAL_UNIT_THRESHOLD,
            default_category: DEFAULT_CATEGORY.to_owned(),
        }
    }
}

impl ShoppingListConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a non-positive step or threshold and
    /// `ConfigError::MissingField` for a blank default category
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounding_step_g <= 0.0 || !self.rounding_step_g.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "Shopping rounding step must be positive",
            ));
        }
        if self.natural_unit_threshold <= 0.0 || self.natural_unit_threshold > 10.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Natural unit threshold must be between 0 and 10 units",
            ));
        }
        if self.default_category.trim().is_empty() {
            return Err(ConfigError::MissingField("default_category"));
        }
        Ok(())
    }
}

// ABOUTME: Planner engine configuration for aggregation, targets, shopping, and weight analytics
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Type-safe configuration for every engine component. Defaults carry the documented
//! planning constants; `KETO_*` environment variables override individual values.
//!
//! # Module Structure
//!
//! - `nutrition` - Aggregation rounding and the pH weighting heuristic
//! - `targets` - Keto profile macro splits and tolerance bands
//! - `shopping` - Shopping list rounding and unit conversion
//! - `weight` - Weight trend window and projection horizon

pub mod error;
pub mod nutrition;
pub mod shopping;
pub mod targets;
pub mod weight;

pub use error::ConfigError;
pub use nutrition::AggregationConfig;
pub use shopping::ShoppingListConfig;
pub use targets::{KetoProfilesConfig, MacroSplit, ToleranceConfig};
pub use weight::WeightAnalyticsConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig<true>> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelligenceConfig<const VALIDATED: bool = false> {
    /// Nutrition aggregation settings
    pub nutrition: AggregationConfig,
    /// Keto profile macro splits
    pub targets: KetoProfilesConfig,
    /// Macro tolerance bands
    pub tolerances: ToleranceConfig,
    /// Shopping list generation settings
    pub shopping: ShoppingListConfig,
    /// Weight analytics settings
    pub weight: WeightAnalyticsConfig,
    #[serde(skip)]
    _phantom: PhantomData<()>,
}

impl IntelligenceConfig<true> {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error encountered
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.targets.validate()?;
        self.tolerances.validate()?;
        self.shopping.validate()?;
        self.weight.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(env::VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        *target = val
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Aggregation
        Self::apply_env_var(
            "KETO_MEAL_PRECISION_DIGITS",
            &mut self.nutrition.meal_precision_digits,
        )?;
        Self::apply_env_var(
            "KETO_DAY_PRECISION_DIGITS",
            &mut self.nutrition.day_precision_digits,
        )?;
        Self::apply_env_var(
            "KETO_RECIPE_SERVING_MASS_G",
            &mut self.nutrition.recipe_serving_mass_g,
        )?;

        // Targets and tolerances
        Self::apply_env_var("KETO_DEFAULT_CALORIES", &mut self.targets.default_calories)?;
        Self::apply_env_var(
            "KETO_TOLERANCE_CALORIES_PCT",
            &mut self.tolerances.calories_pct,
        )?;
        Self::apply_env_var(
            "KETO_TOLERANCE_PROTEIN_PCT",
            &mut self.tolerances.protein_pct,
        )?;
        Self::apply_env_var(
            "KETO_TOLERANCE_PROTEIN_STRICT_PCT",
            &mut self.tolerances.protein_strict_pct,
        )?;
        Self::apply_env_var("KETO_TOLERANCE_FAT_PCT", &mut self.tolerances.fat_pct)?;
        Self::apply_env_var("KETO_TOLERANCE_CARBS_PCT", &mut self.tolerances.carbs_pct)?;

        // Shopping
        Self::apply_env_var(
            "KETO_SHOPPING_ROUNDING_STEP_G",
            &mut self.shopping.rounding_step_g,
        )?;
        Self::apply_env_var(
            "KETO_SHOPPING_UNIT_THRESHOLD",
            &mut self.shopping.natural_unit_threshold,
        )?;
        Self::apply_env_var(
            "KETO_SHOPPING_DEFAULT_CATEGORY",
            &mut self.shopping.default_category,
        )?;

        // Weight
        Self::apply_env_var(
            "KETO_WEIGHT_WINDOW_DAYS",
            &mut self.weight.change_window_days,
        )?;
        Self::apply_env_var(
            "KETO_WEIGHT_MAX_PROJECTION_WEEKS",
            &mut self.weight.max_projection_weeks,
        )?;

        Ok(self)
    }
}

impl Default for IntelligenceConfig<true> {
    fn default() -> Self {
        Self {
            nutrition: AggregationConfig::default(),
            targets: KetoProfilesConfig::default(),
            tolerances: ToleranceConfig::default(),
            shopping: ShoppingListConfig::default(),
            weight: WeightAnalyticsConfig::default(),
            _phantom: PhantomData,
        }
    }
}

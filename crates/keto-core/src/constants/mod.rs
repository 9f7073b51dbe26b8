// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, rounding defaults, and analytics thresholds for keto planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large block.
//! Tunable values live in the planner configuration; the values here are either physical
//! facts or the defaults that configuration starts from.

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrates: 4 kcal/g
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Nutrition aggregation defaults
pub mod nutrition {
    /// Decimal places kept on meal totals
    pub const MEAL_PRECISION_DIGITS: u32 = 1;
    /// Decimal places kept on day totals
    pub const DAY_PRECISION_DIGITS: u32 = 0;
    /// Gram-equivalent mass assigned to one recipe serving when weighting pH.
    /// Heuristic, not a measured value.
    pub const RECIPE_SERVING_MASS_G: f64 = 250.0;
    /// Neutral pH reported when nothing on the day carries a pH value
    pub const NEUTRAL_PH: f64 = 7.0;
    /// Food quantities are expressed per this many grams in the catalog
    pub const CATALOG_BASIS_G: f64 = 100.0;
}

/// Macro target defaults
pub mod targets {
    /// Daily calorie target used when the profile does not define one
    pub const DEFAULT_CALORIES: f64 = 2000.0;
}

/// Shopping list defaults
pub mod shopping {
    /// Quantities are rounded up to a multiple of this many grams
    pub const ROUNDING_STEP_G: f64 = 5.0;
    /// Minimum count of natural units before a line switches away from grams
    pub const NATURAL_UNIT_THRESHOLD: f64 = 0.75;
    /// Category for foods without one
    pub const DEFAULT_CATEGORY: &str = "Autres";
    /// Unit label for gram quantities
    pub const GRAM_UNIT: &str = "g";
}

/// Weight analytics defaults
pub mod weight {
    /// Look-back window for the rate-of-change calculation
    pub const CHANGE_WINDOW_DAYS: i64 = 30;
    /// Projections further out than this are considered too uncertain
    pub const MAX_PROJECTION_WEEKS: f64 = 52.0;
    /// Days per week
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Library/service name
    pub const KETO_PLANNER: &str = "keto-planner";
    /// CLI binary name
    pub const KETO_CLI: &str = "keto-cli";
}

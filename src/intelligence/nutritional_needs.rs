// ABOUTME: Daily macro target derivation from a calorie goal and a keto profile
// ABOUTME: Protein first with a per-profile floor, remainder re-split between fat and carbs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutritional Needs Calculator
//!
//! Protein is computed first from the profile's protein percentage and raised to the
//! profile's protein floor. The calories left after protein are split between fat and
//! carbohydrates in the ratio of their profile percentages, so a raised protein floor
//! shrinks fat and carbs rather than inflating the calorie total.

use keto_core::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use keto_core::models::{KetoProfile, MacroTargets};
use tracing::debug;

use crate::config::intelligence::{IntelligenceConfig, KetoProfilesConfig};

/// Macro targets for `calories` (default target when absent or non-positive)
#[must_use]
pub fn compute_nutritional_targets(calories: Option<f64>, profile: KetoProfile) -> MacroTargets {
    compute_nutritional_targets_with(calories, profile, &IntelligenceConfig::global().targets)
}

/// Macro targets with an explicit profile table
#[must_use]
pub fn compute_nutritional_targets_with(
    calories: Option<f64>,
    profile: KetoProfile,
    config: &KetoProfilesConfig,
) -> MacroTargets {
    let calories = calories
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(config.default_calories);
    let split = config.split_for(profile);

    let protein_by_share =
        (calories * f64::from(split.protein_pct) / 100.0 / KCAL_PER_G_PROTEIN).round();
    let protein = protein_by_share.max(split.protein_floor_g);

    let remaining = protein.mul_add(-KCAL_PER_G_PROTEIN, calories).max(0.0);
    let fat = (remaining * split.fat_share_of_remainder() / KCAL_PER_G_FAT).round();
    let carbs = (remaining * split.carb_share_of_remainder() / KCAL_PER_G_CARBS).round();

    debug!(
        profile = profile.id(),
        calories,
        protein,
        fat,
        carbs,
        "Computed macro targets"
    );

    MacroTargets {
        calories,
        protein,
        fat,
        carbs,
        net_carbs: carbs,
    }
}

/// Macro targets for a profile given as a plan-document tag; unknown tags use `standard`
#[must_use]
pub fn compute_nutritional_targets_for_tag(
    calories: Option<f64>,
    profile_tag: &str,
) -> MacroTargets {
    compute_nutritional_targets(calories, KetoProfile::from_str_lossy(profile_tag))
}

// ABOUTME: Validates aggregated nutrition against macro targets with per-axis tolerance bands
// ABOUTME: Produces a MacroVerdict value; enforcement policy is left to the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Target Validator
//!
//! Four axes are checked: calories, protein, fat, and carbs. The carbs axis compares the
//! day's **net** carbs with the carb target. Protein uses a tighter band for profiles that
//! prioritize protein precision.

use keto_core::models::{KetoProfile, MacroTargets, NutritionValues};
use serde::{Deserialize, Serialize};

use crate::config::intelligence::{IntelligenceConfig, ToleranceConfig};

/// Deviation reported when the target is non-positive but the actual value is not zero
const DEVIATION_WITHOUT_TARGET_PCT: f64 = 100.0;

/// Verdict for one macro axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisVerdict {
    /// Aggregated value
    pub actual: f64,
    /// Target value
    pub target: f64,
    /// Absolute deviation from target in percent, rounded to an integer
    pub deviation_percent: f64,
    /// Allowed deviation in percent
    pub tolerance_percent: f64,
    /// Whether the unrounded deviation is within the band
    pub within_tolerance: bool,
}

impl AxisVerdict {
    /// Evaluate one axis
    #[must_use]
    pub fn evaluate(actual: f64, target: f64, tolerance_percent: f64) -> Self {
        let deviation = deviation_percent(actual, target);
        Self {
            actual,
            target,
            deviation_percent: deviation.round(),
            tolerance_percent,
            within_tolerance: deviation <= tolerance_percent,
        }
    }
}

/// Verdict for a full set of macros
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroVerdict {
    /// Calories axis
    pub calories: AxisVerdict,
    /// Protein axis
    pub protein: AxisVerdict,
    /// Fat axis
    pub fat: AxisVerdict,
    /// Net carbs against the carb target
    pub carbs: AxisVerdict,
    /// Whether every axis is within its band
    pub all_within_tolerance: bool,
}

impl MacroVerdict {
    /// Names of the axes outside their band
    #[must_use]
    pub fn failing_axes(&self) -> Vec<&'static str> {
        [
            ("calories", &self.calories),
            ("protein", &self.protein),
            ("fat", &self.fat),
            ("carbs", &self.carbs),
        ]
        .into_iter()
        .filter(|(_, axis)| !axis.within_tolerance)
        .map(|(name, _)| name)
        .collect()
    }
}

/// `|actual - target| / target × 100`
///
/// A non-positive target yields 0 when `actual` is also zero and 100 otherwise.
#[must_use]
pub fn deviation_percent(actual: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return if actual.abs() < f64::EPSILON {
            0.0
        } else {
            DEVIATION_WITHOUT_TARGET_PCT
        };
    }
    (actual - target).abs() / target * 100.0
}

/// Validate totals against targets using the global tolerance bands
#[must_use]
pub fn validate_macro_targets(
    totals: &NutritionValues,
    targets: &MacroTargets,
    profile: KetoProfile,
) -> MacroVerdict {
    validate_macro_targets_with(
        totals,
        targets,
        profile,
        &IntelligenceConfig::global().tolerances,
    )
}

/// Validate totals against targets with explicit tolerance bands
#[must_use]
pub fn validate_macro_targets_with(
    totals: &NutritionValues,
    targets: &MacroTargets,
    profile: KetoProfile,
    tolerances: &ToleranceConfig,
) -> MacroVerdict {
    let calories = AxisVerdict::evaluate(totals.calories, targets.calories, tolerances.calories_pct);
    let protein = AxisVerdict::evaluate(
        totals.protein,
        targets.protein,
        tolerances.protein_for(profile),
    );
    let fat = AxisVerdict::evaluate(totals.fat, targets.fat, tolerances.fat_pct);
    let carbs = AxisVerdict::evaluate(totals.net_carbs, targets.carbs, tolerances.carbs_pct);

    MacroVerdict {
        all_within_tolerance: calories.within_tolerance
            && protein.within_tolerance
            && fat.within_tolerance
            && carbs.within_tolerance,
        calories,
        protein,
        fat,
        carbs,
    }
}

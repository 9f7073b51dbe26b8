// ABOUTME: Nutrition value models for catalog records, aggregation totals, and targets
// ABOUTME: NutritionFacts, NutritionValues, and MacroTargets with net-carb derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Nutrition record stored in the catalog
///
/// Foods carry it on a per-100 g basis, recipes per serving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (g)
    #[serde(default)]
    pub protein: f64,
    /// Fat (g)
    #[serde(default)]
    pub fat: f64,
    /// Total carbohydrates (g)
    #[serde(default)]
    pub carbs: f64,
    /// Dietary fiber (g)
    #[serde(default)]
    pub fiber: f64,
    /// Net carbohydrates (g), when the source publishes it directly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_carbs: Option<f64>,
}

impl NutritionFacts {
    /// Net carbs of this record: the published value if present, otherwise
    /// `carbs - fiber`, kept within `0..=carbs`
    #[must_use]
    pub fn net_carbs(&self) -> f64 {
        net_carbs_within(self.carbs, self.fiber, self.net_carbs)
    }

    /// Scale this record by `factor` (e.g. `quantity / 100` or `servings`)
    #[must_use]
    pub fn scaled(&self, factor: f64) -> NutritionValues {
        NutritionValues {
            calories: self.calories * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
            carbs: self.carbs * factor,
            fiber: self.fiber * factor,
            net_carbs: self.net_carbs() * factor,
        }
    }
}

/// Aggregated nutrition for an item, meal, day, or plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionValues {
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (g)
    #[serde(default)]
    pub protein: f64,
    /// Fat (g)
    #[serde(default)]
    pub fat: f64,
    /// Total carbohydrates (g)
    #[serde(default)]
    pub carbs: f64,
    /// Dietary fiber (g)
    #[serde(default)]
    pub fiber: f64,
    /// Net carbohydrates (g)
    #[serde(default)]
    pub net_carbs: f64,
}

impl NutritionValues {
    /// All-zero values
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            calories: 0.0,
            protein: 0.0,
            fat: 0.0,
            carbs: 0.0,
            fiber: 0.0,
            net_carbs: 0.0,
        }
    }

    /// Round every field to `digits` decimal places
    #[must_use]
    pub fn rounded(&self, digits: u32) -> Self {
        Self {
            calories: round_to_digits(self.calories, digits),
            protein: round_to_digits(self.protein, digits),
            fat: round_to_digits(self.fat, digits),
            carbs: round_to_digits(self.carbs, digits),
            fiber: round_to_digits(self.fiber, digits),
            net_carbs: round_to_digits(self.net_carbs, digits),
        }
    }

    /// Divide every field by `divisor`; a zero divisor yields zeros
    #[must_use]
    pub fn divided_by(&self, divisor: f64) -> Self {
        if divisor.abs() < f64::EPSILON {
            return Self::zero();
        }
        Self {
            calories: self.calories / divisor,
            protein: self.protein / divisor,
            fat: self.fat / divisor,
            carbs: self.carbs / divisor,
            fiber: self.fiber / divisor,
            net_carbs: self.net_carbs / divisor,
        }
    }
}

impl Add for NutritionValues {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
            carbs: self.carbs + rhs.carbs,
            fiber: self.fiber + rhs.fiber,
            net_carbs: self.net_carbs + rhs.net_carbs,
        }
    }
}

impl AddAssign for NutritionValues {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutritionValues {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

/// Precomputed macros cached on a plan item or meal
///
/// Plan documents keep calories beside the `macros` object; a `calories` field inside
/// the object is accepted as well. Net carbs are derived when the cache omits them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroCache {
    /// Energy (kcal), when stored inside the macros object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein (g)
    #[serde(default)]
    pub protein: f64,
    /// Fat (g)
    #[serde(default)]
    pub fat: f64,
    /// Total carbohydrates (g)
    #[serde(default)]
    pub carbs: f64,
    /// Dietary fiber (g)
    #[serde(default)]
    pub fiber: f64,
    /// Net carbohydrates (g), when cached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_carbs: Option<f64>,
}

impl MacroCache {
    /// Cache holding `values`; calories are left to the owner's `calories` field
    #[must_use]
    pub const fn from_values(values: &NutritionValues) -> Self {
        Self {
            calories: None,
            protein: values.protein,
            fat: values.fat,
            carbs: values.carbs,
            fiber: values.fiber,
            net_carbs: Some(values.net_carbs),
        }
    }

    /// Full nutrition values, taking calories from `calories` first, then from the cache
    #[must_use]
    pub fn to_values(&self, calories: Option<f64>) -> NutritionValues {
        NutritionValues {
            calories: calories.or(self.calories).unwrap_or(0.0),
            protein: self.protein,
            fat: self.fat,
            carbs: self.carbs,
            fiber: self.fiber,
            net_carbs: net_carbs_within(self.carbs, self.fiber, self.net_carbs),
        }
    }
}

/// Net carbs from a published value or `carbs - fiber`, clamped to `0..=carbs`
#[must_use]
pub fn net_carbs_within(carbs: f64, fiber: f64, published: Option<f64>) -> f64 {
    published
        .unwrap_or(carbs - fiber)
        .clamp(0.0, carbs.max(0.0))
}

/// Daily macro targets derived from a calorie goal and keto profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    /// Energy target (kcal)
    pub calories: f64,
    /// Protein target (g)
    pub protein: f64,
    /// Fat target (g)
    pub fat: f64,
    /// Carbohydrate target (g)
    pub carbs: f64,
    /// Net carbohydrate target (g); equals `carbs` since fiber is not modeled in targets
    pub net_carbs: f64,
}

/// Round `value` half away from zero to `digits` decimal places
#[must_use]
pub fn round_to_digits(value: f64, digits: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}

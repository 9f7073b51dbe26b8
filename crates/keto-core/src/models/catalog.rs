// ABOUTME: Catalog reference data models for foods and recipes
// ABOUTME: Food, Recipe, and RecipeIngredient as owned by the external catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::nutrition::NutritionFacts;

/// A food in the catalog
///
/// Immutable reference data. Nutrition is expressed per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Shopping-list grouping tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Nutrition per 100 g
    pub nutrition_per_100g: NutritionFacts,
    /// pH value on the 0-14 scale
    #[serde(
        default,
        rename = "pHValue",
        skip_serializing_if = "Option::is_none"
    )]
    pub ph_value: Option<f64>,
    /// Grams per natural unit (one egg, one avocado)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_unit_weight: Option<f64>,
    /// Natural unit label ("oeuf", "avocat")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
}

impl Food {
    /// Natural unit weight and label, when both are defined and the weight is positive
    #[must_use]
    pub fn natural_unit(&self) -> Option<(f64, &str)> {
        match (self.common_unit_weight, self.unit_name.as_deref()) {
            (Some(weight), Some(name)) if weight > 0.0 && !name.is_empty() => Some((weight, name)),
            _ => None,
        }
    }
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    /// Referenced food id
    pub food_id: String,
    /// Grams of the food per serving
    pub quantity: f64,
}

/// A recipe in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Nutrition for one serving
    pub nutrition_per_serving: NutritionFacts,
    /// Ingredients for one serving, in recipe order
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    /// Average pH of the prepared dish
    #[serde(
        default,
        rename = "averagePHValue",
        skip_serializing_if = "Option::is_none"
    )]
    pub average_ph_value: Option<f64>,
}

// ABOUTME: Read-only food and recipe lookups consumed by the planning engine
// ABOUTME: FoodLookup/RecipeLookup traits plus an in-memory Catalog loadable from JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog lookups
//!
//! The engine never owns or mutates catalog data. Callers pass anything implementing
//! [`FoodLookup`] / [`RecipeLookup`]; lookups must be `Sync` so that plan aggregation
//! can run days in parallel.

use keto_core::errors::AppResult;
use keto_core::models::{Food, Recipe};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Resolve a food by id
pub trait FoodLookup {
    /// Food with `id`, if the catalog has it
    fn food(&self, id: &str) -> Option<&Food>;
}

/// Resolve a recipe by id
pub trait RecipeLookup {
    /// Recipe with `id`, if the catalog has it
    fn recipe(&self, id: &str) -> Option<&Recipe>;
}

impl FoodLookup for HashMap<String, Food> {
    fn food(&self, id: &str) -> Option<&Food> {
        self.get(id)
    }
}

impl RecipeLookup for HashMap<String, Recipe> {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.get(id)
    }
}

impl<T: FoodLookup + ?Sized> FoodLookup for &T {
    fn food(&self, id: &str) -> Option<&Food> {
        (**self).food(id)
    }
}

impl<T: RecipeLookup + ?Sized> RecipeLookup for &T {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        (**self).recipe(id)
    }
}

/// Serialized catalog document: `{"foods": [...], "recipes": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Foods
    #[serde(default)]
    pub foods: Vec<Food>,
    /// Recipes
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

/// In-memory food and recipe catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    foods: HashMap<String, Food>,
    recipes: HashMap<String, Recipe>,
}

impl Catalog {
    /// Build a catalog; on duplicate ids the last entry wins
    #[must_use]
    pub fn new(foods: Vec<Food>, recipes: Vec<Recipe>) -> Self {
        let mut food_index = HashMap::with_capacity(foods.len());
        for food in foods {
            if let Some(previous) = food_index.insert(food.id.clone(), food) {
                warn!(food.id = %previous.id, "Duplicate food id in catalog, keeping last entry");
            }
        }

        let mut recipe_index = HashMap::with_capacity(recipes.len());
        for recipe in recipes {
            if let Some(previous) = recipe_index.insert(recipe.id.clone(), recipe) {
                warn!(recipe.id = %previous.id, "Duplicate recipe id in catalog, keeping last entry");
            }
        }

        Self {
            foods: food_index,
            recipes: recipe_index,
        }
    }

    /// Parse a catalog document
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON is malformed
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::from(document))
    }

    /// Read and parse a catalog document from disk
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read and a serialization
    /// error if its JSON is malformed
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            foods = catalog.food_count(),
            recipes = catalog.recipe_count(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Number of foods
    #[must_use]
    pub fn food_count(&self) -> usize {
        self.foods.len()
    }

    /// Number of recipes
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }
}

impl From<CatalogDocument> for Catalog {
    fn from(document: CatalogDocument) -> Self {
        Self::new(document.foods, document.recipes)
    }
}

impl FoodLookup for Catalog {
    fn food(&self, id: &str) -> Option<&Food> {
        self.foods.get(id)
    }
}

impl RecipeLookup for Catalog {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.get(id)
    }
}

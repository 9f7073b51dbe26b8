// ABOUTME: Shopping list models derived from a meal plan
// ABOUTME: ShoppingList grouped by category and ShoppingItem with its checked flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One line of a shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Food id
    pub id: String,
    /// Food name
    pub name: String,
    /// Amount in `unit`
    pub quantity: f64,
    /// `g` or the food's natural unit name
    pub unit: String,
    /// Ticked off by the user
    #[serde(default)]
    pub checked: bool,
}

/// Consolidated shopping list for a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Source plan id
    pub plan_id: String,
    /// Source plan name
    pub plan_name: String,
    /// Plan start date
    pub start_date: NaiveDate,
    /// Plan end date
    pub end_date: NaiveDate,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Items by category, each sorted by name
    pub categories: BTreeMap<String, Vec<ShoppingItem>>,
    /// Catalog ids referenced by the plan but absent from the catalog
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_references: Vec<String>,
}

impl ShoppingList {
    /// Total number of lines
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Number of checked lines
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.categories
            .values()
            .flatten()
            .filter(|item| item.checked)
            .count()
    }

    /// Iterate over all lines with their category
    pub fn items(&self) -> impl Iterator<Item = (&str, &ShoppingItem)> {
        self.categories
            .iter()
            .flat_map(|(category, items)| items.iter().map(move |item| (category.as_str(), item)))
    }
}

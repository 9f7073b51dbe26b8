// ABOUTME: Meal plan models: plan, day, meal, meal item, and the meal-slot enumeration
// ABOUTME: Includes the empty-plan factory and the add/update/delete meal operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

use super::nutrition::{MacroCache, NutritionValues};
use crate::errors::{AppError, AppResult, ErrorCode};

/// Meal slot within a day
///
/// This is the only place slot ids, display labels, and sort order are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast
    PetitDejeuner,
    /// Morning snack
    CollationMatin,
    /// Lunch
    Dejeuner,
    /// Afternoon snack
    CollationApresMidi,
    /// Dinner
    Diner,
    /// Evening snack
    CollationSoir,
    /// Unrecognized slot tag, sorted last
    #[serde(other)]
    Autre,
}

impl MealSlot {
    /// Every slot, in display order
    pub const ALL: [Self; 7] = [
        Self::PetitDejeuner,
        Self::CollationMatin,
        Self::Dejeuner,
        Self::CollationApresMidi,
        Self::Diner,
        Self::CollationSoir,
        Self::Autre,
    ];

    /// Parse a slot tag, mapping unknown tags to `Autre`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|slot| slot.id() == normalized)
            .unwrap_or(Self::Autre)
    }

    /// Stable identifier used in plan documents
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::PetitDejeuner => "petit_dejeuner",
            Self::CollationMatin => "collation_matin",
            Self::Dejeuner => "dejeuner",
            Self::CollationApresMidi => "collation_apres_midi",
            Self::Diner => "diner",
            Self::CollationSoir => "collation_soir",
            Self::Autre => "autre",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PetitDejeuner => "Petit-déjeuner",
            Self::CollationMatin => "Collation du matin",
            Self::Dejeuner => "Déjeuner",
            Self::CollationApresMidi => "Collation de l'après-midi",
            Self::Diner => "Dîner",
            Self::CollationSoir => "Collation du soir",
            Self::Autre => "Autre",
        }
    }

    /// Sort key within a day
    #[must_use]
    pub const fn order(&self) -> u8 {
        match self {
            Self::PetitDejeuner => 1,
            Self::CollationMatin => 2,
            Self::Dejeuner => 3,
            Self::CollationApresMidi => 4,
            Self::Diner => 5,
            Self::CollationSoir => 6,
            Self::Autre => 99,
        }
    }
}

/// Keto macro-split strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KetoProfile {
    /// Standard ketogenic split
    #[default]
    Standard,
    /// Cut (weight loss)
    PertePoids,
    /// Bulk (muscle gain)
    PriseMasse,
    /// Cyclical keto
    Cyclique,
    /// High-protein keto
    Hyperproteine,
}

impl KetoProfile {
    /// Every profile
    pub const ALL: [Self; 5] = [
        Self::Standard,
        Self::PertePoids,
        Self::PriseMasse,
        Self::Cyclique,
        Self::Hyperproteine,
    ];

    /// Parse a profile tag
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|p| p.id() == normalized)
    }

    /// Parse a profile tag, falling back to `Standard` for unknown tags
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Stable identifier used in plan documents
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::PertePoids => "perte_poids",
            Self::PriseMasse => "prise_masse",
            Self::Cyclique => "cyclique",
            Self::Hyperproteine => "hyperproteine",
        }
    }

    /// Profiles that hold protein to a tighter tolerance
    #[must_use]
    pub const fn prioritizes_protein(&self) -> bool {
        matches!(self, Self::PriseMasse | Self::Hyperproteine)
    }
}

impl fmt::Display for KetoProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Diet variant of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Plain ketogenic plan
    #[default]
    Standard,
    /// Alkaline variant; days report a weighted pH
    #[serde(alias = "alkaline")]
    Alcaline,
}

impl DietType {
    /// Whether day summaries should include the weighted pH
    #[must_use]
    pub const fn tracks_ph(&self) -> bool {
        matches!(self, Self::Alcaline)
    }
}

/// What a meal item points at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemRef {
    /// A catalog food, by weight
    Food {
        /// Food id
        id: String,
        /// Grams
        quantity: f64,
    },
    /// A catalog recipe, by servings
    Recipe {
        /// Recipe id
        id: String,
        /// Number of servings
        servings: f64,
    },
}

impl ItemRef {
    /// Referenced catalog id
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Food { id, .. } | Self::Recipe { id, .. } => id,
        }
    }
}

/// Where an item's nutrition comes from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemSource<'a> {
    /// Cached values stored on the item; authoritative
    Precomputed(NutritionValues),
    /// Must be resolved through the catalog
    Reference(&'a ItemRef),
}

/// One entry of a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    /// Catalog reference
    #[serde(flatten)]
    pub reference: ItemRef,
    /// Cached calories, paired with `macros`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Precomputed macro cache
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macros: Option<MacroCache>,
}

impl MealItem {
    /// Food item of `quantity` grams
    pub fn food(id: impl Into<String>, quantity: f64) -> Self {
        Self {
            reference: ItemRef::Food {
                id: id.into(),
                quantity,
            },
            calories: None,
            macros: None,
        }
    }

    /// Recipe item of `servings` servings
    pub fn recipe(id: impl Into<String>, servings: f64) -> Self {
        Self {
            reference: ItemRef::Recipe {
                id: id.into(),
                servings,
            },
            calories: None,
            macros: None,
        }
    }

    /// Attach a precomputed nutrition cache
    #[must_use]
    pub const fn with_macros(mut self, values: NutritionValues) -> Self {
        self.calories = Some(values.calories);
        self.macros = Some(MacroCache::from_values(&values));
        self
    }

    /// Resolve the cache-or-recompute choice for this item
    #[must_use]
    pub fn source(&self) -> ItemSource<'_> {
        self.macros.as_ref().map_or(
            ItemSource::Reference(&self.reference),
            |cache| ItemSource::Precomputed(cache.to_values(self.calories)),
        )
    }
}

/// A meal within a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MealRecord", into = "MealRecord")]
pub struct Meal {
    /// Meal id, unique within its day
    pub id: String,
    /// Meal slot
    pub slot: MealSlot,
    /// Original tag of a slot that maps to `Autre`, written back on serialization
    pub unknown_slot_tag: Option<String>,
    /// Display name
    pub name: String,
    /// Sort key, derived from the slot
    pub order: u8,
    /// Items in entry order
    pub items: Vec<MealItem>,
    /// Cached calories, paired with `macros`
    pub calories: Option<f64>,
    /// Precomputed macro cache for the whole meal
    pub macros: Option<MacroCache>,
}

impl Meal {
    /// New meal in `slot`, named after the slot label
    pub fn new(id: impl Into<String>, slot: MealSlot, items: Vec<MealItem>) -> Self {
        Self {
            id: id.into(),
            slot,
            unknown_slot_tag: None,
            name: slot.label().to_owned(),
            order: slot.order(),
            items,
            calories: None,
            macros: None,
        }
    }

    /// Attach precomputed meal totals
    #[must_use]
    pub fn with_macros(mut self, values: NutritionValues) -> Self {
        self.calories = Some(values.calories);
        self.macros = Some(MacroCache::from_values(&values));
        self
    }

    /// Cached meal totals, if any
    #[must_use]
    pub fn cached_values(&self) -> Option<NutritionValues> {
        self.macros
            .as_ref()
            .map(|cache| cache.to_values(self.calories))
    }

    fn normalize(&mut self) {
        self.order = self.slot.order();
        if self.name.is_empty() {
            self.slot.label().clone_into(&mut self.name);
        }
    }
}

/// Wire shape of a meal; the slot travels as a raw tag
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MealRecord {
    id: String,
    #[serde(rename = "type")]
    slot: String,
    #[serde(default, alias = "displayType")]
    name: String,
    #[serde(default)]
    order: u8,
    #[serde(default)]
    items: Vec<MealItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    macros: Option<MacroCache>,
}

impl From<MealRecord> for Meal {
    fn from(record: MealRecord) -> Self {
        let slot = MealSlot::from_str_lossy(&record.slot);
        let unknown_slot_tag = (slot == MealSlot::Autre && record.slot != MealSlot::Autre.id())
            .then_some(record.slot);
        let mut meal = Self {
            id: record.id,
            slot,
            unknown_slot_tag,
            name: record.name,
            order: record.order,
            items: record.items,
            calories: record.calories,
            macros: record.macros,
        };
        meal.normalize();
        meal
    }
}

impl From<Meal> for MealRecord {
    fn from(meal: Meal) -> Self {
        Self {
            id: meal.id,
            slot: meal
                .unknown_slot_tag
                .unwrap_or_else(|| meal.slot.id().to_owned()),
            name: meal.name,
            order: meal.order,
            items: meal.items,
            calories: meal.calories,
            macros: meal.macros,
        }
    }
}

/// One calendar day of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// Calendar date
    pub date: NaiveDate,
    /// Meals sorted by slot order
    #[serde(default)]
    pub meals: Vec<Meal>,
}

impl Day {
    /// Empty day
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            meals: Vec::new(),
        }
    }

    fn sort_meals(&mut self) {
        for meal in &mut self.meals {
            meal.normalize();
        }
        self.meals.sort_by_key(|meal| meal.order);
    }
}

/// A multi-day meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Plan id
    pub id: String,
    /// Display name
    pub name: String,
    /// First day (inclusive)
    pub start_date: NaiveDate,
    /// Last day (inclusive)
    pub end_date: NaiveDate,
    /// Diet variant
    #[serde(default)]
    pub diet_type: DietType,
    /// Macro-split strategy
    #[serde(default)]
    pub keto_profile: KetoProfile,
    /// One entry per date from start to end
    #[serde(default)]
    pub days: Vec<Day>,
}

impl MealPlan {
    /// Create a plan with one empty day per date in `start..=end`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `start` is after `end` or the name is blank
    pub fn empty(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        diet_type: DietType,
        keto_profile: KetoProfile,
    ) -> AppResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "Plan name is required",
            ));
        }
        if start_date > end_date {
            return Err(AppError::invalid_input(format!(
                "Plan start date {start_date} is after end date {end_date}"
            )));
        }

        let days = start_date
            .iter_days()
            .take_while(|date| *date <= end_date)
            .map(Day::new)
            .collect();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            start_date,
            end_date,
            diet_type,
            keto_profile,
            days,
        })
    }

    /// Number of days the date range covers, or 0 for an inverted range
    #[must_use]
    pub fn expected_day_count(&self) -> usize {
        let span = (self.end_date - self.start_date).num_days();
        usize::try_from(span + 1).unwrap_or(0)
    }

    /// Date of the day at `day_index`, derived from the start date
    #[must_use]
    pub fn date_for_index(&self, day_index: usize) -> Option<NaiveDate> {
        let offset = i64::try_from(day_index).ok()?;
        let date = self.start_date + Duration::days(offset);
        (date <= self.end_date).then_some(date)
    }

    /// Index of the day with `date`
    #[must_use]
    pub fn day_index_for_date(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|day| day.date == date)
    }

    /// Day at `day_index`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the plan has no such day
    pub fn day(&self, day_index: usize) -> AppResult<&Day> {
        self.days
            .get(day_index)
            .ok_or_else(|| self.missing_day(day_index))
    }

    fn day_mut(&mut self, day_index: usize) -> AppResult<&mut Day> {
        let error = self.missing_day(day_index);
        self.days.get_mut(day_index).ok_or(error)
    }

    fn missing_day(&self, day_index: usize) -> AppError {
        AppError::not_found(format!("Day {day_index}"))
            .with_resource_id(self.id.clone())
            .with_details(serde_json::json!({ "day_count": self.days.len() }))
    }

    /// Add a meal to a day, keeping meals sorted by slot order
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown day index and
    /// `ResourceAlreadyExists` if the day already has a meal with this id
    pub fn add_meal(&mut self, day_index: usize, mut meal: Meal) -> AppResult<()> {
        let day = self.day_mut(day_index)?;
        if day.meals.iter().any(|existing| existing.id == meal.id) {
            return Err(AppError::new(
                ErrorCode::ResourceAlreadyExists,
                format!("Meal {} already exists on {}", meal.id, day.date),
            )
            .with_resource_id(meal.id));
        }
        meal.normalize();
        debug!(day = %day.date, meal.id = %meal.id, slot = meal.slot.id(), "Adding meal");
        day.meals.push(meal);
        day.sort_meals();
        Ok(())
    }

    /// Replace the meal `meal_id` of a day; the replacement keeps `meal_id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown day index or meal id
    pub fn update_meal(&mut self, day_index: usize, meal_id: &str, mut meal: Meal) -> AppResult<()> {
        let day = self.day_mut(day_index)?;
        let slot = day
            .meals
            .iter_mut()
            .find(|existing| existing.id == meal_id)
            .ok_or_else(|| AppError::not_found(format!("Meal {meal_id}")))?;
        meal_id.clone_into(&mut meal.id);
        meal.normalize();
        *slot = meal;
        day.sort_meals();
        Ok(())
    }

    /// Remove the meal `meal_id` from a day and return it
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown day index or meal id
    pub fn delete_meal(&mut self, day_index: usize, meal_id: &str) -> AppResult<Meal> {
        let day = self.day_mut(day_index)?;
        let position = day
            .meals
            .iter()
            .position(|existing| existing.id == meal_id)
            .ok_or_else(|| AppError::not_found(format!("Meal {meal_id}")))?;
        Ok(day.meals.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_slot_lookup_is_lossy() {
        assert_eq!(MealSlot::from_str_lossy("Diner"), MealSlot::Diner);
        assert_eq!(
            MealSlot::from_str_lossy("collation-matin"),
            MealSlot::CollationMatin
        );
        assert_eq!(MealSlot::from_str_lossy("brunch"), MealSlot::Autre);
    }

    #[test]
    fn test_unknown_slot_deserializes_to_autre() {
        let slot: MealSlot = serde_json::from_str("\"gouter\"").unwrap();
        assert_eq!(slot, MealSlot::Autre);
    }

    #[test]
    fn test_meal_keeps_unknown_slot_tag() {
        let meal: Meal =
            serde_json::from_str(r#"{"id":"m1","type":"gouter","items":[]}"#).unwrap();
        assert_eq!(meal.slot, MealSlot::Autre);
        assert_eq!(meal.order, 99);
        assert_eq!(meal.name, "Autre");

        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(json["type"], "gouter");
    }

    #[test]
    fn test_meal_order_derived_from_slot() {
        let meal: Meal =
            serde_json::from_str(r#"{"id":"m1","type":"diner","order":0}"#).unwrap();
        assert_eq!(meal.order, MealSlot::Diner.order());
        assert!(meal.unknown_slot_tag.is_none());
        assert_eq!(serde_json::to_value(&meal).unwrap()["type"], "diner");
    }

    #[test]
    fn test_keto_profile_fallback() {
        assert_eq!(KetoProfile::from_str_lossy("prise_masse"), KetoProfile::PriseMasse);
        assert_eq!(KetoProfile::from_str_lossy("paleo"), KetoProfile::Standard);
        assert!(KetoProfile::parse("paleo").is_none());
    }

    #[test]
    fn test_item_source_prefers_cache() {
        let item = MealItem::food("egg", 100.0);
        assert!(matches!(item.source(), ItemSource::Reference(_)));

        let cached = item.with_macros(NutritionValues::zero());
        assert!(matches!(cached.source(), ItemSource::Precomputed(_)));
    }

    #[test]
    fn test_item_cache_pairs_calories_with_macros() {
        let item: MealItem = serde_json::from_str(
            r#"{"type":"food","id":"egg","quantity":100,"calories":155,
                "macros":{"protein":13,"fat":11,"carbs":1.1,"fiber":0}}"#,
        )
        .unwrap();

        let values = match item.source() {
            ItemSource::Precomputed(values) => values,
            ItemSource::Reference(_) => NutritionValues::zero(),
        };
        assert!((values.calories - 155.0).abs() < f64::EPSILON);
        assert!((values.net_carbs - 1.1).abs() < f64::EPSILON);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["calories"], 155.0);
        assert!(json["macros"].get("calories").is_none());
    }

    #[test]
    fn test_meal_item_json_shape() {
        let item: MealItem =
            serde_json::from_str(r#"{"type":"recipe","id":"omelette","servings":2}"#).unwrap();
        assert_eq!(item, MealItem::recipe("omelette", 2.0));

        let json = serde_json::to_value(MealItem::food("egg", 50.0)).unwrap();
        assert_eq!(json["type"], "food");
        assert_eq!(json["quantity"], 50.0);
    }

    #[test]
    fn test_date_for_index() {
        let plan = MealPlan::empty(
            "Semaine",
            date(2024, 2, 27),
            date(2024, 3, 1),
            DietType::Standard,
            KetoProfile::Standard,
        )
        .unwrap();

        assert_eq!(plan.date_for_index(2), Some(date(2024, 2, 29)));
        assert_eq!(plan.date_for_index(4), None);
    }
}

// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, a small food/recipe catalog, and plan builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `keto_planner`

use chrono::NaiveDate;
use keto_planner::intelligence::Catalog;
use keto_planner::models::{
    DietType, Food, KetoProfile, Meal, MealItem, MealPlan, MealSlot, NutritionFacts, Recipe,
    RecipeIngredient,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn facts(calories: f64, protein: f64, fat: f64, carbs: f64, fiber: f64) -> NutritionFacts {
    NutritionFacts {
        calories,
        protein,
        fat,
        carbs,
        fiber,
        net_carbs: None,
    }
}

/// Egg: 155 kcal / 13 g protein / 11 g fat / 1.1 g carbs per 100 g, 50 g per unit
pub fn egg() -> Food {
    Food {
        id: "egg".to_owned(),
        name: "Oeuf".to_owned(),
        category: Some("Produits laitiers et oeufs".to_owned()),
        nutrition_per_100g: facts(155.0, 13.0, 11.0, 1.1, 0.0),
        ph_value: Some(7.6),
        common_unit_weight: Some(50.0),
        unit_name: Some("oeuf".to_owned()),
    }
}

pub fn avocado() -> Food {
    Food {
        id: "avocado".to_owned(),
        name: "Avocat".to_owned(),
        category: Some("Fruits et légumes".to_owned()),
        nutrition_per_100g: facts(160.0, 2.0, 14.7, 8.5, 6.7),
        ph_value: Some(6.4),
        common_unit_weight: Some(200.0),
        unit_name: Some("avocat".to_owned()),
    }
}

pub fn bacon() -> Food {
    Food {
        id: "bacon".to_owned(),
        name: "Bacon".to_owned(),
        category: Some("Viandes".to_owned()),
        nutrition_per_100g: facts(541.0, 37.0, 42.0, 1.4, 0.0),
        ph_value: Some(6.0),
        common_unit_weight: None,
        unit_name: None,
    }
}

pub fn spinach() -> Food {
    Food {
        id: "spinach".to_owned(),
        name: "Épinards".to_owned(),
        category: Some("Fruits et légumes".to_owned()),
        nutrition_per_100g: facts(23.0, 2.9, 0.4, 3.6, 2.2),
        ph_value: Some(8.0),
        common_unit_weight: None,
        unit_name: None,
    }
}

/// Butter has no category and no pH value
pub fn butter() -> Food {
    Food {
        id: "butter".to_owned(),
        name: "Beurre".to_owned(),
        category: None,
        nutrition_per_100g: facts(717.0, 0.9, 81.0, 0.1, 0.0),
        ph_value: None,
        common_unit_weight: None,
        unit_name: None,
    }
}

/// Spinach omelette: 320 kcal per serving, made of 100 g egg, 10 g butter, 30 g spinach
pub fn omelette() -> Recipe {
    Recipe {
        id: "omelette".to_owned(),
        name: "Omelette aux épinards".to_owned(),
        nutrition_per_serving: facts(320.0, 20.0, 25.0, 2.0, 0.5),
        ingredients: vec![
            RecipeIngredient {
                food_id: "egg".to_owned(),
                quantity: 100.0,
            },
            RecipeIngredient {
                food_id: "butter".to_owned(),
                quantity: 10.0,
            },
            RecipeIngredient {
                food_id: "spinach".to_owned(),
                quantity: 30.0,
            },
        ],
        average_ph_value: Some(7.2),
    }
}

pub fn test_catalog() -> Catalog {
    init_test_logging();
    Catalog::new(
        vec![egg(), avocado(), bacon(), spinach(), butter()],
        vec![omelette()],
    )
}

pub fn meal(id: &str, slot: MealSlot, items: Vec<MealItem>) -> Meal {
    Meal::new(id, slot, items)
}

/// Plan of `days` consecutive days starting 2024-03-04 with no meals
pub fn empty_plan(days: i64, diet_type: DietType, profile: KetoProfile) -> MealPlan {
    let start = date(2024, 3, 4);
    let end = start + chrono::Duration::days(days - 1);
    MealPlan::empty("Semaine test", start, end, diet_type, profile).unwrap()
}

/// One-day plan whose single lunch contains `items`
pub fn one_meal_plan(items: Vec<MealItem>) -> MealPlan {
    let mut plan = empty_plan(1, DietType::Standard, KetoProfile::Standard);
    plan.add_meal(0, meal("lunch", MealSlot::Dejeuner, items))
        .unwrap();
    plan
}

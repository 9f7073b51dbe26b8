// ABOUTME: Integration tests for meal, day, and plan nutrition aggregation
// ABOUTME: Covers catalog scaling, cache precedence, skipped references, rounding, and weighted pH
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use keto_planner::intelligence::{
    aggregate_day_nutrition, aggregate_day_with_ph, aggregate_meal, aggregate_meal_detailed,
    aggregate_meal_nutrition, aggregate_plan_nutrition, weighted_day_ph, ItemOutcome,
};
use keto_planner::intelligence::Catalog;
use keto_planner::models::{
    DietType, Food, KetoProfile, Meal, MealItem, MealSlot, NutritionFacts, NutritionValues,
};

mod common;

use common::{empty_plan, meal, one_meal_plan, test_catalog};

// ============================================================================
// MEAL AGGREGATION
// ============================================================================

#[test]
fn test_food_scales_by_quantity() {
    let catalog = test_catalog();

    let totals = aggregate_meal_nutrition(&[MealItem::food("bacon", 50.0)], &catalog, &catalog);

    assert_eq!(totals.calories, 270.5);
    assert_eq!(totals.protein, 18.5);
    assert_eq!(totals.fat, 21.0);
    assert_eq!(totals.carbs, 0.7);
}

#[test]
fn test_recipe_scales_by_servings() {
    let catalog = test_catalog();

    let totals = aggregate_meal_nutrition(&[MealItem::recipe("omelette", 2.0)], &catalog, &catalog);

    assert_eq!(totals.calories, 640.0);
    assert_eq!(totals.protein, 40.0);
    assert_eq!(totals.fat, 50.0);
    assert_eq!(totals.carbs, 4.0);
    assert_eq!(totals.fiber, 1.0);
    assert_eq!(totals.net_carbs, 3.0);
}

#[test]
fn test_net_carbs_subtract_fiber() {
    let catalog = test_catalog();

    let totals = aggregate_meal_nutrition(&[MealItem::food("avocado", 100.0)], &catalog, &catalog);

    assert_eq!(totals.carbs, 8.5);
    assert_eq!(totals.fiber, 6.7);
    assert_eq!(totals.net_carbs, 1.8);
    assert!(totals.net_carbs <= totals.carbs);
}

#[test]
fn test_item_cache_wins_over_catalog() {
    let catalog = test_catalog();
    let cached = NutritionValues {
        calories: 999.0,
        protein: 1.0,
        ..NutritionValues::zero()
    };

    let totals = aggregate_meal_nutrition(
        &[MealItem::food("egg", 100.0).with_macros(cached)],
        &catalog,
        &catalog,
    );

    assert_eq!(totals.calories, 999.0);
    assert_eq!(totals.protein, 1.0);
    assert_eq!(totals.fat, 0.0);
}

#[test]
fn test_missing_reference_is_skipped_and_reported() {
    let catalog = test_catalog();
    let items = vec![
        MealItem::food("egg", 100.0),
        MealItem::food("ghost", 200.0),
        MealItem::recipe("phantom-pie", 1.0),
    ];

    let aggregation = aggregate_meal_detailed(&items, &catalog, &catalog);

    assert_eq!(aggregation.totals.calories, 155.0);
    assert_eq!(aggregation.skipped_count(), 2);
    assert_eq!(aggregation.missing_references(), vec!["ghost", "phantom-pie"]);
    assert!(matches!(aggregation.outcomes[0], ItemOutcome::Included(_)));
    assert_eq!(
        aggregation.outcomes[1],
        ItemOutcome::SkippedMissingReference("ghost".to_owned())
    );
}

#[test]
fn test_item_cache_from_plan_document() {
    let catalog = test_catalog();
    let item: MealItem = serde_json::from_str(
        r#"{"type":"food","id":"egg","quantity":100,"calories":155,
            "macros":{"protein":13,"fat":11,"carbs":1.1,"fiber":0}}"#,
    )
    .unwrap();

    let totals = aggregate_meal_nutrition(&[item], &catalog, &catalog);

    assert_eq!(totals.calories, 155.0);
    assert_eq!(totals.protein, 13.0);
    assert_eq!(totals.fat, 11.0);
    assert_eq!(totals.carbs, 1.1);
    assert_eq!(totals.net_carbs, 1.1);
}

#[test]
fn test_item_cache_keeps_stored_net_carbs() {
    let catalog = test_catalog();
    let item: MealItem = serde_json::from_str(
        r#"{"type":"recipe","id":"unknown","servings":1,"calories":200,
            "macros":{"protein":10,"fat":15,"carbs":6,"fiber":2,"netCarbs":3}}"#,
    )
    .unwrap();

    let totals = aggregate_meal_nutrition(&[item], &catalog, &catalog);

    assert_eq!(totals.calories, 200.0);
    assert_eq!(totals.net_carbs, 3.0);
}

#[test]
fn test_meal_cache_from_plan_document() {
    let catalog = test_catalog();
    let cached: Meal = serde_json::from_str(
        r#"{"id":"m1","type":"diner","items":[],"calories":480,
            "macros":{"protein":30,"fat":38,"carbs":5,"fiber":3}}"#,
    )
    .unwrap();

    let totals = aggregate_meal(&cached, &catalog, &catalog);

    assert_eq!(totals.calories, 480.0);
    assert_eq!(totals.net_carbs, 2.0);
}

#[test]
fn test_net_carbs_never_exceed_carbs() {
    let overstated = Food {
        id: "crackers".to_owned(),
        name: "Crackers".to_owned(),
        category: None,
        nutrition_per_100g: NutritionFacts {
            calories: 420.0,
            protein: 12.0,
            fat: 30.0,
            carbs: 10.0,
            fiber: 4.0,
            net_carbs: Some(14.0),
        },
        ph_value: None,
        common_unit_weight: None,
        unit_name: None,
    };
    let catalog = Catalog::new(
        vec![common::egg(), common::avocado(), common::spinach(), overstated],
        vec![common::omelette()],
    );
    let items = vec![
        MealItem::food("crackers", 50.0),
        MealItem::food("avocado", 100.0),
        MealItem::food("spinach", 200.0),
        MealItem::recipe("omelette", 1.0),
        MealItem::food("egg", 0.0),
    ];

    let totals = aggregate_meal_nutrition(&items, &catalog, &catalog);

    // Net carbs: crackers capped at 5, then 1.8 + 2.8 + 1.5
    assert_eq!(totals.carbs, 22.7);
    assert_eq!(totals.net_carbs, 11.1);
    assert!(totals.net_carbs <= totals.carbs);
}

#[test]
fn test_empty_meal_is_zero() {
    let catalog = test_catalog();
    let totals = aggregate_meal_nutrition(&[], &catalog, &catalog);
    assert_eq!(totals, NutritionValues::zero());
}

#[test]
fn test_meal_totals_keep_one_decimal() {
    let catalog = test_catalog();

    // 33 g of egg: 51.15 kcal, 0.363 g carbs
    let totals = aggregate_meal_nutrition(&[MealItem::food("egg", 33.0)], &catalog, &catalog);

    assert!((totals.calories * 10.0 - (totals.calories * 10.0).round()).abs() < 1e-9);
    assert_eq!(totals.carbs, 0.4);
}

#[test]
fn test_meal_cache_wins_over_items() {
    let catalog = test_catalog();
    let cached_meal = meal("m1", MealSlot::Diner, vec![MealItem::food("egg", 100.0)])
        .with_macros(NutritionValues {
            calories: 420.0,
            ..NutritionValues::zero()
        });

    let totals = aggregate_meal(&cached_meal, &catalog, &catalog);

    assert_eq!(totals.calories, 420.0);
}

// ============================================================================
// DAY AGGREGATION
// ============================================================================

#[test]
fn test_single_egg_day_rounds_to_integers() {
    let catalog = test_catalog();
    let plan = one_meal_plan(vec![MealItem::food("egg", 100.0)]);

    let totals = aggregate_day_nutrition(&plan.days[0], &catalog, &catalog);

    assert_eq!(totals.calories, 155.0);
    assert_eq!(totals.protein, 13.0);
    assert_eq!(totals.fat, 11.0);
    assert_eq!(totals.carbs, 1.0);
    assert_eq!(totals.fiber, 0.0);
    assert_eq!(totals.net_carbs, 1.0);
}

#[test]
fn test_day_is_sum_of_rounded_meals() {
    let catalog = test_catalog();
    let mut plan = empty_plan(1, DietType::Standard, KetoProfile::Standard);
    plan.add_meal(0, meal("b", MealSlot::PetitDejeuner, vec![MealItem::food("egg", 10.0)]))
        .unwrap();
    plan.add_meal(0, meal("l", MealSlot::Dejeuner, vec![MealItem::food("egg", 10.0)]))
        .unwrap();
    plan.add_meal(0, meal("d", MealSlot::Diner, vec![MealItem::food("egg", 10.0)]))
        .unwrap();

    let day = &plan.days[0];
    let meal_sum: f64 = day
        .meals
        .iter()
        .map(|m| aggregate_meal(m, &catalog, &catalog).calories)
        .sum();
    let totals = aggregate_day_nutrition(day, &catalog, &catalog);

    assert_eq!(meal_sum, 46.5);
    assert_eq!(totals.calories, 47.0);
}

#[test]
fn test_day_uses_meal_cache() {
    let catalog = test_catalog();
    let mut plan = one_meal_plan(vec![MealItem::food("egg", 100.0)]);
    let cached = plan.days[0].meals[0].clone().with_macros(NutritionValues {
        calories: 300.0,
        ..NutritionValues::zero()
    });
    plan.days[0].meals[0] = cached;

    let totals = aggregate_day_nutrition(&plan.days[0], &catalog, &catalog);

    assert_eq!(totals.calories, 300.0);
}

// ============================================================================
// WEIGHTED PH
// ============================================================================

#[test]
fn test_weighted_ph_mixes_foods_and_recipes() {
    let catalog = test_catalog();
    let plan = one_meal_plan(vec![
        MealItem::food("spinach", 100.0),
        MealItem::recipe("omelette", 1.0),
    ]);

    // (8.0 × 100 + 7.2 × 250) / 350 = 7.43
    let ph = weighted_day_ph(&plan.days[0], &catalog, &catalog);

    assert_eq!(ph, 7.4);
}

#[test]
fn test_weighted_ph_is_neutral_without_values() {
    let catalog = test_catalog();
    let plan = one_meal_plan(vec![MealItem::food("butter", 50.0)]);

    assert_eq!(weighted_day_ph(&plan.days[0], &catalog, &catalog), 7.0);
}

#[test]
fn test_ph_reported_only_for_alkaline_plans() {
    let catalog = test_catalog();
    let mut plan = empty_plan(1, DietType::Alcaline, KetoProfile::Standard);
    plan.add_meal(
        0,
        meal("l", MealSlot::Dejeuner, vec![MealItem::food("spinach", 100.0)]),
    )
    .unwrap();

    let alkaline = aggregate_day_with_ph(&plan.days[0], DietType::Alcaline, &catalog, &catalog);
    let standard = aggregate_day_with_ph(&plan.days[0], DietType::Standard, &catalog, &catalog);

    assert_eq!(alkaline.ph, Some(8.0));
    assert_eq!(standard.ph, None);
    assert_eq!(alkaline.totals, standard.totals);
}

// ============================================================================
// PLAN AGGREGATION
// ============================================================================

#[test]
fn test_plan_totals_and_daily_average() {
    let catalog = test_catalog();
    let mut plan = empty_plan(3, DietType::Standard, KetoProfile::Standard);
    for day_index in 0..3 {
        plan.add_meal(
            day_index,
            meal("l", MealSlot::Dejeuner, vec![MealItem::food("egg", 100.0)]),
        )
        .unwrap();
    }

    let nutrition = aggregate_plan_nutrition(&plan, &catalog, &catalog);

    assert_eq!(nutrition.days.len(), 3);
    assert_eq!(nutrition.days[2].date, plan.days[2].date);
    assert_eq!(nutrition.totals.calories, 465.0);
    assert_eq!(nutrition.daily_average.calories, 155.0);
    assert_eq!(nutrition.daily_average.protein, 13.0);
}

#[test]
fn test_plan_without_days_averages_to_zero() {
    let catalog = test_catalog();
    let mut plan = empty_plan(1, DietType::Standard, KetoProfile::Standard);
    plan.days.clear();

    let nutrition = aggregate_plan_nutrition(&plan, &catalog, &catalog);

    assert!(nutrition.days.is_empty());
    assert_eq!(nutrition.daily_average, NutritionValues::zero());
}

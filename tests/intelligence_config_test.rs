// ABOUTME: Tests for planner engine configuration defaults, validation, and environment overrides
// ABOUTME: Env-var tests run serially since they mutate process-wide state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use keto_planner::config::intelligence::{
    AggregationConfig, ConfigError, IntelligenceConfig, KetoProfilesConfig, ShoppingListConfig,
    ToleranceConfig, WeightAnalyticsConfig,
};
use keto_planner::errors::{AppError, ErrorCode};
use keto_planner::models::KetoProfile;
use serial_test::serial;
use std::env;

fn clear_overrides() {
    for name in [
        "KETO_MEAL_PRECISION_DIGITS",
        "KETO_DEFAULT_CALORIES",
        "KETO_TOLERANCE_PROTEIN_STRICT_PCT",
        "KETO_SHOPPING_ROUNDING_STEP_G",
        "KETO_SHOPPING_DEFAULT_CATEGORY",
        "KETO_WEIGHT_WINDOW_DAYS",
    ] {
        env::remove_var(name);
    }
}

// ============================================================================
// DEFAULTS
// ============================================================================

#[test]
fn test_defaults_are_valid() {
    let config = IntelligenceConfig::<true>::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_values() {
    let config = IntelligenceConfig::<true>::default();

    assert_eq!(config.nutrition.meal_precision_digits, 1);
    assert_eq!(config.nutrition.day_precision_digits, 0);
    assert_eq!(config.nutrition.recipe_serving_mass_g, 250.0);
    assert_eq!(config.targets.default_calories, 2000.0);
    assert_eq!(config.tolerances.calories_pct, 15.0);
    assert_eq!(config.tolerances.fat_pct, 20.0);
    assert_eq!(config.tolerances.carbs_pct, 25.0);
    assert_eq!(config.shopping.rounding_step_g, 5.0);
    assert_eq!(config.shopping.natural_unit_threshold, 0.75);
    assert_eq!(config.shopping.default_category, "Autres");
    assert_eq!(config.weight.change_window_days, 30);
    assert_eq!(config.weight.max_projection_weeks, 52.0);
}

#[test]
fn test_every_profile_split_sums_to_100() {
    let targets = KetoProfilesConfig::default();
    for profile in KetoProfile::ALL {
        let split = targets.split_for(profile);
        assert_eq!(
            u32::from(split.fat_pct) + u32::from(split.protein_pct) + u32::from(split.carb_pct),
            100,
            "{profile}"
        );
    }
}

// ============================================================================
// VALIDATION FAILURES
// ============================================================================

#[test]
fn test_invalid_aggregation_config() {
    let config = AggregationConfig {
        recipe_serving_mass_g: 0.0,
        ..AggregationConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let config = AggregationConfig {
        meal_precision_digits: 9,
        ..AggregationConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_tolerances() {
    let config = ToleranceConfig {
        protein_strict_pct: 30.0,
        ..ToleranceConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let config = ToleranceConfig {
        fat_pct: 0.0,
        ..ToleranceConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_shopping_config() {
    let config = ShoppingListConfig {
        default_category: "   ".to_owned(),
        ..ShoppingListConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::MissingField("default_category"))
    ));
}

#[test]
fn test_invalid_weight_config() {
    let config = WeightAnalyticsConfig {
        change_window_days: 0,
        ..WeightAnalyticsConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::ValueOutOfRange("bad").into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.to_string().contains("bad"));

    let error: AppError = ConfigError::Parse("Invalid KETO_DEFAULT_CALORIES".to_owned()).into();
    assert_eq!(error.code, ErrorCode::ConfigError);
}

// ============================================================================
// ENVIRONMENT OVERRIDES
// ============================================================================

#[test]
#[serial]
fn test_environment_variable_override() {
    clear_overrides();
    env::set_var("KETO_DEFAULT_CALORIES", "1800");
    env::set_var("KETO_SHOPPING_ROUNDING_STEP_G", "10");
    env::set_var("KETO_SHOPPING_DEFAULT_CATEGORY", "Divers");
    env::set_var("KETO_WEIGHT_WINDOW_DAYS", "14");

    let config = IntelligenceConfig::load().unwrap();

    assert_eq!(config.targets.default_calories, 1800.0);
    assert_eq!(config.shopping.rounding_step_g, 10.0);
    assert_eq!(config.shopping.default_category, "Divers");
    assert_eq!(config.weight.change_window_days, 14);

    clear_overrides();
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("KETO_MEAL_PRECISION_DIGITS", "one");

    let error = IntelligenceConfig::load().unwrap_err();

    assert!(matches!(error, ConfigError::Parse(_)));
    assert!(error.to_string().contains("KETO_MEAL_PRECISION_DIGITS"));

    clear_overrides();
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_override_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    clear_overrides();
    env::set_var("KETO_DEFAULT_CALORIES", OsStr::from_bytes(&[0x31, 0x80, 0x30]));

    let error = IntelligenceConfig::load().unwrap_err();

    assert!(matches!(error, ConfigError::EnvVar(env::VarError::NotUnicode(_))));
    let app_error: AppError = error.into();
    assert_eq!(app_error.code, ErrorCode::ConfigError);

    clear_overrides();
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    clear_overrides();
    env::set_var("KETO_TOLERANCE_PROTEIN_STRICT_PCT", "50");

    assert!(matches!(
        IntelligenceConfig::load(),
        Err(ConfigError::InvalidRange(_))
    ));

    clear_overrides();
}

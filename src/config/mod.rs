// ABOUTME: Configuration management module for planner engine settings
// ABOUTME: Exposes the engine configuration and the logging configuration section
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the keto planner
//!
//! - **Intelligence**: engine tunables (rounding, macro splits, tolerances, shopping, weight)
//!
//! Logging configuration lives in [`crate::logging`].

/// Engine configuration with environment overrides and validation
pub mod intelligence;

pub use intelligence::{
    AggregationConfig, ConfigError, IntelligenceConfig, KetoProfilesConfig, MacroSplit,
    ShoppingListConfig, ToleranceConfig, WeightAnalyticsConfig,
};

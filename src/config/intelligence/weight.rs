// ABOUTME: Weight analytics configuration
// ABOUTME: Rate-of-change window and goal-date projection horizon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use keto_core::constants::weight::{CHANGE_WINDOW_DAYS, MAX_PROJECTION_WEEKS};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Weight analytics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightAnalyticsConfig {
    /// Look-back window for the rate of change (default 30 days)
    pub change_window_days: i64,
    /// Goal dates further out than this are not predicted (default 52 weeks)
    pub max_projection_weeks: f64,
}

impl Default for WeightAnalyticsConfig {
    fn default() -> Self {
        Self {
            change_window_days: CHANGE_WINDOW_DAYS,
            max_projection_weeks: MAX_PROJECTION_WEEKS,
        }
    }
}

impl WeightAnalyticsConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a window under one day or
    /// a non-positive projection horizon
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.change_window_days < 1 || self.change_window_days > 3650 {
            return Err(ConfigError::ValueOutOfRange(
                "Weight change window must be between 1 and 3650 days",
            ));
        }
        if self.max_projection_weeks <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Projection horizon must be positive",
            ));
        }
        Ok(())
    }
}

// ABOUTME: Body-weight analytics: BMI and its category, goal progress, rate of change, goal date
// ABOUTME: Pure functions over weight history; date-dependent operations take an explicit `today`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight Analytics
//!
//! BMI bands follow the WHO classification extended with a severe-thinness band:
//!
//! | BMI | class |
//! |---|---|
//! | < 16.5 | severe underweight |
//! | 16.5 - 18.5 | underweight |
//! | 18.5 - 25 | normal |
//! | 25 - 30 | overweight |
//! | 30 - 35 | obesity class 1 |
//! | 35 - 40 | obesity class 2 |
//! | >= 40 | obesity class 3 |

use chrono::{Duration, NaiveDate, Utc};
use keto_core::constants::weight::DAYS_PER_WEEK;
use keto_core::models::{round_to_digits, WeightEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::{IntelligenceConfig, WeightAnalyticsConfig};

const CM_PER_M: f64 = 100.0;
const SEVERE_UNDERWEIGHT_MAX: f64 = 16.5;
const UNDERWEIGHT_MAX: f64 = 18.5;
const NORMAL_MAX: f64 = 25.0;
const OVERWEIGHT_MAX: f64 = 30.0;
const OBESITY_CLASS_1_MAX: f64 = 35.0;
const OBESITY_CLASS_2_MAX: f64 = 40.0;

/// BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiClass {
    /// BMI < 16.5
    SevereUnderweight,
    /// 16.5 <= BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// 30 <= BMI < 35
    ObesityClass1,
    /// 35 <= BMI < 40
    ObesityClass2,
    /// BMI >= 40
    ObesityClass3,
}

impl BmiClass {
    /// Band containing `bmi`
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < SEVERE_UNDERWEIGHT_MAX {
            Self::SevereUnderweight
        } else if bmi < UNDERWEIGHT_MAX {
            Self::Underweight
        } else if bmi < NORMAL_MAX {
            Self::Normal
        } else if bmi < OVERWEIGHT_MAX {
            Self::Overweight
        } else if bmi < OBESITY_CLASS_1_MAX {
            Self::ObesityClass1
        } else if bmi < OBESITY_CLASS_2_MAX {
            Self::ObesityClass2
        } else {
            Self::ObesityClass3
        }
    }

    /// Display description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::SevereUnderweight => "Maigreur sévère",
            Self::Underweight => "Maigreur",
            Self::Normal => "Poids normal",
            Self::Overweight => "Surpoids",
            Self::ObesityClass1 => "Obésité modérée (classe 1)",
            Self::ObesityClass2 => "Obésité sévère (classe 2)",
            Self::ObesityClass3 => "Obésité morbide (classe 3)",
        }
    }

    /// Display color (hex)
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::SevereUnderweight => "#1d4ed8",
            Self::Underweight => "#60a5fa",
            Self::Normal => "#22c55e",
            Self::Overweight => "#eab308",
            Self::ObesityClass1 => "#f97316",
            Self::ObesityClass2 => "#ef4444",
            Self::ObesityClass3 => "#991b1b",
        }
    }
}

/// BMI band with its display attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmiCategory {
    /// Band tag
    pub category: BmiClass,
    /// Display description
    pub description: String,
    /// Display color (hex)
    pub color: String,
}

/// Change between the most recent weight and the one a window earlier
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightChange {
    /// Current minus previous (kg)
    pub change: f64,
    /// Change relative to the previous weight (%)
    pub percentage: f64,
    /// Change per week (kg/week)
    pub weekly_rate: f64,
}

/// `weight / height²` with height in centimetres, rounded to one decimal
///
/// Returns 0 when either input is missing, non-positive, or not finite.
#[must_use]
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let valid = |value: f64| value.is_finite() && value > 0.0;
    if !valid(height_cm) || !valid(weight_kg) {
        return 0.0;
    }
    let height_m = height_cm / CM_PER_M;
    round_to_digits(weight_kg / (height_m * height_m), 1)
}

/// Category, description, and color for `bmi`
#[must_use]
pub fn bmi_category(bmi: f64) -> BmiCategory {
    let class = BmiClass::from_bmi(bmi);
    BmiCategory {
        category: class,
        description: class.description().to_owned(),
        color: class.color().to_owned(),
    }
}

/// Percentage of the way from `start` to `target`, in 0..=100
///
/// Movement away from the target counts as no progress.
#[must_use]
pub fn weight_progress(start: f64, current: f64, target: f64) -> f64 {
    let needed = target - start;
    if needed.abs() < f64::EPSILON {
        return 100.0;
    }
    let moved = current - start;
    if moved * needed <= 0.0 {
        return 0.0;
    }
    (moved.abs() / needed.abs() * 100.0).min(100.0).round()
}

/// Rate of change over the configured window, relative to today (UTC)
#[must_use]
pub fn weight_change(history: &[WeightEntry]) -> WeightChange {
    weight_change_at(
        history,
        IntelligenceConfig::global().weight.change_window_days,
        Utc::now().date_naive(),
    )
}

/// Rate of change between the most recent entry and the latest entry dated on or
/// before `today - window_days` (the oldest entry when none qualifies)
///
/// Fewer than two entries yield zeros.
#[must_use]
pub fn weight_change_at(
    history: &[WeightEntry],
    window_days: i64,
    today: NaiveDate,
) -> WeightChange {
    if history.len() < 2 {
        return WeightChange::default();
    }

    let mut sorted: Vec<&WeightEntry> = history.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let current = sorted[0];
    let cutoff = today - Duration::days(window_days);
    let previous = sorted[1..]
        .iter()
        .copied()
        .find(|entry| entry.date <= cutoff)
        .unwrap_or(sorted[sorted.len() - 1]);

    let change = current.weight - previous.weight;
    let percentage = if previous.weight.abs() < f64::EPSILON {
        0.0
    } else {
        change / previous.weight * 100.0
    };
    let days = (current.date - previous.date).num_days();
    let weekly_rate = if days == 0 {
        0.0
    } else {
        change / days as f64 * DAYS_PER_WEEK
    };

    debug!(
        current = %current.date,
        previous = %previous.date,
        days,
        change,
        "Computed weight change"
    );

    WeightChange {
        change: round_to_digits(change, 1),
        percentage: round_to_digits(percentage, 1),
        weekly_rate: round_to_digits(weekly_rate, 1),
    }
}

/// Projected date for reaching `target`, counted from today (UTC)
#[must_use]
pub fn predict_goal_date(current: f64, target: f64, weekly_rate: f64) -> Option<NaiveDate> {
    predict_goal_date_at(current, target, weekly_rate, Utc::now().date_naive())
}

/// Projected date for reaching `target`, counted from `today`
#[must_use]
pub fn predict_goal_date_at(
    current: f64,
    target: f64,
    weekly_rate: f64,
    today: NaiveDate,
) -> Option<NaiveDate> {
    predict_goal_date_with(
        current,
        target,
        weekly_rate,
        today,
        &IntelligenceConfig::global().weight,
    )
}

/// Projected goal date with an explicit projection horizon
///
/// `None` when the rate is zero, moves away from the target, or needs more weeks than
/// the horizon allows. With a non-zero rate, a weight already at target projects to `today`.
#[must_use]
pub fn predict_goal_date_with(
    current: f64,
    target: f64,
    weekly_rate: f64,
    today: NaiveDate,
    config: &WeightAnalyticsConfig,
) -> Option<NaiveDate> {
    if !weekly_rate.is_finite() || weekly_rate.abs() < f64::EPSILON {
        return None;
    }
    let remaining = target - current;
    if remaining.abs() < f64::EPSILON {
        return Some(today);
    }
    if remaining * weekly_rate < 0.0 {
        return None;
    }

    let weeks = remaining.abs() / weekly_rate.abs();
    if weeks > config.max_projection_weeks {
        return None;
    }

    let days = (weeks * DAYS_PER_WEEK).round() as i64;
    today.checked_add_signed(Duration::days(days))
}

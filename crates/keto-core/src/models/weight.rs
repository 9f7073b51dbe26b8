// ABOUTME: Body-weight history model
// ABOUTME: WeightEntry records owned by the user-profile collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated body-weight measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Measurement date
    pub date: NaiveDate,
    /// Body weight (kg)
    pub weight: f64,
}

impl WeightEntry {
    /// New entry
    #[must_use]
    pub const fn new(date: NaiveDate, weight: f64) -> Self {
        Self { date, weight }
    }
}

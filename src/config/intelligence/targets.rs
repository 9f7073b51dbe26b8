// ABOUTME: Keto profile macro splits and macro tolerance band configuration
// ABOUTME: Per-profile fat/protein/carb percentages, protein floors, and deviation tolerances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Target Configuration
//!
//! | profile | fat% | protein% | carb% | protein floor (g) |
//! |---|---|---|---|---|
//! | standard | 75 | 20 | 5 | 100 |
//! | perte_poids | 75 | 20 | 5 | 100 |
//! | prise_masse | 65 | 30 | 5 | 150 |
//! | cyclique | 70 | 20 | 10 | 100 |
//! | hyperproteine | 40 | 50 | 10 | 200 |

use keto_core::constants::targets::DEFAULT_CALORIES;
use keto_core::models::KetoProfile;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Calorie split of one keto profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Fat percentage of calories (0-100)
    pub fat_pct: u8,
    /// Protein percentage of calories (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage of calories (0-100)
    pub carb_pct: u8,
    /// Minimum daily protein (g)
    pub protein_floor_g: f64,
}

impl MacroSplit {
    /// Create a new split
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(fat_pct: u8, protein_pct: u8, carb_pct: u8, protein_floor_g: f64) -> Self {
        debug_assert!(
            fat_pct.saturating_add(protein_pct).saturating_add(carb_pct) == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            fat_pct,
            protein_pct,
            carb_pct,
            protein_floor_g,
        }
    }

    /// Share of the non-protein calories that goes to fat
    #[must_use]
    pub fn fat_share_of_remainder(&self) -> f64 {
        let non_protein = f64::from(self.fat_pct) + f64::from(self.carb_pct);
        if non_protein <= 0.0 {
            return 0.0;
        }
        f64::from(self.fat_pct) / non_protein
    }

    /// Share of the non-protein calories that goes to carbohydrates
    #[must_use]
    pub fn carb_share_of_remainder(&self) -> f64 {
        let non_protein = f64::from(self.fat_pct) + f64::from(self.carb_pct);
        if non_protein <= 0.0 {
            return 0.0;
        }
        f64::from(self.carb_pct) / non_protein
    }
}

/// Macro splits for every keto profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KetoProfilesConfig {
    /// Calorie target used when the caller provides none (kcal)
    pub default_calories: f64,
    /// Standard keto
    pub standard: MacroSplit,
    /// Cut
    pub perte_poids: MacroSplit,
    /// Bulk
    pub prise_masse: MacroSplit,
    /// Cyclical
    pub cyclique: MacroSplit,
    /// High protein
    pub hyperproteine: MacroSplit,
}

impl Default for KetoProfilesConfig {
    fn default() -> Self {
        Self {
            default_calories: DEFAULT_CALORIES,
            standard: MacroSplit::new(75, 20, 5, 100.0),
            perte_poids: MacroSplit::new(75, 20, 5, 100.0),
            prise_masse: MacroSplit::new(65, 30, 5, 150.0),
            cyclique: MacroSplit::new(70, 20, 10, 100.0),
            hyperproteine: MacroSplit::new(40, 50, 10, 200.0),
        }
    }
}

impl KetoProfilesConfig {
    /// Split for `profile`
    #[must_use]
    pub const fn split_for(&self, profile: KetoProfile) -> &MacroSplit {
        match profile {
            KetoProfile::Standard => &self.standard,
            KetoProfile::PertePoids => &self.perte_poids,
            KetoProfile::PriseMasse => &self.prise_masse,
            KetoProfile::Cyclique => &self.cyclique,
            KetoProfile::Hyperproteine => &self.hyperproteine,
        }
    }

    /// Validate that every split sums to 100% and floors are non-negative
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if a split does not sum to 100 and
    /// `ConfigError::ValueOutOfRange` for a bad default calorie target or protein floor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_calories <= 0.0 || self.default_calories > 10_000.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Default calories must be between 0 and 10000 kcal",
            ));
        }

        for profile in KetoProfile::ALL {
            let split = self.split_for(profile);
            let sum = split
                .fat_pct
                .saturating_add(split.protein_pct)
                .saturating_add(split.carb_pct);
            if sum != 100 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{profile} macro percentages must sum to 100, got {sum}"
                )));
            }
            if split.protein_floor_g < 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "Protein floor must not be negative",
                ));
            }
        }

        Ok(())
    }
}

/// Maximum allowed deviation per macro axis, in percent of the target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToleranceConfig {
    /// Calories (default 15)
    pub calories_pct: f64,
    /// Protein for most profiles (default 15)
    pub protein_pct: f64,
    /// Protein for profiles that prioritize protein precision (default 10)
    pub protein_strict_pct: f64,
    /// Fat (default 20)
    pub fat_pct: f64,
    /// Net carbs against the carb target (default 25)
    pub carbs_pct: f64,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            calories_pct: 15.0,
            protein_pct: 15.0,
            protein_strict_pct: 10.0,
            fat_pct: 20.0,
            carbs_pct: 25.0,
        }
    }
}

impl ToleranceConfig {
    /// Protein tolerance for `profile`
    #[must_use]
    pub const fn protein_for(&self, profile: KetoProfile) -> f64 {
        if profile.prioritizes_protein() {
            self.protein_strict_pct
        } else {
            self.protein_pct
        }
    }

    /// Validate band widths
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a band is outside (0, 100] and
    /// `ConfigError::InvalidRange` if the strict protein band is wider than the default
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bands = [
            self.calories_pct,
            self.protein_pct,
            self.protein_strict_pct,
            self.fat_pct,
            self.carbs_pct,
        ];
        if bands.iter().any(|band| *band <= 0.0 || *band > 100.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Tolerance bands must be between 0 and 100 percent",
            ));
        }
        if self.protein_strict_pct > self.protein_pct {
            return Err(ConfigError::InvalidRange(
                "protein_strict_pct must be <= protein_pct",
            ));
        }
        Ok(())
    }
}

// ABOUTME: Day assembly settings: rebalancing thresholds and the default meal structure
// ABOUTME: Governs how residual calories are redistributed across a day's slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Day assembly and rebalancing configuration.

use platewise_core::models::MealStructure;
use serde::{Deserialize, Serialize};

/// Day and week assembly settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblerConfig {
    /// Day deviation that triggers a rebalancing pass, in percent
    pub rebalance_threshold_pct: f64,
    /// Rebalancing passes per day
    pub max_rebalance_passes: u32,
    /// Day deviation accepted after rebalancing, in percent
    pub day_calorie_tolerance_pct: f64,
    /// Smallest calorie target a slot may be rebalanced down to
    pub min_slot_calories: f64,
    /// Meal structure used when a request does not carry one
    pub default_meal_structure: MealStructure,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            rebalance_threshold_pct: 2.0,
            max_rebalance_passes: 2,
            day_calorie_tolerance_pct: 2.0,
            min_slot_calories: 50.0,
            default_meal_structure: MealStructure::three_meals(),
        }
    }
}

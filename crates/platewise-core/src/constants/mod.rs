// ABOUTME: Nutrition constants and request bounds shared across the workspace
// ABOUTME: Energy per gram of macronutrient, macro tolerances and preference limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants organized by domain

/// Energy content of macronutrients (Atwater factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const FAT_KCAL_PER_GRAM: f64 = 9.0;
    /// Kilocalories per gram of carbohydrate
    pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
    /// Nutrient values in the catalog are expressed per this many grams
    pub const REFERENCE_PORTION_GRAMS: f64 = 100.0;
}

/// Bounds applied when validating a plan request
pub mod limits {
    /// Lowest accepted daily calorie target
    pub const MIN_DAILY_CALORIES: u32 = 1000;
    /// Highest accepted daily calorie target
    pub const MAX_DAILY_CALORIES: u32 = 5000;
    /// Longest plan horizon in days
    pub const MAX_PLAN_DAYS: u32 = 28;
    /// Allowed deviation of macro percentages from a 100% total
    pub const MACRO_SUM_TOLERANCE_PERCENT: f64 = 1.0;
    /// Allowed deviation of meal-structure shares from a 100% total
    pub const SHARE_SUM_TOLERANCE_PERCENT: f64 = 0.01;
    /// Largest absolute ingredient preference weight
    pub const MAX_PREFERENCE_WEIGHT: f64 = 10.0;
}

/// Scoring scale
pub mod scoring {
    /// Best achievable quality score
    pub const MAX_SCORE: f64 = 100.0;
}

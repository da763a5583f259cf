// ABOUTME: Nutrition quality scoring of a meal against its calorie and macro targets
// ABOUTME: Pure weighted blend of calorie accuracy and mean macro-percentage accuracy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ScoringConfig;
use platewise_core::constants::scoring::MAX_SCORE;
use platewise_core::models::{MacroSplit, Macronutrient, NutrientProfile};
use serde::{Deserialize, Serialize};

/// Calorie and macro goal for one meal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTarget {
    /// Calorie target
    pub calories: f64,
    /// Macro split target
    pub macros: MacroSplit,
}

impl NutritionTarget {
    /// Create a target
    #[must_use]
    pub const fn new(calories: f64, macros: MacroSplit) -> Self {
        Self { calories, macros }
    }

    /// Absolute calorie deviation of `actual` from this target, in percent
    #[must_use]
    pub fn calorie_deviation_pct(&self, actual: &NutrientProfile) -> f64 {
        if self.calories <= 0.0 {
            return MAX_SCORE;
        }
        (actual.calories - self.calories).abs() / self.calories * 100.0
    }
}

/// Score breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionScore {
    /// Calorie accuracy in [0, 100]
    pub calorie_score: f64,
    /// Mean macro accuracy in [0, 100]
    pub macro_score: f64,
    /// Weighted total in [0, 100]
    pub total: f64,
}

/// Scores meal nutrition against a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionScorer {
    calorie_weight: f64,
    macro_weight: f64,
}

impl NutritionScorer {
    /// Create a scorer from configured weights
    #[must_use]
    pub const fn new(config: &ScoringConfig) -> Self {
        Self {
            calorie_weight: config.calorie_weight,
            macro_weight: config.macro_weight,
        }
    }

    /// Score `actual` against `target`
    ///
    /// `calorie_score = max(0, 100 - |Δkcal| / target × 100)`; each macro scores
    /// `max(0, 100 - |Δpercentage points|)` and the three are averaged.
    #[must_use]
    pub fn score(&self, actual: &NutrientProfile, target: &NutritionTarget) -> NutritionScore {
        let calorie_score = (MAX_SCORE - target.calorie_deviation_pct(actual)).max(0.0);

        let split = actual.macro_split();
        let macro_score = Macronutrient::ALL
            .iter()
            .map(|m| (MAX_SCORE - (split.get(*m) - target.macros.get(*m)).abs()).max(0.0))
            .sum::<f64>()
            / Macronutrient::ALL.len() as f64;

        let total = self
            .calorie_weight
            .mul_add(calorie_score, self.macro_weight * macro_score)
            .clamp(0.0, MAX_SCORE);

        NutritionScore {
            calorie_score,
            macro_score,
            total,
        }
    }
}

impl Default for NutritionScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> NutritionTarget {
        NutritionTarget::new(500.0, MacroSplit::new(25.0, 30.0, 45.0))
    }

    /// Nutrients matching `split` exactly at `calories`
    fn exact(calories: f64, split: MacroSplit) -> NutrientProfile {
        NutrientProfile::new(
            calories,
            calories * split.protein_pct / 100.0 / 4.0,
            calories * split.fat_pct / 100.0 / 9.0,
            calories * split.carbs_pct / 100.0 / 4.0,
            0.0,
        )
    }

    #[test]
    fn test_perfect_meal_scores_100() {
        let score = NutritionScorer::default().score(&exact(500.0, target().macros), &target());
        assert!((score.total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_calorie_miss_costs_weighted_points() {
        // 10% over on calories with perfect macros: 0.4 × 90 + 0.6 × 100
        let score = NutritionScorer::default().score(&exact(550.0, target().macros), &target());
        assert!((score.calorie_score - 90.0).abs() < 1e-9);
        assert!((score.total - 96.0).abs() < 1e-9);
    }

    #[test]
    fn test_macro_miss_is_averaged() {
        let off = MacroSplit::new(35.0, 30.0, 35.0);
        let score = NutritionScorer::default().score(&exact(500.0, off), &target());
        // protein +10, fat 0, carbs -10 → (90 + 100 + 90) / 3
        assert!((score.macro_score - 280.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_never_negative() {
        let actual = NutrientProfile::new(5000.0, 0.0, 0.0, 1250.0, 0.0);
        let score = NutritionScorer::default().score(&actual, &target());
        assert!(score.calorie_score.abs() < f64::EPSILON);
        assert!(score.total >= 0.0);
    }
}

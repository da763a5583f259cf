// ABOUTME: Portion optimizer tuning: iteration cap, convergence threshold and portion clamps
// ABOUTME: Step size and clamp ratios are tunable rather than hard-coded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Portion Optimizer Configuration

use serde::{Deserialize, Serialize};

/// Portion optimizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Hard cap on refinement iterations per slot
    pub max_iterations: u32,
    /// Score improvement below which the loop stops
    pub convergence_epsilon: f64,
    /// Relative change applied to each adjusted ingredient per iteration
    pub step_fraction: f64,
    /// Lower portion clamp as a multiple of the base quantity
    pub min_portion_ratio: f64,
    /// Upper portion clamp as a multiple of the base quantity
    pub max_portion_ratio: f64,
    /// Absolute lower portion clamp in grams
    pub min_portion_grams: f64,
    /// Ingredients adjusted per refinement step
    pub adjust_top_n: usize,
    /// Macro deviations below this many percentage points are left alone
    pub macro_deviation_floor_pct: f64,
    /// Calorie deviation above which the slot is infeasible
    pub infeasible_calorie_deviation_pct: f64,
    /// Passes of clamped calorie scaling
    pub max_scaling_passes: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 15,
            convergence_epsilon: 0.1,
            step_fraction: 0.05,
            min_portion_ratio: 0.25,
            max_portion_ratio: 3.0,
            min_portion_grams: 1.0,
            adjust_top_n: 2,
            macro_deviation_floor_pct: 0.5,
            infeasible_calorie_deviation_pct: 5.0,
            max_scaling_passes: 4,
        }
    }
}

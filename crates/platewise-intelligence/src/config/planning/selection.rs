// ABOUTME: Scoring weights and template selection settings
// ABOUTME: Controls the quality score blend, variety window and repetition penalties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Quality score weights and template variety settings.

use serde::{Deserialize, Serialize};

/// Weights of the nutrition quality score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of calorie accuracy
    pub calorie_weight: f64,
    /// Weight of macro accuracy
    pub macro_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            calorie_weight: 0.4,
            macro_weight: 0.6,
        }
    }
}

/// Template selection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Days a template stays excluded from the same slot after use
    pub variety_window_days: usize,
    /// Penalty for reusing a template inside the window when the pool is exhausted
    pub template_repeat_penalty: f64,
    /// Penalty per ingredient already used inside the window
    pub ingredient_repeat_penalty: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            variety_window_days: 3,
            template_repeat_penalty: 10.0,
            ingredient_repeat_penalty: 0.5,
        }
    }
}

// ABOUTME: Configuration module for platewise-intelligence crate
// ABOUTME: Re-exports meal planning configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meal planning engine configuration (scoring, selection, optimization, assembly)
pub mod planning;

pub use planning::{
    AssemblerConfig, ConfigError, MealPlanningConfig, OptimizerConfig, ScoringConfig,
    SelectorConfig,
};

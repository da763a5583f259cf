// ABOUTME: Meal-plan optimization engine for Platewise
// ABOUTME: Catalog containers, tunable configuration and the deterministic planning pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Platewise Intelligence
//!
//! Deterministic meal-plan generation over a read-only ingredient catalog and
//! template library. Given the same dataset, configuration and request, the
//! planner produces the same plan on every run.
//!
//! ## Modules
//!
//! - **catalog**: Validated ingredient catalog, template library and substitution map
//! - **config**: Scoring, selection, optimizer and assembly tuning with env overrides
//! - **`meal_planner`**: Selection, portion optimization, compliance and day assembly

/// Read-only planning data containers
pub mod catalog;

/// Engine configuration
pub mod config;

/// Planning pipeline
pub mod meal_planner;

pub use catalog::{PlanningData, PlanningDataset};
pub use config::MealPlanningConfig;
pub use meal_planner::MealPlanner;

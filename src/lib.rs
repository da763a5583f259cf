// ABOUTME: Main library entry point for the Platewise meal-plan optimizer
// ABOUTME: Wires the engine crates to the builtin dataset, JSON loading, logging and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Platewise
//!
//! Deterministic meal-plan generation. Given a calorie target, a diet, an
//! optional macro split, ingredient restrictions and a meal structure,
//! Platewise selects meal templates from a catalog, optimizes portion sizes
//! toward each slot's nutrition target, enforces dietary compliance through
//! substitution, and rebalances each day toward its calorie target.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use platewise::models::PlanRequest;
//! use platewise::services::PlanningService;
//!
//! # fn main() -> Result<(), platewise::errors::ServiceError> {
//! let service = PlanningService::builtin()?;
//! let plan = service.generate(&PlanRequest::new(2000.0, "mediterranean").with_days(7))?;
//! println!("mean quality {:.1}", plan.mean_quality_score);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`platewise_core`**: Models, error codes and nutrition constants
//! - **`platewise_intelligence`**: Catalog containers, configuration and the planner
//! - **data**: Builtin dataset and JSON loader
//! - **services**: Facade used by library callers and the CLI
//! - **logging**: `tracing` subscriber setup

/// Service-level constants
pub mod constants;

/// Builtin dataset and JSON loader
pub mod data;

/// Service-level error type
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Planning service facade
pub mod services;

/// Re-exported engine models
pub use platewise_core::models;

pub use platewise_intelligence::config::MealPlanningConfig;
pub use platewise_intelligence::meal_planner::MealPlanner;
pub use platewise_intelligence::PlanningData;

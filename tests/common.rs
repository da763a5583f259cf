// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, builtin planners and plan inspection helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `platewise`

use platewise::data::builtin_planning_data;
use platewise::models::{MealInstance, MealSlot, PlanResult};
use platewise::services::PlanningService;
use platewise::{MealPlanner, MealPlanningConfig};
use std::collections::BTreeSet;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Planner over the builtin dataset with default configuration
pub fn builtin_planner() -> MealPlanner {
    init_test_logging();
    MealPlanner::new(
        builtin_planning_data().expect("builtin dataset"),
        MealPlanningConfig::default(),
    )
    .expect("default config")
}

/// Service over the builtin dataset with default configuration
pub fn builtin_service() -> PlanningService {
    init_test_logging();
    PlanningService::new(
        builtin_planning_data().expect("builtin dataset"),
        MealPlanningConfig::default(),
        "builtin",
    )
    .expect("default config")
}

/// Every tag carried by any ingredient in the plan
pub fn plan_tags(planner: &MealPlanner, plan: &PlanResult) -> BTreeSet<String> {
    plan.meals()
        .flat_map(|meal| meal.portions.iter())
        .filter_map(|portion| planner.data().catalog.get(&portion.ingredient_id))
        .flat_map(|ingredient| ingredient.tags.iter().cloned())
        .collect()
}

/// Share of calories supplied by carbohydrate, in percent
pub fn carb_energy_pct(calories: f64, carbs_g: f64) -> f64 {
    carbs_g * 4.0 / calories * 100.0
}

/// Meal for `slot` on `day`
pub fn meal_for(plan: &PlanResult, day: usize, slot: MealSlot) -> &MealInstance {
    plan.week_plan.days[day]
        .meals
        .iter()
        .find(|meal| meal.slot == slot)
        .expect("slot planned")
}

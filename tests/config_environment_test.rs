// ABOUTME: Tests for PLATEWISE_* environment overrides of the planning configuration
// ABOUTME: Validates override parsing, validation failures and default fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use platewise::errors::ConfigError;
use platewise::MealPlanningConfig;
use serial_test::serial;
use std::env;

const OVERRIDE_VARS: &[&str] = &[
    "PLATEWISE_OPTIMIZER_MAX_ITERATIONS",
    "PLATEWISE_OPTIMIZER_STEP_FRACTION",
    "PLATEWISE_OPTIMIZER_EPSILON",
    "PLATEWISE_VARIETY_WINDOW_DAYS",
    "PLATEWISE_REBALANCE_THRESHOLD_PERCENT",
    "PLATEWISE_MAX_REBALANCE_PASSES",
    "PLATEWISE_MIN_DAILY_CALORIES",
    "PLATEWISE_MAX_DAILY_CALORIES",
    "PLATEWISE_MAX_DAYS",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_overrides();
    let config = MealPlanningConfig::load().unwrap();
    assert_eq!(config, MealPlanningConfig::default());
    assert_eq!(config.optimizer.max_iterations, 15);
    assert_eq!(config.selector.variety_window_days, 3);
    assert_eq!(config.limits.max_days, 28);
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_overrides();
    env::set_var("PLATEWISE_OPTIMIZER_MAX_ITERATIONS", "25");
    env::set_var("PLATEWISE_MAX_DAYS", "14");
    env::set_var("PLATEWISE_VARIETY_WINDOW_DAYS", "2");

    let config = MealPlanningConfig::load().unwrap();
    assert_eq!(config.optimizer.max_iterations, 25);
    assert_eq!(config.limits.max_days, 14);
    assert_eq!(config.selector.variety_window_days, 2);
    // untouched settings keep their defaults
    assert!((config.optimizer.step_fraction - 0.05).abs() < f64::EPSILON);

    clear_overrides();
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("PLATEWISE_OPTIMIZER_MAX_ITERATIONS", "many");

    let err = MealPlanningConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("PLATEWISE_OPTIMIZER_MAX_ITERATIONS"));

    clear_overrides();
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    clear_overrides();
    env::set_var("PLATEWISE_MIN_DAILY_CALORIES", "6000");

    assert!(MealPlanningConfig::load().is_err());

    clear_overrides();
}

#[test]
fn test_default_config_validates() {
    assert!(MealPlanningConfig::default().validate().is_ok());
}

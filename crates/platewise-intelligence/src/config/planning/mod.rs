// ABOUTME: Meal planning configuration for scoring, selection, optimization and assembly
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Planning Configuration Module
//!
//! Provides validated configuration for every stage of the meal planner.
//! Defaults live in `Default` impls; `load()` applies `PLATEWISE_*` environment
//! overrides and validates the result.
//!
//! # Module Structure
//!
//! - `selection` - Quality score weights and template variety settings
//! - `optimizer` - Portion optimizer iteration cap, step size and clamps
//! - `assembly` - Day rebalancing thresholds and default meal structure

pub mod assembly;
pub mod error;
pub mod optimizer;
pub mod selection;

pub use assembly::AssemblerConfig;
pub use error::ConfigError;
pub use optimizer::OptimizerConfig;
pub use selection::{ScoringConfig, SelectorConfig};

use platewise_core::models::PreferenceLimits;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static MEAL_PLANNING_CONFIG: OnceLock<MealPlanningConfig> = OnceLock::new();

/// Main meal planning configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlanningConfig {
    /// Nutrition quality score weights
    pub scoring: ScoringConfig,
    /// Template selection and variety
    pub selector: SelectorConfig,
    /// Portion optimizer tuning
    pub optimizer: OptimizerConfig,
    /// Day assembly and rebalancing
    pub assembler: AssemblerConfig,
    /// Request validation bounds
    pub limits: PreferenceLimits,
}

impl MealPlanningConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        MEAL_PLANNING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load meal planning config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_scoring()?;
        self.validate_optimizer()?;
        self.validate_assembler()?;
        self.validate_limits()
    }

    fn validate_scoring(&self) -> Result<(), ConfigError> {
        let scoring = &self.scoring;
        if scoring.calorie_weight < 0.0 || scoring.macro_weight < 0.0 {
            return Err(ConfigError::InvalidWeights(
                "Scoring weights must be non-negative",
            ));
        }
        if (scoring.calorie_weight + scoring.macro_weight - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Calorie and macro weights should sum to 1.0",
            ));
        }
        if self.selector.template_repeat_penalty < 0.0
            || self.selector.ingredient_repeat_penalty < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Repetition penalties must be non-negative",
            ));
        }
        Ok(())
    }

    fn validate_optimizer(&self) -> Result<(), ConfigError> {
        let opt = &self.optimizer;
        if opt.max_iterations == 0 || opt.max_iterations > 1000 {
            return Err(ConfigError::ValueOutOfRange(
                "max_iterations must be between 1 and 1000",
            ));
        }
        if opt.step_fraction <= 0.0 || opt.step_fraction >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "step_fraction must be between 0 and 1",
            ));
        }
        if opt.convergence_epsilon <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "convergence_epsilon must be positive",
            ));
        }
        if opt.min_portion_ratio <= 0.0 || opt.min_portion_ratio >= opt.max_portion_ratio {
            return Err(ConfigError::InvalidRange(
                "min_portion_ratio must be positive and < max_portion_ratio",
            ));
        }
        if opt.max_portion_ratio < 1.0 || opt.min_portion_ratio > 1.0 {
            return Err(ConfigError::InvalidRange(
                "portion ratios must bracket the base quantity",
            ));
        }
        if opt.min_portion_grams < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_portion_grams must be non-negative",
            ));
        }
        if opt.adjust_top_n == 0 {
            return Err(ConfigError::ValueOutOfRange("adjust_top_n must be at least 1"));
        }
        if opt.infeasible_calorie_deviation_pct <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "infeasible_calorie_deviation_pct must be positive",
            ));
        }
        if opt.max_scaling_passes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_scaling_passes must be at least 1",
            ));
        }
        Ok(())
    }

    fn validate_assembler(&self) -> Result<(), ConfigError> {
        let asm = &self.assembler;
        if asm.rebalance_threshold_pct < 0.0 || asm.day_calorie_tolerance_pct < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Rebalancing thresholds must be non-negative",
            ));
        }
        if asm.max_rebalance_passes > 10 {
            return Err(ConfigError::ValueOutOfRange(
                "max_rebalance_passes must be at most 10",
            ));
        }
        if asm.min_slot_calories <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_slot_calories must be positive",
            ));
        }
        Ok(())
    }

    fn validate_limits(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        if limits.min_daily_calories == 0
            || limits.min_daily_calories >= limits.max_daily_calories
        {
            return Err(ConfigError::InvalidRange(
                "min_daily_calories must be positive and < max_daily_calories",
            ));
        }
        if limits.max_days == 0 {
            return Err(ConfigError::ValueOutOfRange("max_days must be at least 1"));
        }
        if limits.macro_sum_tolerance_pct < 0.0 || limits.share_sum_tolerance_pct < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Sum tolerances must be non-negative",
            ));
        }
        Ok(())
    }

    /// Parse one environment variable into `target` when it is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "PLATEWISE_OPTIMIZER_MAX_ITERATIONS",
            &mut self.optimizer.max_iterations,
        )?;
        Self::apply_env_var(
            "PLATEWISE_OPTIMIZER_STEP_FRACTION",
            &mut self.optimizer.step_fraction,
        )?;
        Self::apply_env_var(
            "PLATEWISE_OPTIMIZER_EPSILON",
            &mut self.optimizer.convergence_epsilon,
        )?;
        Self::apply_env_var(
            "PLATEWISE_VARIETY_WINDOW_DAYS",
            &mut self.selector.variety_window_days,
        )?;
        Self::apply_env_var(
            "PLATEWISE_REBALANCE_THRESHOLD_PERCENT",
            &mut self.assembler.rebalance_threshold_pct,
        )?;
        Self::apply_env_var(
            "PLATEWISE_MAX_REBALANCE_PASSES",
            &mut self.assembler.max_rebalance_passes,
        )?;
        Self::apply_env_var(
            "PLATEWISE_MIN_DAILY_CALORIES",
            &mut self.limits.min_daily_calories,
        )?;
        Self::apply_env_var(
            "PLATEWISE_MAX_DAILY_CALORIES",
            &mut self.limits.max_daily_calories,
        )?;
        Self::apply_env_var("PLATEWISE_MAX_DAYS", &mut self.limits.max_days)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MealPlanningConfig::default().validate().is_ok());
    }

    #[test]
    fn test_scoring_weights_must_sum_to_one() {
        let mut config = MealPlanningConfig::default();
        config.scoring.macro_weight = 0.9;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_zero_iteration_cap_rejected() {
        let mut config = MealPlanningConfig::default();
        config.optimizer.max_iterations = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_inverted_portion_ratios_rejected() {
        let mut config = MealPlanningConfig::default();
        config.optimizer.min_portion_ratio = 4.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_inverted_calorie_limits_rejected() {
        let mut config = MealPlanningConfig::default();
        config.limits.min_daily_calories = 6000;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }
}

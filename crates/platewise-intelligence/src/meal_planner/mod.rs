// ABOUTME: Meal planning engine entry point tying selection, optimization and assembly together
// ABOUTME: Validates requests, runs single plans under a tracing span and batches across rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Planner
//!
//! [`MealPlanner`] owns a validated [`PlanningData`] bundle and a
//! [`MealPlanningConfig`]. A request is resolved into [`Preferences`] first;
//! an invalid request fails fast with [`PlanError::InvalidPreferences`] and no
//! partial plan. Everything after validation is infallible: degraded outcomes
//! (unfilled slots, non-compliant meals, missed targets, deadlines) are
//! reported inside the returned [`PlanResult`].
//!
//! Requests share nothing mutable, so batches run in parallel and each result
//! is independent of its neighbours.

/// Day and week assembly
pub mod assembler;
/// Dietary compliance validation and substitution
pub mod compliance;
/// Per-request generation state
pub mod context;
/// Portion optimization
pub mod optimizer;
/// Nutrition scoring
pub mod scorer;
/// Template selection
pub mod selector;

pub use assembler::PlanAssembler;
pub use compliance::{ComplianceOutcome, ComplianceValidator};
pub use context::{GenerationPhase, PlanningContext, PlanningCounters};
pub use optimizer::{OptimizationResult, Portion, PortionOptimizer};
pub use scorer::{NutritionScore, NutritionScorer, NutritionTarget};
pub use selector::{SelectedTemplate, Selection, SelectionSource, TemplateSelector};

use crate::catalog::PlanningData;
use crate::config::{ConfigError, MealPlanningConfig};
use platewise_core::errors::PlanError;
use platewise_core::models::{PlanRequest, PlanResult, Preferences};
use rayon::prelude::*;
use tracing::info_span;

/// Deterministic meal plan generator
#[derive(Debug, Clone)]
pub struct MealPlanner {
    data: PlanningData,
    config: MealPlanningConfig,
}

impl MealPlanner {
    /// Create a planner with an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration fails validation
    pub fn new(data: PlanningData, config: MealPlanningConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { data, config })
    }

    /// Create a planner using the process-wide configuration
    #[must_use]
    pub fn with_global_config(data: PlanningData) -> Self {
        Self {
            data,
            config: MealPlanningConfig::global().clone(),
        }
    }

    /// Planning data in use
    #[must_use]
    pub const fn data(&self) -> &PlanningData {
        &self.data
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &MealPlanningConfig {
        &self.config
    }

    /// Validate a raw request against the configured limits
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidPreferences` naming the first offending field
    pub fn resolve_preferences(&self, request: &PlanRequest) -> Result<Preferences, PlanError> {
        Preferences::from_request(
            request,
            &self.config.limits,
            &self.config.assembler.default_meal_structure,
        )
    }

    /// Generate a plan for one request
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidPreferences` if the request is invalid
    pub fn generate_plan(&self, request: &PlanRequest) -> Result<PlanResult, PlanError> {
        let preferences = self.resolve_preferences(request)?;
        Ok(self.generate_with_preferences(&preferences))
    }

    /// Generate a plan for already validated preferences
    #[must_use]
    pub fn generate_with_preferences(&self, preferences: &Preferences) -> PlanResult {
        let span = info_span!(
            "generate_plan",
            plan.diet = %preferences.diet_type,
            plan.days = preferences.days,
            plan.calories = preferences.target_calories,
        );
        let _guard = span.enter();

        let ctx = PlanningContext::new(preferences.time_budget);
        self.assembler().assemble(preferences, ctx)
    }

    /// Generate plans for a batch of requests in parallel, preserving order
    #[must_use]
    pub fn generate_plans(&self, requests: &[PlanRequest]) -> Vec<Result<PlanResult, PlanError>> {
        requests
            .par_iter()
            .map(|request| self.generate_plan(request))
            .collect()
    }

    fn assembler(&self) -> PlanAssembler<'_> {
        let catalog = self.data.catalog.as_ref();
        let scorer = NutritionScorer::new(&self.config.scoring);
        PlanAssembler::new(
            catalog,
            TemplateSelector::new(&self.data.library, catalog, &self.config.selector),
            PortionOptimizer::new(catalog, &self.config.optimizer, scorer),
            ComplianceValidator::new(catalog, &self.data.substitutions, &self.config.optimizer),
            scorer,
            &self.config.assembler,
        )
    }
}

// ABOUTME: Planning service facade binding a dataset and configuration to the meal planner
// ABOUTME: Decodes JSON requests, generates single and batch plans, and lists templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::dataset::BUILTIN_NAME;
use crate::data::{builtin_planning_data, load_dataset_from_path};
use crate::errors::ServiceError;
use crate::logging::PlanLogger;
use platewise_core::errors::PlanError;
use platewise_core::models::{DietType, MealSlot, PlanRequest, PlanResult};
use platewise_intelligence::catalog::PlanningData;
use platewise_intelligence::config::MealPlanningConfig;
use platewise_intelligence::meal_planner::MealPlanner;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Template listing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSummary {
    /// Template id
    pub id: String,
    /// Display name
    pub name: String,
    /// Slot served
    pub slot: MealSlot,
    /// Compatible diets
    pub diets: Vec<DietType>,
    /// Calories at base quantities
    pub base_calories: f64,
    /// Ingredient ids in template order
    pub ingredients: Vec<String>,
}

/// Meal planning over one dataset and configuration
#[derive(Debug, Clone)]
pub struct PlanningService {
    planner: MealPlanner,
    dataset_name: String,
}

impl PlanningService {
    /// Service over the builtin dataset with the process-wide configuration
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Catalog` if the builtin dataset is inconsistent
    pub fn builtin() -> Result<Self, ServiceError> {
        let data = builtin_planning_data()?;
        Ok(Self {
            planner: MealPlanner::with_global_config(data),
            dataset_name: BUILTIN_NAME.to_owned(),
        })
    }

    /// Service over a JSON dataset file with the process-wide configuration
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the file cannot be read or fails validation
    pub fn from_dataset_path(path: &Path) -> Result<Self, ServiceError> {
        let data = load_dataset_from_path(path)?;
        Ok(Self {
            planner: MealPlanner::with_global_config(data),
            dataset_name: path.display().to_string(),
        })
    }

    /// Service over explicit data and configuration
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Config` if the configuration is invalid
    pub fn new(
        data: PlanningData,
        config: MealPlanningConfig,
        dataset_name: impl Into<String>,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            planner: MealPlanner::new(data, config)?,
            dataset_name: dataset_name.into(),
        })
    }

    /// Underlying planner
    #[must_use]
    pub const fn planner(&self) -> &MealPlanner {
        &self.planner
    }

    /// Name of the dataset in use
    #[must_use]
    pub fn dataset_name(&self) -> &str {
        &self.dataset_name
    }

    /// Decode a JSON plan request
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Plan` naming the `request` field if the JSON does not decode
    pub fn parse_request(json: &str) -> Result<PlanRequest, ServiceError> {
        serde_json::from_str(json).map_err(|err| {
            ServiceError::Plan(PlanError::invalid_preferences(
                "request",
                format!("malformed request: {err}"),
            ))
        })
    }

    /// Generate a plan for one request
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Plan` if the request fails validation
    pub fn generate(&self, request: &PlanRequest) -> Result<PlanResult, ServiceError> {
        let started = Instant::now();
        match self.planner.generate_plan(request) {
            Ok(result) => {
                PlanLogger::log_plan_summary(&result, started.elapsed());
                Ok(result)
            }
            Err(err) => {
                PlanLogger::log_rejected_request(err.field(), &err.to_string());
                Err(err.into())
            }
        }
    }

    /// Generate plans for a batch of requests, in request order
    #[must_use]
    pub fn generate_batch(&self, requests: &[PlanRequest]) -> Vec<Result<PlanResult, ServiceError>> {
        let started = Instant::now();
        let results: Vec<Result<PlanResult, ServiceError>> = requests
            .par_iter()
            .map(|request| self.generate(request))
            .collect();
        info!(
            batch.size = requests.len(),
            batch.failed = results.iter().filter(|r| r.is_err()).count(),
            batch.duration_ms = started.elapsed().as_millis() as u64,
            "Batch planning finished"
        );
        results
    }

    /// Templates in the dataset, optionally filtered by diet and slot, ordered by id
    #[must_use]
    pub fn list_templates(
        &self,
        diet: Option<DietType>,
        slot: Option<MealSlot>,
    ) -> Vec<TemplateSummary> {
        self.planner
            .data()
            .library
            .iter()
            .filter(|t| diet.is_none_or(|d| t.supports(d)))
            .filter(|t| slot.is_none_or(|s| t.slot == s))
            .map(|t| TemplateSummary {
                id: t.id.to_string(),
                name: t.name.clone(),
                slot: t.slot,
                diets: t.diets.clone(),
                base_calories: t.base_nutrition.calories,
                ingredients: t.items.iter().map(|i| i.ingredient_id.to_string()).collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_defaults() {
        let request =
            PlanningService::parse_request(r#"{"target_calories": 1800, "diet_type": "vegan"}"#)
                .unwrap();
        assert!((request.target_calories - 1800.0).abs() < f64::EPSILON);
        assert_eq!(request.days, 1);
        assert!(request.restrictions.is_empty());
    }

    #[test]
    fn test_parse_request_malformed() {
        let err = PlanningService::parse_request("{").unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Plan(PlanError::InvalidPreferences { field: "request", .. })
        ));
    }

    #[test]
    fn test_list_templates_filters() {
        let service = PlanningService::new(
            builtin_planning_data().unwrap(),
            MealPlanningConfig::default(),
            BUILTIN_NAME,
        )
        .unwrap();
        let keto_dinners = service.list_templates(Some(DietType::Keto), Some(MealSlot::Dinner));
        assert!(!keto_dinners.is_empty());
        assert!(keto_dinners
            .iter()
            .all(|t| t.slot == MealSlot::Dinner && t.diets.contains(&DietType::Keto)));
        let all = service.list_templates(None, None);
        assert!(all.len() > keto_dinners.len());
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }
}

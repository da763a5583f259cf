// ABOUTME: Read-only catalog containers: ingredients, meal templates and substitutions
// ABOUTME: Validated once on construction, then shared across threads behind Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Catalog
//!
//! The planner never mutates its data. A [`PlanningDataset`] is the serde
//! wire form supplied by a data-loading collaborator; [`PlanningDataset::build`]
//! validates cross references and produces a [`PlanningData`] bundle of
//! immutable containers that every request borrows from.

mod ingredients;
mod substitutions;
mod templates;

pub use ingredients::IngredientCatalog;
pub use substitutions::SubstitutionMap;
pub use templates::{NeutralDefault, TemplateLibrary};

use platewise_core::errors::CatalogError;
use platewise_core::models::{Ingredient, IngredientId, MealTemplate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Unvalidated dataset as supplied by a loader
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanningDataset {
    /// Catalog ingredients
    pub ingredients: Vec<Ingredient>,
    /// Meal templates
    pub templates: Vec<MealTemplate>,
    /// Neutral default template per diet and slot
    #[serde(default)]
    pub neutral_defaults: Vec<NeutralDefault>,
    /// Ranked substitutes per ingredient
    #[serde(default)]
    pub substitutions: BTreeMap<IngredientId, Vec<IngredientId>>,
}

impl PlanningDataset {
    /// Validate the dataset and build the shared read-only containers
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` for duplicate ids, dangling references or invalid quantities
    pub fn build(self) -> Result<PlanningData, CatalogError> {
        let catalog = IngredientCatalog::new(self.ingredients)?;
        let library = TemplateLibrary::new(self.templates, self.neutral_defaults, &catalog)?;
        let substitutions = SubstitutionMap::new(self.substitutions, &catalog)?;
        debug!(
            catalog.ingredients = catalog.len(),
            catalog.templates = library.len(),
            catalog.substitution_keys = substitutions.len(),
            "Planning dataset validated"
        );
        Ok(PlanningData {
            catalog: Arc::new(catalog),
            library: Arc::new(library),
            substitutions: Arc::new(substitutions),
        })
    }
}

/// Validated, immutable planning data shared by every request
#[derive(Debug, Clone)]
pub struct PlanningData {
    /// Ingredient catalog
    pub catalog: Arc<IngredientCatalog>,
    /// Template library
    pub library: Arc<TemplateLibrary>,
    /// Substitution map
    pub substitutions: Arc<SubstitutionMap>,
}

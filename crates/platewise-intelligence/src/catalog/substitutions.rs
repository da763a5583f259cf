// ABOUTME: Ranked ingredient substitution lists used to repair non-compliant meals
// ABOUTME: Every key and substitute must exist in the ingredient catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::IngredientCatalog;
use platewise_core::errors::CatalogError;
use platewise_core::models::IngredientId;
use std::collections::BTreeMap;

/// Read-only map from an ingredient to its ranked substitutes
#[derive(Debug, Clone, Default)]
pub struct SubstitutionMap {
    by_ingredient: BTreeMap<IngredientId, Vec<IngredientId>>,
}

impl SubstitutionMap {
    /// Build the map, checking every id against `catalog`
    ///
    /// Self-references and repeated substitutes are dropped, keeping first rank.
    ///
    /// # Errors
    ///
    /// Returns `UnknownIngredient` when a key or substitute is not in the catalog
    pub fn new(
        entries: BTreeMap<IngredientId, Vec<IngredientId>>,
        catalog: &IngredientCatalog,
    ) -> Result<Self, CatalogError> {
        let mut by_ingredient = BTreeMap::new();
        for (original, substitutes) in entries {
            if !catalog.contains(&original) {
                return Err(CatalogError::UnknownIngredient {
                    referenced_by: "substitutions".to_owned(),
                    ingredient_id: original.to_string(),
                });
            }
            let mut ranked: Vec<IngredientId> = Vec::with_capacity(substitutes.len());
            for substitute in substitutes {
                if !catalog.contains(&substitute) {
                    return Err(CatalogError::UnknownIngredient {
                        referenced_by: format!("substitutions.{original}"),
                        ingredient_id: substitute.to_string(),
                    });
                }
                if substitute != original && !ranked.contains(&substitute) {
                    ranked.push(substitute);
                }
            }
            by_ingredient.insert(original, ranked);
        }
        Ok(Self { by_ingredient })
    }

    /// Substitutes for `ingredient` in rank order, empty when none are registered
    #[must_use]
    pub fn substitutes_for(&self, ingredient: &IngredientId) -> &[IngredientId] {
        self.by_ingredient
            .get(ingredient)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of ingredients with registered substitutes
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_ingredient.len()
    }

    /// True when no substitutions are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_ingredient.is_empty()
    }
}

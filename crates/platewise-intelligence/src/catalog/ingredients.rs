// ABOUTME: Ingredient catalog keyed by id with nutrient validation
// ABOUTME: Lookups are deterministic and the catalog is immutable once built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use platewise_core::errors::CatalogError;
use platewise_core::models::{Ingredient, IngredientId};
use std::collections::BTreeMap;

/// Read-only set of ingredients
#[derive(Debug, Clone, Default)]
pub struct IngredientCatalog {
    by_id: BTreeMap<IngredientId, Ingredient>,
}

impl IngredientCatalog {
    /// Build the catalog, rejecting duplicate ids and invalid nutrient values
    ///
    /// # Errors
    ///
    /// Returns `DuplicateIngredient` or `InvalidValue`
    pub fn new(ingredients: Vec<Ingredient>) -> Result<Self, CatalogError> {
        let mut by_id = BTreeMap::new();
        for ingredient in ingredients {
            if !ingredient.per_100g.is_valid() {
                return Err(CatalogError::invalid_value(
                    ingredient.id.as_str(),
                    "nutrient values must be finite and non-negative",
                ));
            }
            if ingredient.id.as_str().is_empty() {
                return Err(CatalogError::invalid_value(
                    ingredient.name.as_str(),
                    "ingredient id must not be empty",
                ));
            }
            if by_id.contains_key(&ingredient.id) {
                return Err(CatalogError::DuplicateIngredient {
                    ingredient_id: ingredient.id.to_string(),
                });
            }
            by_id.insert(ingredient.id.clone(), ingredient);
        }
        Ok(Self { by_id })
    }

    /// Look up an ingredient
    #[must_use]
    pub fn get(&self, id: &IngredientId) -> Option<&Ingredient> {
        self.by_id.get(id)
    }

    /// True when `id` is in the catalog
    #[must_use]
    pub fn contains(&self, id: &IngredientId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Ingredients in id order
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.by_id.values()
    }

    /// Number of ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// True when the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platewise_core::models::NutrientProfile;

    fn egg() -> Ingredient {
        Ingredient::new(
            "eggs",
            "Eggs",
            NutrientProfile::new(143.0, 12.6, 9.5, 0.7, 0.0),
            &["egg"],
        )
    }

    #[test]
    fn test_duplicate_ingredient_rejected() {
        let err = IngredientCatalog::new(vec![egg(), egg()]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateIngredient {
                ingredient_id: "eggs".into()
            }
        );
    }

    #[test]
    fn test_negative_nutrients_rejected() {
        let mut bad = egg();
        bad.per_100g.protein_g = -1.0;
        assert!(matches!(
            IngredientCatalog::new(vec![bad]),
            Err(CatalogError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_lookup() {
        let catalog = IngredientCatalog::new(vec![egg()]).unwrap();
        assert!(catalog.contains(&IngredientId::from("eggs")));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(&IngredientId::from("tofu")).is_none());
    }
}

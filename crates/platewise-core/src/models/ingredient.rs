// ABOUTME: Catalog ingredient records with per-100g nutrients and classification tags
// ABOUTME: Tags drive diet compatibility, allergen restrictions and substitution lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::diet::DietFlags;
use super::ids::IngredientId;
use super::nutrients::{Macronutrient, NutrientProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A food item in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier
    pub id: IngredientId,
    /// Display name
    pub name: String,
    /// Nutrients per 100 g
    pub per_100g: NutrientProfile,
    /// Classification tags (`dairy`, `meat`, `tree_nut`, `high_carb`, ...)
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Ingredient {
    /// Create an ingredient from its nutrients and tags
    #[must_use]
    pub fn new(
        id: impl Into<IngredientId>,
        name: impl Into<String>,
        per_100g: NutrientProfile,
        tags: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            per_100g,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    /// Nutrients supplied by `grams` of this ingredient
    #[must_use]
    pub fn nutrition_for(&self, grams: f64) -> NutrientProfile {
        self.per_100g.for_grams(grams)
    }

    /// Energy per gram
    #[must_use]
    pub fn kcal_per_gram(&self) -> f64 {
        self.per_100g.for_grams(1.0).calories
    }

    /// Percent of this ingredient's macro energy that comes from `macronutrient`
    #[must_use]
    pub fn macro_density_pct(&self, macronutrient: Macronutrient) -> f64 {
        self.per_100g.macro_split().get(macronutrient)
    }

    /// True when the ingredient carries `tag`
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Tags of this ingredient that appear in `banned`, in sorted order
    #[must_use]
    pub fn violating_tags(&self, banned: &BTreeSet<String>) -> Vec<String> {
        self.tags.intersection(banned).cloned().collect()
    }

    /// Diets this ingredient is compatible with
    #[must_use]
    pub fn diet_compatibility(&self) -> DietFlags {
        DietFlags::from_tags(self.tags.iter().map(String::as_str))
    }
}

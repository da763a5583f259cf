// ABOUTME: Meal templates: ingredient lists with base quantities for one meal slot
// ABOUTME: Templates declare the diets they serve and carry derived base nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::diet::{DietType, MealSlot};
use super::ids::{IngredientId, TemplateId};
use super::nutrients::NutrientProfile;
use serde::{Deserialize, Serialize};

/// One ingredient line of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateItem {
    /// Referenced catalog ingredient
    pub ingredient_id: IngredientId,
    /// Base quantity in grams
    pub base_grams: f64,
}

impl TemplateItem {
    /// Create a template line
    #[must_use]
    pub fn new(ingredient_id: impl Into<IngredientId>, base_grams: f64) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            base_grams,
        }
    }
}

/// A reusable meal pattern for one slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTemplate {
    /// Unique identifier
    pub id: TemplateId,
    /// Display name
    pub name: String,
    /// Slot this template serves
    pub slot: MealSlot,
    /// Diets this template is declared compatible with
    pub diets: Vec<DietType>,
    /// Ingredient lines with base quantities
    pub items: Vec<TemplateItem>,
    /// Nutrition at base quantities, derived when the library is built
    #[serde(default)]
    pub base_nutrition: NutrientProfile,
}

impl MealTemplate {
    /// Create a template; base nutrition is filled in by the library
    #[must_use]
    pub fn new(
        id: impl Into<TemplateId>,
        name: impl Into<String>,
        slot: MealSlot,
        diets: &[DietType],
        items: Vec<TemplateItem>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slot,
            diets: diets.to_vec(),
            items,
            base_nutrition: NutrientProfile::default(),
        }
    }

    /// True when the template declares `diet`
    #[must_use]
    pub fn supports(&self, diet: DietType) -> bool {
        self.diets.contains(&diet)
    }

    /// Ingredient ids in template order
    pub fn ingredient_ids(&self) -> impl Iterator<Item = &IngredientId> {
        self.items.iter().map(|item| &item.ingredient_id)
    }
}

// ABOUTME: Meal template library with per-diet neutral defaults
// ABOUTME: Validates ingredient references and derives base nutrition for each template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::IngredientCatalog;
use platewise_core::errors::CatalogError;
use platewise_core::models::{DietType, MealSlot, MealTemplate, NutrientProfile, TemplateId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Template used when a slot's candidate pool is empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeutralDefault {
    /// Diet served
    pub diet: DietType,
    /// Slot served
    pub slot: MealSlot,
    /// Template id
    pub template_id: TemplateId,
}

/// Read-only set of meal templates
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    by_id: BTreeMap<TemplateId, MealTemplate>,
    neutral: BTreeMap<(DietType, MealSlot), TemplateId>,
}

impl TemplateLibrary {
    /// Build the library, validating every template against `catalog`
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` for duplicate ids, empty templates, non-positive
    /// quantities, unknown ingredients or mismatched neutral defaults
    pub fn new(
        templates: Vec<MealTemplate>,
        neutral_defaults: Vec<NeutralDefault>,
        catalog: &IngredientCatalog,
    ) -> Result<Self, CatalogError> {
        let mut by_id = BTreeMap::new();
        for mut template in templates {
            if by_id.contains_key(&template.id) {
                return Err(CatalogError::DuplicateTemplate {
                    template_id: template.id.to_string(),
                });
            }
            template.base_nutrition = base_nutrition(&template, catalog)?;
            by_id.insert(template.id.clone(), template);
        }

        let mut neutral = BTreeMap::new();
        for entry in neutral_defaults {
            let Some(template) = by_id.get(&entry.template_id) else {
                return Err(CatalogError::UnknownTemplate {
                    diet: entry.diet.to_string(),
                    slot: entry.slot.to_string(),
                    template_id: entry.template_id.to_string(),
                });
            };
            if template.slot != entry.slot || !template.supports(entry.diet) {
                return Err(CatalogError::NeutralMismatch {
                    template_id: entry.template_id.to_string(),
                    diet: entry.diet.to_string(),
                    slot: entry.slot.to_string(),
                });
            }
            neutral.insert((entry.diet, entry.slot), entry.template_id);
        }

        Ok(Self { by_id, neutral })
    }

    /// Look up a template
    #[must_use]
    pub fn get(&self, id: &TemplateId) -> Option<&MealTemplate> {
        self.by_id.get(id)
    }

    /// Templates for `slot` that declare `diet`, in id order
    pub fn candidates(
        &self,
        slot: MealSlot,
        diet: DietType,
    ) -> impl Iterator<Item = &MealTemplate> {
        self.by_id
            .values()
            .filter(move |t| t.slot == slot && t.supports(diet))
    }

    /// Neutral default for a diet and slot
    #[must_use]
    pub fn neutral_for(&self, diet: DietType, slot: MealSlot) -> Option<&MealTemplate> {
        self.neutral
            .get(&(diet, slot))
            .and_then(|id| self.by_id.get(id))
    }

    /// Templates in id order
    pub fn iter(&self) -> impl Iterator<Item = &MealTemplate> {
        self.by_id.values()
    }

    /// Number of templates
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// True when the library is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

fn base_nutrition(
    template: &MealTemplate,
    catalog: &IngredientCatalog,
) -> Result<NutrientProfile, CatalogError> {
    if template.items.is_empty() {
        return Err(CatalogError::EmptyTemplate {
            template_id: template.id.to_string(),
        });
    }
    let mut total = NutrientProfile::default();
    for item in &template.items {
        if !item.base_grams.is_finite() || item.base_grams <= 0.0 {
            return Err(CatalogError::invalid_value(
                template.id.as_str(),
                format!("base quantity of '{}' must be positive", item.ingredient_id),
            ));
        }
        let ingredient =
            catalog
                .get(&item.ingredient_id)
                .ok_or_else(|| CatalogError::UnknownIngredient {
                    referenced_by: template.id.to_string(),
                    ingredient_id: item.ingredient_id.to_string(),
                })?;
        total += ingredient.nutrition_for(item.base_grams);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use platewise_core::models::{Ingredient, TemplateItem};

    fn catalog() -> IngredientCatalog {
        IngredientCatalog::new(vec![
            Ingredient::new(
                "oats",
                "Oats",
                NutrientProfile::new(389.0, 16.9, 6.9, 66.3, 10.6),
                &["grain"],
            ),
            Ingredient::new(
                "milk",
                "Milk",
                NutrientProfile::new(61.0, 3.2, 3.3, 4.8, 0.0),
                &["dairy"],
            ),
        ])
        .unwrap()
    }

    fn porridge() -> MealTemplate {
        MealTemplate::new(
            "porridge",
            "Porridge",
            MealSlot::Breakfast,
            &[DietType::Standard, DietType::Vegetarian],
            vec![TemplateItem::new("oats", 50.0), TemplateItem::new("milk", 200.0)],
        )
    }

    #[test]
    fn test_base_nutrition_derived() {
        let library = TemplateLibrary::new(vec![porridge()], vec![], &catalog()).unwrap();
        let template = library.get(&TemplateId::from("porridge")).unwrap();
        assert!((template.base_nutrition.calories - (194.5 + 122.0)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_ingredient_rejected() {
        let mut template = porridge();
        template.items.push(TemplateItem::new("honey", 10.0));
        let err = TemplateLibrary::new(vec![template], vec![], &catalog()).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownIngredient { .. }));
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let mut template = porridge();
        template.items[0].base_grams = 0.0;
        assert!(TemplateLibrary::new(vec![template], vec![], &catalog()).is_err());
    }

    #[test]
    fn test_neutral_default_must_match_slot_and_diet() {
        let wrong_diet = NeutralDefault {
            diet: DietType::Keto,
            slot: MealSlot::Breakfast,
            template_id: TemplateId::from("porridge"),
        };
        let err = TemplateLibrary::new(vec![porridge()], vec![wrong_diet], &catalog()).unwrap_err();
        assert!(matches!(err, CatalogError::NeutralMismatch { .. }));

        let ok = NeutralDefault {
            diet: DietType::Vegetarian,
            slot: MealSlot::Breakfast,
            template_id: TemplateId::from("porridge"),
        };
        let library = TemplateLibrary::new(vec![porridge()], vec![ok], &catalog()).unwrap();
        assert!(library
            .neutral_for(DietType::Vegetarian, MealSlot::Breakfast)
            .is_some());
        assert!(library.neutral_for(DietType::Vegan, MealSlot::Breakfast).is_none());
    }

    #[test]
    fn test_candidates_filter_by_slot_and_diet() {
        let library = TemplateLibrary::new(vec![porridge()], vec![], &catalog()).unwrap();
        assert_eq!(
            library
                .candidates(MealSlot::Breakfast, DietType::Vegetarian)
                .count(),
            1
        );
        assert_eq!(library.candidates(MealSlot::Lunch, DietType::Vegetarian).count(), 0);
        assert_eq!(library.candidates(MealSlot::Breakfast, DietType::Vegan).count(), 0);
    }
}

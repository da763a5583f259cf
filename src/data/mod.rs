// ABOUTME: Planning datasets: the compiled-in builtin dataset and the JSON file loader
// ABOUTME: Both paths produce a PlanningDataset that is validated into shared PlanningData
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Planning Data
//!
//! The builtin dataset covers every diet and slot the engine supports with a
//! small curated catalog. Larger catalogs are supplied as JSON in the
//! `PlanningDataset` wire format and loaded with [`load_dataset_from_path`].

mod ingredients;
mod loader;
mod substitutions;
mod templates;

pub use loader::{load_dataset_from_path, load_dataset_from_str, read_dataset_from_path};

use platewise_core::errors::CatalogError;
use platewise_intelligence::catalog::{PlanningData, PlanningDataset};

/// Unvalidated builtin dataset
#[must_use]
pub fn builtin_dataset() -> PlanningDataset {
    PlanningDataset {
        ingredients: ingredients::ingredients(),
        templates: templates::templates(),
        neutral_defaults: templates::neutral_defaults(),
        substitutions: substitutions::substitutions(),
    }
}

/// Validated builtin planning data
///
/// # Errors
///
/// Returns `CatalogError` if the builtin tables are inconsistent
pub fn builtin_planning_data() -> Result<PlanningData, CatalogError> {
    builtin_dataset().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use platewise_core::models::{DietType, MealSlot};

    #[test]
    fn test_builtin_dataset_is_valid() {
        let data = builtin_planning_data().unwrap();
        assert!(data.catalog.len() >= 40);
        assert!(data.library.len() >= 30);
    }

    #[test]
    fn test_every_diet_fills_main_meals() {
        let data = builtin_planning_data().unwrap();
        for diet in DietType::ALL {
            for slot in MealSlot::ALL {
                assert!(
                    data.library.candidates(slot, diet).next().is_some(),
                    "{diet} has no {slot} template"
                );
                assert!(data.library.neutral_for(diet, slot).is_some());
            }
        }
    }

    #[test]
    fn test_templates_respect_their_diets() {
        let data = builtin_planning_data().unwrap();
        for template in data.library.iter() {
            for diet in &template.diets {
                let banned = diet.banned_tags();
                for item in &template.items {
                    let ingredient = data.catalog.get(&item.ingredient_id).unwrap();
                    assert!(
                        banned.iter().all(|tag| !ingredient.has_tag(tag)),
                        "{} lists {diet} but contains {}",
                        template.id,
                        ingredient.id
                    );
                }
            }
        }
    }
}

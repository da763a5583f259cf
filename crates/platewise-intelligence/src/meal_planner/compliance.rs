// ABOUTME: Diet and restriction compliance validation with ranked ingredient substitution
// ABOUTME: Replaces banned ingredients by calorie-equivalent substitutes or flags the meal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::optimizer::Portion;
use crate::catalog::{IngredientCatalog, SubstitutionMap};
use crate::config::OptimizerConfig;
use platewise_core::models::{
    ComplianceReport, ComplianceStatus, Ingredient, Macronutrient, OffendingIngredient,
    Substitution,
};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Portions after compliance repair, with the report describing what happened
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceOutcome {
    /// Portions, substitutes in place of the originals
    pub portions: Vec<Portion>,
    /// What was substituted and what still violates
    pub report: ComplianceReport,
}

/// Checks meals against banned tags and repairs them where possible
#[derive(Debug, Clone, Copy)]
pub struct ComplianceValidator<'a> {
    catalog: &'a IngredientCatalog,
    substitutions: &'a SubstitutionMap,
    config: &'a OptimizerConfig,
}

impl<'a> ComplianceValidator<'a> {
    /// Create a validator
    #[must_use]
    pub const fn new(
        catalog: &'a IngredientCatalog,
        substitutions: &'a SubstitutionMap,
        config: &'a OptimizerConfig,
    ) -> Self {
        Self {
            catalog,
            substitutions,
            config,
        }
    }

    /// Validate `portions` against `banned`, substituting where a compliant substitute exists
    #[must_use]
    pub fn validate(&self, portions: Vec<Portion>, banned: &BTreeSet<String>) -> ComplianceOutcome {
        if banned.is_empty() {
            return ComplianceOutcome {
                portions,
                report: ComplianceReport::compliant(),
            };
        }

        let mut substitutions = Vec::new();
        let mut repaired = Vec::with_capacity(portions.len());
        for portion in portions {
            let Some(ingredient) = self.catalog.get(&portion.ingredient_id) else {
                repaired.push(portion);
                continue;
            };
            let violated = ingredient.violating_tags(banned);
            if violated.is_empty() {
                repaired.push(portion);
                continue;
            }
            match self.best_substitute(ingredient, portion.grams, banned) {
                Some((substitute, grams)) => {
                    debug!(
                        compliance.original = %ingredient.id,
                        compliance.substitute = %substitute.id,
                        compliance.tags = ?violated,
                        "Substituted non-compliant ingredient"
                    );
                    substitutions.push(Substitution {
                        original: ingredient.id.clone(),
                        substitute: substitute.id.clone(),
                        original_grams: portion.grams,
                        substitute_grams: grams,
                        violated_tags: violated,
                    });
                    repaired.push(Portion::with_ratio_bounds(
                        substitute.id.clone(),
                        grams,
                        self.config,
                    ));
                }
                None => repaired.push(portion),
            }
        }

        let portions = merge_duplicates(repaired);
        let offending: Vec<OffendingIngredient> = portions
            .iter()
            .filter_map(|p| {
                let tags = self.catalog.get(&p.ingredient_id)?.violating_tags(banned);
                (!tags.is_empty()).then(|| OffendingIngredient {
                    ingredient_id: p.ingredient_id.clone(),
                    tags,
                })
            })
            .collect();

        let status = if offending.is_empty() {
            ComplianceStatus::Compliant
        } else {
            warn!(
                compliance.offending = ?offending
                    .iter()
                    .map(|o| o.ingredient_id.as_str())
                    .collect::<Vec<_>>(),
                "Meal keeps banned ingredients with no acceptable substitute"
            );
            ComplianceStatus::Violation
        };

        ComplianceOutcome {
            portions,
            report: ComplianceReport {
                status,
                substitutions,
                offending,
            },
        }
    }

    /// Closest compliant substitute by macro grams at equal calories; rank order breaks ties
    fn best_substitute(
        &self,
        original: &Ingredient,
        grams: f64,
        banned: &BTreeSet<String>,
    ) -> Option<(&'a Ingredient, f64)> {
        let original_nutrition = original.nutrition_for(grams);
        let max_grams = grams * self.config.max_portion_ratio;

        let mut best: Option<(&'a Ingredient, f64, f64)> = None;
        for id in self.substitutions.substitutes_for(&original.id) {
            let Some(candidate) = self.catalog.get(id) else {
                continue;
            };
            if !candidate.violating_tags(banned).is_empty() {
                continue;
            }
            let kcal_per_gram = candidate.kcal_per_gram();
            let equivalent = if kcal_per_gram > 0.0 && original_nutrition.calories > 0.0 {
                original_nutrition.calories / kcal_per_gram
            } else {
                grams
            };
            let equivalent = equivalent.clamp(
                self.config.min_portion_grams.min(max_grams),
                max_grams.max(self.config.min_portion_grams),
            );
            let candidate_nutrition = candidate.nutrition_for(equivalent);
            let delta: f64 = Macronutrient::ALL
                .iter()
                .map(|m| (candidate_nutrition.grams_of(*m) - original_nutrition.grams_of(*m)).abs())
                .sum();
            if best.is_none_or(|(_, _, best_delta)| delta < best_delta) {
                best = Some((candidate, equivalent, delta));
            }
        }
        best.map(|(ingredient, grams, _)| (ingredient, grams))
    }
}

/// Fold repeated ingredients into their first occurrence
fn merge_duplicates(portions: Vec<Portion>) -> Vec<Portion> {
    let mut merged: Vec<Portion> = Vec::with_capacity(portions.len());
    for portion in portions {
        if let Some(existing) = merged
            .iter_mut()
            .find(|p| p.ingredient_id == portion.ingredient_id)
        {
            existing.grams += portion.grams;
            existing.min_grams += portion.min_grams;
            existing.max_grams += portion.max_grams;
        } else {
            merged.push(portion);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use platewise_core::models::{IngredientId, NutrientProfile};
    use std::collections::BTreeMap;

    fn catalog() -> IngredientCatalog {
        IngredientCatalog::new(vec![
            Ingredient::new(
                "milk",
                "Milk",
                NutrientProfile::new(61.0, 3.2, 3.3, 4.8, 0.0),
                &["dairy"],
            ),
            Ingredient::new(
                "oat_milk",
                "Oat milk",
                NutrientProfile::new(48.0, 1.0, 1.5, 7.0, 0.8),
                &["grain"],
            ),
            Ingredient::new(
                "soy_milk",
                "Soy milk",
                NutrientProfile::new(54.0, 3.3, 1.8, 6.0, 0.6),
                &["soy", "legume"],
            ),
            Ingredient::new(
                "oats",
                "Oats",
                NutrientProfile::new(389.0, 16.9, 6.9, 66.3, 10.6),
                &["grain"],
            ),
            Ingredient::new(
                "honey",
                "Honey",
                NutrientProfile::new(304.0, 0.3, 0.0, 82.4, 0.2),
                &["honey", "sugar"],
            ),
        ])
        .unwrap()
    }

    fn substitutions(catalog: &IngredientCatalog) -> SubstitutionMap {
        let mut entries = BTreeMap::new();
        entries.insert(
            IngredientId::from("milk"),
            vec![IngredientId::from("oat_milk"), IngredientId::from("soy_milk")],
        );
        SubstitutionMap::new(entries, catalog).unwrap()
    }

    fn banned(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| (*t).to_owned()).collect()
    }

    fn portion(id: &str, grams: f64) -> Portion {
        Portion::with_ratio_bounds(IngredientId::from(id), grams, &OptimizerConfig::default())
    }

    #[test]
    fn test_picks_substitute_with_smallest_macro_delta() {
        let catalog = catalog();
        let subs = substitutions(&catalog);
        let config = OptimizerConfig::default();
        let validator = ComplianceValidator::new(&catalog, &subs, &config);

        let outcome = validator.validate(vec![portion("milk", 200.0)], &banned(&["dairy"]));
        assert!(outcome.report.is_compliant());
        assert_eq!(outcome.report.substitutions.len(), 1);
        // Soy milk tracks milk's protein and fat more closely than oat milk
        assert_eq!(
            outcome.report.substitutions[0].substitute,
            IngredientId::from("soy_milk")
        );
        let kcal = catalog
            .get(&IngredientId::from("soy_milk"))
            .unwrap()
            .nutrition_for(outcome.portions[0].grams)
            .calories;
        assert!((kcal - 122.0).abs() < 1e-6);
    }

    #[test]
    fn test_banned_substitutes_are_skipped() {
        let catalog = catalog();
        let subs = substitutions(&catalog);
        let config = OptimizerConfig::default();
        let validator = ComplianceValidator::new(&catalog, &subs, &config);

        let outcome =
            validator.validate(vec![portion("milk", 200.0)], &banned(&["dairy", "soy"]));
        assert_eq!(
            outcome.report.substitutions[0].substitute,
            IngredientId::from("oat_milk")
        );
    }

    #[test]
    fn test_violation_reported_when_no_substitute() {
        let catalog = catalog();
        let subs = substitutions(&catalog);
        let config = OptimizerConfig::default();
        let validator = ComplianceValidator::new(&catalog, &subs, &config);

        let outcome = validator.validate(
            vec![portion("oats", 50.0), portion("honey", 10.0)],
            &banned(&["honey"]),
        );
        assert_eq!(outcome.report.status, ComplianceStatus::Violation);
        assert_eq!(outcome.report.offending.len(), 1);
        assert_eq!(
            outcome.report.offending[0].ingredient_id,
            IngredientId::from("honey")
        );
        assert_eq!(outcome.portions.len(), 2);
    }

    #[test]
    fn test_substitute_already_in_meal_is_merged() {
        let catalog = catalog();
        let subs = substitutions(&catalog);
        let config = OptimizerConfig::default();
        let validator = ComplianceValidator::new(&catalog, &subs, &config);

        let outcome = validator.validate(
            vec![portion("soy_milk", 100.0), portion("milk", 100.0)],
            &banned(&["dairy", "grain"]),
        );
        assert!(outcome.report.is_compliant());
        assert_eq!(outcome.portions.len(), 1);
        assert!(outcome.portions[0].grams > 100.0);
    }

    #[test]
    fn test_empty_banned_set_is_a_no_op() {
        let catalog = catalog();
        let subs = substitutions(&catalog);
        let config = OptimizerConfig::default();
        let validator = ComplianceValidator::new(&catalog, &subs, &config);

        let input = vec![portion("milk", 200.0)];
        let outcome = validator.validate(input.clone(), &BTreeSet::new());
        assert_eq!(outcome.portions, input);
        assert!(outcome.report.substitutions.is_empty());
    }
}

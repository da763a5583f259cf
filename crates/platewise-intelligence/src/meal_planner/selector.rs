// ABOUTME: Template selection by diet, slot and restrictions with variety-aware ranking
// ABOUTME: Falls back to the neutral default template when no candidate survives filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::{IngredientCatalog, TemplateLibrary};
use crate::config::SelectorConfig;
use platewise_core::models::{
    DietType, MealSlot, MealTemplate, Preferences, RestrictionSet, UsageHistory,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the chosen template was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSource {
    /// Best-ranked template not used for this slot within the variety window
    Ranked,
    /// Every candidate was used recently; ranked with a repetition penalty
    RepeatPenalized,
    /// The candidate pool was empty; the neutral default was used
    NeutralFallback,
}

/// Template chosen for a slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedTemplate<'a> {
    /// Template
    pub template: &'a MealTemplate,
    /// Ranking score
    pub score: f64,
    /// How it was found
    pub source: SelectionSource,
}

/// Result of selecting a template for one slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    /// A template was chosen
    Selected(SelectedTemplate<'a>),
    /// No candidate and no neutral default exist
    NoCompatibleTemplate,
}

/// Picks one template per slot
#[derive(Debug, Clone, Copy)]
pub struct TemplateSelector<'a> {
    library: &'a TemplateLibrary,
    catalog: &'a IngredientCatalog,
    config: &'a SelectorConfig,
}

impl<'a> TemplateSelector<'a> {
    /// Create a selector
    #[must_use]
    pub const fn new(
        library: &'a TemplateLibrary,
        catalog: &'a IngredientCatalog,
        config: &'a SelectorConfig,
    ) -> Self {
        Self {
            library,
            catalog,
            config,
        }
    }

    /// Choose a template for `slot`
    ///
    /// Candidates must declare the diet and serve the slot. Every ingredient
    /// must itself be compatible with the diet and carry no restricted tag. Templates used for the same slot within the
    /// variety window are excluded unless that empties the pool, in which case
    /// all candidates are ranked with a penalty that grows with recency.
    /// Ties are broken by template id.
    #[must_use]
    pub fn select(
        &self,
        slot: MealSlot,
        preferences: &Preferences,
        usage: &UsageHistory,
    ) -> Selection<'a> {
        let pool: Vec<&'a MealTemplate> = self
            .library
            .candidates(slot, preferences.diet_type)
            .filter(|t| self.fits_diet(t, preferences.diet_type))
            .filter(|t| self.passes_restrictions(t, &preferences.restrictions))
            .collect();

        if pool.is_empty() {
            return self.library.neutral_for(preferences.diet_type, slot).map_or(
                Selection::NoCompatibleTemplate,
                |template| {
                    debug!(
                        slot = %slot,
                        selector.template = %template.id,
                        "Candidate pool empty, using neutral default"
                    );
                    Selection::Selected(SelectedTemplate {
                        template,
                        score: self.preference_score(template, preferences, usage),
                        source: SelectionSource::NeutralFallback,
                    })
                },
            );
        }

        let window = self.config.variety_window_days;
        let fresh: Vec<&'a MealTemplate> = pool
            .iter()
            .copied()
            .filter(|t| usage.days_since_template(slot, &t.id, window).is_none())
            .collect();

        let (ranked, source) = if fresh.is_empty() {
            (pool, SelectionSource::RepeatPenalized)
        } else {
            (fresh, SelectionSource::Ranked)
        };

        let mut best: Option<SelectedTemplate<'a>> = None;
        for template in ranked {
            let mut score = self.preference_score(template, preferences, usage);
            if source == SelectionSource::RepeatPenalized {
                score -= self.repeat_penalty(slot, template, usage);
            }
            if best.is_none_or(|b| score > b.score) {
                best = Some(SelectedTemplate {
                    template,
                    score,
                    source,
                });
            }
        }

        best.map_or(Selection::NoCompatibleTemplate, |chosen| {
            debug!(
                slot = %slot,
                selector.template = %chosen.template.id,
                selector.score = chosen.score,
                selector.source = ?chosen.source,
                "Template selected"
            );
            Selection::Selected(chosen)
        })
    }

    /// A declared diet is only trusted when every ingredient agrees with it
    fn fits_diet(&self, template: &MealTemplate, diet: DietType) -> bool {
        template.ingredient_ids().all(|id| {
            self.catalog
                .get(id)
                .is_some_and(|ingredient| ingredient.diet_compatibility().allows(diet))
        })
    }

    fn passes_restrictions(&self, template: &MealTemplate, restrictions: &RestrictionSet) -> bool {
        match restrictions {
            RestrictionSet::Unrestricted => true,
            RestrictionSet::Banned(_) => template.ingredient_ids().all(|id| {
                self.catalog
                    .get(id)
                    .is_some_and(|ingredient| restrictions.permits(ingredient))
            }),
        }
    }

    /// Preference bonus minus the penalty for ingredients eaten within the window
    fn preference_score(
        &self,
        template: &MealTemplate,
        preferences: &Preferences,
        usage: &UsageHistory,
    ) -> f64 {
        let window = self.config.variety_window_days;
        template
            .ingredient_ids()
            .map(|id| {
                let repeats = usage.ingredient_use_count(id, window) as f64;
                preferences.weight_of(id) - self.config.ingredient_repeat_penalty * repeats
            })
            .sum()
    }

    /// Penalty scaled so yesterday's template costs the full amount
    fn repeat_penalty(&self, slot: MealSlot, template: &MealTemplate, usage: &UsageHistory) -> f64 {
        let window = self.config.variety_window_days;
        usage
            .days_since_template(slot, &template.id, window)
            .map_or(0.0, |days_ago| {
                let recency = (window + 1).saturating_sub(days_ago) as f64;
                self.config.template_repeat_penalty * recency / window.max(1) as f64
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NeutralDefault;
    use platewise_core::models::{
        DayUsage, Ingredient, MealStructure, NutrientProfile, PlanRequest,
        PreferenceLimits, TemplateId, TemplateItem,
    };

    fn catalog() -> IngredientCatalog {
        let profile = NutrientProfile::new(150.0, 10.0, 5.0, 15.0, 1.0);
        IngredientCatalog::new(vec![
            Ingredient::new("oats", "Oats", profile, &["grain"]),
            Ingredient::new("almonds", "Almonds", profile, &["tree_nut", "nut"]),
            Ingredient::new("tofu", "Tofu", profile, &["soy", "legume"]),
            Ingredient::new("berries", "Berries", profile, &["fruit"]),
            Ingredient::new("honey", "Honey", profile, &["honey", "sugar"]),
        ])
        .unwrap()
    }

    fn template(id: &str, items: &[&str]) -> MealTemplate {
        MealTemplate::new(
            id,
            id,
            MealSlot::Breakfast,
            &[DietType::Vegan],
            items.iter().map(|i| TemplateItem::new(*i, 50.0)).collect(),
        )
    }

    fn library(catalog: &IngredientCatalog) -> TemplateLibrary {
        TemplateLibrary::new(
            vec![
                template("a_oats_almonds", &["oats", "almonds"]),
                template("b_tofu_berries", &["tofu", "berries"]),
                template("c_oats_berries", &["oats", "berries"]),
            ],
            vec![NeutralDefault {
                diet: DietType::Vegan,
                slot: MealSlot::Breakfast,
                template_id: TemplateId::from("a_oats_almonds"),
            }],
            catalog,
        )
        .unwrap()
    }

    fn prefs(request: &PlanRequest) -> Preferences {
        Preferences::from_request(request, &PreferenceLimits::default(), &MealStructure::default())
            .unwrap()
    }

    fn chosen(selection: Selection<'_>) -> (String, SelectionSource) {
        match selection {
            Selection::Selected(s) => (s.template.id.to_string(), s.source),
            Selection::NoCompatibleTemplate => panic!("expected a template"),
        }
    }

    fn used(template: &str, ingredients: &[&str]) -> DayUsage {
        let mut day = DayUsage::default();
        day.templates
            .insert(MealSlot::Breakfast, TemplateId::from(template));
        day.ingredients = ingredients.iter().map(|i| (*i).into()).collect();
        day
    }

    #[test]
    fn test_ties_break_by_template_id() {
        let catalog = catalog();
        let library = library(&catalog);
        let config = SelectorConfig::default();
        let selector = TemplateSelector::new(&library, &catalog, &config);
        let p = prefs(&PlanRequest::new(2000.0, "vegan"));
        let (id, source) = chosen(selector.select(MealSlot::Breakfast, &p, &UsageHistory::default()));
        assert_eq!(id, "a_oats_almonds");
        assert_eq!(source, SelectionSource::Ranked);
    }

    #[test]
    fn test_preference_weights_drive_ranking() {
        let catalog = catalog();
        let library = library(&catalog);
        let config = SelectorConfig::default();
        let selector = TemplateSelector::new(&library, &catalog, &config);
        let p = prefs(&PlanRequest::new(2000.0, "vegan").with_preference("tofu", 3.0));
        let (id, _) = chosen(selector.select(MealSlot::Breakfast, &p, &UsageHistory::default()));
        assert_eq!(id, "b_tofu_berries");
    }

    #[test]
    fn test_restrictions_filter_candidates() {
        let catalog = catalog();
        let library = library(&catalog);
        let config = SelectorConfig::default();
        let selector = TemplateSelector::new(&library, &catalog, &config);
        let p = prefs(&PlanRequest::new(2000.0, "vegan").with_restrictions(&["tree_nut"]));
        let (id, _) = chosen(selector.select(MealSlot::Breakfast, &p, &UsageHistory::default()));
        assert_ne!(id, "a_oats_almonds");
    }

    #[test]
    fn test_recent_templates_excluded_within_window() {
        let catalog = catalog();
        let library = library(&catalog);
        let config = SelectorConfig::default();
        let selector = TemplateSelector::new(&library, &catalog, &config);
        let p = prefs(&PlanRequest::new(2000.0, "vegan"));

        let mut usage = UsageHistory::default();
        usage.record_day(used("a_oats_almonds", &[]));
        let (id, _) = chosen(selector.select(MealSlot::Breakfast, &p, &usage));
        assert_eq!(id, "b_tofu_berries");
    }

    #[test]
    fn test_exhausted_pool_prefers_least_recent() {
        let catalog = catalog();
        let library = library(&catalog);
        let config = SelectorConfig::default();
        let selector = TemplateSelector::new(&library, &catalog, &config);
        let p = prefs(&PlanRequest::new(2000.0, "vegan"));

        let mut usage = UsageHistory::default();
        usage.record_day(used("b_tofu_berries", &[]));
        usage.record_day(used("a_oats_almonds", &[]));
        usage.record_day(used("c_oats_berries", &[]));
        let (id, source) = chosen(selector.select(MealSlot::Breakfast, &p, &usage));
        assert_eq!(id, "b_tofu_berries");
        assert_eq!(source, SelectionSource::RepeatPenalized);
    }

    #[test]
    fn test_empty_pool_uses_neutral_default() {
        let catalog = catalog();
        let library = library(&catalog);
        let config = SelectorConfig::default();
        let selector = TemplateSelector::new(&library, &catalog, &config);
        let p = prefs(&PlanRequest::new(2000.0, "vegan").with_restrictions(&["grain", "fruit"]));
        let (id, source) = chosen(selector.select(MealSlot::Breakfast, &p, &UsageHistory::default()));
        assert_eq!(id, "a_oats_almonds");
        assert_eq!(source, SelectionSource::NeutralFallback);
    }

    #[test]
    fn test_declared_diet_checked_against_ingredients() {
        let catalog = catalog();
        let library = TemplateLibrary::new(
            vec![
                template("a_oats_honey", &["oats", "honey"]),
                template("b_oats", &["oats"]),
            ],
            Vec::new(),
            &catalog,
        )
        .unwrap();
        let config = SelectorConfig::default();
        let selector = TemplateSelector::new(&library, &catalog, &config);
        let p = prefs(&PlanRequest::new(2000.0, "vegan"));
        let (id, source) = chosen(selector.select(MealSlot::Breakfast, &p, &UsageHistory::default()));
        assert_eq!(id, "b_oats");
        assert_eq!(source, SelectionSource::Ranked);
    }

    #[test]
    fn test_no_template_anywhere() {
        let catalog = catalog();
        let library = library(&catalog);
        let config = SelectorConfig::default();
        let selector = TemplateSelector::new(&library, &catalog, &config);
        let p = prefs(&PlanRequest::new(2000.0, "keto"));
        assert_eq!(
            selector.select(MealSlot::Breakfast, &p, &UsageHistory::default()),
            Selection::NoCompatibleTemplate
        );
    }
}

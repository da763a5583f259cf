// ABOUTME: Portion optimizer: clamped calorie scaling plus bounded macro refinement
// ABOUTME: Greedy local search that adjusts the ingredients driving the worst macro deviation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Portion Optimizer
//!
//! Each run starts from seed quantities (a template's base grams, or the
//! current portions when a day is rebalanced) and proceeds in two phases:
//!
//! 1. **Calorie scaling**: every unlocked portion is multiplied by the factor
//!    that reaches the calorie target. Portions that hit a bound are locked and
//!    the remaining gap is spread over the others, for a bounded number of passes.
//! 2. **Macro refinement**: the macronutrient furthest from its target share is
//!    identified, the ingredients that move it most are stepped by a fixed
//!    fraction in the corrective direction, and calories are rescaled. A
//!    candidate is kept only when it improves the quality score.
//!
//! The loop stops when the improvement drops below the convergence epsilon, when
//! no corrective move exists, or at the iteration cap. A run that ends further
//! than the infeasibility threshold from its calorie target is `Infeasible`.

use super::scorer::{NutritionScorer, NutritionTarget};
use crate::catalog::IngredientCatalog;
use crate::config::OptimizerConfig;
use platewise_core::models::{
    ConvergenceMetrics, IngredientId, Macronutrient, MealTemplate, NutrientProfile,
    OptimizationOutcome,
};
use std::cmp::Ordering;
use tracing::debug;

/// Quantities closer than this to a bound count as pinned to it
const BOUND_EPSILON_GRAMS: f64 = 1e-6;

/// A portion under optimization with its allowed range
#[derive(Debug, Clone, PartialEq)]
pub struct Portion {
    /// Catalog ingredient
    pub ingredient_id: IngredientId,
    /// Current quantity in grams
    pub grams: f64,
    /// Lowest allowed quantity
    pub min_grams: f64,
    /// Highest allowed quantity
    pub max_grams: f64,
}

impl Portion {
    /// Portion at `grams` with bounds derived from the configured clamp ratios
    #[must_use]
    pub fn with_ratio_bounds(
        ingredient_id: IngredientId,
        grams: f64,
        config: &OptimizerConfig,
    ) -> Self {
        let min_grams = config
            .min_portion_grams
            .max(grams * config.min_portion_ratio);
        let max_grams = (grams * config.max_portion_ratio).max(min_grams);
        Self {
            ingredient_id,
            grams: grams.clamp(min_grams, max_grams),
            min_grams,
            max_grams,
        }
    }

    /// Seed portions from a template's base quantities
    #[must_use]
    pub fn seeds_from_template(template: &MealTemplate, config: &OptimizerConfig) -> Vec<Self> {
        template
            .items
            .iter()
            .map(|item| Self::with_ratio_bounds(item.ingredient_id.clone(), item.base_grams, config))
            .collect()
    }

    fn at_lower_bound(&self) -> bool {
        self.grams <= self.min_grams + BOUND_EPSILON_GRAMS
    }

    fn at_upper_bound(&self) -> bool {
        self.grams >= self.max_grams - BOUND_EPSILON_GRAMS
    }
}

/// Output of one optimization run
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// Final portions in seed order
    pub portions: Vec<Portion>,
    /// Nutrient totals of the final portions
    pub nutrition: NutrientProfile,
    /// Convergence metrics
    pub metrics: ConvergenceMetrics,
}

/// Fits portion sizes to a calorie and macro target
#[derive(Debug, Clone, Copy)]
pub struct PortionOptimizer<'a> {
    catalog: &'a IngredientCatalog,
    config: &'a OptimizerConfig,
    scorer: NutritionScorer,
}

impl<'a> PortionOptimizer<'a> {
    /// Create an optimizer over `catalog`
    #[must_use]
    pub const fn new(
        catalog: &'a IngredientCatalog,
        config: &'a OptimizerConfig,
        scorer: NutritionScorer,
    ) -> Self {
        Self {
            catalog,
            config,
            scorer,
        }
    }

    /// Tuning in effect
    #[must_use]
    pub const fn config(&self) -> &'a OptimizerConfig {
        self.config
    }

    /// Nutrient totals of `portions`
    #[must_use]
    pub fn nutrition(&self, portions: &[Portion]) -> NutrientProfile {
        portions
            .iter()
            .filter_map(|p| {
                self.catalog
                    .get(&p.ingredient_id)
                    .map(|ingredient| ingredient.nutrition_for(p.grams))
            })
            .sum()
    }

    fn portion_kcal(&self, portion: &Portion) -> f64 {
        self.catalog
            .get(&portion.ingredient_id)
            .map_or(0.0, |ingredient| ingredient.nutrition_for(portion.grams).calories)
    }

    /// Optimize `seeds` toward `target`
    #[must_use]
    pub fn optimize(&self, seeds: Vec<Portion>, target: &NutritionTarget) -> OptimizationResult {
        let mut portions: Vec<Portion> = seeds
            .into_iter()
            .map(|mut p| {
                p.grams = p.grams.clamp(p.min_grams, p.max_grams);
                p
            })
            .collect();

        if self.nutrition(&portions).calories <= 0.0 || target.calories <= 0.0 {
            return self.finish(portions, target, OptimizationOutcome::Infeasible, 0, None);
        }

        self.scale_to_calories(&mut portions, target.calories);
        let initial_score = self.score(&portions, target);
        let mut best_score = initial_score;
        let mut outcome = OptimizationOutcome::MaxIterationsReached;
        let mut iterations = 0;

        for iteration in 1..=self.config.max_iterations {
            iterations = iteration;
            let Some(candidate) = self.refine(&portions, target) else {
                outcome = OptimizationOutcome::Converged;
                break;
            };
            let candidate_score = self.score(&candidate, target);
            let improvement = candidate_score - best_score;
            if improvement > 0.0 {
                portions = candidate;
                best_score = candidate_score;
            }
            if improvement < self.config.convergence_epsilon {
                outcome = OptimizationOutcome::Converged;
                break;
            }
        }

        self.finish(portions, target, outcome, iterations, Some(initial_score))
    }

    fn finish(
        &self,
        portions: Vec<Portion>,
        target: &NutritionTarget,
        outcome: OptimizationOutcome,
        iterations: u32,
        initial_score: Option<f64>,
    ) -> OptimizationResult {
        let nutrition = self.nutrition(&portions);
        let final_score = self.scorer.score(&nutrition, target).total;
        let calorie_deviation_pct = target.calorie_deviation_pct(&nutrition);
        let outcome = if calorie_deviation_pct > self.config.infeasible_calorie_deviation_pct {
            OptimizationOutcome::Infeasible
        } else {
            outcome
        };

        debug!(
            optimizer.outcome = outcome.as_str(),
            optimizer.iterations = iterations,
            optimizer.final_score = final_score,
            optimizer.calorie_deviation_pct = calorie_deviation_pct,
            "Portion optimization finished"
        );

        OptimizationResult {
            portions,
            nutrition,
            metrics: ConvergenceMetrics {
                outcome,
                iterations,
                initial_score: initial_score.unwrap_or(final_score),
                final_score,
                calorie_deviation_pct,
            },
        }
    }

    fn score(&self, portions: &[Portion], target: &NutritionTarget) -> f64 {
        self.scorer.score(&self.nutrition(portions), target).total
    }

    /// Scale unlocked portions toward `target_kcal`, locking any that hit a bound
    fn scale_to_calories(&self, portions: &mut [Portion], target_kcal: f64) {
        let mut locked = vec![false; portions.len()];
        for _ in 0..self.config.max_scaling_passes {
            let (locked_kcal, free_kcal) = portions.iter().zip(&locked).fold(
                (0.0, 0.0),
                |(locked_sum, free_sum), (portion, is_locked)| {
                    let kcal = self.portion_kcal(portion);
                    if *is_locked {
                        (locked_sum + kcal, free_sum)
                    } else {
                        (locked_sum, free_sum + kcal)
                    }
                },
            );
            if free_kcal <= 0.0 {
                break;
            }
            let factor = ((target_kcal - locked_kcal) / free_kcal).max(0.0);

            let mut newly_locked = false;
            for (portion, is_locked) in portions.iter_mut().zip(locked.iter_mut()) {
                if *is_locked {
                    continue;
                }
                let scaled = portion.grams * factor;
                if scaled > portion.max_grams {
                    portion.grams = portion.max_grams;
                    *is_locked = true;
                    newly_locked = true;
                } else if scaled < portion.min_grams {
                    portion.grams = portion.min_grams;
                    *is_locked = true;
                    newly_locked = true;
                } else {
                    portion.grams = scaled;
                }
            }
            if !newly_locked {
                break;
            }
        }
    }

    /// Propose one corrective step, or `None` when no useful move exists
    fn refine(&self, portions: &[Portion], target: &NutritionTarget) -> Option<Vec<Portion>> {
        let split = self.nutrition(portions).macro_split();

        let (worst, deviation) = Macronutrient::ALL
            .iter()
            .map(|m| (*m, split.get(*m) - target.macros.get(*m)))
            .fold(None, |best: Option<(Macronutrient, f64)>, current| match best {
                Some(b) if b.1.abs() >= current.1.abs() => Some(b),
                _ => Some(current),
            })?;

        if deviation.abs() < self.config.macro_deviation_floor_pct {
            return None;
        }
        let decrease = deviation > 0.0;
        let current_share = split.get(worst);

        let mut candidates: Vec<(f64, usize)> = portions
            .iter()
            .enumerate()
            .filter_map(|(idx, portion)| {
                let ingredient = self.catalog.get(&portion.ingredient_id)?;
                let density = ingredient.macro_density_pct(worst);
                if density <= current_share {
                    return None;
                }
                let movable = if decrease {
                    !portion.at_lower_bound()
                } else {
                    !portion.at_upper_bound()
                };
                movable.then(|| (self.portion_kcal(portion) * (density - current_share), idx))
            })
            .collect();

        if candidates.is_empty() {
            return None;
        }
        candidates.sort_by(|a, b| match b.0.total_cmp(&a.0) {
            Ordering::Equal => a.1.cmp(&b.1),
            other => other,
        });

        let factor = if decrease {
            1.0 - self.config.step_fraction
        } else {
            1.0 + self.config.step_fraction
        };
        let mut next = portions.to_vec();
        for (_, idx) in candidates.iter().take(self.config.adjust_top_n) {
            if let Some(portion) = next.get_mut(*idx) {
                portion.grams = (portion.grams * factor).clamp(portion.min_grams, portion.max_grams);
            }
        }
        self.scale_to_calories(&mut next, target.calories);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use platewise_core::models::{DietType, Ingredient, MacroSplit, MealSlot, TemplateItem};

    fn catalog() -> IngredientCatalog {
        IngredientCatalog::new(vec![
            Ingredient::new(
                "chicken_breast",
                "Chicken breast",
                NutrientProfile::new(165.0, 31.0, 3.6, 0.0, 0.0),
                &["meat", "poultry"],
            ),
            Ingredient::new(
                "brown_rice",
                "Brown rice",
                NutrientProfile::new(123.0, 2.7, 1.0, 25.6, 1.6),
                &["grain", "high_carb"],
            ),
            Ingredient::new(
                "olive_oil",
                "Olive oil",
                NutrientProfile::new(884.0, 0.0, 100.0, 0.0, 0.0),
                &["oil"],
            ),
            Ingredient::new(
                "water",
                "Water",
                NutrientProfile::new(0.0, 0.0, 0.0, 0.0, 0.0),
                &[],
            ),
        ])
        .unwrap()
    }

    fn template() -> MealTemplate {
        MealTemplate::new(
            "chicken_rice",
            "Chicken and rice",
            MealSlot::Dinner,
            &[DietType::Standard],
            vec![
                TemplateItem::new("chicken_breast", 150.0),
                TemplateItem::new("brown_rice", 150.0),
                TemplateItem::new("olive_oil", 10.0),
            ],
        )
    }

    fn standard_target(calories: f64) -> NutritionTarget {
        NutritionTarget::new(calories, MacroSplit::new(25.0, 30.0, 45.0))
    }

    fn run(
        catalog: &IngredientCatalog,
        config: &OptimizerConfig,
        target: &NutritionTarget,
    ) -> OptimizationResult {
        let optimizer =
            PortionOptimizer::new(catalog, config, NutritionScorer::new(&ScoringConfig::default()));
        optimizer.optimize(Portion::seeds_from_template(&template(), config), target)
    }

    #[test]
    fn test_calorie_target_reached_within_bounds() {
        let catalog = catalog();
        let config = OptimizerConfig::default();
        let result = run(&catalog, &config, &standard_target(600.0));
        assert!((result.nutrition.calories - 600.0).abs() < 1.0);
        assert_ne!(result.metrics.outcome, OptimizationOutcome::Infeasible);
        for portion in &result.portions {
            assert!(portion.grams >= portion.min_grams - 1e-9);
            assert!(portion.grams <= portion.max_grams + 1e-9);
            assert!(portion.grams > 0.0);
        }
    }

    #[test]
    fn test_refinement_never_lowers_score() {
        let catalog = catalog();
        let config = OptimizerConfig::default();
        let result = run(&catalog, &config, &standard_target(600.0));
        assert!(result.metrics.final_score >= result.metrics.initial_score - 1e-9);
    }

    #[test]
    fn test_iteration_cap_bounds_work() {
        let catalog = catalog();
        let config = OptimizerConfig {
            max_iterations: 3,
            convergence_epsilon: 1e-12,
            ..OptimizerConfig::default()
        };
        let result = run(&catalog, &config, &standard_target(600.0));
        assert!(result.metrics.iterations <= 3);
    }

    #[test]
    fn test_exhausted_iterations_are_reported() {
        let catalog = catalog();
        // Protein sits well above its share, so every iteration finds a move
        let config = OptimizerConfig {
            max_iterations: 1,
            convergence_epsilon: f64::NEG_INFINITY,
            ..OptimizerConfig::default()
        };
        let result = run(&catalog, &config, &standard_target(600.0));
        assert_eq!(result.metrics.outcome, OptimizationOutcome::MaxIterationsReached);
        assert_eq!(result.metrics.iterations, 1);
    }

    #[test]
    fn test_unreachable_target_is_infeasible() {
        let catalog = catalog();
        let config = OptimizerConfig::default();
        // Base meal is ~522 kcal; tripling every portion still falls short of 3000
        let result = run(&catalog, &config, &standard_target(3000.0));
        assert_eq!(result.metrics.outcome, OptimizationOutcome::Infeasible);
        for portion in &result.portions {
            assert!((portion.grams - portion.max_grams).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_calorie_seed_is_infeasible() {
        let catalog = catalog();
        let config = OptimizerConfig::default();
        let optimizer = PortionOptimizer::new(&catalog, &config, NutritionScorer::default());
        let seeds = vec![Portion::with_ratio_bounds(
            IngredientId::from("water"),
            250.0,
            &config,
        )];
        let result = optimizer.optimize(seeds, &standard_target(400.0));
        assert_eq!(result.metrics.outcome, OptimizationOutcome::Infeasible);
        assert_eq!(result.metrics.iterations, 0);
    }

    #[test]
    fn test_optimizer_is_deterministic() {
        let catalog = catalog();
        let config = OptimizerConfig::default();
        let a = run(&catalog, &config, &standard_target(650.0));
        let b = run(&catalog, &config, &standard_target(650.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ratio_bounds_respect_absolute_floor() {
        let config = OptimizerConfig::default();
        let pinch = Portion::with_ratio_bounds(IngredientId::from("salt"), 2.0, &config);
        assert!((pinch.min_grams - 1.0).abs() < f64::EPSILON);
        assert!((pinch.max_grams - 6.0).abs() < f64::EPSILON);
    }
}

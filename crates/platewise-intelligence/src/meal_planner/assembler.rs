// ABOUTME: Day and week assembly: per-slot select, optimize, validate, then day rebalancing
// ABOUTME: Drives the planning context state machine and builds the final PlanResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Assembler
//!
//! For each day, and each slot of the meal structure in order, the assembler
//! selects a template, optimizes its portions toward the slot's share of the
//! daily calories, and validates compliance (re-optimizing after any
//! substitution). Once the day's slots are filled, residual calories are
//! redistributed over the slots that can still move, within each slot's
//! portion capacity. The deadline is checked before every day and slot; a day
//! interrupted by the deadline is dropped.

use super::compliance::ComplianceValidator;
use super::context::{GenerationPhase, PlanningContext};
use super::optimizer::{OptimizationResult, Portion, PortionOptimizer};
use super::scorer::{NutritionScorer, NutritionTarget};
use super::selector::{Selection, SelectionSource, TemplateSelector};
use crate::catalog::IngredientCatalog;
use crate::config::AssemblerConfig;
use platewise_core::models::{
    ComplianceFlag, ComplianceReport, ConvergenceMetrics, DayFlag, DayPlan, DayUsage,
    MealInstance, MealPortion, MealSlot, MealTemplate, NutrientProfile, OptimizationOutcome,
    PartialFailureReason, PlanResult, PlanStatus, Preferences, SlotConvergence, SlotQuality,
    SlotShare, TemplateId, WeekPlan,
};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Everything the assembler borrows for one request
#[derive(Debug, Clone, Copy)]
pub struct PlanAssembler<'a> {
    catalog: &'a IngredientCatalog,
    selector: TemplateSelector<'a>,
    optimizer: PortionOptimizer<'a>,
    validator: ComplianceValidator<'a>,
    scorer: NutritionScorer,
    config: &'a AssemblerConfig,
}

/// What happened to one slot
enum SlotOutcome {
    Filled(MealInstance),
    Unfilled,
}

impl<'a> PlanAssembler<'a> {
    /// Wire the assembler from its collaborators
    #[must_use]
    pub const fn new(
        catalog: &'a IngredientCatalog,
        selector: TemplateSelector<'a>,
        optimizer: PortionOptimizer<'a>,
        validator: ComplianceValidator<'a>,
        scorer: NutritionScorer,
        config: &'a AssemblerConfig,
    ) -> Self {
        Self {
            catalog,
            selector,
            optimizer,
            validator,
            scorer,
            config,
        }
    }

    /// Plan every requested day, stopping early when the deadline passes
    #[must_use]
    pub fn assemble(&self, preferences: &Preferences, mut ctx: PlanningContext) -> PlanResult {
        let banned = preferences.banned_tags();
        let mut days = Vec::with_capacity(preferences.days as usize);
        let mut deadline_hit = false;

        for day_index in 0..preferences.days {
            if ctx.deadline_exceeded() {
                deadline_hit = true;
                break;
            }
            if let Some(day) = self.plan_day(day_index, preferences, &banned, &mut ctx) {
                days.push(day);
            } else {
                deadline_hit = true;
                break;
            }
        }

        if deadline_hit {
            warn!(
                plan.days_completed = days.len(),
                plan.days_requested = preferences.days,
                "Deadline exceeded, returning completed days"
            );
        }

        self.build_result(preferences, days, deadline_hit, ctx)
    }

    /// Plan one day; `None` when the deadline passed before the day finished
    fn plan_day(
        &self,
        day_index: u32,
        preferences: &Preferences,
        banned: &BTreeSet<String>,
        ctx: &mut PlanningContext,
    ) -> Option<DayPlan> {
        let mut meals = Vec::with_capacity(preferences.meal_structure.len());
        let mut unfilled_slots = Vec::new();

        for share in preferences.meal_structure.shares() {
            if ctx.deadline_exceeded() {
                debug!(day = day_index, slot = %share.slot, "Deadline reached mid-day");
                return None;
            }
            match self.plan_slot(day_index, *share, preferences, banned, ctx) {
                SlotOutcome::Filled(meal) => meals.push(meal),
                SlotOutcome::Unfilled => unfilled_slots.push(share.slot),
            }
        }

        ctx.transition(GenerationPhase::Rebalancing);
        let rebalance_passes = self.rebalance(&mut meals, preferences, ctx);

        let nutrition: NutrientProfile = meals.iter().map(|m| m.nutrition).sum();
        let target_calories = preferences.target_calories;
        let calorie_deviation_pct =
            (nutrition.calories - target_calories).abs() / target_calories * 100.0;
        let target_met = calorie_deviation_pct <= self.config.day_calorie_tolerance_pct;
        if !target_met {
            warn!(
                day = day_index,
                day.calories = nutrition.calories,
                day.deviation_pct = calorie_deviation_pct,
                "Day calorie target not met after rebalancing"
            );
        }

        ctx.record_day(DayUsage {
            templates: meals
                .iter()
                .map(|m| (m.slot, m.template_id.clone()))
                .collect(),
            ingredients: meals
                .iter()
                .flat_map(|m| m.portions.iter().map(|p| p.ingredient_id.clone()))
                .collect(),
        });

        Some(DayPlan {
            day_index,
            meals,
            unfilled_slots,
            target_calories,
            macro_split: nutrition.macro_split(),
            nutrition,
            calorie_deviation_pct,
            rebalance_passes,
            target_met,
        })
    }

    fn plan_slot(
        &self,
        day_index: u32,
        share: SlotShare,
        preferences: &Preferences,
        banned: &BTreeSet<String>,
        ctx: &mut PlanningContext,
    ) -> SlotOutcome {
        ctx.transition(GenerationPhase::Selecting);
        ctx.counters_mut().slots_attempted += 1;

        let planned_calories = preferences.target_calories * share.share_pct / 100.0;
        let target = NutritionTarget::new(planned_calories, preferences.macro_target);

        let selected = match self.selector.select(share.slot, preferences, ctx.usage()) {
            Selection::Selected(selected) => selected,
            Selection::NoCompatibleTemplate => {
                warn!(day = day_index, slot = %share.slot, "No compatible template for slot");
                return SlotOutcome::Unfilled;
            }
        };
        let template = selected.template;

        ctx.transition(GenerationPhase::Optimizing);
        let mut result = self.run_optimizer(
            Portion::seeds_from_template(template, self.optimizer.config()),
            &target,
            ctx,
        );

        ctx.transition(GenerationPhase::Validating);
        let compliance = self.validator.validate(result.portions.clone(), banned);
        if !compliance.report.substitutions.is_empty() {
            ctx.counters_mut().substitutions += compliance.report.substitutions.len() as u32;
            ctx.transition(GenerationPhase::Optimizing);
            result = self.run_optimizer(compliance.portions, &target, ctx);
            ctx.transition(GenerationPhase::Validating);
        } else {
            result.portions = compliance.portions;
        }

        match result.metrics.outcome {
            OptimizationOutcome::Infeasible => warn!(
                day = day_index,
                slot = %share.slot,
                slot.template = %template.id,
                slot.deviation_pct = result.metrics.calorie_deviation_pct,
                "Slot calorie target infeasible within portion bounds"
            ),
            OptimizationOutcome::MaxIterationsReached => debug!(
                day = day_index,
                slot = %share.slot,
                "Optimizer hit its iteration cap"
            ),
            OptimizationOutcome::Converged => {}
        }

        SlotOutcome::Filled(self.build_meal(
            share.slot,
            template,
            selected.source == SelectionSource::NeutralFallback,
            planned_calories,
            &target,
            result,
            compliance.report,
        ))
    }

    fn run_optimizer(
        &self,
        seeds: Vec<Portion>,
        target: &NutritionTarget,
        ctx: &mut PlanningContext,
    ) -> OptimizationResult {
        let result = self.optimizer.optimize(seeds, target);
        let counters = ctx.counters_mut();
        counters.optimizer_runs += 1;
        counters.optimizer_iterations += result.metrics.iterations;
        result
    }

    /// Retarget infeasible slots and redistribute residual calories; returns passes applied
    ///
    /// Each pass first moves every compliant infeasible slot to the nearest
    /// target its portion bounds can reach, then spreads the day's residual
    /// over the slots that can still move.
    fn rebalance(
        &self,
        meals: &mut [MealInstance],
        preferences: &Preferences,
        ctx: &mut PlanningContext,
    ) -> u32 {
        let daily_target = preferences.target_calories;
        let mut passes = 0;

        while passes < self.config.max_rebalance_passes {
            let residual = daily_target - meals.iter().map(|m| m.nutrition.calories).sum::<f64>();
            let within_threshold =
                residual.abs() / daily_target * 100.0 <= self.config.rebalance_threshold_pct;
            if within_threshold && !meals.iter().any(needs_retarget) {
                break;
            }

            passes += 1;
            ctx.counters_mut().rebalance_passes += 1;
            let mut moved = self.retarget_infeasible(meals, preferences, ctx);

            let residual = daily_target - meals.iter().map(|m| m.nutrition.calories).sum::<f64>();
            if residual.abs() / daily_target * 100.0 > self.config.rebalance_threshold_pct {
                moved |= self.redistribute(meals, residual, preferences, ctx);
            }
            debug!(
                rebalance.pass = passes,
                rebalance.residual_kcal = residual,
                "Rebalanced day"
            );
            if !moved {
                break;
            }
        }
        passes
    }

    /// Re-optimize compliant infeasible slots toward a target inside their capacity
    fn retarget_infeasible(
        &self,
        meals: &mut [MealInstance],
        preferences: &Preferences,
        ctx: &mut PlanningContext,
    ) -> bool {
        let mut moved = false;
        for meal in meals.iter_mut().filter(|m| needs_retarget(m)) {
            let seeds = seeds_from_meal(meal);
            let new_target = self.reachable_target(&seeds, meal.target_calories);
            if (new_target - meal.target_calories).abs() < f64::EPSILON {
                continue;
            }
            debug!(
                slot = %meal.slot,
                slot.template = %meal.template_id,
                slot.target_kcal = meal.target_calories,
                slot.reachable_kcal = new_target,
                "Retargeting infeasible slot"
            );
            self.reoptimize(meal, seeds, new_target, preferences, ctx);
            moved = true;
        }
        moved
    }

    /// Spread `residual` over adjustable slots in proportion to their targets
    fn redistribute(
        &self,
        meals: &mut [MealInstance],
        residual: f64,
        preferences: &Preferences,
        ctx: &mut PlanningContext,
    ) -> bool {
        let weight_sum: f64 = meals
            .iter()
            .filter(|m| !m.is_fixed())
            .map(|m| m.target_calories)
            .sum();
        if weight_sum <= 0.0 {
            return false;
        }

        let mut moved = false;
        for meal in meals.iter_mut().filter(|m| !m.is_fixed()) {
            let seeds = seeds_from_meal(meal);
            let desired = meal.target_calories + residual * meal.target_calories / weight_sum;
            let new_target = self.reachable_target(&seeds, desired);
            if (new_target - meal.target_calories).abs() < f64::EPSILON {
                continue;
            }
            self.reoptimize(meal, seeds, new_target, preferences, ctx);
            moved = true;
        }
        moved
    }

    /// `desired` clamped to the slot's portion capacity and the slot calorie floor
    fn reachable_target(&self, seeds: &[Portion], desired: f64) -> f64 {
        let (min_kcal, max_kcal) = self.capacity(seeds);
        desired
            .clamp(min_kcal, max_kcal.max(min_kcal))
            .max(self.config.min_slot_calories)
    }

    /// Run the optimizer for `meal` against `new_target` and rebuild it in place
    fn reoptimize(
        &self,
        meal: &mut MealInstance,
        seeds: Vec<Portion>,
        new_target: f64,
        preferences: &Preferences,
        ctx: &mut PlanningContext,
    ) {
        ctx.transition(GenerationPhase::Optimizing);
        let target = NutritionTarget::new(new_target, preferences.macro_target);
        let result = self.run_optimizer(seeds, &target, ctx);
        ctx.transition(GenerationPhase::Rebalancing);

        *meal = self.meal_from_parts(
            meal.slot,
            meal.template_id.clone(),
            meal.template_name.clone(),
            meal.used_fallback,
            meal.planned_calories,
            &target,
            result,
            meal.compliance.clone(),
        );
    }

    /// Calories at the lower and upper portion bounds
    fn capacity(&self, portions: &[Portion]) -> (f64, f64) {
        portions.iter().fold((0.0, 0.0), |(lo, hi), p| {
            self.catalog.get(&p.ingredient_id).map_or((lo, hi), |ingredient| {
                (
                    lo + ingredient.nutrition_for(p.min_grams).calories,
                    hi + ingredient.nutrition_for(p.max_grams).calories,
                )
            })
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn build_meal(
        &self,
        slot: MealSlot,
        template: &MealTemplate,
        used_fallback: bool,
        planned_calories: f64,
        target: &NutritionTarget,
        result: OptimizationResult,
        compliance: ComplianceReport,
    ) -> MealInstance {
        self.meal_from_parts(
            slot,
            template.id.clone(),
            template.name.clone(),
            used_fallback,
            planned_calories,
            target,
            result,
            compliance,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn meal_from_parts(
        &self,
        slot: MealSlot,
        template_id: TemplateId,
        template_name: String,
        used_fallback: bool,
        planned_calories: f64,
        target: &NutritionTarget,
        result: OptimizationResult,
        compliance: ComplianceReport,
    ) -> MealInstance {
        let portions: Vec<MealPortion> = result
            .portions
            .into_iter()
            .map(|p| {
                let (name, nutrition) = self.catalog.get(&p.ingredient_id).map_or_else(
                    || (p.ingredient_id.to_string(), NutrientProfile::default()),
                    |ingredient| (ingredient.name.clone(), ingredient.nutrition_for(p.grams)),
                );
                MealPortion {
                    ingredient_id: p.ingredient_id,
                    name,
                    grams: p.grams,
                    nutrition,
                    min_grams: p.min_grams,
                    max_grams: p.max_grams,
                }
            })
            .collect();
        let nutrition: NutrientProfile = portions.iter().map(|p| p.nutrition).sum();
        let quality_score = self.scorer.score(&nutrition, target).total;

        MealInstance {
            slot,
            template_id,
            template_name,
            used_fallback,
            planned_calories,
            target_calories: target.calories,
            portions,
            macro_split: nutrition.macro_split(),
            nutrition,
            quality_score,
            compliance,
            convergence: ConvergenceMetrics {
                final_score: quality_score,
                ..result.metrics
            },
        }
    }

    fn build_result(
        &self,
        preferences: &Preferences,
        days: Vec<DayPlan>,
        deadline_hit: bool,
        mut ctx: PlanningContext,
    ) -> PlanResult {
        let mut per_slot_quality_scores = Vec::new();
        let mut convergence_metrics = Vec::new();
        let mut compliance_flags = Vec::new();
        let mut day_flags = Vec::new();
        let mut partial_failure_reasons = Vec::new();

        for day in &days {
            for meal in &day.meals {
                per_slot_quality_scores.push(SlotQuality {
                    day: day.day_index,
                    slot: meal.slot,
                    template_id: meal.template_id.clone(),
                    score: meal.quality_score,
                });
                convergence_metrics.push(SlotConvergence {
                    day: day.day_index,
                    slot: meal.slot,
                    metrics: meal.convergence,
                });
                if !meal.compliance.is_compliant() {
                    compliance_flags.push(ComplianceFlag::ComplianceViolation {
                        day: day.day_index,
                        slot: meal.slot,
                        template_id: meal.template_id.clone(),
                        offending: meal.compliance.offending.clone(),
                    });
                    partial_failure_reasons.push(PartialFailureReason::SlotNonCompliant {
                        day: day.day_index,
                        slot: meal.slot,
                    });
                }
                if meal.convergence.outcome == OptimizationOutcome::Infeasible {
                    partial_failure_reasons.push(PartialFailureReason::SlotInfeasible {
                        day: day.day_index,
                        slot: meal.slot,
                    });
                }
            }
            for slot in &day.unfilled_slots {
                compliance_flags.push(ComplianceFlag::NoCompatibleTemplate {
                    day: day.day_index,
                    slot: *slot,
                });
                partial_failure_reasons.push(PartialFailureReason::SlotUnfilled {
                    day: day.day_index,
                    slot: *slot,
                });
            }
            if !day.target_met {
                day_flags.push(DayFlag::TargetNotMet {
                    day: day.day_index,
                    deviation_pct: day.calorie_deviation_pct,
                });
            }
        }

        if deadline_hit {
            partial_failure_reasons.push(PartialFailureReason::DeadlineExceeded {
                days_completed: days.len() as u32,
                days_requested: preferences.days,
            });
        }

        let status = if partial_failure_reasons.is_empty() {
            ctx.transition(GenerationPhase::Complete);
            PlanStatus::Complete
        } else {
            ctx.transition(GenerationPhase::PartialFailure);
            PlanStatus::PartialFailure
        };

        let mean_quality_score = if per_slot_quality_scores.is_empty() {
            0.0
        } else {
            per_slot_quality_scores.iter().map(|s| s.score).sum::<f64>()
                / per_slot_quality_scores.len() as f64
        };

        let counters = *ctx.counters();
        info!(
            plan.status = ?status,
            plan.days_completed = days.len(),
            plan.days_requested = preferences.days,
            plan.mean_quality = mean_quality_score,
            plan.optimizer_runs = counters.optimizer_runs,
            plan.optimizer_iterations = counters.optimizer_iterations,
            plan.substitutions = counters.substitutions,
            plan.rebalance_passes = counters.rebalance_passes,
            "Meal plan generated"
        );

        PlanResult {
            status,
            week_plan: WeekPlan {
                days,
                usage_history: ctx.into_usage(),
            },
            per_slot_quality_scores,
            compliance_flags,
            convergence_metrics,
            day_flags,
            partial_failure_reasons,
            days_requested: preferences.days,
            mean_quality_score,
        }
    }
}

/// Compliant slots whose last optimization could not reach its target
fn needs_retarget(meal: &MealInstance) -> bool {
    meal.compliance.is_compliant() && meal.convergence.outcome == OptimizationOutcome::Infeasible
}

/// Current portions of `meal` as optimizer seeds
fn seeds_from_meal(meal: &MealInstance) -> Vec<Portion> {
    meal.portions
        .iter()
        .map(|p| Portion {
            ingredient_id: p.ingredient_id.clone(),
            grams: p.grams,
            min_grams: p.min_grams,
            max_grams: p.max_grams,
        })
        .collect()
}

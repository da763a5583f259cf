// ABOUTME: Plan output contract: meal instances, day and week plans, flags and metrics
// ABOUTME: Everything a renderer, grocery-list builder or explanation layer consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::diet::MealSlot;
use super::ids::{IngredientId, TemplateId};
use super::nutrients::{MacroSplit, NutrientProfile};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// How a portion optimization run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationOutcome {
    /// Improvement fell below the convergence threshold or no move remained
    Converged,
    /// The iteration cap was hit; the best candidate found is kept
    MaxIterationsReached,
    /// The calorie target could not be reached within portion bounds
    Infeasible,
}

impl OptimizationOutcome {
    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Converged => "converged",
            Self::MaxIterationsReached => "max_iterations_reached",
            Self::Infeasible => "infeasible",
        }
    }
}

/// Convergence metrics for one slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceMetrics {
    /// Terminal outcome
    pub outcome: OptimizationOutcome,
    /// Refinement iterations executed
    pub iterations: u32,
    /// Score after the initial calorie scaling
    pub initial_score: f64,
    /// Score of the kept candidate
    pub final_score: f64,
    /// Absolute calorie deviation from the slot target, in percent
    pub calorie_deviation_pct: f64,
}

/// One ingredient of an assembled meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPortion {
    /// Catalog ingredient
    pub ingredient_id: IngredientId,
    /// Display name
    pub name: String,
    /// Quantity in grams
    pub grams: f64,
    /// Nutrients for this quantity
    pub nutrition: NutrientProfile,
    /// Lowest quantity the optimizer may assign
    #[serde(skip)]
    pub min_grams: f64,
    /// Highest quantity the optimizer may assign
    #[serde(skip)]
    pub max_grams: f64,
}

/// A replacement performed to make a meal compliant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    /// Ingredient that was removed
    pub original: IngredientId,
    /// Ingredient that replaced it
    pub substitute: IngredientId,
    /// Grams of the original
    pub original_grams: f64,
    /// Grams of the substitute before re-optimization
    pub substitute_grams: f64,
    /// Tags that made the original non-compliant
    pub violated_tags: Vec<String>,
}

/// An ingredient left in a meal despite banned tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffendingIngredient {
    /// Ingredient id
    pub ingredient_id: IngredientId,
    /// Banned tags it carries
    pub tags: Vec<String>,
}

/// Terminal compliance state of a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// No banned tags remain
    Compliant,
    /// At least one banned ingredient has no acceptable substitute
    Violation,
}

/// Result of diet and restriction validation for one meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Terminal state
    pub status: ComplianceStatus,
    /// Substitutions performed, in ingredient order
    pub substitutions: Vec<Substitution>,
    /// Ingredients still violating, empty when compliant
    pub offending: Vec<OffendingIngredient>,
}

impl ComplianceReport {
    /// A report with nothing to say
    #[must_use]
    pub const fn compliant() -> Self {
        Self {
            status: ComplianceStatus::Compliant,
            substitutions: Vec::new(),
            offending: Vec::new(),
        }
    }

    /// True when no banned tags remain
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.status == ComplianceStatus::Compliant
    }
}

/// A template filled with concrete portions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealInstance {
    /// Slot served
    pub slot: MealSlot,
    /// Template used
    pub template_id: TemplateId,
    /// Template display name
    pub template_name: String,
    /// True when the neutral default replaced an empty candidate pool
    pub used_fallback: bool,
    /// Calorie target from the meal structure
    pub planned_calories: f64,
    /// Calorie target after day-level rebalancing
    pub target_calories: f64,
    /// Portions in template order
    pub portions: Vec<MealPortion>,
    /// Meal nutrient totals
    pub nutrition: NutrientProfile,
    /// Meal macro split
    pub macro_split: MacroSplit,
    /// Quality score in [0, 100]
    pub quality_score: f64,
    /// Compliance result
    pub compliance: ComplianceReport,
    /// Optimization metrics
    pub convergence: ConvergenceMetrics,
}

impl MealInstance {
    /// True when this slot should not absorb redistributed calories
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.convergence.outcome == OptimizationOutcome::Infeasible
            || !self.compliance.is_compliant()
    }
}

/// One planned day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Zero-based day index
    pub day_index: u32,
    /// Filled slots in day order
    pub meals: Vec<MealInstance>,
    /// Slots left empty because no template was available
    pub unfilled_slots: Vec<MealSlot>,
    /// Daily calorie target
    pub target_calories: f64,
    /// Summed nutrients
    pub nutrition: NutrientProfile,
    /// Day macro split
    pub macro_split: MacroSplit,
    /// Absolute calorie deviation from the daily target, in percent
    pub calorie_deviation_pct: f64,
    /// Rebalancing passes applied
    pub rebalance_passes: u32,
    /// True when the day landed within tolerance of its target
    pub target_met: bool,
}

/// Templates and ingredients used on one day
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayUsage {
    /// Template chosen per slot
    pub templates: BTreeMap<MealSlot, TemplateId>,
    /// Ingredients used anywhere in the day
    pub ingredients: BTreeSet<IngredientId>,
}

/// Per-request record of what earlier days used, for variety decisions
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsageHistory {
    days: Vec<DayUsage>,
}

impl UsageHistory {
    /// Append a completed day
    pub fn record_day(&mut self, usage: DayUsage) {
        self.days.push(usage);
    }

    /// Number of recorded days
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True before the first day is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Recorded days, oldest first
    #[must_use]
    pub fn days(&self) -> &[DayUsage] {
        &self.days
    }

    /// The last `window` days, most recent first
    pub fn recent(&self, window: usize) -> impl Iterator<Item = &DayUsage> {
        self.days.iter().rev().take(window)
    }

    /// How many days ago `template` last filled `slot` within `window`, 1 = yesterday
    #[must_use]
    pub fn days_since_template(
        &self,
        slot: MealSlot,
        template: &TemplateId,
        window: usize,
    ) -> Option<usize> {
        self.recent(window)
            .position(|day| day.templates.get(&slot) == Some(template))
            .map(|pos| pos + 1)
    }

    /// How many of the last `window` days used `ingredient`
    #[must_use]
    pub fn ingredient_use_count(&self, ingredient: &IngredientId, window: usize) -> usize {
        self.recent(window)
            .filter(|day| day.ingredients.contains(ingredient))
            .count()
    }
}

/// The planned horizon
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeekPlan {
    /// Completed days in order
    pub days: Vec<DayPlan>,
    /// Usage history accumulated while planning
    pub usage_history: UsageHistory,
}

/// Whether every requested slot was filled cleanly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// All days and slots produced usable meals
    Complete,
    /// Some slots or days are degraded or missing
    PartialFailure,
}

/// A slot-level compliance problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComplianceFlag {
    /// No template existed for the slot, not even a neutral default
    NoCompatibleTemplate {
        /// Day index
        day: u32,
        /// Slot
        slot: MealSlot,
    },
    /// A meal kept banned ingredients
    ComplianceViolation {
        /// Day index
        day: u32,
        /// Slot
        slot: MealSlot,
        /// Template used
        template_id: TemplateId,
        /// Remaining offenders
        offending: Vec<OffendingIngredient>,
    },
}

/// A day-level problem
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayFlag {
    /// The day stayed outside tolerance after rebalancing
    TargetNotMet {
        /// Day index
        day: u32,
        /// Absolute deviation in percent
        deviation_pct: f64,
    },
}

/// Why a plan is marked `PartialFailure`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartialFailureReason {
    /// A slot was left empty
    SlotUnfilled {
        /// Day index
        day: u32,
        /// Slot
        slot: MealSlot,
    },
    /// A slot kept banned ingredients
    SlotNonCompliant {
        /// Day index
        day: u32,
        /// Slot
        slot: MealSlot,
    },
    /// A slot could not reach its calorie target
    SlotInfeasible {
        /// Day index
        day: u32,
        /// Slot
        slot: MealSlot,
    },
    /// The time budget ran out before every day was planned
    DeadlineExceeded {
        /// Days finished before the deadline
        days_completed: u32,
        /// Days requested
        days_requested: u32,
    },
}

/// Quality score of one filled slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotQuality {
    /// Day index
    pub day: u32,
    /// Slot
    pub slot: MealSlot,
    /// Template used
    pub template_id: TemplateId,
    /// Score in [0, 100]
    pub score: f64,
}

/// Convergence metrics of one filled slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotConvergence {
    /// Day index
    pub day: u32,
    /// Slot
    pub slot: MealSlot,
    /// Metrics
    pub metrics: ConvergenceMetrics,
}

/// Complete output of one planning request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// Overall status
    pub status: PlanStatus,
    /// Planned days
    pub week_plan: WeekPlan,
    /// Score per filled slot
    pub per_slot_quality_scores: Vec<SlotQuality>,
    /// Slot-level compliance problems
    pub compliance_flags: Vec<ComplianceFlag>,
    /// Convergence metrics per filled slot
    pub convergence_metrics: Vec<SlotConvergence>,
    /// Day-level problems
    pub day_flags: Vec<DayFlag>,
    /// Reasons behind a `PartialFailure` status, empty when complete
    pub partial_failure_reasons: Vec<PartialFailureReason>,
    /// Days requested
    pub days_requested: u32,
    /// Mean slot quality score, zero when no slot was filled
    pub mean_quality_score: f64,
}

impl PlanResult {
    /// True when status is `Complete`
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == PlanStatus::Complete
    }

    /// Every meal in the plan, day by day
    pub fn meals(&self) -> impl Iterator<Item = &MealInstance> {
        self.week_plan.days.iter().flat_map(|d| d.meals.iter())
    }
}

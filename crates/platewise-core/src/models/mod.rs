// ABOUTME: Core data models for ingredients, meal templates, preferences and plans
// ABOUTME: Serde-serializable so results can be exported to collaborators as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models shared by the catalog, the planning engine and its callers.

/// Diet types, diet compatibility flags and meal slots
pub mod diet;
/// Typed identifiers
pub mod ids;
/// Ingredient records
pub mod ingredient;
/// Nutrient profiles and macro splits
pub mod nutrients;
/// Plan output types (`MealInstance`, `DayPlan`, `WeekPlan`, `PlanResult`)
pub mod plan;
/// Plan requests and validated preferences
pub mod preferences;
/// Meal templates
pub mod template;

pub use diet::{DietFlags, DietType, MealSlot};
pub use ids::{IngredientId, TemplateId};
pub use ingredient::Ingredient;
pub use nutrients::{MacroSplit, Macronutrient, NutrientProfile};
pub use plan::{
    ComplianceFlag, ComplianceReport, ComplianceStatus, ConvergenceMetrics, DayFlag, DayPlan,
    DayUsage, MealInstance, MealPortion, OffendingIngredient, OptimizationOutcome,
    PartialFailureReason, PlanResult, PlanStatus, SlotConvergence, SlotQuality, Substitution,
    UsageHistory, WeekPlan,
};
pub use preferences::{
    MealStructure, PlanRequest, Preferences, PreferenceLimits, RestrictionSet, SlotShare,
    SlotShareRequest,
};
pub use template::{MealTemplate, TemplateItem};

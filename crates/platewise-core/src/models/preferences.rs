// ABOUTME: Plan requests as received from callers and their validated Preferences form
// ABOUTME: Validation rejects malformed requests up front with InvalidPreferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::diet::{normalize_token, DietType, MealSlot};
use super::ids::IngredientId;
use super::ingredient::Ingredient;
use super::nutrients::MacroSplit;
use crate::constants::limits;
use crate::errors::PlanError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

/// Share of the daily calorie target assigned to one slot, as sent by callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotShareRequest {
    /// Slot name (`breakfast`, `lunch`, `dinner`, `snack`)
    pub slot: String,
    /// Percent of the daily calories
    pub calorie_share_pct: f64,
}

/// Unvalidated planning request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Daily calorie target
    pub target_calories: f64,
    /// Diet name
    pub diet_type: String,
    /// Protein/fat/carbohydrate split; the diet default applies when absent
    #[serde(default)]
    pub macro_target: Option<MacroSplit>,
    /// Banned ingredient tags (allergens, dislikes)
    #[serde(default)]
    pub restrictions: Vec<String>,
    /// Slot calorie shares; the configured default applies when absent
    #[serde(default)]
    pub meal_structure: Option<Vec<SlotShareRequest>>,
    /// Number of days to plan
    #[serde(default = "default_days")]
    pub days: u32,
    /// Per-ingredient preference weights; positive favours, negative avoids
    #[serde(default)]
    pub ingredient_preferences: BTreeMap<String, f64>,
    /// Wall-clock budget for the whole request in milliseconds
    #[serde(default)]
    pub time_budget_ms: Option<u64>,
}

const fn default_days() -> u32 {
    1
}

impl PlanRequest {
    /// Create a one-day request
    #[must_use]
    pub fn new(target_calories: f64, diet_type: impl Into<String>) -> Self {
        Self {
            target_calories,
            diet_type: diet_type.into(),
            macro_target: None,
            restrictions: Vec::new(),
            meal_structure: None,
            days: default_days(),
            ingredient_preferences: BTreeMap::new(),
            time_budget_ms: None,
        }
    }

    /// Set the number of days
    #[must_use]
    pub const fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Set an explicit macro split
    #[must_use]
    pub const fn with_macro_target(mut self, split: MacroSplit) -> Self {
        self.macro_target = Some(split);
        self
    }

    /// Add banned tags
    #[must_use]
    pub fn with_restrictions(mut self, tags: &[&str]) -> Self {
        self.restrictions
            .extend(tags.iter().map(|t| (*t).to_owned()));
        self
    }

    /// Set the meal structure from `(slot, percent)` pairs
    #[must_use]
    pub fn with_meal_structure(mut self, shares: &[(MealSlot, f64)]) -> Self {
        self.meal_structure = Some(
            shares
                .iter()
                .map(|(slot, pct)| SlotShareRequest {
                    slot: slot.as_str().to_owned(),
                    calorie_share_pct: *pct,
                })
                .collect(),
        );
        self
    }

    /// Set a preference weight for one ingredient
    #[must_use]
    pub fn with_preference(mut self, ingredient_id: &str, weight: f64) -> Self {
        self.ingredient_preferences
            .insert(ingredient_id.to_owned(), weight);
        self
    }

    /// Set the overall time budget
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget_ms = Some(u64::try_from(budget.as_millis()).unwrap_or(u64::MAX));
        self
    }
}

/// Bounds used when validating requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceLimits {
    /// Lowest accepted daily calorie target
    pub min_daily_calories: u32,
    /// Highest accepted daily calorie target
    pub max_daily_calories: u32,
    /// Longest plan horizon
    pub max_days: u32,
    /// Allowed deviation of macro percentages from 100
    pub macro_sum_tolerance_pct: f64,
    /// Allowed deviation of slot shares from 100
    pub share_sum_tolerance_pct: f64,
    /// Largest absolute preference weight
    pub max_preference_weight: f64,
}

impl Default for PreferenceLimits {
    fn default() -> Self {
        Self {
            min_daily_calories: limits::MIN_DAILY_CALORIES,
            max_daily_calories: limits::MAX_DAILY_CALORIES,
            max_days: limits::MAX_PLAN_DAYS,
            macro_sum_tolerance_pct: limits::MACRO_SUM_TOLERANCE_PERCENT,
            share_sum_tolerance_pct: limits::SHARE_SUM_TOLERANCE_PERCENT,
            max_preference_weight: limits::MAX_PREFERENCE_WEIGHT,
        }
    }
}

/// Tags a request bans beyond its diet
///
/// An empty restriction list is its own case: every diet-compatible template
/// is eligible and no restriction filtering happens at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionSet {
    /// No restrictions were supplied
    #[default]
    Unrestricted,
    /// Ingredients carrying any of these tags are forbidden
    Banned(BTreeSet<String>),
}

impl RestrictionSet {
    /// Build from raw tags; an empty list yields `Unrestricted`
    #[must_use]
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let banned: BTreeSet<String> = tags
            .into_iter()
            .map(|t| normalize_token(t.as_ref()))
            .filter(|t| !t.is_empty())
            .collect();
        if banned.is_empty() {
            Self::Unrestricted
        } else {
            Self::Banned(banned)
        }
    }

    /// True when no restrictions apply
    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Unrestricted)
    }

    /// True when `ingredient` carries none of the banned tags
    #[must_use]
    pub fn permits(&self, ingredient: &Ingredient) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Banned(tags) => tags.iter().all(|tag| !ingredient.has_tag(tag)),
        }
    }

    /// Banned tags, empty when unrestricted
    pub fn tags(&self) -> impl Iterator<Item = &String> {
        let tags = match self {
            Self::Unrestricted => None,
            Self::Banned(tags) => Some(tags),
        };
        tags.into_iter().flatten()
    }
}

/// Share of daily calories for one slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotShare {
    /// Slot
    pub slot: MealSlot,
    /// Percent of the daily calories
    pub share_pct: f64,
}

/// Validated list of slots and their calorie shares, in day order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealStructure {
    shares: Vec<SlotShare>,
}

impl MealStructure {
    /// Validate slot shares: at least one slot, no duplicates, positive shares summing to 100
    ///
    /// # Errors
    ///
    /// Returns `InvalidPreferences` on the `meal_structure` field when a rule is broken
    pub fn new(mut shares: Vec<SlotShare>, tolerance_pct: f64) -> Result<Self, PlanError> {
        if shares.is_empty() {
            return Err(PlanError::invalid_preferences(
                "meal_structure",
                "at least one slot is required",
            ));
        }
        let mut seen = BTreeSet::new();
        for share in &shares {
            if !seen.insert(share.slot) {
                return Err(PlanError::invalid_preferences(
                    "meal_structure",
                    format!("slot '{}' appears more than once", share.slot),
                ));
            }
            if !share.share_pct.is_finite() || share.share_pct <= 0.0 {
                return Err(PlanError::invalid_preferences(
                    "meal_structure",
                    format!("share for '{}' must be positive", share.slot),
                ));
            }
        }
        let total: f64 = shares.iter().map(|s| s.share_pct).sum();
        if (total - 100.0).abs() > tolerance_pct {
            return Err(PlanError::invalid_preferences(
                "meal_structure",
                format!("slot shares must sum to 100, got {total:.2}"),
            ));
        }
        shares.sort_by_key(|s| s.slot);
        Ok(Self { shares })
    }

    /// Breakfast 25%, lunch 40%, dinner 35%
    #[must_use]
    pub fn three_meals() -> Self {
        Self {
            shares: vec![
                SlotShare {
                    slot: MealSlot::Breakfast,
                    share_pct: 25.0,
                },
                SlotShare {
                    slot: MealSlot::Lunch,
                    share_pct: 40.0,
                },
                SlotShare {
                    slot: MealSlot::Dinner,
                    share_pct: 35.0,
                },
            ],
        }
    }

    /// Slot shares in day order
    #[must_use]
    pub fn shares(&self) -> &[SlotShare] {
        &self.shares
    }

    /// Number of slots per day
    #[must_use]
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// True when the structure has no slots
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

impl Default for MealStructure {
    fn default() -> Self {
        Self::three_meals()
    }
}

/// Validated planning preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Daily calorie target
    pub target_calories: f64,
    /// Diet
    pub diet_type: DietType,
    /// Macro split each meal aims for
    pub macro_target: MacroSplit,
    /// Additional banned tags
    pub restrictions: RestrictionSet,
    /// Slots and calorie shares
    pub meal_structure: MealStructure,
    /// Number of days
    pub days: u32,
    /// Ingredient preference weights
    pub ingredient_weights: BTreeMap<IngredientId, f64>,
    /// Overall time budget
    pub time_budget: Option<Duration>,
}

impl Preferences {
    /// Validate a request against `limits`, falling back to `default_structure`
    ///
    /// # Errors
    ///
    /// Returns `InvalidPreferences` naming the first field that fails validation
    pub fn from_request(
        request: &PlanRequest,
        limits: &PreferenceLimits,
        default_structure: &MealStructure,
    ) -> Result<Self, PlanError> {
        let diet_type: DietType = request.diet_type.parse()?;

        let calories = request.target_calories;
        if !calories.is_finite()
            || calories < f64::from(limits.min_daily_calories)
            || calories > f64::from(limits.max_daily_calories)
        {
            return Err(PlanError::invalid_preferences(
                "target_calories",
                format!(
                    "must be between {} and {} kcal, got {calories}",
                    limits.min_daily_calories, limits.max_daily_calories
                ),
            ));
        }

        if request.days == 0 || request.days > limits.max_days {
            return Err(PlanError::invalid_preferences(
                "days",
                format!("must be between 1 and {}, got {}", limits.max_days, request.days),
            ));
        }

        let macro_target = match request.macro_target {
            Some(split) => validate_macro_split(split, limits.macro_sum_tolerance_pct)?,
            None => diet_type.default_macro_split(),
        };

        let meal_structure = match &request.meal_structure {
            Some(raw) => {
                let shares = raw
                    .iter()
                    .map(|s| {
                        Ok(SlotShare {
                            slot: s.slot.parse()?,
                            share_pct: s.calorie_share_pct,
                        })
                    })
                    .collect::<Result<Vec<_>, PlanError>>()?;
                MealStructure::new(shares, limits.share_sum_tolerance_pct)?
            }
            None => default_structure.clone(),
        };

        if request.restrictions.iter().any(|t| t.trim().is_empty()) {
            return Err(PlanError::invalid_preferences(
                "restrictions",
                "restriction tags must not be blank",
            ));
        }
        let restrictions = RestrictionSet::from_tags(&request.restrictions);

        let mut ingredient_weights = BTreeMap::new();
        for (id, weight) in &request.ingredient_preferences {
            if !weight.is_finite() || weight.abs() > limits.max_preference_weight {
                return Err(PlanError::invalid_preferences(
                    "ingredient_preferences",
                    format!(
                        "weight for '{id}' must be within ±{}",
                        limits.max_preference_weight
                    ),
                ));
            }
            ingredient_weights.insert(IngredientId::new(id.trim()), *weight);
        }

        Ok(Self {
            target_calories: calories,
            diet_type,
            macro_target,
            restrictions,
            meal_structure,
            days: request.days,
            ingredient_weights,
            time_budget: request.time_budget_ms.map(Duration::from_millis),
        })
    }

    /// Union of the diet's banned tags and the request's restrictions
    #[must_use]
    pub fn banned_tags(&self) -> BTreeSet<String> {
        self.diet_type
            .banned_tags()
            .iter()
            .map(|t| (*t).to_owned())
            .chain(self.restrictions.tags().cloned())
            .collect()
    }

    /// Preference weight of one ingredient, zero when unspecified
    #[must_use]
    pub fn weight_of(&self, ingredient_id: &IngredientId) -> f64 {
        self.ingredient_weights
            .get(ingredient_id)
            .copied()
            .unwrap_or(0.0)
    }
}

fn validate_macro_split(split: MacroSplit, tolerance_pct: f64) -> Result<MacroSplit, PlanError> {
    let parts = [split.protein_pct, split.fat_pct, split.carbs_pct];
    if parts
        .iter()
        .any(|p| !p.is_finite() || *p < 0.0 || *p > 100.0)
    {
        return Err(PlanError::invalid_preferences(
            "macro_target",
            "each percentage must be between 0 and 100",
        ));
    }
    if (split.total() - 100.0).abs() > tolerance_pct {
        return Err(PlanError::invalid_preferences(
            "macro_target",
            format!("percentages must sum to 100, got {:.2}", split.total()),
        ));
    }
    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(request: &PlanRequest) -> Result<Preferences, PlanError> {
        Preferences::from_request(request, &PreferenceLimits::default(), &MealStructure::default())
    }

    #[test]
    fn test_defaults_fill_macro_target_and_structure() {
        let prefs = validate(&PlanRequest::new(2000.0, "vegan")).unwrap();
        assert_eq!(prefs.diet_type, DietType::Vegan);
        assert_eq!(prefs.macro_target, DietType::Vegan.default_macro_split());
        assert_eq!(prefs.meal_structure, MealStructure::three_meals());
        assert!(prefs.restrictions.is_unrestricted());
    }

    #[test]
    fn test_unknown_diet_rejected() {
        let err = validate(&PlanRequest::new(2000.0, "unknown_diet")).unwrap_err();
        assert_eq!(err.field(), Some("diet_type"));
    }

    #[test]
    fn test_calorie_bounds() {
        assert!(validate(&PlanRequest::new(999.0, "standard")).is_err());
        assert!(validate(&PlanRequest::new(5001.0, "standard")).is_err());
        assert!(validate(&PlanRequest::new(f64::NAN, "standard")).is_err());
        assert!(validate(&PlanRequest::new(1000.0, "standard")).is_ok());
    }

    #[test]
    fn test_zero_days_rejected() {
        let err = validate(&PlanRequest::new(2000.0, "standard").with_days(0)).unwrap_err();
        assert_eq!(err.field(), Some("days"));
    }

    #[test]
    fn test_macro_target_must_sum_to_100() {
        let request =
            PlanRequest::new(2000.0, "standard").with_macro_target(MacroSplit::new(30.0, 30.0, 30.0));
        assert_eq!(validate(&request).unwrap_err().field(), Some("macro_target"));

        let request = PlanRequest::new(2000.0, "standard")
            .with_macro_target(MacroSplit::new(30.0, 30.5, 40.0));
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_meal_structure_rules() {
        let duplicate = PlanRequest::new(2000.0, "standard")
            .with_meal_structure(&[(MealSlot::Lunch, 50.0), (MealSlot::Lunch, 50.0)]);
        assert!(validate(&duplicate).is_err());

        let short = PlanRequest::new(2000.0, "standard")
            .with_meal_structure(&[(MealSlot::Lunch, 50.0), (MealSlot::Dinner, 49.0)]);
        assert!(validate(&short).is_err());

        let zero = PlanRequest::new(2000.0, "standard")
            .with_meal_structure(&[(MealSlot::Lunch, 100.0), (MealSlot::Snack, 0.0)]);
        assert!(validate(&zero).is_err());
    }

    #[test]
    fn test_meal_structure_sorted_into_day_order() {
        let request = PlanRequest::new(2000.0, "standard").with_meal_structure(&[
            (MealSlot::Snack, 10.0),
            (MealSlot::Dinner, 40.0),
            (MealSlot::Breakfast, 50.0),
        ]);
        let prefs = validate(&request).unwrap();
        let slots: Vec<MealSlot> = prefs.meal_structure.shares().iter().map(|s| s.slot).collect();
        assert_eq!(slots, vec![MealSlot::Breakfast, MealSlot::Dinner, MealSlot::Snack]);
    }

    #[test]
    fn test_restrictions_normalized_and_merged_with_diet() {
        let request =
            PlanRequest::new(2000.0, "vegetarian").with_restrictions(&["Tree-Nut", "peanut"]);
        let prefs = validate(&request).unwrap();
        let banned = prefs.banned_tags();
        assert!(banned.contains("tree_nut"));
        assert!(banned.contains("peanut"));
        assert!(banned.contains("meat"));
    }

    #[test]
    fn test_blank_restriction_rejected() {
        let request = PlanRequest::new(2000.0, "standard").with_restrictions(&["  "]);
        assert_eq!(validate(&request).unwrap_err().field(), Some("restrictions"));
    }

    #[test]
    fn test_preference_weight_bounds() {
        let request = PlanRequest::new(2000.0, "standard").with_preference("salmon", 50.0);
        assert_eq!(
            validate(&request).unwrap_err().field(),
            Some("ingredient_preferences")
        );
        let request = PlanRequest::new(2000.0, "standard").with_preference("salmon", -2.0);
        let prefs = validate(&request).unwrap();
        assert!((prefs.weight_of(&IngredientId::from("salmon")) + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let request: PlanRequest =
            serde_json::from_str(r#"{"target_calories": 1800, "diet_type": "paleo"}"#).unwrap();
        assert_eq!(request.days, 1);
        assert!(request.restrictions.is_empty());
        assert!(request.meal_structure.is_none());
    }
}

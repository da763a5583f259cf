// ABOUTME: End-to-end meal plan scenarios over the builtin dataset
// ABOUTME: Covers calorie accuracy, vegan exclusion, keto carb limits and invalid diets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{builtin_planner, carb_energy_pct, meal_for, plan_tags};
use platewise::errors::PlanError;
use platewise::models::{MacroSplit, MealSlot, PlanRequest, PlanStatus};

#[test]
fn test_standard_day_hits_calorie_target() {
    let planner = builtin_planner();
    let request = PlanRequest::new(2000.0, "standard").with_meal_structure(&[
        (MealSlot::Breakfast, 25.0),
        (MealSlot::Lunch, 40.0),
        (MealSlot::Dinner, 35.0),
    ]);

    let plan = planner.generate_plan(&request).unwrap();

    assert_eq!(plan.status, PlanStatus::Complete);
    assert_eq!(plan.week_plan.days.len(), 1);
    let day = &plan.week_plan.days[0];
    assert!(
        (1960.0..=2040.0).contains(&day.nutrition.calories),
        "day total {} outside 2% of target",
        day.nutrition.calories
    );
    assert!(day.target_met);

    let breakfast = meal_for(&plan, 0, MealSlot::Breakfast);
    assert!(
        (480.0..=520.0).contains(&breakfast.nutrition.calories),
        "breakfast {} outside 500 +/- 20",
        breakfast.nutrition.calories
    );
}

#[test]
fn test_vegan_plan_excludes_animal_products() {
    let planner = builtin_planner();
    let plan = planner
        .generate_plan(&PlanRequest::new(2000.0, "vegan"))
        .unwrap();

    let tags = plan_tags(&planner, &plan);
    for banned in ["dairy", "egg", "meat", "honey", "fish", "poultry"] {
        assert!(!tags.contains(banned), "vegan plan contains {banned}");
    }
    assert!(plan.compliance_flags.is_empty());
}

#[test]
fn test_keto_plan_limits_carbohydrates() {
    let planner = builtin_planner();
    let plan = planner
        .generate_plan(&PlanRequest::new(1200.0, "keto"))
        .unwrap();

    let day = &plan.week_plan.days[0];
    let carb_pct = carb_energy_pct(day.nutrition.calories, day.nutrition.carbs_g);
    assert!(carb_pct <= 10.0, "keto day has {carb_pct:.1}% carbohydrate energy");
    assert!(plan
        .meals()
        .all(|meal| meal.compliance.is_compliant()));
}

#[test]
fn test_unknown_diet_is_rejected() {
    let planner = builtin_planner();
    let err = planner
        .generate_plan(&PlanRequest::new(2000.0, "unknown_diet"))
        .unwrap_err();

    assert!(matches!(
        err,
        PlanError::InvalidPreferences {
            field: "diet_type",
            ..
        }
    ));
}

#[test]
fn test_mediterranean_week_is_complete() {
    let planner = builtin_planner();
    let plan = planner
        .generate_plan(&PlanRequest::new(2200.0, "mediterranean").with_days(7))
        .unwrap();

    assert_eq!(plan.week_plan.days.len(), 7);
    assert_eq!(plan.week_plan.usage_history.len(), 7);
    for day in &plan.week_plan.days {
        assert_eq!(day.meals.len(), 3);
        assert!(day.unfilled_slots.is_empty());
    }
    assert_eq!(plan.per_slot_quality_scores.len(), 21);
    assert!(plan.mean_quality_score > 50.0);
}

#[test]
fn test_snack_structure_plans_four_slots_in_order() {
    let planner = builtin_planner();
    let request = PlanRequest::new(2400.0, "standard").with_meal_structure(&[
        (MealSlot::Snack, 15.0),
        (MealSlot::Dinner, 30.0),
        (MealSlot::Breakfast, 20.0),
        (MealSlot::Lunch, 35.0),
    ]);

    let plan = planner.generate_plan(&request).unwrap();
    let slots: Vec<MealSlot> = plan.week_plan.days[0]
        .meals
        .iter()
        .map(|meal| meal.slot)
        .collect();
    assert_eq!(
        slots,
        vec![
            MealSlot::Breakfast,
            MealSlot::Lunch,
            MealSlot::Dinner,
            MealSlot::Snack
        ]
    );
    let snack = meal_for(&plan, 0, MealSlot::Snack);
    assert!((snack.planned_calories - 360.0).abs() < 1e-6);
}

#[test]
fn test_custom_macro_target_is_scored_against() {
    let planner = builtin_planner();
    let split = MacroSplit::new(35.0, 30.0, 35.0);
    let plan = planner
        .generate_plan(&PlanRequest::new(2000.0, "standard").with_macro_target(split))
        .unwrap();
    let day = &plan.week_plan.days[0];
    // a high-protein target pulls protein above the 25% diet default region
    assert!(day.macro_split.protein_pct > 20.0);
    assert!(plan.per_slot_quality_scores.iter().all(|s| s.score > 0.0));
}

#[test]
fn test_ingredient_preference_steers_selection() {
    let planner = builtin_planner();
    let plan = planner
        .generate_plan(&PlanRequest::new(2000.0, "standard").with_preference("salmon", 5.0))
        .unwrap();
    let dinner = meal_for(&plan, 0, MealSlot::Dinner);
    assert_eq!(dinner.template_id.as_str(), "dinner_salmon_rice_broccoli");
}

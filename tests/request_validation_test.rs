// ABOUTME: Integration tests for plan request validation through the planning service
// ABOUTME: Each invalid request must fail fast naming the offending field, with no partial plan
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::builtin_service;
use platewise::errors::{ErrorCode, ErrorResponse, ServiceError};
use platewise::models::{MacroSplit, MealSlot, PlanRequest};
use platewise::services::PlanningService;

fn rejected_field(request: &PlanRequest) -> String {
    let service = builtin_service();
    let err = service.generate(request).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);
    match err {
        ServiceError::Plan(plan_err) => plan_err.field().unwrap().to_owned(),
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn test_calorie_bounds() {
    assert_eq!(rejected_field(&PlanRequest::new(999.0, "standard")), "target_calories");
    assert_eq!(rejected_field(&PlanRequest::new(5001.0, "standard")), "target_calories");
    assert_eq!(rejected_field(&PlanRequest::new(f64::NAN, "standard")), "target_calories");

    let service = builtin_service();
    assert!(service.generate(&PlanRequest::new(1000.0, "standard")).is_ok());
    assert!(service.generate(&PlanRequest::new(5000.0, "standard")).is_ok());
}

#[test]
fn test_day_bounds() {
    assert_eq!(
        rejected_field(&PlanRequest::new(2000.0, "standard").with_days(0)),
        "days"
    );
    assert_eq!(
        rejected_field(&PlanRequest::new(2000.0, "standard").with_days(29)),
        "days"
    );
}

#[test]
fn test_unknown_diet() {
    assert_eq!(rejected_field(&PlanRequest::new(2000.0, "carnivore")), "diet_type");
}

#[test]
fn test_macro_target_must_sum_to_100() {
    let request =
        PlanRequest::new(2000.0, "standard").with_macro_target(MacroSplit::new(30.0, 30.0, 30.0));
    assert_eq!(rejected_field(&request), "macro_target");

    let negative =
        PlanRequest::new(2000.0, "standard").with_macro_target(MacroSplit::new(-10.0, 60.0, 50.0));
    assert_eq!(rejected_field(&negative), "macro_target");
}

#[test]
fn test_meal_structure_rules() {
    let short = PlanRequest::new(2000.0, "standard")
        .with_meal_structure(&[(MealSlot::Breakfast, 30.0), (MealSlot::Dinner, 60.0)]);
    assert_eq!(rejected_field(&short), "meal_structure");

    let duplicate = PlanRequest::new(2000.0, "standard")
        .with_meal_structure(&[(MealSlot::Lunch, 50.0), (MealSlot::Lunch, 50.0)]);
    assert_eq!(rejected_field(&duplicate), "meal_structure");

    let zero_share = PlanRequest::new(2000.0, "standard").with_meal_structure(&[
        (MealSlot::Breakfast, 0.0),
        (MealSlot::Lunch, 50.0),
        (MealSlot::Dinner, 50.0),
    ]);
    assert_eq!(rejected_field(&zero_share), "meal_structure");
}

#[test]
fn test_blank_restriction_rejected() {
    let request = PlanRequest::new(2000.0, "standard").with_restrictions(&["dairy", "  "]);
    assert_eq!(rejected_field(&request), "restrictions");
}

#[test]
fn test_preference_weight_bounds() {
    let too_strong = PlanRequest::new(2000.0, "standard").with_preference("salmon", 11.0);
    assert_eq!(rejected_field(&too_strong), "ingredient_preferences");

    let avoid = PlanRequest::new(2000.0, "standard").with_preference("salmon", -10.0);
    assert!(builtin_service().generate(&avoid).is_ok());
}

#[test]
fn test_error_response_carries_field() {
    let service = builtin_service();
    let err = service
        .generate(&PlanRequest::new(2000.0, "standard").with_days(40))
        .unwrap_err();
    let response = ErrorResponse::from(&err);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["error"]["field"], "days");
    assert!(json["error"]["message"].as_str().unwrap().contains("40"));
}

#[test]
fn test_malformed_request_json() {
    let err = PlanningService::parse_request("{\"target_calories\": \"lots\"}").unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);

    let request = PlanningService::parse_request(
        r#"{"target_calories": 1800, "diet_type": "Vegan", "days": 2}"#,
    )
    .unwrap();
    assert_eq!(request.days, 2);
    assert!(builtin_service().generate(&request).is_ok());
}

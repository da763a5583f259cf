// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for platewise-cli
// ABOUTME: Provides JSON printing and readable plan and template displays

use anyhow::Result;
use platewise::models::{ComplianceStatus, PlanResult};
use platewise::services::TemplateSummary;
use serde::Serialize;

/// Print `value` as JSON on stdout
pub fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}

/// Display a plan as a readable day-by-day summary
pub fn display_plan_summary(plan: &PlanResult) {
    let status = if plan.is_complete() {
        "Complete"
    } else {
        "Partial failure"
    };
    println!("\nMeal Plan: {status}");
    println!("{}", "=".repeat(72));
    println!(
        "Days: {}/{}   Mean quality: {:.1}",
        plan.week_plan.days.len(),
        plan.days_requested,
        plan.mean_quality_score
    );

    for day in &plan.week_plan.days {
        println!(
            "\nDay {}: {:.0} / {:.0} kcal ({:+.1}%)   P {:.0}% F {:.0}% C {:.0}%",
            day.day_index + 1,
            day.nutrition.calories,
            day.target_calories,
            (day.nutrition.calories - day.target_calories) / day.target_calories * 100.0,
            day.macro_split.protein_pct,
            day.macro_split.fat_pct,
            day.macro_split.carbs_pct
        );
        for meal in &day.meals {
            let marker = match meal.compliance.status {
                ComplianceStatus::Compliant if meal.compliance.substitutions.is_empty() => "",
                ComplianceStatus::Compliant => " [substituted]",
                ComplianceStatus::Violation => " [VIOLATION]",
            };
            println!(
                "   {:<10} {:<40} {:>6.0} kcal  score {:>5.1}{marker}",
                meal.slot.as_str(),
                meal.template_name,
                meal.nutrition.calories,
                meal.quality_score
            );
            for portion in &meal.portions {
                println!("      {:>7.1} g  {}", portion.grams, portion.name);
            }
        }
        for slot in &day.unfilled_slots {
            println!("   {:<10} (no compatible template)", slot.as_str());
        }
    }

    if !plan.partial_failure_reasons.is_empty() {
        println!("\nIssues:");
        for reason in &plan.partial_failure_reasons {
            println!("   - {reason:?}");
        }
    }
}

/// Display templates as a table
pub fn display_template_table(templates: &[TemplateSummary]) {
    println!(
        "{:<36} {:<10} {:>8}  diets",
        "template", "slot", "kcal"
    );
    println!("{}", "-".repeat(80));
    for template in templates {
        let diets: Vec<&str> = template.diets.iter().map(|d| d.as_str()).collect();
        println!(
            "{:<36} {:<10} {:>8.0}  {}",
            template.id,
            template.slot.as_str(),
            template.base_calories,
            diets.join(", ")
        );
    }
    println!("\n{} templates", templates.len());
}

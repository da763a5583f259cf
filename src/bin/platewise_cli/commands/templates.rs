// ABOUTME: Template listing command for platewise-cli
// ABOUTME: Filters the dataset's templates by diet and slot and prints a table or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use platewise::models::{DietType, MealSlot};
use platewise::services::PlanningService;

use crate::helpers::display::{display_template_table, print_json};

/// List templates, optionally filtered by diet and slot names
pub fn list(
    service: &PlanningService,
    diet: Option<&str>,
    slot: Option<&str>,
    json: bool,
) -> Result<()> {
    let diet = diet.map(str::parse::<DietType>).transpose()?;
    let slot = slot.map(str::parse::<MealSlot>).transpose()?;
    let templates = service.list_templates(diet, slot);

    if json {
        print_json(&templates, false)?;
    } else {
        display_template_table(&templates);
    }
    Ok(())
}

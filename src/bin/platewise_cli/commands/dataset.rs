// ABOUTME: Dataset validation command for platewise-cli
// ABOUTME: Loads a dataset file, validates cross references and reports coverage per diet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use platewise::data::load_dataset_from_path;
use platewise::models::{DietType, MealSlot};
use std::path::Path;
use tracing::{error, warn};

/// Validate the dataset at `path` and print a coverage report
pub fn check(path: &Path) -> Result<()> {
    let data = load_dataset_from_path(path).inspect_err(|err| {
        error!(dataset.path = %path.display(), error = %err, "Dataset is invalid");
    })?;

    println!("Dataset {} is valid", path.display());
    println!("   Ingredients: {}", data.catalog.len());
    println!("   Templates: {}", data.library.len());
    println!("   Substitution entries: {}", data.substitutions.len());
    println!("\nCoverage (templates per slot):");
    println!(
        "   {:<14} {:>9} {:>6} {:>7} {:>6}",
        "diet", "breakfast", "lunch", "dinner", "snack"
    );

    for diet in DietType::ALL {
        let counts: Vec<usize> = MealSlot::ALL
            .iter()
            .map(|slot| data.library.candidates(*slot, diet).count())
            .collect();
        println!(
            "   {:<14} {:>9} {:>6} {:>7} {:>6}",
            diet.as_str(),
            counts[0],
            counts[1],
            counts[2],
            counts[3]
        );
        for (slot, count) in MealSlot::ALL.iter().zip(&counts) {
            if *count == 0 && data.library.neutral_for(diet, *slot).is_none() {
                warn!(
                    diet = %diet,
                    slot = %slot,
                    "No template or neutral default; plans for this slot will be unfilled"
                );
            }
        }
    }
    Ok(())
}

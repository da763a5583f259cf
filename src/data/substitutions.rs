// ABOUTME: Builtin substitution table mapping restricted ingredients to ranked alternatives
// ABOUTME: Alternatives are listed best-first; the validator skips any that are also restricted
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use platewise_core::models::IngredientId;
use std::collections::BTreeMap;

const SUBSTITUTIONS: &[(&str, &[&str])] = &[
    // Dairy and eggs
    ("milk", &["oat_milk"]),
    ("greek_yogurt", &["soy_yogurt", "coconut_yogurt"]),
    ("soy_yogurt", &["coconut_yogurt", "greek_yogurt"]),
    ("cheddar", &["tofu", "avocado"]),
    ("feta", &["tofu", "avocado"]),
    ("eggs", &["tofu", "tempeh"]),
    ("honey", &["banana", "blueberries"]),
    // Meat and seafood
    ("bacon", &["turkey_breast", "tempeh"]),
    ("chicken_breast", &["turkey_breast", "tempeh", "tofu"]),
    ("turkey_breast", &["chicken_breast", "tempeh"]),
    ("beef_sirloin", &["tempeh", "tofu"]),
    ("salmon", &["tofu", "tempeh"]),
    ("shrimp", &["chicken_breast", "tofu"]),
    // Soy and legumes
    ("tofu", &["tempeh", "chickpeas"]),
    ("tempeh", &["tofu", "chickpeas"]),
    ("lentils", &["chickpeas", "quinoa"]),
    ("chickpeas", &["lentils", "quinoa"]),
    ("hummus", &["avocado"]),
    // Grains and starches
    ("oats", &["chia_seeds"]),
    ("whole_wheat_bread", &["sweet_potato"]),
    ("whole_wheat_pasta", &["quinoa", "zucchini"]),
    ("brown_rice", &["quinoa", "cauliflower_rice"]),
    ("quinoa", &["brown_rice", "cauliflower_rice"]),
    ("oat_milk", &["milk", "soy_yogurt"]),
    ("sweet_potato", &["carrot", "cauliflower_rice"]),
    ("banana", &["apple", "blueberries"]),
    // Nuts and seeds
    ("almonds", &["sunflower_seeds", "chia_seeds"]),
    ("walnuts", &["sunflower_seeds", "chia_seeds"]),
    ("peanut_butter", &["sunflower_seeds", "almonds"]),
];

/// Builtin substitution map
pub(super) fn substitutions() -> BTreeMap<IngredientId, Vec<IngredientId>> {
    SUBSTITUTIONS
        .iter()
        .map(|(original, alternatives)| {
            (
                IngredientId::from(*original),
                alternatives.iter().map(|alt| IngredientId::from(*alt)).collect(),
            )
        })
        .collect()
}

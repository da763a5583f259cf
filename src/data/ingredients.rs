// ABOUTME: Builtin ingredient table with per-100g nutrients and dietary tags
// ABOUTME: Values follow common food composition references, rounded to one decimal
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use platewise_core::models::{Ingredient, NutrientProfile};

struct IngredientData {
    id: &'static str,
    name: &'static str,
    kcal: f64,
    protein: f64,
    fat: f64,
    carbs: f64,
    fiber: f64,
    tags: &'static [&'static str],
}

// ============================================================================
// Ingredient Data (per 100 g, ordered by id)
// ============================================================================

const INGREDIENTS: &[IngredientData] = &[
    IngredientData {
        id: "almonds",
        name: "Almonds",
        kcal: 579.0,
        protein: 21.2,
        fat: 49.9,
        carbs: 21.6,
        fiber: 12.5,
        tags: &["tree_nut", "nut"],
    },
    IngredientData {
        id: "apple",
        name: "Apple",
        kcal: 52.0,
        protein: 0.3,
        fat: 0.2,
        carbs: 13.8,
        fiber: 2.4,
        tags: &["fruit"],
    },
    IngredientData {
        id: "avocado",
        name: "Avocado",
        kcal: 160.0,
        protein: 2.0,
        fat: 14.7,
        carbs: 8.5,
        fiber: 6.7,
        tags: &["fruit"],
    },
    IngredientData {
        id: "bacon",
        name: "Bacon",
        kcal: 541.0,
        protein: 37.0,
        fat: 42.0,
        carbs: 1.4,
        fiber: 0.0,
        tags: &["meat", "pork", "processed"],
    },
    IngredientData {
        id: "banana",
        name: "Banana",
        kcal: 89.0,
        protein: 1.1,
        fat: 0.3,
        carbs: 22.8,
        fiber: 2.6,
        tags: &["fruit", "high_carb"],
    },
    IngredientData {
        id: "beef_sirloin",
        name: "Beef sirloin",
        kcal: 183.0,
        protein: 27.0,
        fat: 8.0,
        carbs: 0.0,
        fiber: 0.0,
        tags: &["meat", "red_meat"],
    },
    IngredientData {
        id: "blueberries",
        name: "Blueberries",
        kcal: 57.0,
        protein: 0.7,
        fat: 0.3,
        carbs: 14.5,
        fiber: 2.4,
        tags: &["fruit"],
    },
    IngredientData {
        id: "broccoli",
        name: "Broccoli",
        kcal: 34.0,
        protein: 2.8,
        fat: 0.4,
        carbs: 6.6,
        fiber: 2.6,
        tags: &["vegetable"],
    },
    IngredientData {
        id: "brown_rice",
        name: "Brown rice (cooked)",
        kcal: 123.0,
        protein: 2.7,
        fat: 1.0,
        carbs: 25.6,
        fiber: 1.6,
        tags: &["grain", "high_carb"],
    },
    IngredientData {
        id: "carrot",
        name: "Carrot",
        kcal: 41.0,
        protein: 0.9,
        fat: 0.2,
        carbs: 9.6,
        fiber: 2.8,
        tags: &["vegetable"],
    },
    IngredientData {
        id: "cauliflower_rice",
        name: "Cauliflower rice",
        kcal: 25.0,
        protein: 1.9,
        fat: 0.3,
        carbs: 5.0,
        fiber: 2.0,
        tags: &["vegetable"],
    },
    IngredientData {
        id: "cheddar",
        name: "Cheddar cheese",
        kcal: 403.0,
        protein: 25.0,
        fat: 33.0,
        carbs: 1.3,
        fiber: 0.0,
        tags: &["dairy"],
    },
    IngredientData {
        id: "chia_seeds",
        name: "Chia seeds",
        kcal: 486.0,
        protein: 16.5,
        fat: 30.7,
        carbs: 42.1,
        fiber: 34.4,
        tags: &["seed"],
    },
    IngredientData {
        id: "chicken_breast",
        name: "Chicken breast",
        kcal: 165.0,
        protein: 31.0,
        fat: 3.6,
        carbs: 0.0,
        fiber: 0.0,
        tags: &["meat", "poultry"],
    },
    IngredientData {
        id: "chickpeas",
        name: "Chickpeas (cooked)",
        kcal: 164.0,
        protein: 8.9,
        fat: 2.6,
        carbs: 27.4,
        fiber: 7.6,
        tags: &["legume", "high_carb"],
    },
    IngredientData {
        id: "coconut_yogurt",
        name: "Coconut yogurt",
        kcal: 120.0,
        protein: 1.0,
        fat: 10.0,
        carbs: 6.0,
        fiber: 0.5,
        tags: &["coconut"],
    },
    IngredientData {
        id: "eggs",
        name: "Whole eggs",
        kcal: 143.0,
        protein: 12.6,
        fat: 9.5,
        carbs: 0.7,
        fiber: 0.0,
        tags: &["egg"],
    },
    IngredientData {
        id: "feta",
        name: "Feta cheese",
        kcal: 264.0,
        protein: 14.2,
        fat: 21.3,
        carbs: 4.1,
        fiber: 0.0,
        tags: &["dairy"],
    },
    IngredientData {
        id: "greek_yogurt",
        name: "Greek yogurt (2%)",
        kcal: 97.0,
        protein: 9.0,
        fat: 5.0,
        carbs: 3.9,
        fiber: 0.0,
        tags: &["dairy"],
    },
    IngredientData {
        id: "honey",
        name: "Honey",
        kcal: 304.0,
        protein: 0.3,
        fat: 0.0,
        carbs: 82.4,
        fiber: 0.2,
        tags: &["honey", "sugar", "high_carb"],
    },
    IngredientData {
        id: "hummus",
        name: "Hummus",
        kcal: 166.0,
        protein: 7.9,
        fat: 9.6,
        carbs: 14.3,
        fiber: 6.0,
        tags: &["legume"],
    },
    IngredientData {
        id: "lentils",
        name: "Lentils (cooked)",
        kcal: 116.0,
        protein: 9.0,
        fat: 0.4,
        carbs: 20.1,
        fiber: 7.9,
        tags: &["legume", "high_carb"],
    },
    IngredientData {
        id: "milk",
        name: "Milk (1%)",
        kcal: 61.0,
        protein: 3.2,
        fat: 3.3,
        carbs: 4.8,
        fiber: 0.0,
        tags: &["dairy"],
    },
    IngredientData {
        id: "mixed_greens",
        name: "Mixed greens",
        kcal: 20.0,
        protein: 1.8,
        fat: 0.3,
        carbs: 3.7,
        fiber: 2.0,
        tags: &["vegetable"],
    },
    IngredientData {
        id: "oat_milk",
        name: "Oat milk",
        kcal: 48.0,
        protein: 1.0,
        fat: 1.5,
        carbs: 7.0,
        fiber: 0.8,
        tags: &["grain"],
    },
    IngredientData {
        id: "oats",
        name: "Oats",
        kcal: 389.0,
        protein: 16.9,
        fat: 6.9,
        carbs: 66.3,
        fiber: 10.6,
        tags: &["grain", "high_carb"],
    },
    IngredientData {
        id: "olive_oil",
        name: "Extra virgin olive oil",
        kcal: 884.0,
        protein: 0.0,
        fat: 100.0,
        carbs: 0.0,
        fiber: 0.0,
        tags: &["oil"],
    },
    IngredientData {
        id: "peanut_butter",
        name: "Peanut butter",
        kcal: 588.0,
        protein: 25.0,
        fat: 50.0,
        carbs: 20.0,
        fiber: 6.0,
        tags: &["peanut", "legume"],
    },
    IngredientData {
        id: "quinoa",
        name: "Quinoa (cooked)",
        kcal: 120.0,
        protein: 4.4,
        fat: 1.9,
        carbs: 21.3,
        fiber: 2.8,
        tags: &["grain", "high_carb"],
    },
    IngredientData {
        id: "salmon",
        name: "Atlantic salmon",
        kcal: 208.0,
        protein: 20.0,
        fat: 13.0,
        carbs: 0.0,
        fiber: 0.0,
        tags: &["fish", "seafood"],
    },
    IngredientData {
        id: "shrimp",
        name: "Shrimp",
        kcal: 99.0,
        protein: 24.0,
        fat: 0.3,
        carbs: 0.2,
        fiber: 0.0,
        tags: &["shellfish", "seafood"],
    },
    IngredientData {
        id: "soy_yogurt",
        name: "Soy yogurt",
        kcal: 66.0,
        protein: 3.6,
        fat: 2.0,
        carbs: 8.0,
        fiber: 0.5,
        tags: &["soy"],
    },
    IngredientData {
        id: "spinach",
        name: "Spinach",
        kcal: 23.0,
        protein: 2.9,
        fat: 0.4,
        carbs: 3.6,
        fiber: 2.2,
        tags: &["vegetable"],
    },
    IngredientData {
        id: "sunflower_seeds",
        name: "Sunflower seeds",
        kcal: 584.0,
        protein: 20.8,
        fat: 51.5,
        carbs: 20.0,
        fiber: 8.6,
        tags: &["seed"],
    },
    IngredientData {
        id: "sweet_potato",
        name: "Sweet potato (baked)",
        kcal: 86.0,
        protein: 1.6,
        fat: 0.1,
        carbs: 20.1,
        fiber: 3.0,
        tags: &["starchy", "high_carb"],
    },
    IngredientData {
        id: "tempeh",
        name: "Tempeh",
        kcal: 192.0,
        protein: 20.3,
        fat: 10.8,
        carbs: 7.6,
        fiber: 0.0,
        tags: &["soy", "legume"],
    },
    IngredientData {
        id: "tofu",
        name: "Firm tofu",
        kcal: 144.0,
        protein: 15.7,
        fat: 8.7,
        carbs: 2.8,
        fiber: 2.3,
        tags: &["soy", "legume"],
    },
    IngredientData {
        id: "turkey_breast",
        name: "Turkey breast",
        kcal: 135.0,
        protein: 30.0,
        fat: 1.0,
        carbs: 0.0,
        fiber: 0.0,
        tags: &["meat", "poultry"],
    },
    IngredientData {
        id: "walnuts",
        name: "Walnuts",
        kcal: 654.0,
        protein: 15.2,
        fat: 65.2,
        carbs: 13.7,
        fiber: 6.7,
        tags: &["tree_nut", "nut"],
    },
    IngredientData {
        id: "whole_wheat_bread",
        name: "Whole wheat bread",
        kcal: 247.0,
        protein: 13.0,
        fat: 3.4,
        carbs: 41.0,
        fiber: 7.0,
        tags: &["grain", "gluten", "high_carb"],
    },
    IngredientData {
        id: "whole_wheat_pasta",
        name: "Whole wheat pasta (cooked)",
        kcal: 149.0,
        protein: 5.8,
        fat: 1.7,
        carbs: 30.0,
        fiber: 3.9,
        tags: &["grain", "gluten", "high_carb"],
    },
    IngredientData {
        id: "zucchini",
        name: "Zucchini",
        kcal: 17.0,
        protein: 1.2,
        fat: 0.3,
        carbs: 3.1,
        fiber: 1.0,
        tags: &["vegetable"],
    },
];

/// Builtin ingredients
pub(super) fn ingredients() -> Vec<Ingredient> {
    INGREDIENTS
        .iter()
        .map(|data| {
            Ingredient::new(
                data.id,
                data.name,
                NutrientProfile::new(data.kcal, data.protein, data.fat, data.carbs, data.fiber),
                data.tags,
            )
        })
        .collect()
}

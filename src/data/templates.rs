// ABOUTME: Builtin meal templates and per-diet neutral defaults
// ABOUTME: Each template lists the diets it is compatible with and its base ingredient grams
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use platewise_core::models::{DietType, MealSlot, MealTemplate, TemplateItem};
use platewise_intelligence::catalog::NeutralDefault;

struct TemplateData {
    id: &'static str,
    name: &'static str,
    slot: MealSlot,
    diets: &'static [DietType],
    items: &'static [(&'static str, f64)],
}

// ============================================================================
// Meal Templates (ordered by id)
// ============================================================================

const TEMPLATES: &[TemplateData] = &[
    TemplateData {
        id: "breakfast_chia_pudding",
        name: "Chia pudding with banana",
        slot: MealSlot::Breakfast,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Vegan],
        items: &[("chia_seeds", 35.0), ("oat_milk", 250.0), ("banana", 80.0), ("sunflower_seeds", 10.0)],
    },
    TemplateData {
        id: "breakfast_eggs_bacon_avocado",
        name: "Eggs, bacon and avocado",
        slot: MealSlot::Breakfast,
        diets: &[DietType::Standard, DietType::Keto],
        items: &[("eggs", 150.0), ("bacon", 30.0), ("avocado", 70.0), ("spinach", 30.0)],
    },
    TemplateData {
        id: "breakfast_oatmeal_berries",
        name: "Oatmeal with berries and almonds",
        slot: MealSlot::Breakfast,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Mediterranean],
        items: &[("oats", 60.0), ("milk", 200.0), ("blueberries", 80.0), ("almonds", 15.0)],
    },
    TemplateData {
        id: "breakfast_pb_banana_toast",
        name: "Peanut butter banana toast",
        slot: MealSlot::Breakfast,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Vegan],
        items: &[("whole_wheat_bread", 70.0), ("peanut_butter", 25.0), ("banana", 100.0)],
    },
    TemplateData {
        id: "breakfast_salmon_egg_plate",
        name: "Smoked salmon and egg plate",
        slot: MealSlot::Breakfast,
        diets: &[DietType::Standard, DietType::Keto, DietType::Paleo, DietType::Mediterranean],
        items: &[("salmon", 80.0), ("eggs", 100.0), ("avocado", 50.0), ("spinach", 40.0)],
    },
    TemplateData {
        id: "breakfast_sweet_potato_hash",
        name: "Sweet potato hash",
        slot: MealSlot::Breakfast,
        diets: &[DietType::Standard, DietType::Paleo],
        items: &[("sweet_potato", 150.0), ("eggs", 100.0), ("spinach", 40.0), ("olive_oil", 8.0)],
    },
    TemplateData {
        id: "breakfast_tofu_scramble",
        name: "Tofu scramble on toast",
        slot: MealSlot::Breakfast,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Vegan, DietType::Mediterranean],
        items: &[("tofu", 180.0), ("spinach", 50.0), ("whole_wheat_bread", 60.0), ("olive_oil", 8.0), ("avocado", 40.0)],
    },
    TemplateData {
        id: "breakfast_veggie_scramble",
        name: "Veggie scramble with feta",
        slot: MealSlot::Breakfast,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Mediterranean],
        items: &[("eggs", 150.0), ("spinach", 40.0), ("whole_wheat_bread", 50.0), ("olive_oil", 5.0), ("feta", 20.0)],
    },
    TemplateData {
        id: "breakfast_yogurt_parfait",
        name: "Greek yogurt parfait",
        slot: MealSlot::Breakfast,
        diets: &[DietType::Standard, DietType::Vegetarian],
        items: &[("greek_yogurt", 250.0), ("blueberries", 80.0), ("walnuts", 15.0), ("honey", 10.0), ("oats", 20.0)],
    },
    TemplateData {
        id: "dinner_beef_sweet_potato",
        name: "Beef sweet potato",
        slot: MealSlot::Dinner,
        diets: &[DietType::Standard, DietType::Paleo],
        items: &[("beef_sirloin", 150.0), ("sweet_potato", 200.0), ("broccoli", 100.0), ("olive_oil", 8.0)],
    },
    TemplateData {
        id: "dinner_chicken_zucchini_noodles",
        name: "Chicken zucchini noodles",
        slot: MealSlot::Dinner,
        diets: &[DietType::Standard, DietType::Keto],
        items: &[("chicken_breast", 150.0), ("zucchini", 200.0), ("olive_oil", 20.0), ("feta", 30.0)],
    },
    TemplateData {
        id: "dinner_lentil_curry",
        name: "Lentil curry",
        slot: MealSlot::Dinner,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Vegan],
        items: &[("lentils", 200.0), ("brown_rice", 120.0), ("spinach", 60.0), ("olive_oil", 10.0), ("tofu", 80.0)],
    },
    TemplateData {
        id: "dinner_pasta_primavera",
        name: "Pasta primavera",
        slot: MealSlot::Dinner,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Mediterranean],
        items: &[("whole_wheat_pasta", 200.0), ("zucchini", 100.0), ("olive_oil", 10.0), ("feta", 30.0), ("spinach", 40.0)],
    },
    TemplateData {
        id: "dinner_salmon_rice_broccoli",
        name: "Salmon rice broccoli",
        slot: MealSlot::Dinner,
        diets: &[DietType::Standard, DietType::Mediterranean],
        items: &[("salmon", 150.0), ("brown_rice", 150.0), ("broccoli", 120.0), ("olive_oil", 5.0)],
    },
    TemplateData {
        id: "dinner_shrimp_quinoa",
        name: "Shrimp quinoa",
        slot: MealSlot::Dinner,
        diets: &[DietType::Standard, DietType::Mediterranean],
        items: &[("shrimp", 150.0), ("quinoa", 150.0), ("zucchini", 100.0), ("olive_oil", 10.0)],
    },
    TemplateData {
        id: "dinner_steak_cauliflower_rice",
        name: "Steak cauliflower rice",
        slot: MealSlot::Dinner,
        diets: &[DietType::Standard, DietType::Keto, DietType::Paleo],
        items: &[("beef_sirloin", 170.0), ("cauliflower_rice", 150.0), ("olive_oil", 15.0), ("broccoli", 80.0)],
    },
    TemplateData {
        id: "dinner_tofu_stir_fry",
        name: "Tofu stir fry",
        slot: MealSlot::Dinner,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Vegan],
        items: &[("tofu", 200.0), ("brown_rice", 150.0), ("broccoli", 100.0), ("olive_oil", 10.0)],
    },
    TemplateData {
        id: "lunch_beef_sweet_potato_salad",
        name: "Beef sweet potato salad",
        slot: MealSlot::Lunch,
        diets: &[DietType::Standard, DietType::Paleo],
        items: &[("beef_sirloin", 140.0), ("sweet_potato", 150.0), ("mixed_greens", 60.0), ("olive_oil", 10.0)],
    },
    TemplateData {
        id: "lunch_chicken_caesar",
        name: "Chicken caesar",
        slot: MealSlot::Lunch,
        diets: &[DietType::Standard, DietType::Keto],
        items: &[("chicken_breast", 130.0), ("mixed_greens", 80.0), ("olive_oil", 25.0), ("cheddar", 30.0), ("bacon", 15.0)],
    },
    TemplateData {
        id: "lunch_chicken_quinoa_bowl",
        name: "Chicken quinoa bowl",
        slot: MealSlot::Lunch,
        diets: &[DietType::Standard, DietType::Mediterranean],
        items: &[("chicken_breast", 150.0), ("quinoa", 150.0), ("broccoli", 100.0), ("olive_oil", 10.0), ("avocado", 50.0)],
    },
    TemplateData {
        id: "lunch_chickpea_buddha_bowl",
        name: "Chickpea buddha bowl",
        slot: MealSlot::Lunch,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Vegan, DietType::Mediterranean],
        items: &[("chickpeas", 150.0), ("quinoa", 120.0), ("spinach", 50.0), ("avocado", 50.0), ("olive_oil", 10.0)],
    },
    TemplateData {
        id: "lunch_lentil_feta_salad",
        name: "Lentil feta salad",
        slot: MealSlot::Lunch,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Mediterranean],
        items: &[("lentils", 200.0), ("mixed_greens", 60.0), ("feta", 40.0), ("olive_oil", 12.0)],
    },
    TemplateData {
        id: "lunch_salmon_avocado_salad",
        name: "Salmon avocado salad",
        slot: MealSlot::Lunch,
        diets: &[DietType::Standard, DietType::Keto, DietType::Paleo, DietType::Mediterranean],
        items: &[("salmon", 150.0), ("avocado", 80.0), ("spinach", 60.0), ("olive_oil", 10.0)],
    },
    TemplateData {
        id: "lunch_tempeh_rice_bowl",
        name: "Tempeh rice bowl",
        slot: MealSlot::Lunch,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Vegan],
        items: &[("tempeh", 150.0), ("brown_rice", 150.0), ("broccoli", 100.0), ("olive_oil", 8.0)],
    },
    TemplateData {
        id: "lunch_turkey_wrap",
        name: "Turkey wrap",
        slot: MealSlot::Lunch,
        diets: &[DietType::Standard],
        items: &[("turkey_breast", 120.0), ("whole_wheat_bread", 80.0), ("mixed_greens", 50.0), ("cheddar", 25.0), ("avocado", 40.0)],
    },
    TemplateData {
        id: "snack_almonds_berries",
        name: "Almonds berries",
        slot: MealSlot::Snack,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Vegan, DietType::Paleo, DietType::Mediterranean],
        items: &[("almonds", 30.0), ("blueberries", 60.0)],
    },
    TemplateData {
        id: "snack_apple_peanut_butter",
        name: "Apple peanut butter",
        slot: MealSlot::Snack,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Vegan],
        items: &[("apple", 150.0), ("peanut_butter", 20.0)],
    },
    TemplateData {
        id: "snack_avocado_eggs",
        name: "Avocado eggs",
        slot: MealSlot::Snack,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Keto, DietType::Paleo],
        items: &[("eggs", 100.0), ("avocado", 60.0)],
    },
    TemplateData {
        id: "snack_cheddar_walnuts",
        name: "Cheddar walnuts",
        slot: MealSlot::Snack,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Keto],
        items: &[("cheddar", 30.0), ("walnuts", 20.0)],
    },
    TemplateData {
        id: "snack_hummus_carrots",
        name: "Hummus carrots",
        slot: MealSlot::Snack,
        diets: &[DietType::Standard, DietType::Vegetarian, DietType::Vegan, DietType::Mediterranean],
        items: &[("hummus", 70.0), ("carrot", 100.0)],
    },
    TemplateData {
        id: "snack_yogurt_berries",
        name: "Yogurt berries",
        slot: MealSlot::Snack,
        diets: &[DietType::Standard, DietType::Vegetarian],
        items: &[("greek_yogurt", 170.0), ("blueberries", 60.0)],
    },
];

// ============================================================================
// Neutral Defaults
// ============================================================================
// Used when restrictions empty a slot's candidate pool; compliance validation
// then substitutes the restricted ingredients.

const NEUTRAL_DEFAULTS: &[(DietType, MealSlot, &str)] = &[
    (DietType::Standard, MealSlot::Breakfast, "breakfast_oatmeal_berries"),
    (DietType::Standard, MealSlot::Lunch, "lunch_chicken_quinoa_bowl"),
    (DietType::Standard, MealSlot::Dinner, "dinner_salmon_rice_broccoli"),
    (DietType::Standard, MealSlot::Snack, "snack_almonds_berries"),
    (DietType::Vegetarian, MealSlot::Breakfast, "breakfast_oatmeal_berries"),
    (DietType::Vegetarian, MealSlot::Lunch, "lunch_chickpea_buddha_bowl"),
    (DietType::Vegetarian, MealSlot::Dinner, "dinner_pasta_primavera"),
    (DietType::Vegetarian, MealSlot::Snack, "snack_hummus_carrots"),
    (DietType::Vegan, MealSlot::Breakfast, "breakfast_tofu_scramble"),
    (DietType::Vegan, MealSlot::Lunch, "lunch_chickpea_buddha_bowl"),
    (DietType::Vegan, MealSlot::Dinner, "dinner_lentil_curry"),
    (DietType::Vegan, MealSlot::Snack, "snack_hummus_carrots"),
    (DietType::Keto, MealSlot::Breakfast, "breakfast_salmon_egg_plate"),
    (DietType::Keto, MealSlot::Lunch, "lunch_salmon_avocado_salad"),
    (DietType::Keto, MealSlot::Dinner, "dinner_steak_cauliflower_rice"),
    (DietType::Keto, MealSlot::Snack, "snack_avocado_eggs"),
    (DietType::Paleo, MealSlot::Breakfast, "breakfast_salmon_egg_plate"),
    (DietType::Paleo, MealSlot::Lunch, "lunch_salmon_avocado_salad"),
    (DietType::Paleo, MealSlot::Dinner, "dinner_steak_cauliflower_rice"),
    (DietType::Paleo, MealSlot::Snack, "snack_almonds_berries"),
    (DietType::Mediterranean, MealSlot::Breakfast, "breakfast_oatmeal_berries"),
    (DietType::Mediterranean, MealSlot::Lunch, "lunch_chickpea_buddha_bowl"),
    (DietType::Mediterranean, MealSlot::Dinner, "dinner_salmon_rice_broccoli"),
    (DietType::Mediterranean, MealSlot::Snack, "snack_hummus_carrots"),
];

/// Builtin meal templates
pub(super) fn templates() -> Vec<MealTemplate> {
    TEMPLATES
        .iter()
        .map(|data| {
            MealTemplate::new(
                data.id,
                data.name,
                data.slot,
                data.diets,
                data.items
                    .iter()
                    .map(|(ingredient, grams)| TemplateItem::new(*ingredient, *grams))
                    .collect(),
            )
        })
        .collect()
}

/// Builtin neutral default per diet and slot
pub(super) fn neutral_defaults() -> Vec<NeutralDefault> {
    NEUTRAL_DEFAULTS
        .iter()
        .map(|(diet, slot, template_id)| NeutralDefault {
            diet: *diet,
            slot: *slot,
            template_id: (*template_id).into(),
        })
        .collect()
}

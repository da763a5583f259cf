// ABOUTME: Diet types with their banned ingredient tags and default macro splits
// ABOUTME: Also defines meal slots and the bitflags set of diets an ingredient fits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrients::MacroSplit;
use crate::errors::PlanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported eating patterns
///
/// Each diet bans a fixed set of ingredient tags and supplies a default macro
/// split used when a request does not specify its own.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// No tag restrictions
    #[default]
    Standard,
    /// No meat, poultry or seafood
    Vegetarian,
    /// No animal products
    Vegan,
    /// Very low carbohydrate
    Keto,
    /// No grains, dairy, legumes, sugar or processed foods
    Paleo,
    /// Whole foods, olive oil forward
    Mediterranean,
}

impl DietType {
    /// Every diet type in declaration order
    pub const ALL: [Self; 6] = [
        Self::Standard,
        Self::Vegetarian,
        Self::Vegan,
        Self::Keto,
        Self::Paleo,
        Self::Mediterranean,
    ];

    /// Ingredient tags this diet forbids
    #[must_use]
    pub const fn banned_tags(self) -> &'static [&'static str] {
        match self {
            Self::Standard => &[],
            Self::Vegetarian => &["meat", "poultry", "fish", "seafood", "shellfish", "gelatin"],
            Self::Vegan => &[
                "meat",
                "poultry",
                "fish",
                "seafood",
                "shellfish",
                "gelatin",
                "dairy",
                "egg",
                "honey",
            ],
            Self::Keto => &["grain", "sugar", "high_carb", "starchy"],
            Self::Paleo => &["grain", "dairy", "legume", "sugar", "processed"],
            Self::Mediterranean => &["processed"],
        }
    }

    /// Default protein/fat/carbohydrate split in percent of macro energy
    #[must_use]
    pub const fn default_macro_split(self) -> MacroSplit {
        match self {
            Self::Standard => MacroSplit::new(25.0, 30.0, 45.0),
            Self::Vegetarian => MacroSplit::new(20.0, 30.0, 50.0),
            Self::Vegan => MacroSplit::new(18.0, 30.0, 52.0),
            Self::Keto => MacroSplit::new(25.0, 70.0, 5.0),
            Self::Paleo => MacroSplit::new(30.0, 40.0, 30.0),
            Self::Mediterranean => MacroSplit::new(20.0, 35.0, 45.0),
        }
    }

    /// Flag bit representing this diet
    #[must_use]
    pub const fn flag(self) -> DietFlags {
        match self {
            Self::Standard => DietFlags::STANDARD,
            Self::Vegetarian => DietFlags::VEGETARIAN,
            Self::Vegan => DietFlags::VEGAN,
            Self::Keto => DietFlags::KETO,
            Self::Paleo => DietFlags::PALEO,
            Self::Mediterranean => DietFlags::MEDITERRANEAN,
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Keto => "keto",
            Self::Paleo => "paleo",
            Self::Mediterranean => "mediterranean",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "standard" | "balanced" | "omnivore" => Ok(Self::Standard),
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" | "plant_based" => Ok(Self::Vegan),
            "keto" | "ketogenic" => Ok(Self::Keto),
            "paleo" => Ok(Self::Paleo),
            "mediterranean" => Ok(Self::Mediterranean),
            other => Err(PlanError::invalid_preferences(
                "diet_type",
                format!("unknown diet type '{other}'"),
            )),
        }
    }
}

bitflags::bitflags! {
    /// Set of diets an ingredient or template is compatible with
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DietFlags: u8 {
        /// Fits a standard diet
        const STANDARD = 0b0000_0001;
        /// Fits a vegetarian diet
        const VEGETARIAN = 0b0000_0010;
        /// Fits a vegan diet
        const VEGAN = 0b0000_0100;
        /// Fits a ketogenic diet
        const KETO = 0b0000_1000;
        /// Fits a paleo diet
        const PALEO = 0b0001_0000;
        /// Fits a mediterranean diet
        const MEDITERRANEAN = 0b0010_0000;
    }
}

impl DietFlags {
    /// Diets whose banned tags do not intersect `tags`
    #[must_use]
    pub fn from_tags<'a>(tags: impl IntoIterator<Item = &'a str> + Clone) -> Self {
        DietType::ALL
            .iter()
            .filter(|diet| {
                !tags
                    .clone()
                    .into_iter()
                    .any(|tag| diet.banned_tags().contains(&tag))
            })
            .fold(Self::empty(), |flags, diet| flags.union(diet.flag()))
    }

    /// True when `diet` is part of the set
    #[must_use]
    pub const fn allows(self, diet: DietType) -> bool {
        self.contains(diet.flag())
    }
}

/// A named meal occasion within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between-meal snack
    Snack,
}

impl MealSlot {
    /// Every slot in day order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" | "supper" => Ok(Self::Dinner),
            "snack" | "snacks" => Ok(Self::Snack),
            other => Err(PlanError::invalid_preferences(
                "meal_structure",
                format!("unknown meal slot '{other}'"),
            )),
        }
    }
}

/// Lowercase, trim, and fold `-` and spaces into `_`
#[must_use]
pub fn normalize_token(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_type_parsing_is_lenient_about_case_and_separators() {
        assert_eq!("Keto".parse::<DietType>().ok(), Some(DietType::Keto));
        assert_eq!(" plant-based ".parse::<DietType>().ok(), Some(DietType::Vegan));
        assert_eq!(
            "MEDITERRANEAN".parse::<DietType>().ok(),
            Some(DietType::Mediterranean)
        );
    }

    #[test]
    fn test_unknown_diet_type_is_invalid_preferences() {
        let err = "carnivore".parse::<DietType>().unwrap_err();
        assert_eq!(err.field(), Some("diet_type"));
    }

    #[test]
    fn test_default_macro_splits_sum_to_100() {
        for diet in DietType::ALL {
            let split = diet.default_macro_split();
            assert!((split.total() - 100.0).abs() < 1e-9, "{diet}");
        }
    }

    #[test]
    fn test_vegan_bans_everything_vegetarian_bans() {
        for tag in DietType::Vegetarian.banned_tags() {
            assert!(DietType::Vegan.banned_tags().contains(tag));
        }
    }

    #[test]
    fn test_diet_flags_from_tags() {
        let bacon = DietFlags::from_tags(["meat", "pork", "processed"]);
        assert!(bacon.allows(DietType::Standard));
        assert!(bacon.allows(DietType::Keto));
        assert!(!bacon.allows(DietType::Paleo));
        assert!(!bacon.allows(DietType::Mediterranean));
        assert!(!bacon.allows(DietType::Vegetarian));

        let spinach = DietFlags::from_tags(["vegetable"]);
        assert_eq!(spinach, DietFlags::all());
    }

    #[test]
    fn test_meal_slot_parsing() {
        assert_eq!("Dinner".parse::<MealSlot>().ok(), Some(MealSlot::Dinner));
        assert!("brunch".parse::<MealSlot>().is_err());
    }
}

// ABOUTME: Nutrient profiles and macronutrient energy splits
// ABOUTME: Additive nutrient totals, gram scaling and percent-of-energy macro computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy::{
    CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM, REFERENCE_PORTION_GRAMS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// The three energy-bearing macronutrients
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Macronutrient {
    /// Protein (4 kcal/g)
    Protein,
    /// Fat (9 kcal/g)
    Fat,
    /// Carbohydrate (4 kcal/g)
    Carbs,
}

impl Macronutrient {
    /// All macronutrients in tie-break order
    pub const ALL: [Self; 3] = [Self::Protein, Self::Fat, Self::Carbs];

    /// Energy per gram of this macronutrient
    #[must_use]
    pub const fn kcal_per_gram(self) -> f64 {
        match self {
            Self::Protein => PROTEIN_KCAL_PER_GRAM,
            Self::Fat => FAT_KCAL_PER_GRAM,
            Self::Carbs => CARBS_KCAL_PER_GRAM,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Fat => "fat",
            Self::Carbs => "carbs",
        }
    }
}

impl fmt::Display for Macronutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Share of macro energy carried by each macronutrient, in percent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein share of macro energy
    pub protein_pct: f64,
    /// Fat share of macro energy
    pub fat_pct: f64,
    /// Carbohydrate share of macro energy
    pub carbs_pct: f64,
}

impl MacroSplit {
    /// Create a split from protein, fat and carbohydrate percentages
    #[must_use]
    pub const fn new(protein_pct: f64, fat_pct: f64, carbs_pct: f64) -> Self {
        Self {
            protein_pct,
            fat_pct,
            carbs_pct,
        }
    }

    /// Percentage for one macronutrient
    #[must_use]
    pub const fn get(&self, macronutrient: Macronutrient) -> f64 {
        match macronutrient {
            Macronutrient::Protein => self.protein_pct,
            Macronutrient::Fat => self.fat_pct,
            Macronutrient::Carbs => self.carbs_pct,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub fn total(&self) -> f64 {
        self.protein_pct + self.fat_pct + self.carbs_pct
    }
}

/// Nutrient totals for a quantity of food
///
/// Catalog entries store values per 100 g; meal portions and day totals store
/// absolute values. All fields are additive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Energy in kilocalories
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Carbohydrate in grams
    pub carbs_g: f64,
    /// Dietary fiber in grams
    #[serde(default)]
    pub fiber_g: f64,
}

impl NutrientProfile {
    /// Create a profile from its components
    #[must_use]
    pub const fn new(calories: f64, protein_g: f64, fat_g: f64, carbs_g: f64, fiber_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            fat_g,
            carbs_g,
            fiber_g,
        }
    }

    /// Multiply every nutrient by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            fat_g: self.fat_g * factor,
            carbs_g: self.carbs_g * factor,
            fiber_g: self.fiber_g * factor,
        }
    }

    /// Nutrients for `grams` of a food described per 100 g by `self`
    #[must_use]
    pub fn for_grams(&self, grams: f64) -> Self {
        self.scaled(grams / REFERENCE_PORTION_GRAMS)
    }

    /// Grams of one macronutrient
    #[must_use]
    pub const fn grams_of(&self, macronutrient: Macronutrient) -> f64 {
        match macronutrient {
            Macronutrient::Protein => self.protein_g,
            Macronutrient::Fat => self.fat_g,
            Macronutrient::Carbs => self.carbs_g,
        }
    }

    /// Energy supplied by one macronutrient
    #[must_use]
    pub fn macro_energy_kcal(&self, macronutrient: Macronutrient) -> f64 {
        self.grams_of(macronutrient) * macronutrient.kcal_per_gram()
    }

    /// Energy supplied by all three macronutrients together
    #[must_use]
    pub fn total_macro_energy_kcal(&self) -> f64 {
        Macronutrient::ALL
            .iter()
            .map(|m| self.macro_energy_kcal(*m))
            .sum()
    }

    /// Percent-of-energy split, relative to the macro energy sum
    ///
    /// Returns an all-zero split when the food carries no macro energy.
    #[must_use]
    pub fn macro_split(&self) -> MacroSplit {
        let total = self.total_macro_energy_kcal();
        if total <= 0.0 {
            return MacroSplit::default();
        }
        MacroSplit::new(
            self.macro_energy_kcal(Macronutrient::Protein) / total * 100.0,
            self.macro_energy_kcal(Macronutrient::Fat) / total * 100.0,
            self.macro_energy_kcal(Macronutrient::Carbs) / total * 100.0,
        )
    }

    /// True when every field is finite and non-negative
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [
            self.calories,
            self.protein_g,
            self.fat_g,
            self.carbs_g,
            self.fiber_g,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Add for NutrientProfile {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            fat_g: self.fat_g + rhs.fat_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fiber_g: self.fiber_g + rhs.fiber_g,
        }
    }
}

impl AddAssign for NutrientProfile {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutrientProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a Self> for NutrientProfile {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

use std::ops::Add;

use mealwise_shared::{ResolvedRecipe, round_tenth};
use serde::Serialize;

/// The four tracked macros, in grams except calories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Macros {
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            protein: f(self.protein),
            fat: f(self.fat),
            carbs: f(self.carbs),
        }
    }

    pub fn scale(self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }

    pub fn round_tenth(self) -> Self {
        self.map(round_tenth)
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, other: Macros) -> Macros {
        Macros {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carbs: self.carbs + other.carbs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutritionalInfo {
    #[serde(flatten)]
    pub total: Macros,
    pub per_serving: Macros,
}

/// Totals and per-serving macros of a resolved recipe.
///
/// # Business Rules
///
/// - Each resolved ingredient contributes `quantity_grams × coefficient`
/// - Dangling ingredient references contribute nothing
/// - Totals and per-serving values are rounded to one decimal, half away from zero
/// - Per-serving values divide the unrounded total
pub fn nutritional_info(recipe: &ResolvedRecipe) -> NutritionalInfo {
    let total = recipe
        .resolved()
        .fold(Macros::default(), |acc, (ingredient, quantity)| {
            acc + Macros {
                calories: quantity * ingredient.calories_per_gram,
                protein: quantity * ingredient.protein_per_gram,
                fat: quantity * ingredient.fat_per_gram,
                carbs: quantity * ingredient.carbs_per_gram,
            }
        });

    let servings = f64::from(recipe.recipe.servings.max(1));

    NutritionalInfo {
        total: total.round_tenth(),
        per_serving: total.map(|v| v / servings).round_tenth(),
    }
}

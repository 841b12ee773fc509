use std::collections::HashSet;

use mealwise_shared::{Pantry, Recipe};
use serde::Serialize;

/// Ingredient ids stocked in a pantry, ignoring quantities.
#[derive(Debug, Clone, Default)]
pub struct PantryStock {
    ids: HashSet<String>,
}

impl PantryStock {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Stock of `pantry`, empty when the user has none yet.
    pub fn of(pantry: Option<&Pantry>) -> Self {
        match pantry {
            Some(pantry) => Self::new(pantry.ingredient_ids()),
            None => Self::default(),
        }
    }

    pub fn contains(&self, ingredient_id: &str) -> bool {
        self.ids.contains(ingredient_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PantryMatch {
    /// `100 × matched / distinct`, 0 for a recipe without ingredients.
    pub match_percentage: f64,
    pub missing_count: usize,
}

impl PantryMatch {
    pub fn is_complete(&self) -> bool {
        self.missing_count == 0
    }
}

pub fn match_pantry(recipe: &Recipe, stock: &PantryStock) -> PantryMatch {
    let ids = recipe.ingredient_ids();
    let total = ids.len();
    let matched = ids.iter().filter(|id| stock.contains(id)).count();

    let match_percentage = if total > 0 {
        matched as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    PantryMatch {
        match_percentage,
        missing_count: total - matched,
    }
}

/// Every ingredient of `recipe` is stocked. A recipe without ingredients qualifies.
pub fn can_cook(recipe: &Recipe, stock: &PantryStock) -> bool {
    recipe
        .ingredients
        .iter()
        .all(|item| stock.contains(&item.ingredient_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealwise_shared::{DietaryCategory, RecipeIngredient};

    fn recipe(ids: &[&str]) -> Recipe {
        Recipe {
            id: "r".to_owned(),
            name: "Stew".to_owned(),
            instructions: "Simmer".to_owned(),
            cooking_time_minutes: 60,
            servings: 4,
            ingredients: ids
                .iter()
                .map(|id| RecipeIngredient {
                    ingredient_id: id.to_string(),
                    quantity_grams: 100.0,
                })
                .collect(),
            dietary_category: vec![DietaryCategory::None],
            image_url: None,
            created_by: None,
            created_at: time::OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_partial_match() {
        let stock = PantryStock::new(["a", "b"]);
        let result = match_pantry(&recipe(&["a", "b", "c"]), &stock);
        assert_eq!(result.match_percentage.round(), 67.0);
        assert_eq!(result.missing_count, 1);
        assert!(!result.is_complete());
    }

    #[test]
    fn test_empty_recipe_matches_zero() {
        let stock = PantryStock::new(["a"]);
        let result = match_pantry(&recipe(&[]), &stock);
        assert_eq!(result.match_percentage, 0.0);
        assert_eq!(result.missing_count, 0);
    }

    #[test]
    fn test_duplicate_references_count_once() {
        let stock = PantryStock::new(["a"]);
        let result = match_pantry(&recipe(&["a", "a", "b"]), &stock);
        assert_eq!(result.match_percentage, 50.0);
        assert_eq!(result.missing_count, 1);
    }

    #[test]
    fn test_percentage_bounds() {
        let stock = PantryStock::new(["a", "b", "x", "y"]);
        for ids in [&["a"][..], &["z"], &["a", "b"], &["a", "z", "q"]] {
            let recipe = recipe(ids);
            let result = match_pantry(&recipe, &stock);
            assert!((0.0..=100.0).contains(&result.match_percentage));
            assert!(result.missing_count <= recipe.ingredient_ids().len());
        }
    }

    #[test]
    fn test_can_cook() {
        let stock = PantryStock::of(None);
        assert!(!can_cook(&recipe(&["a"]), &stock));

        let stock = PantryStock::new(["a", "b"]);
        assert!(can_cook(&recipe(&["a", "b"]), &stock));
        assert!(!can_cook(&recipe(&["a", "c"]), &stock));
    }
}

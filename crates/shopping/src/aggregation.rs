use mealwise_shared::{Ingredient, MealPlanEntry, OrderedMap, Pantry, RecipeLookup};
use serde::Serialize;

/// Grams of one ingredient still needed after netting against the pantry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingItem {
    pub ingredient: Ingredient,
    /// Whole grams, always above zero.
    pub quantity_grams: f64,
}

/// Ingredient Aggregation Service
///
/// Stateless domain service that sums what a set of planned meals requires and
/// subtracts what the pantry already holds.
///
/// - Quantities are keyed by ingredient id, two ingredients sharing a name stay apart
/// - Each recipe quantity is multiplied by the entry's servings
/// - Missing recipes and missing ingredients are skipped
pub struct IngredientAggregationService;

impl IngredientAggregationService {
    /// Total grams needed per ingredient, in discovery order.
    pub fn aggregate(
        entries: &[MealPlanEntry],
        recipes: &impl RecipeLookup,
    ) -> OrderedMap<String, (Ingredient, f64)> {
        let mut needed: OrderedMap<String, (Ingredient, f64)> = OrderedMap::new();

        for entry in entries {
            let Some(recipe) = recipes.recipe(&entry.recipe_id) else {
                tracing::warn!(recipe_id = %entry.recipe_id, "skipping missing recipe");
                continue;
            };

            for (ingredient, quantity) in recipe.resolved() {
                let (_, total) = needed
                    .entry_or_insert_with(ingredient.id.to_owned(), || (ingredient.clone(), 0.0));
                *total += quantity * f64::from(entry.servings);
            }
        }

        needed
    }

    /// Subtracts pantry stock and rounds to whole grams, dropping anything that rounds to zero.
    pub fn net(
        needed: OrderedMap<String, (Ingredient, f64)>,
        pantry: Option<&Pantry>,
    ) -> Vec<ShoppingItem> {
        needed
            .into_iter()
            .filter_map(|(id, (ingredient, total))| {
                let on_hand = pantry.map(|p| p.quantity_of(&id)).unwrap_or(0.0);
                let to_buy = (total - on_hand).max(0.0).round();

                (to_buy > 0.0).then_some(ShoppingItem {
                    ingredient,
                    quantity_grams: to_buy,
                })
            })
            .collect()
    }

    pub fn shopping_items(
        entries: &[MealPlanEntry],
        recipes: &impl RecipeLookup,
        pantry: Option<&Pantry>,
    ) -> Vec<ShoppingItem> {
        Self::net(Self::aggregate(entries, recipes), pantry)
    }
}

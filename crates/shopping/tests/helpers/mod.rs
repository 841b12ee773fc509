#![allow(dead_code)]

use mealwise_shared::{
    DietaryCategory, Ingredient, IngredientCategory, MealPlanEntry, MealSlot, Pantry, PantryItem,
    Recipe, RecipeIngredient, User, UserPreferences,
};
use mealwise_store::{MemoryStore, Snapshot};
use time::{Date, macros::date};

pub fn ingredient(id: &str, category: IngredientCategory) -> Ingredient {
    Ingredient {
        id: id.to_owned(),
        name: id.to_owned(),
        calories_per_gram: 1.0,
        protein_per_gram: 0.1,
        fat_per_gram: 0.1,
        carbs_per_gram: 0.1,
        category,
    }
}

pub fn recipe(id: &str, ingredients: &[(&str, f64)]) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: id.to_owned(),
        instructions: "Cook".to_owned(),
        cooking_time_minutes: 30,
        servings: 2,
        ingredients: ingredients
            .iter()
            .map(|(ingredient_id, quantity_grams)| RecipeIngredient {
                ingredient_id: ingredient_id.to_string(),
                quantity_grams: *quantity_grams,
            })
            .collect(),
        dietary_category: vec![DietaryCategory::None],
        image_url: None,
        created_by: None,
        created_at: time::OffsetDateTime::UNIX_EPOCH,
    }
}

pub fn meal(
    id: &str,
    user_id: &str,
    recipe_id: &str,
    plan_date: Date,
    servings: u32,
) -> MealPlanEntry {
    MealPlanEntry {
        id: id.to_owned(),
        user_id: user_id.to_owned(),
        recipe_id: recipe_id.to_owned(),
        plan_date,
        meal_type: MealSlot::Dinner,
        servings,
        notes: None,
    }
}

pub fn pantry(user_id: &str, items: &[(&str, f64)]) -> Pantry {
    Pantry {
        id: format!("pantry-{user_id}"),
        user_id: user_id.to_owned(),
        items: items
            .iter()
            .map(|(ingredient_id, quantity_grams)| PantryItem {
                id: format!("{user_id}-{ingredient_id}"),
                ingredient_id: ingredient_id.to_string(),
                quantity_grams: *quantity_grams,
                added_date: date!(2025 - 03 - 01),
                expiry_date: None,
            })
            .collect(),
    }
}

/// Week of 2025-03-09 (a Sunday): john plans grill on Monday and greens for two on Wednesday.
pub fn setup_test_store() -> MemoryStore {
    MemoryStore::from_snapshot(Snapshot {
        ingredients: vec![
            ingredient("chicken", IngredientCategory::Protein),
            ingredient("rice", IngredientCategory::Grain),
            ingredient("broccoli", IngredientCategory::Vegetable),
        ],
        recipes: vec![
            recipe("grill", &[("chicken", 500.0), ("rice", 200.0)]),
            recipe("greens", &[("broccoli", 300.0), ("rice", 100.0)]),
        ],
        users: ["john", "jane"]
            .into_iter()
            .map(|id| User {
                id: id.to_owned(),
                email: format!("{id}@example.com"),
                preferences: UserPreferences::default(),
            })
            .collect(),
        pantries: vec![pantry("john", &[("rice", 250.0)])],
        meal_plans: vec![
            meal("m1", "john", "grill", date!(2025 - 03 - 10), 1),
            meal("m2", "john", "greens", date!(2025 - 03 - 12), 2),
            meal("m3", "john", "grill", date!(2025 - 03 - 20), 1),
            meal("m4", "jane", "grill", date!(2025 - 03 - 10), 3),
        ],
    })
}

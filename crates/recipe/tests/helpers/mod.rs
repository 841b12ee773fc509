#![allow(dead_code)]

use mealwise_shared::{
    DietaryCategory, Ingredient, IngredientCategory, Pantry, PantryItem, Recipe,
    RecipeIngredient, User, UserPreferences,
};
use mealwise_store::{MemoryStore, Snapshot};
use time::{Duration, OffsetDateTime, macros::date};

pub fn ingredient(id: &str, name: &str, calories: f64, category: IngredientCategory) -> Ingredient {
    Ingredient {
        id: id.to_owned(),
        name: name.to_owned(),
        calories_per_gram: calories,
        protein_per_gram: 0.1,
        fat_per_gram: 0.05,
        carbs_per_gram: 0.2,
        category,
    }
}

pub fn recipe(
    id: &str,
    ingredients: &[(&str, f64)],
    tags: &[DietaryCategory],
    created_by: Option<&str>,
    minutes: u32,
) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: format!("{id} dish"),
        instructions: "Cook it".to_owned(),
        cooking_time_minutes: minutes,
        servings: 2,
        ingredients: ingredients
            .iter()
            .map(|(id, q)| RecipeIngredient {
                ingredient_id: id.to_string(),
                quantity_grams: *q,
            })
            .collect(),
        dietary_category: tags.to_vec(),
        image_url: None,
        created_by: created_by.map(str::to_owned),
        created_at: OffsetDateTime::UNIX_EPOCH + Duration::days(minutes.into()),
    }
}

pub fn user(id: &str, preferences: UserPreferences) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        preferences,
    }
}

pub fn pantry(user_id: &str, ingredient_ids: &[&str]) -> Pantry {
    Pantry {
        id: format!("pantry-{user_id}"),
        user_id: user_id.to_owned(),
        items: ingredient_ids
            .iter()
            .map(|id| PantryItem {
                id: format!("item-{id}"),
                ingredient_id: id.to_string(),
                quantity_grams: 500.0,
                added_date: date!(2025 - 01 - 01),
                expiry_date: None,
            })
            .collect(),
    }
}

/// Catalogue of five ingredients, one user `john` with a peanut allergy, and four recipes.
pub fn setup_test_store() -> MemoryStore {
    let none = [DietaryCategory::None];

    MemoryStore::from_snapshot(Snapshot {
        ingredients: vec![
            ingredient("rice", "Rice", 1.3, IngredientCategory::Grain),
            ingredient("chicken", "Chicken", 1.65, IngredientCategory::Protein),
            ingredient("peanuts", "Peanuts", 5.67, IngredientCategory::Nut),
            ingredient("broccoli", "Broccoli", 0.34, IngredientCategory::Vegetable),
            ingredient("tofu", "Tofu", 0.76, IngredientCategory::Protein),
        ],
        recipes: vec![
            recipe("stirfry", &[("rice", 200.0), ("chicken", 150.0)], &none, Some("john"), 20),
            recipe("satay", &[("rice", 100.0), ("peanuts", 50.0)], &none, None, 25),
            recipe(
                "greens",
                &[("broccoli", 200.0), ("tofu", 100.0)],
                &[DietaryCategory::Vegan],
                None,
                15,
            ),
            recipe("roast", &[("chicken", 400.0)], &[DietaryCategory::Paleo], None, 90),
        ],
        users: vec![
            user(
                "john",
                UserPreferences {
                    allergies: vec!["Peanuts".to_owned()],
                    ..Default::default()
                },
            ),
            user("jane", UserPreferences::default()),
        ],
        pantries: vec![pantry("john", &["rice", "chicken", "peanuts"])],
        meal_plans: vec![],
    })
}

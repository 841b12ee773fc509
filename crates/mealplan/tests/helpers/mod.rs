#![allow(dead_code)]

use mealwise_shared::{
    DietaryCategory, Ingredient, IngredientCategory, Recipe, RecipeIngredient, User,
    UserPreferences,
};
use mealwise_store::{MemoryStore, Snapshot};

pub fn setup_test_store() -> MemoryStore {
    MemoryStore::from_snapshot(Snapshot {
        ingredients: vec![Ingredient {
            id: "chicken".to_owned(),
            name: "Chicken".to_owned(),
            calories_per_gram: 1.65,
            protein_per_gram: 0.31,
            fat_per_gram: 0.036,
            carbs_per_gram: 0.0,
            category: IngredientCategory::Protein,
        }],
        recipes: vec![Recipe {
            id: "grill".to_owned(),
            name: "Grilled chicken".to_owned(),
            instructions: "Grill".to_owned(),
            cooking_time_minutes: 20,
            servings: 4,
            ingredients: vec![RecipeIngredient {
                ingredient_id: "chicken".to_owned(),
                quantity_grams: 500.0,
            }],
            dietary_category: vec![DietaryCategory::Paleo],
            image_url: None,
            created_by: None,
            created_at: time::OffsetDateTime::UNIX_EPOCH,
        }],
        users: ["john", "jane"]
            .into_iter()
            .map(|id| User {
                id: id.to_owned(),
                email: format!("{id}@example.com"),
                preferences: UserPreferences::default(),
            })
            .collect(),
        ..Default::default()
    })
}

use mealwise_shared::{Ingredient, IngredientCategory};
use mealwise_store::{MemoryStore, Snapshot};

pub fn setup_test_store() -> MemoryStore {
    let ingredient = |id: &str, name: &str| Ingredient {
        id: id.to_owned(),
        name: name.to_owned(),
        calories_per_gram: 1.0,
        protein_per_gram: 0.1,
        fat_per_gram: 0.1,
        carbs_per_gram: 0.1,
        category: IngredientCategory::Other,
    };

    MemoryStore::from_snapshot(Snapshot {
        ingredients: vec![ingredient("rice", "Rice"), ingredient("milk", "Milk")],
        ..Default::default()
    })
}

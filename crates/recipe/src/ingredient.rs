use std::sync::Arc;

use mealwise_shared::{Ingredient, IngredientCategory, IngredientRepository};
use serde::Deserialize;
use validator::Validate;

#[derive(Validate, Clone, Debug, Deserialize)]
pub struct CreateIngredientInput {
    #[validate(length(min = 1, max = 100, message = "Ingredient name is required"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Calories per gram must not be negative"))]
    pub calories_per_gram: f64,
    #[validate(range(min = 0.0, message = "Protein per gram must not be negative"))]
    pub protein_per_gram: f64,
    #[validate(range(min = 0.0, message = "Fat per gram must not be negative"))]
    pub fat_per_gram: f64,
    #[validate(range(min = 0.0, message = "Carbs per gram must not be negative"))]
    pub carbs_per_gram: f64,
    #[serde(default)]
    pub category: IngredientCategory,
}

#[derive(Clone)]
pub struct IngredientCommand(Arc<dyn IngredientRepository>);

impl IngredientCommand {
    pub fn new(ingredients: Arc<dyn IngredientRepository>) -> Self {
        Self(ingredients)
    }

    #[tracing::instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateIngredientInput) -> mealwise_shared::Result<Ingredient> {
        let input = CreateIngredientInput {
            name: input.name.trim().to_owned(),
            ..input
        };
        input.validate()?;

        if self.0.find_by_name(&input.name).await?.is_some() {
            mealwise_shared::conflict!("Ingredient {} already exists", input.name);
        }

        let ingredient = Ingredient {
            id: mealwise_shared::new_id(),
            name: input.name,
            calories_per_gram: input.calories_per_gram,
            protein_per_gram: input.protein_per_gram,
            fat_per_gram: input.fat_per_gram,
            carbs_per_gram: input.carbs_per_gram,
            category: input.category,
        };
        self.0.insert(ingredient.clone()).await?;

        Ok(ingredient)
    }

    /// Case-insensitive name substring search, optionally within one category.
    pub async fn search(
        &self,
        search: Option<&str>,
        category: Option<IngredientCategory>,
    ) -> mealwise_shared::Result<Vec<Ingredient>> {
        let needle = search.map(|s| s.trim().to_lowercase());

        let ingredients = self
            .0
            .list()
            .await?
            .into_iter()
            .filter(|i| category.is_none_or(|c| i.category == c))
            .filter(|i| {
                needle
                    .as_deref()
                    .is_none_or(|n| i.name.to_lowercase().contains(n))
            })
            .collect::<Vec<_>>();

        Ok(ingredients)
    }

    pub async fn find(&self, id: &str) -> mealwise_shared::Result<Ingredient> {
        match self.0.find(id).await? {
            Some(ingredient) => Ok(ingredient),
            None => mealwise_shared::not_found!("ingredient"),
        }
    }
}

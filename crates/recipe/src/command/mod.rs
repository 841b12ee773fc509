use std::sync::Arc;

use mealwise_shared::{
    IngredientRepository, Recipe, RecipeRepository, ResolvedRecipe, resolve_recipes,
};
use serde::Serialize;

use crate::{NutritionalInfo, nutritional_info};

mod create;
mod delete;
mod import;
mod update;

pub use create::{CreateInput, RecipeIngredientInput};
pub use update::UpdateInput;

#[derive(Debug, Clone, Serialize)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub recipe: ResolvedRecipe,
    pub nutritional_info: NutritionalInfo,
}

impl From<ResolvedRecipe> for RecipeDetail {
    fn from(recipe: ResolvedRecipe) -> Self {
        Self {
            nutritional_info: nutritional_info(&recipe),
            recipe,
        }
    }
}

#[derive(Clone)]
pub struct Command {
    recipes: Arc<dyn RecipeRepository>,
    ingredients: Arc<dyn IngredientRepository>,
}

impl Command {
    pub fn new(
        recipes: Arc<dyn RecipeRepository>,
        ingredients: Arc<dyn IngredientRepository>,
    ) -> Self {
        Self {
            recipes,
            ingredients,
        }
    }

    async fn load(&self, id: &str) -> mealwise_shared::Result<Recipe> {
        match self.recipes.find(id).await? {
            Some(recipe) => Ok(recipe),
            None => mealwise_shared::not_found!("recipe"),
        }
    }

    async fn detail_of(&self, recipe: Recipe) -> mealwise_shared::Result<RecipeDetail> {
        let mut resolved = resolve_recipes(self.ingredients.as_ref(), vec![recipe]).await?;

        match resolved.pop() {
            Some(recipe) => Ok(recipe.into()),
            None => mealwise_shared::bail!("recipe resolution returned nothing"),
        }
    }

    /// Every referenced ingredient must exist in the catalogue.
    async fn ensure_ingredients(&self, recipe: &Recipe) -> mealwise_shared::Result<()> {
        let ids = recipe
            .ingredient_ids()
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        let found = self.ingredients.find_many(&ids).await?;

        if let Some(missing) = ids.iter().find(|id| !found.iter().any(|i| &i.id == *id)) {
            mealwise_shared::not_found!(format!("ingredient {missing}"));
        }

        Ok(())
    }

    fn ensure_owner(recipe: &Recipe, request_by: &str) -> mealwise_shared::Result<()> {
        match recipe.created_by.as_deref() {
            Some(owner) if owner != request_by => mealwise_shared::forbidden!(),
            _ => Ok(()),
        }
    }

    pub async fn recipe_detail(&self, id: &str) -> mealwise_shared::Result<RecipeDetail> {
        let recipe = self.load(id).await?;

        self.detail_of(recipe).await
    }
}

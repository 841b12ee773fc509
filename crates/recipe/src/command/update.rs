use mealwise_shared::DietaryCategory;
use serde::Deserialize;
use validator::Validate;

use super::{CreateInput, RecipeDetail, RecipeIngredientInput};

/// Fields left as `None` keep their current value.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateInput {
    pub name: Option<String>,
    pub instructions: Option<String>,
    pub cooking_time_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub ingredients: Option<Vec<RecipeIngredientInput>>,
    pub dietary_category: Option<Vec<DietaryCategory>>,
    pub image_url: Option<String>,
}

impl super::Command {
    #[tracing::instrument(skip(self, input, request_by))]
    pub async fn update_recipe(
        &self,
        id: &str,
        input: UpdateInput,
        request_by: impl Into<String>,
    ) -> mealwise_shared::Result<RecipeDetail> {
        let current = self.load(id).await?;
        Self::ensure_owner(&current, &request_by.into())?;

        let merged = CreateInput {
            name: input.name.unwrap_or(current.name),
            instructions: input.instructions.unwrap_or(current.instructions),
            cooking_time_minutes: input
                .cooking_time_minutes
                .unwrap_or(current.cooking_time_minutes),
            servings: input.servings.unwrap_or(current.servings),
            ingredients: input
                .ingredients
                .unwrap_or_else(|| current.ingredients.iter().map(Into::into).collect()),
            dietary_category: input.dietary_category.unwrap_or(current.dietary_category),
            image_url: input.image_url.or(current.image_url),
        }
        .normalized();
        merged.validate()?;

        let mut recipe = merged.into_recipe(current.id, current.created_by);
        recipe.created_at = current.created_at;
        self.ensure_ingredients(&recipe).await?;
        self.recipes.save(recipe.clone()).await?;

        self.detail_of(recipe).await
    }
}

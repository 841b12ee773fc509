use mealwise_shared::{DietaryCategory, Recipe, RecipeIngredient};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use super::RecipeDetail;

#[derive(Validate, Clone, Debug, Serialize, Deserialize)]
pub struct RecipeIngredientInput {
    #[validate(length(min = 1, message = "Ingredient reference is required"))]
    pub ingredient_id: String,
    #[validate(range(min = 0.0, message = "Ingredient quantity must not be negative"))]
    pub quantity_grams: f64,
}

impl From<RecipeIngredientInput> for RecipeIngredient {
    fn from(value: RecipeIngredientInput) -> Self {
        Self {
            ingredient_id: value.ingredient_id,
            quantity_grams: value.quantity_grams,
        }
    }
}

impl From<&RecipeIngredient> for RecipeIngredientInput {
    fn from(value: &RecipeIngredient) -> Self {
        Self {
            ingredient_id: value.ingredient_id.to_owned(),
            quantity_grams: value.quantity_grams,
        }
    }
}

#[derive(Validate, Clone, Debug, Deserialize)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 200, message = "Recipe name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Instructions are required"))]
    pub instructions: String,
    pub cooking_time_minutes: u32,
    #[validate(range(min = 1, message = "Servings must be at least 1"))]
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[validate(
        length(min = 1, message = "At least one ingredient is required"),
        nested
    )]
    pub ingredients: Vec<RecipeIngredientInput>,
    #[serde(default)]
    pub dietary_category: Vec<DietaryCategory>,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_servings() -> u32 {
    1
}

impl CreateInput {
    pub(super) fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self.instructions = self.instructions.trim().to_owned();
        if self.dietary_category.is_empty() {
            self.dietary_category = vec![DietaryCategory::None];
        }
        self
    }

    pub(super) fn into_recipe(self, id: String, created_by: Option<String>) -> Recipe {
        Recipe {
            id,
            name: self.name,
            instructions: self.instructions,
            cooking_time_minutes: self.cooking_time_minutes,
            servings: self.servings,
            ingredients: self.ingredients.into_iter().map(Into::into).collect(),
            dietary_category: self.dietary_category,
            image_url: self.image_url,
            created_by,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

impl super::Command {
    #[tracing::instrument(skip(self, input, request_by), fields(name = %input.name))]
    pub async fn create_recipe(
        &self,
        input: CreateInput,
        request_by: impl Into<String>,
    ) -> mealwise_shared::Result<RecipeDetail> {
        let input = input.normalized();
        input.validate()?;

        let recipe = input.into_recipe(mealwise_shared::new_id(), Some(request_by.into()));
        self.ensure_ingredients(&recipe).await?;
        self.recipes.save(recipe.clone()).await?;

        tracing::info!(recipe_id = %recipe.id, "recipe created");

        self.detail_of(recipe).await
    }
}

use std::sync::Arc;

use mealwise_shared::{
    IngredientRepository, PantryRepository, RecipeFilter, RecipeRepository, ResolvedRecipe,
    UserRepository, resolve_recipes,
};

use crate::{
    FindOptions, FoundRecipe, PantryStock, SuggestOptions, Suggestion, can_cook, find, suggest,
};

/// Pantry-aware recipe discovery for a single user.
#[derive(Clone)]
pub struct SuggestionEngine {
    recipes: Arc<dyn RecipeRepository>,
    ingredients: Arc<dyn IngredientRepository>,
    pantries: Arc<dyn PantryRepository>,
    users: Arc<dyn UserRepository>,
}

impl SuggestionEngine {
    pub fn new(
        recipes: Arc<dyn RecipeRepository>,
        ingredients: Arc<dyn IngredientRepository>,
        pantries: Arc<dyn PantryRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            recipes,
            ingredients,
            pantries,
            users,
        }
    }

    async fn stock(&self, user_id: &str) -> mealwise_shared::Result<PantryStock> {
        let pantry = self.pantries.find_by_user(user_id).await?;

        Ok(PantryStock::of(pantry.as_ref()))
    }

    async fn candidates(
        &self,
        max_cooking_time: Option<u32>,
    ) -> mealwise_shared::Result<Vec<ResolvedRecipe>> {
        let recipes = self.recipes.list(RecipeFilter { max_cooking_time }).await?;

        resolve_recipes(self.ingredients.as_ref(), recipes).await
    }

    #[tracing::instrument(skip(self, options), fields(limit = ?options.limit))]
    pub async fn suggest(
        &self,
        user_id: &str,
        options: SuggestOptions,
    ) -> mealwise_shared::Result<Vec<Suggestion>> {
        let Some(user) = self.users.find(user_id).await? else {
            mealwise_shared::not_found!("user");
        };

        let stock = self.stock(user_id).await?;
        let candidates = self.candidates(options.max_cooking_time).await?;
        let total = candidates.len();

        let suggestions = suggest(candidates, &user.preferences, &stock, &options);
        tracing::debug!(candidates = total, suggested = suggestions.len(), "ranked recipes");

        Ok(suggestions)
    }

    #[tracing::instrument(skip(self, options))]
    pub async fn find(
        &self,
        user_id: &str,
        options: FindOptions,
    ) -> mealwise_shared::Result<Vec<FoundRecipe>> {
        let Some(user) = self.users.find(user_id).await? else {
            mealwise_shared::not_found!("user");
        };

        let stock = self.stock(user_id).await?;
        let candidates = self.candidates(options.max_cooking_time).await?;

        Ok(find(
            candidates,
            &user.preferences.dietary_restrictions,
            &stock,
            &options,
        ))
    }

    /// Recipes whose every ingredient is stocked, in store order.
    #[tracing::instrument(skip(self))]
    pub async fn cookable(&self, user_id: &str) -> mealwise_shared::Result<Vec<ResolvedRecipe>> {
        let stock = self.stock(user_id).await?;
        let recipes = self
            .recipes
            .list(RecipeFilter::default())
            .await?
            .into_iter()
            .filter(|recipe| can_cook(recipe, &stock))
            .collect::<Vec<_>>();

        resolve_recipes(self.ingredients.as_ref(), recipes).await
    }

    /// Most recently created recipes.
    pub async fn trending(&self, limit: usize) -> mealwise_shared::Result<Vec<ResolvedRecipe>> {
        let recipes = self.recipes.recent(limit).await?;

        resolve_recipes(self.ingredients.as_ref(), recipes).await
    }
}

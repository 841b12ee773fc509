use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    Catalog, Cookbook, DayRange, Ingredient, MealPlanEntry, Pantry, Recipe, ResolvedRecipe,
    Result, User,
};

#[async_trait]
pub trait IngredientRepository: Send + Sync {
    async fn find(&self, id: &str) -> Result<Option<Ingredient>>;
    async fn find_many(&self, ids: &[String]) -> Result<Vec<Ingredient>>;
    /// Case-insensitive exact name match.
    async fn find_by_name(&self, name: &str) -> Result<Option<Ingredient>>;
    async fn list(&self) -> Result<Vec<Ingredient>>;
    async fn insert(&self, ingredient: Ingredient) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Inclusive upper bound on cooking time.
    pub max_cooking_time: Option<u32>,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.max_cooking_time
            .is_none_or(|max| recipe.cooking_time_minutes <= max)
    }
}

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn find(&self, id: &str) -> Result<Option<Recipe>>;
    async fn find_many(&self, ids: &[String]) -> Result<Vec<Recipe>>;
    /// Recipes in store order.
    async fn list(&self, filter: RecipeFilter) -> Result<Vec<Recipe>>;
    /// Most recently created first.
    async fn recent(&self, limit: usize) -> Result<Vec<Recipe>>;
    async fn save(&self, recipe: Recipe) -> Result<()>;
    async fn delete(&self, id: &str) -> Result<bool>;
}

#[async_trait]
pub trait PantryRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Pantry>>;
    async fn save(&self, pantry: Pantry) -> Result<()>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find(&self, id: &str) -> Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn save(&self, user: User) -> Result<()>;
}

#[async_trait]
pub trait MealPlanRepository: Send + Sync {
    async fn find(&self, id: &str) -> Result<Option<MealPlanEntry>>;
    /// Entries of `user_id` within the inclusive range, ordered by day then slot name.
    async fn find_in_range(&self, user_id: &str, range: DayRange) -> Result<Vec<MealPlanEntry>>;
    async fn save(&self, entry: MealPlanEntry) -> Result<()>;
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// Every repository a service may need, shared behind `Arc`s.
#[derive(Clone)]
pub struct State {
    pub ingredients: Arc<dyn IngredientRepository>,
    pub recipes: Arc<dyn RecipeRepository>,
    pub pantries: Arc<dyn PantryRepository>,
    pub users: Arc<dyn UserRepository>,
    pub meal_plans: Arc<dyn MealPlanRepository>,
}

/// Catalogue covering every ingredient referenced by `recipes`.
pub async fn load_catalog(
    ingredients: &dyn IngredientRepository,
    recipes: &[Recipe],
) -> Result<Catalog> {
    let mut ids: Vec<String> = vec![];
    for recipe in recipes {
        for id in recipe.ingredient_ids() {
            if !ids.iter().any(|known| known == id) {
                ids.push(id.to_owned());
            }
        }
    }

    Ok(Catalog::new(ingredients.find_many(&ids).await?))
}

/// Loads and joins `recipes` against the ingredient catalogue, keeping input order.
pub async fn resolve_recipes(
    ingredients: &dyn IngredientRepository,
    recipes: Vec<Recipe>,
) -> Result<Vec<ResolvedRecipe>> {
    let catalog = load_catalog(ingredients, &recipes).await?;

    Ok(recipes.iter().map(|r| r.resolve(&catalog)).collect())
}

/// Resolved recipes for the given ids. Unknown ids are absent from the result.
pub async fn load_cookbook(
    recipes: &dyn RecipeRepository,
    ingredients: &dyn IngredientRepository,
    ids: &[String],
) -> Result<Cookbook> {
    let found = recipes.find_many(ids).await?;
    if found.len() < ids.len() {
        tracing::warn!(
            requested = ids.len(),
            found = found.len(),
            "dangling recipe references"
        );
    }

    Ok(Cookbook::new(resolve_recipes(ingredients, found).await?))
}

/// Resolved recipes referenced by planned `entries`, each recipe loaded once.
pub async fn load_planned_cookbook(
    recipes: &dyn RecipeRepository,
    ingredients: &dyn IngredientRepository,
    entries: &[MealPlanEntry],
) -> Result<Cookbook> {
    let mut ids: Vec<String> = vec![];
    for entry in entries {
        if !ids.contains(&entry.recipe_id) {
            ids.push(entry.recipe_id.to_owned());
        }
    }

    load_cookbook(recipes, ingredients, &ids).await
}

use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use mealwise_shared::{
    DayRange, Ingredient, IngredientRepository, MealPlanEntry, MealPlanRepository, Pantry,
    PantryRepository, Recipe, RecipeFilter, RecipeRepository, Result, State, User,
    UserRepository,
};
use tokio::sync::RwLock;

use crate::Snapshot;

/// In-memory store implementing every repository, persisted as a JSON snapshot.
///
/// Clones share the same state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Snapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Loads `path`, starting empty when it is missing and `create_if_missing` is set.
    pub async fn open(path: impl AsRef<Path>, create_if_missing: bool) -> Result<Self> {
        let path = path.as_ref();
        if !tokio::fs::try_exists(path).await? {
            if !create_if_missing {
                mealwise_shared::not_found!(format!("store {}", path.display()));
            }

            tracing::info!(path = %path.display(), "starting with an empty store");
            return Ok(Self::new());
        }

        let snapshot = Snapshot::read(path).await?;
        tracing::debug!(
            path = %path.display(),
            recipes = snapshot.recipes.len(),
            ingredients = snapshot.ingredients.len(),
            "store loaded"
        );

        Ok(Self::from_snapshot(snapshot))
    }

    pub async fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        self.inner.read().await.write(path).await
    }

    /// Repository handles all backed by this store.
    pub fn state(&self) -> State {
        let store = Arc::new(self.clone());

        State {
            ingredients: store.clone(),
            recipes: store.clone(),
            pantries: store.clone(),
            users: store.clone(),
            meal_plans: store,
        }
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.inner.read().await.clone()
    }
}

fn upsert<T>(items: &mut Vec<T>, item: T, same: impl Fn(&T, &T) -> bool) {
    match items.iter_mut().find(|current| same(current, &item)) {
        Some(current) => *current = item,
        None => items.push(item),
    }
}

#[async_trait]
impl IngredientRepository for MemoryStore {
    async fn find(&self, id: &str) -> Result<Option<Ingredient>> {
        let data = self.inner.read().await;

        Ok(data.ingredients.iter().find(|i| i.id == id).cloned())
    }

    async fn find_many(&self, ids: &[String]) -> Result<Vec<Ingredient>> {
        let data = self.inner.read().await;

        Ok(data
            .ingredients
            .iter()
            .filter(|i| ids.contains(&i.id))
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Ingredient>> {
        let name = name.to_lowercase();
        let data = self.inner.read().await;

        Ok(data
            .ingredients
            .iter()
            .find(|i| i.name.to_lowercase() == name)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Ingredient>> {
        Ok(self.inner.read().await.ingredients.clone())
    }

    async fn insert(&self, ingredient: Ingredient) -> Result<()> {
        let mut data = self.inner.write().await;
        upsert(&mut data.ingredients, ingredient, |a, b| a.id == b.id);

        Ok(())
    }
}

#[async_trait]
impl RecipeRepository for MemoryStore {
    async fn find(&self, id: &str) -> Result<Option<Recipe>> {
        let data = self.inner.read().await;

        Ok(data.recipes.iter().find(|r| r.id == id).cloned())
    }

    async fn find_many(&self, ids: &[String]) -> Result<Vec<Recipe>> {
        let data = self.inner.read().await;

        Ok(data
            .recipes
            .iter()
            .filter(|r| ids.contains(&r.id))
            .cloned()
            .collect())
    }

    async fn list(&self, filter: RecipeFilter) -> Result<Vec<Recipe>> {
        let data = self.inner.read().await;

        Ok(data
            .recipes
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Recipe>> {
        let mut recipes = self.inner.read().await.recipes.clone();
        recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recipes.truncate(limit);

        Ok(recipes)
    }

    async fn save(&self, recipe: Recipe) -> Result<()> {
        let mut data = self.inner.write().await;
        upsert(&mut data.recipes, recipe, |a, b| a.id == b.id);

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut data = self.inner.write().await;
        let before = data.recipes.len();
        data.recipes.retain(|r| r.id != id);

        Ok(data.recipes.len() < before)
    }
}

#[async_trait]
impl PantryRepository for MemoryStore {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Pantry>> {
        let data = self.inner.read().await;

        Ok(data.pantries.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn save(&self, pantry: Pantry) -> Result<()> {
        let mut data = self.inner.write().await;
        upsert(&mut data.pantries, pantry, |a, b| a.user_id == b.user_id);

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find(&self, id: &str) -> Result<Option<User>> {
        let data = self.inner.read().await;

        Ok(data.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let email = email.to_lowercase();
        let data = self.inner.read().await;

        Ok(data.users.iter().find(|u| u.email == email).cloned())
    }

    async fn save(&self, user: User) -> Result<()> {
        let mut data = self.inner.write().await;
        upsert(&mut data.users, user, |a, b| a.id == b.id);

        Ok(())
    }
}

#[async_trait]
impl MealPlanRepository for MemoryStore {
    async fn find(&self, id: &str) -> Result<Option<MealPlanEntry>> {
        let data = self.inner.read().await;

        Ok(data.meal_plans.iter().find(|m| m.id == id).cloned())
    }

    async fn find_in_range(&self, user_id: &str, range: DayRange) -> Result<Vec<MealPlanEntry>> {
        let data = self.inner.read().await;
        let mut entries = data
            .meal_plans
            .iter()
            .filter(|m| m.user_id == user_id && range.contains(m.plan_date))
            .cloned()
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| {
            a.plan_date
                .cmp(&b.plan_date)
                .then_with(|| a.meal_type.as_ref().cmp(b.meal_type.as_ref()))
        });

        Ok(entries)
    }

    async fn save(&self, entry: MealPlanEntry) -> Result<()> {
        let mut data = self.inner.write().await;
        upsert(&mut data.meal_plans, entry, |a, b| a.id == b.id);

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut data = self.inner.write().await;
        let before = data.meal_plans.len();
        data.meal_plans.retain(|m| m.id != id);

        Ok(data.meal_plans.len() < before)
    }
}

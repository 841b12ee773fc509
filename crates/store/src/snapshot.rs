use std::path::Path;

use mealwise_shared::{Ingredient, MealPlanEntry, Pantry, Recipe, User};
use serde::{Deserialize, Serialize};

/// Everything the store holds, as written to disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub ingredients: Vec<Ingredient>,
    pub recipes: Vec<Recipe>,
    pub users: Vec<User>,
    pub pantries: Vec<Pantry>,
    pub meal_plans: Vec<MealPlanEntry>,
}

impl Snapshot {
    pub async fn read(path: impl AsRef<Path>) -> mealwise_shared::Result<Self> {
        let bytes = tokio::fs::read(path.as_ref()).await?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Writes to a sibling temp file first, then renames over `path`.
    pub async fn write(&self, path: impl AsRef<Path>) -> mealwise_shared::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(self)?).await?;
        tokio::fs::rename(&tmp, path).await?;

        Ok(())
    }
}

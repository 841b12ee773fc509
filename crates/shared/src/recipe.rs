use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::OffsetDateTime;

use crate::{Ingredient, IngredientLookup};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DietaryCategory {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    NutFree,
    LowCarb,
    Keto,
    Paleo,
    NoCook,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub ingredient_id: String,
    pub quantity_grams: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub cooking_time_minutes: u32,
    pub servings: u32,
    pub ingredients: Vec<RecipeIngredient>,
    pub dietary_category: Vec<DietaryCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Recipe {
    /// Distinct ingredient ids in first-seen order.
    pub fn ingredient_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::with_capacity(self.ingredients.len());
        for item in &self.ingredients {
            if !ids.contains(&item.ingredient_id.as_str()) {
                ids.push(&item.ingredient_id);
            }
        }
        ids
    }

    pub fn has_tag(&self, tag: DietaryCategory) -> bool {
        self.dietary_category.contains(&tag)
    }

    /// Joins every ingredient reference against `lookup`, keeping dangling ones.
    pub fn resolve(&self, lookup: &impl IngredientLookup) -> ResolvedRecipe {
        let ingredients = self
            .ingredients
            .iter()
            .map(|item| ResolvedIngredient {
                ingredient_id: item.ingredient_id.to_owned(),
                quantity_grams: item.quantity_grams,
                ingredient: lookup.ingredient(&item.ingredient_id).cloned(),
            })
            .collect();

        ResolvedRecipe {
            recipe: self.clone(),
            ingredients,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedIngredient {
    pub ingredient_id: String,
    pub quantity_grams: f64,
    pub ingredient: Option<Ingredient>,
}

/// A recipe whose ingredient references have been looked up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(rename = "resolved_ingredients")]
    pub ingredients: Vec<ResolvedIngredient>,
}

impl ResolvedRecipe {
    pub fn id(&self) -> &str {
        &self.recipe.id
    }

    /// Ingredients that resolved, with their quantities.
    pub fn resolved(&self) -> impl Iterator<Item = (&Ingredient, f64)> {
        self.ingredients
            .iter()
            .filter_map(|item| item.ingredient.as_ref().map(|i| (i, item.quantity_grams)))
    }

    /// Lower-cased names of the resolved ingredients.
    pub fn ingredient_names(&self) -> Vec<String> {
        self.resolved().map(|(i, _)| i.lowercase_name()).collect()
    }
}

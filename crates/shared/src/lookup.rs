use std::collections::HashMap;

use crate::{Ingredient, ResolvedRecipe};

/// Resolves an ingredient id to the catalogue entry.
pub trait IngredientLookup {
    fn ingredient(&self, id: &str) -> Option<&Ingredient>;
}

/// Resolves a recipe id to a recipe with its ingredients joined.
pub trait RecipeLookup {
    fn recipe(&self, id: &str) -> Option<&ResolvedRecipe>;
}

impl IngredientLookup for HashMap<String, Ingredient> {
    fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.get(id)
    }
}

impl RecipeLookup for HashMap<String, ResolvedRecipe> {
    fn recipe(&self, id: &str) -> Option<&ResolvedRecipe> {
        self.get(id)
    }
}

/// Id-indexed ingredient catalogue.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ingredients: HashMap<String, Ingredient>,
}

impl Catalog {
    pub fn new(ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        Self {
            ingredients: ingredients
                .into_iter()
                .map(|i| (i.id.to_owned(), i))
                .collect(),
        }
    }
}

impl IngredientLookup for Catalog {
    fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.get(id)
    }
}

/// Id-indexed set of resolved recipes.
#[derive(Debug, Clone, Default)]
pub struct Cookbook {
    recipes: HashMap<String, ResolvedRecipe>,
}

impl Cookbook {
    pub fn new(recipes: impl IntoIterator<Item = ResolvedRecipe>) -> Self {
        Self {
            recipes: recipes
                .into_iter()
                .map(|r| (r.id().to_owned(), r))
                .collect(),
        }
    }
}

impl RecipeLookup for Cookbook {
    fn recipe(&self, id: &str) -> Option<&ResolvedRecipe> {
        self.recipes.get(id)
    }
}

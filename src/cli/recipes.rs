use std::path::{Path, PathBuf};

use clap::Subcommand;
use mealwise_recipe::{
    Command, CreateInput, FindOptions, SuggestOptions, SuggestionEngine, UpdateInput,
};
use mealwise_shared::MealSlot;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::{Context, to_data};

#[derive(Subcommand, Debug)]
pub enum RecipeCommands {
    /// Recipes matching the user's restrictions, best pantry match first
    List {
        /// Case-insensitive name fragment
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        max_cooking_time: Option<u32>,
    },
    /// Scored suggestions for the acting user
    Suggest {
        #[arg(long)]
        max_cooking_time: Option<u32>,

        #[arg(long)]
        meal_type: Option<MealSlot>,

        /// Defaults to `suggestion.default_limit`
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Recipes whose every ingredient is in the pantry
    Cookable,
    /// Most recently created recipes
    Trending {
        #[arg(long, default_value_t = mealwise_recipe::DEFAULT_SUGGESTION_LIMIT)]
        limit: usize,
    },
    /// Recipe with its nutritional info
    Show { id: String },
    /// Create a recipe owned by the acting user from a JSON file
    Create { file: PathBuf },
    /// Patch a recipe from a JSON file, absent fields are kept
    Update { id: String, file: PathBuf },
    /// Bulk-create recipes from a JSON array
    Import { file: PathBuf },
    /// Delete a recipe
    Delete { id: String },
}

impl RecipeCommands {
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            RecipeCommands::Create { .. }
                | RecipeCommands::Update { .. }
                | RecipeCommands::Import { .. }
                | RecipeCommands::Delete { .. }
        )
    }
}

async fn read_json<T: DeserializeOwned>(file: &Path) -> mealwise_shared::Result<T> {
    let bytes = tokio::fs::read(file).await?;

    Ok(serde_json::from_slice(&bytes)?)
}

pub(super) async fn run(
    command: RecipeCommands,
    ctx: &Context<'_>,
) -> mealwise_shared::Result<Value> {
    let state = ctx.store.state();
    let engine = SuggestionEngine::new(
        state.recipes.clone(),
        state.ingredients.clone(),
        state.pantries.clone(),
        state.users.clone(),
    );
    let recipes = Command::new(state.recipes, state.ingredients);

    match command {
        RecipeCommands::List {
            search,
            max_cooking_time,
        } => {
            let found = engine
                .find(
                    ctx.user_id,
                    FindOptions {
                        search,
                        max_cooking_time,
                    },
                )
                .await?;
            to_data(found)
        }
        RecipeCommands::Suggest {
            max_cooking_time,
            meal_type,
            limit,
        } => {
            let suggestions = engine
                .suggest(
                    ctx.user_id,
                    SuggestOptions {
                        max_cooking_time,
                        meal_type,
                        limit: Some(limit.unwrap_or(ctx.config.suggestion.default_limit)),
                    },
                )
                .await?;
            to_data(suggestions)
        }
        RecipeCommands::Cookable => to_data(engine.cookable(ctx.user_id).await?),
        RecipeCommands::Trending { limit } => to_data(engine.trending(limit).await?),
        RecipeCommands::Show { id } => to_data(recipes.recipe_detail(&id).await?),
        RecipeCommands::Create { file } => {
            let input: CreateInput = read_json(&file).await?;
            to_data(recipes.create_recipe(input, ctx.user_id).await?)
        }
        RecipeCommands::Update { id, file } => {
            let input: UpdateInput = read_json(&file).await?;
            to_data(recipes.update_recipe(&id, input, ctx.user_id).await?)
        }
        RecipeCommands::Import { file } => {
            let inputs: Vec<CreateInput> = read_json(&file).await?;
            let ids = recipes.import(inputs).await?;
            Ok(json!({ "imported": ids.len(), "ids": ids }))
        }
        RecipeCommands::Delete { id } => {
            recipes.delete_recipe(&id, ctx.user_id).await?;
            Ok(json!({ "id": id, "deleted": true }))
        }
    }
}

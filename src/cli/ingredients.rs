use clap::Subcommand;
use mealwise_recipe::{CreateIngredientInput, IngredientCommand};
use mealwise_shared::IngredientCategory;
use serde_json::Value;

use super::{Context, to_data};

#[derive(Subcommand, Debug)]
pub enum IngredientCommands {
    /// Search the catalogue
    List {
        /// Case-insensitive name fragment
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        category: Option<IngredientCategory>,
    },
    /// Add an ingredient with its per-gram macros
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value_t = 0.0)]
        calories: f64,

        #[arg(long, default_value_t = 0.0)]
        protein: f64,

        #[arg(long, default_value_t = 0.0)]
        fat: f64,

        #[arg(long, default_value_t = 0.0)]
        carbs: f64,

        #[arg(long, default_value_t = IngredientCategory::Other)]
        category: IngredientCategory,
    },
    /// Show one ingredient
    Show { id: String },
}

impl IngredientCommands {
    pub fn mutates(&self) -> bool {
        matches!(self, IngredientCommands::Add { .. })
    }
}

pub(super) async fn run(
    command: IngredientCommands,
    ctx: &Context<'_>,
) -> mealwise_shared::Result<Value> {
    let ingredients = IngredientCommand::new(ctx.store.state().ingredients);

    match command {
        IngredientCommands::List { search, category } => {
            to_data(ingredients.search(search.as_deref(), category).await?)
        }
        IngredientCommands::Add {
            name,
            calories,
            protein,
            fat,
            carbs,
            category,
        } => {
            let ingredient = ingredients
                .create(CreateIngredientInput {
                    name,
                    calories_per_gram: calories,
                    protein_per_gram: protein,
                    fat_per_gram: fat,
                    carbs_per_gram: carbs,
                    category,
                })
                .await?;
            to_data(ingredient)
        }
        IngredientCommands::Show { id } => to_data(ingredients.find(&id).await?),
    }
}

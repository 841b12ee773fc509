use clap::Subcommand;
use mealwise_pantry::{AddItemInput, Command, UpdateItemInput};
use serde_json::Value;
use time::Date;

use super::{Context, parse_date, to_data};

#[derive(Subcommand, Debug)]
pub enum PantryCommands {
    /// Pantry items with their ingredients, creating an empty pantry if needed
    Show,
    /// Stock an ingredient, adding to an existing row
    Add {
        ingredient_id: String,

        /// Grams
        quantity: f64,

        #[arg(long, value_parser = parse_date)]
        expiry_date: Option<Date>,
    },
    /// Overwrite the quantity of a pantry item
    Update {
        item_id: String,

        /// Grams
        quantity: f64,
    },
    /// Remove a pantry item
    Remove { item_id: String },
}

impl PantryCommands {
    pub fn mutates(&self) -> bool {
        // `show` may create the pantry
        true
    }
}

pub(super) async fn run(
    command: PantryCommands,
    ctx: &Context<'_>,
) -> mealwise_shared::Result<Value> {
    let state = ctx.store.state();
    let pantry = Command::new(state.pantries, state.ingredients);

    let view = match command {
        PantryCommands::Show => pantry.view(ctx.user_id).await?,
        PantryCommands::Add {
            ingredient_id,
            quantity,
            expiry_date,
        } => {
            pantry
                .add(
                    ctx.user_id,
                    AddItemInput {
                        ingredient_id,
                        quantity_grams: quantity,
                        expiry_date,
                    },
                )
                .await?
        }
        PantryCommands::Update { item_id, quantity } => {
            pantry
                .update(
                    ctx.user_id,
                    &item_id,
                    UpdateItemInput {
                        quantity_grams: quantity,
                    },
                )
                .await?
        }
        PantryCommands::Remove { item_id } => pantry.remove(ctx.user_id, &item_id).await?,
    };

    to_data(view)
}

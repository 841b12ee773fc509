use clap::Subcommand;
use mealwise_mealplan::{AddMealInput, Command, Query, UpdateMealInput};
use mealwise_shared::MealSlot;
use serde_json::{Value, json};
use time::Date;

use super::{Context, date_range, parse_date, to_data};

#[derive(Subcommand, Debug)]
pub enum MealPlanCommands {
    /// Planned meals grouped by day
    Week {
        /// First day, defaults to the Monday opening the current week
        #[arg(long, value_parser = parse_date)]
        start_date: Option<Date>,

        #[arg(long, value_parser = parse_date, requires = "start_date")]
        end_date: Option<Date>,
    },
    /// All four meal slots of one day
    Day {
        #[arg(value_parser = parse_date)]
        date: Date,
    },
    /// Plan a recipe for a day and slot
    Add {
        recipe_id: String,

        #[arg(long, value_parser = parse_date)]
        date: Date,

        #[arg(long)]
        meal_type: MealSlot,

        #[arg(long, default_value_t = 1)]
        servings: u32,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Change a planned meal, omitted flags are kept
    Update {
        id: String,

        #[arg(long)]
        recipe_id: Option<String>,

        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,

        #[arg(long)]
        meal_type: Option<MealSlot>,

        #[arg(long)]
        servings: Option<u32>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove a planned meal
    Remove { id: String },
}

impl MealPlanCommands {
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            MealPlanCommands::Add { .. }
                | MealPlanCommands::Update { .. }
                | MealPlanCommands::Remove { .. }
        )
    }
}

pub(super) async fn run(
    command: MealPlanCommands,
    ctx: &Context<'_>,
) -> mealwise_shared::Result<Value> {
    let state = ctx.store.state();

    match command {
        MealPlanCommands::Week {
            start_date,
            end_date,
        } => {
            let range = date_range(start_date, end_date);
            to_data(Query(state).week_plan(ctx.user_id, range).await?)
        }
        MealPlanCommands::Day { date } => {
            to_data(Query(state).day_plan(ctx.user_id, date).await?)
        }
        MealPlanCommands::Add {
            recipe_id,
            date,
            meal_type,
            servings,
            notes,
        } => {
            let meal = Command(state)
                .add_meal(
                    ctx.user_id,
                    AddMealInput {
                        recipe_id,
                        plan_date: date,
                        meal_type,
                        servings,
                        notes,
                    },
                )
                .await?;
            to_data(meal)
        }
        MealPlanCommands::Update {
            id,
            recipe_id,
            date,
            meal_type,
            servings,
            notes,
        } => {
            let meal = Command(state)
                .update_meal(
                    ctx.user_id,
                    &id,
                    UpdateMealInput {
                        recipe_id,
                        plan_date: date,
                        meal_type,
                        servings,
                        notes,
                    },
                )
                .await?;
            to_data(meal)
        }
        MealPlanCommands::Remove { id } => {
            Command(state).remove_meal(ctx.user_id, &id).await?;
            Ok(json!({ "id": id, "deleted": true }))
        }
    }
}

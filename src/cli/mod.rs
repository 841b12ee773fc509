mod ingredients;
mod meal_plan;
mod nutrition;
mod pantry;
mod recipes;
mod shopping;
mod users;

use clap::{Parser, Subcommand};
use mealwise_shared::DayRange;
use mealwise_store::MemoryStore;
use serde_json::Value;
use time::Date;

use crate::{Config, Envelope};

pub use ingredients::IngredientCommands;
pub use meal_plan::MealPlanCommands;
pub use nutrition::NutritionCommands;
pub use pantry::PantryCommands;
pub use recipes::RecipeCommands;
pub use users::UserCommands;

/// mealwise - pantry-aware recipes, meal plans and shopping lists
#[derive(Parser, Debug)]
#[command(name = "mealwise")]
#[command(about = "Recipe suggestions, meal planning and shopping lists", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Acting user id (overrides config file)
    #[arg(long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingredient catalogue
    #[command(subcommand)]
    Ingredients(IngredientCommands),
    /// Recipes, suggestions and imports
    #[command(subcommand)]
    Recipes(RecipeCommands),
    /// The acting user's pantry
    #[command(subcommand)]
    Pantry(PantryCommands),
    /// Planned meals
    #[command(subcommand)]
    MealPlan(MealPlanCommands),
    /// Nutrition totals against the user's targets
    #[command(subcommand)]
    Nutrition(NutritionCommands),
    /// Ingredients to buy for the planned meals
    ShoppingList {
        /// First day, defaults to the Sunday opening the current week
        #[arg(long, value_parser = parse_date)]
        start_date: Option<Date>,

        /// Last day, defaults to six days after the start
        #[arg(long, value_parser = parse_date, requires = "start_date")]
        end_date: Option<Date>,
    },
    /// User accounts and preferences
    #[command(subcommand)]
    Users(UserCommands),
}

impl Commands {
    /// Whether the store must be written back after the command succeeds.
    pub fn mutates(&self) -> bool {
        match self {
            Commands::Ingredients(command) => command.mutates(),
            Commands::Recipes(command) => command.mutates(),
            Commands::Pantry(command) => command.mutates(),
            Commands::MealPlan(command) => command.mutates(),
            Commands::Users(command) => command.mutates(),
            Commands::Nutrition(_) | Commands::ShoppingList { .. } => false,
        }
    }
}

/// What every command handler receives.
pub(crate) struct Context<'a> {
    pub store: &'a MemoryStore,
    pub user_id: &'a str,
    pub config: &'a Config,
}

pub(crate) fn parse_date(value: &str) -> Result<Date, String> {
    mealwise_shared::parse_day(value)
        .map_err(|_| format!("invalid date `{value}`, expected YYYY-MM-DD"))
}

/// `start..=end` when both are given, the week from `start` when only it is.
pub(crate) fn date_range(start: Option<Date>, end: Option<Date>) -> Option<DayRange> {
    match (start, end) {
        (Some(start), Some(end)) => Some(DayRange::new(start, end)),
        (Some(start), None) => Some(DayRange::week_from(start)),
        _ => None,
    }
}

pub(crate) fn to_data(value: impl serde::Serialize) -> mealwise_shared::Result<Value> {
    Ok(serde_json::to_value(value)?)
}

async fn dispatch(command: Commands, ctx: &Context<'_>) -> mealwise_shared::Result<Value> {
    match command {
        Commands::Ingredients(command) => ingredients::run(command, ctx).await,
        Commands::Recipes(command) => recipes::run(command, ctx).await,
        Commands::Pantry(command) => pantry::run(command, ctx).await,
        Commands::MealPlan(command) => meal_plan::run(command, ctx).await,
        Commands::Nutrition(command) => nutrition::run(command, ctx).await,
        Commands::ShoppingList {
            start_date,
            end_date,
        } => shopping::run(date_range(start_date, end_date), ctx).await,
        Commands::Users(command) => users::run(command, ctx).await,
    }
}

async fn try_execute(cli: Cli, config: &Config) -> mealwise_shared::Result<Value> {
    let store = MemoryStore::open(&config.store.path, config.store.create_if_missing).await?;
    let user_id = cli.user.unwrap_or_else(|| config.user.default_id.to_owned());
    let mutates = cli.command.mutates();

    let ctx = Context {
        store: &store,
        user_id: &user_id,
        config,
    };
    let data = dispatch(cli.command, &ctx).await?;

    if mutates {
        store.persist(&config.store.path).await?;
        tracing::debug!(path = %config.store.path, "store persisted");
    }

    Ok(data)
}

/// Runs one command against the configured store and wraps the outcome.
pub async fn execute(cli: Cli, config: &Config) -> Envelope {
    match try_execute(cli, config).await {
        Ok(data) => Envelope::data(data),
        Err(err) => {
            match &err {
                mealwise_shared::Error::Unknown(source) => tracing::error!("{source:?}"),
                other => tracing::warn!(error = %other, "command failed"),
            }
            Envelope::error(&err)
        }
    }
}

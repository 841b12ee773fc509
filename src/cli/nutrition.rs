use clap::Subcommand;
use mealwise_mealplan::Query;
use serde_json::Value;
use time::Date;

use super::{Context, parse_date, to_data};

#[derive(Subcommand, Debug)]
pub enum NutritionCommands {
    /// Totals for one day, today by default
    Day {
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
    /// Seven days of totals with weekly averages
    Week {
        /// Defaults to the Sunday opening the current week
        #[arg(long, value_parser = parse_date)]
        start_date: Option<Date>,
    },
}

pub(super) async fn run(
    command: NutritionCommands,
    ctx: &Context<'_>,
) -> mealwise_shared::Result<Value> {
    let query = Query(ctx.store.state());

    match command {
        NutritionCommands::Day { date } => {
            to_data(query.daily_nutrition(ctx.user_id, date).await?)
        }
        NutritionCommands::Week { start_date } => {
            to_data(query.weekly_nutrition(ctx.user_id, start_date).await?)
        }
    }
}

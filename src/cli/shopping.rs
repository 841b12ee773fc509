use mealwise_shared::DayRange;
use mealwise_shopping::Query;
use serde_json::Value;

use super::{Context, to_data};

pub(super) async fn run(
    range: Option<DayRange>,
    ctx: &Context<'_>,
) -> mealwise_shared::Result<Value> {
    let list = Query(ctx.store.state()).generate(ctx.user_id, range).await?;

    to_data(list)
}

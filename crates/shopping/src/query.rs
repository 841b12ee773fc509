use std::ops::Deref;

use mealwise_shared::{DayRange, State, load_planned_cookbook, sunday_week, today};
use serde::Serialize;
use time::Date;

use crate::{CategorizationService, CategorizedItems, IngredientAggregationService};

#[derive(Debug, Clone, Serialize)]
pub struct ShoppingList {
    #[serde(with = "mealwise_shared::day")]
    pub start_date: Date,
    #[serde(with = "mealwise_shared::day")]
    pub end_date: Date,
    pub shopping_list: CategorizedItems,
    pub total_items: usize,
}

#[derive(Clone)]
pub struct Query(pub State);

impl Deref for Query {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Query {
    /// Ingredients to buy for every meal planned in `range`, net of the user's pantry.
    /// Defaults to the current Sunday to Saturday week.
    #[tracing::instrument(skip(self))]
    pub async fn generate(
        &self,
        user_id: &str,
        range: Option<DayRange>,
    ) -> mealwise_shared::Result<ShoppingList> {
        let range = range.unwrap_or_else(|| sunday_week(today()));
        let entries = self.meal_plans.find_in_range(user_id, range).await?;
        let cookbook =
            load_planned_cookbook(self.recipes.as_ref(), self.ingredients.as_ref(), &entries)
                .await?;
        let pantry = self.pantries.find_by_user(user_id).await?;

        let items =
            IngredientAggregationService::shopping_items(&entries, &cookbook, pantry.as_ref());
        let shopping_list = CategorizationService::categorize(items);
        let total_items = CategorizationService::total_items(&shopping_list);

        tracing::debug!(
            entries = entries.len(),
            total_items,
            categories = shopping_list.len(),
            "shopping list generated"
        );

        Ok(ShoppingList {
            start_date: range.start,
            end_date: range.end,
            shopping_list,
            total_items,
        })
    }
}

use std::ops::Deref;

use mealwise_shared::{
    Cookbook, DayRange, MealPlanEntry, State, User, load_planned_cookbook, monday_week,
    sunday_week, today,
};
use serde::Serialize;
use time::Date;

use crate::{
    DailyNutrition, DayPlan, WeeklyNutrition, daily_nutrition, day_plan, group_by_day,
    weekly_nutrition,
};

#[derive(Debug, Clone, Serialize)]
pub struct WeekPlan {
    #[serde(with = "mealwise_shared::day")]
    pub start_date: Date,
    #[serde(with = "mealwise_shared::day")]
    pub end_date: Date,
    pub meal_plan: Vec<DayPlan>,
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
    async fn user(&self, user_id: &str) -> mealwise_shared::Result<User> {
        match self.users.find(user_id).await? {
            Some(user) => Ok(user),
            None => mealwise_shared::not_found!("user"),
        }
    }

    async fn entries(
        &self,
        user_id: &str,
        range: DayRange,
    ) -> mealwise_shared::Result<(Vec<MealPlanEntry>, Cookbook)> {
        let entries = self.meal_plans.find_in_range(user_id, range).await?;
        let cookbook =
            load_planned_cookbook(self.recipes.as_ref(), self.ingredients.as_ref(), &entries)
                .await?;
        tracing::debug!(entries = entries.len(), "meal plan loaded");

        Ok((entries, cookbook))
    }

    /// Days of `range` holding entries. Defaults to the current Monday to Sunday week.
    #[tracing::instrument(skip(self))]
    pub async fn week_plan(
        &self,
        user_id: &str,
        range: Option<DayRange>,
    ) -> mealwise_shared::Result<WeekPlan> {
        let range = range.unwrap_or_else(|| monday_week(today()));
        let (entries, cookbook) = self.entries(user_id, range).await?;

        Ok(WeekPlan {
            start_date: range.start,
            end_date: range.end,
            meal_plan: group_by_day(&entries, &cookbook),
        })
    }

    pub async fn day_plan(&self, user_id: &str, date: Date) -> mealwise_shared::Result<DayPlan> {
        let (entries, cookbook) = self.entries(user_id, DayRange::new(date, date)).await?;

        Ok(day_plan(date, &entries, &cookbook))
    }

    #[tracing::instrument(skip(self))]
    pub async fn daily_nutrition(
        &self,
        user_id: &str,
        date: Option<Date>,
    ) -> mealwise_shared::Result<DailyNutrition> {
        let user = self.user(user_id).await?;
        let date = date.unwrap_or_else(today);
        let (entries, cookbook) = self.entries(user_id, DayRange::new(date, date)).await?;

        Ok(daily_nutrition(date, &entries, &cookbook, &user.preferences))
    }

    /// Seven days from `start`, by default the Sunday opening the current week.
    #[tracing::instrument(skip(self))]
    pub async fn weekly_nutrition(
        &self,
        user_id: &str,
        start: Option<Date>,
    ) -> mealwise_shared::Result<WeeklyNutrition> {
        let user = self.user(user_id).await?;
        let range = match start {
            Some(start) => DayRange::week_from(start),
            None => sunday_week(today()),
        };
        let (entries, cookbook) = self.entries(user_id, range).await?;

        Ok(weekly_nutrition(
            range.start,
            &entries,
            &cookbook,
            &user.preferences,
        ))
    }
}

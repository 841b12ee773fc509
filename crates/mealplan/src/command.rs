use std::ops::Deref;

use mealwise_shared::{MealPlanEntry, MealSlot, State, load_cookbook};
use serde::Serialize;
use time::Date;
use validator::Validate;

use crate::PlannedMeal;

#[derive(Validate, Clone, Debug)]
pub struct AddMealInput {
    #[validate(length(min = 1, message = "Recipe ID is required"))]
    pub recipe_id: String,
    pub plan_date: Date,
    pub meal_type: MealSlot,
    #[validate(range(min = 1, message = "Servings must be at least 1"))]
    pub servings: u32,
    pub notes: Option<String>,
}

/// Fields left as `None` keep their current value.
#[derive(Validate, Clone, Debug, Default)]
pub struct UpdateMealInput {
    pub recipe_id: Option<String>,
    pub plan_date: Option<Date>,
    pub meal_type: Option<MealSlot>,
    #[validate(range(min = 1, message = "Servings must be at least 1"))]
    pub servings: Option<u32>,
    pub notes: Option<String>,
}

/// A stored entry together with its resolved recipe.
#[derive(Debug, Clone, Serialize)]
pub struct MealView {
    #[serde(with = "mealwise_shared::day")]
    pub plan_date: Date,
    pub meal_type: MealSlot,
    #[serde(flatten)]
    pub meal: PlannedMeal,
}

#[derive(Clone)]
pub struct Command(pub State);

impl Deref for Command {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    async fn ensure_recipe(&self, recipe_id: &str) -> mealwise_shared::Result<()> {
        if self.recipes.find(recipe_id).await?.is_none() {
            mealwise_shared::not_found!("recipe");
        }

        Ok(())
    }

    async fn owned(&self, user_id: &str, id: &str) -> mealwise_shared::Result<MealPlanEntry> {
        let Some(entry) = self.meal_plans.find(id).await? else {
            mealwise_shared::not_found!("meal plan");
        };

        if entry.user_id != user_id {
            mealwise_shared::forbidden!();
        }

        Ok(entry)
    }

    async fn view_of(&self, entry: MealPlanEntry) -> mealwise_shared::Result<MealView> {
        let cookbook = load_cookbook(
            self.recipes.as_ref(),
            self.ingredients.as_ref(),
            std::slice::from_ref(&entry.recipe_id),
        )
        .await?;

        Ok(MealView {
            plan_date: entry.plan_date,
            meal_type: entry.meal_type,
            meal: PlannedMeal::new(&entry, &cookbook),
        })
    }

    #[tracing::instrument(skip(self, input), fields(recipe_id = %input.recipe_id))]
    pub async fn add_meal(
        &self,
        user_id: &str,
        input: AddMealInput,
    ) -> mealwise_shared::Result<MealView> {
        input.validate()?;
        self.ensure_recipe(&input.recipe_id).await?;

        let entry = MealPlanEntry {
            id: mealwise_shared::new_id(),
            user_id: user_id.to_owned(),
            recipe_id: input.recipe_id,
            plan_date: input.plan_date,
            meal_type: input.meal_type,
            servings: input.servings,
            notes: input.notes,
        };
        self.meal_plans.save(entry.clone()).await?;

        self.view_of(entry).await
    }

    #[tracing::instrument(skip(self, input))]
    pub async fn update_meal(
        &self,
        user_id: &str,
        id: &str,
        input: UpdateMealInput,
    ) -> mealwise_shared::Result<MealView> {
        input.validate()?;
        let mut entry = self.owned(user_id, id).await?;

        if let Some(recipe_id) = input.recipe_id {
            self.ensure_recipe(&recipe_id).await?;
            entry.recipe_id = recipe_id;
        }
        if let Some(plan_date) = input.plan_date {
            entry.plan_date = plan_date;
        }
        if let Some(meal_type) = input.meal_type {
            entry.meal_type = meal_type;
        }
        if let Some(servings) = input.servings {
            entry.servings = servings;
        }
        if input.notes.is_some() {
            entry.notes = input.notes;
        }
        self.meal_plans.save(entry.clone()).await?;

        self.view_of(entry).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_meal(&self, user_id: &str, id: &str) -> mealwise_shared::Result<()> {
        let entry = self.owned(user_id, id).await?;
        self.meal_plans.delete(&entry.id).await?;

        Ok(())
    }
}

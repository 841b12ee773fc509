use mealwise_recipe::{NutritionalInfo, nutritional_info};
use mealwise_shared::{
    MealPlanEntry, MealSlot, OrderedMap, RecipeLookup, ResolvedRecipe, format_day,
};
use serde::Serialize;
use time::Date;

/// One scheduled entry as shown in a day view.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedMeal {
    pub id: String,
    /// `None` when the referenced recipe no longer exists.
    pub recipe: Option<ResolvedRecipe>,
    pub servings: u32,
    pub notes: Option<String>,
    pub nutritional_info: Option<NutritionalInfo>,
}

impl PlannedMeal {
    pub fn new(entry: &MealPlanEntry, recipes: &impl RecipeLookup) -> Self {
        let recipe = recipes.recipe(&entry.recipe_id).cloned();
        if recipe.is_none() {
            tracing::warn!(
                entry_id = %entry.id,
                recipe_id = %entry.recipe_id,
                "meal plan entry references a missing recipe"
            );
        }

        Self {
            id: entry.id.to_owned(),
            nutritional_info: recipe.as_ref().map(nutritional_info),
            recipe,
            servings: entry.servings,
            notes: entry.notes.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DayPlan {
    pub date: String,
    pub breakfast: Vec<PlannedMeal>,
    pub lunch: Vec<PlannedMeal>,
    pub dinner: Vec<PlannedMeal>,
    pub snack: Vec<PlannedMeal>,
}

impl DayPlan {
    pub fn empty(date: Date) -> Self {
        Self {
            date: format_day(date),
            breakfast: vec![],
            lunch: vec![],
            dinner: vec![],
            snack: vec![],
        }
    }

    pub fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<PlannedMeal> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snack => &mut self.snack,
        }
    }

    pub fn len(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len() + self.snack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Groups entries by day then slot, keeping the order entries arrive in.
///
/// Only days holding at least one entry are returned.
pub fn group_by_day(entries: &[MealPlanEntry], recipes: &impl RecipeLookup) -> Vec<DayPlan> {
    let mut days: OrderedMap<Date, DayPlan> = OrderedMap::new();
    for entry in entries {
        days.entry_or_insert_with(entry.plan_date, || DayPlan::empty(entry.plan_date))
            .slot_mut(entry.meal_type)
            .push(PlannedMeal::new(entry, recipes));
    }

    days.into_iter().map(|(_, day)| day).collect()
}

/// The plan of a single day, with every slot present.
pub fn day_plan(date: Date, entries: &[MealPlanEntry], recipes: &impl RecipeLookup) -> DayPlan {
    let mut day = DayPlan::empty(date);
    for entry in entries.iter().filter(|e| e.plan_date == date) {
        day.slot_mut(entry.meal_type)
            .push(PlannedMeal::new(entry, recipes));
    }

    day
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealwise_shared::{Cookbook, DietaryCategory, Recipe};
    use time::macros::date;

    fn entry(id: &str, recipe_id: &str, day: Date, slot: MealSlot) -> MealPlanEntry {
        MealPlanEntry {
            id: id.to_owned(),
            user_id: "u".to_owned(),
            recipe_id: recipe_id.to_owned(),
            plan_date: day,
            meal_type: slot,
            servings: 1,
            notes: None,
        }
    }

    fn cookbook() -> Cookbook {
        Cookbook::new([ResolvedRecipe {
            recipe: Recipe {
                id: "oats".to_owned(),
                name: "Oats".to_owned(),
                instructions: "Soak".to_owned(),
                cooking_time_minutes: 5,
                servings: 1,
                ingredients: vec![],
                dietary_category: vec![DietaryCategory::Vegan],
                image_url: None,
                created_by: None,
                created_at: time::OffsetDateTime::UNIX_EPOCH,
            },
            ingredients: vec![],
        }])
    }

    #[test]
    fn test_group_by_day_keeps_query_order() {
        let entries = vec![
            entry("1", "oats", date!(2025 - 03 - 10), MealSlot::Breakfast),
            entry("2", "oats", date!(2025 - 03 - 10), MealSlot::Snack),
            entry("3", "oats", date!(2025 - 03 - 12), MealSlot::Dinner),
            entry("4", "oats", date!(2025 - 03 - 10), MealSlot::Breakfast),
        ];

        let days = group_by_day(&entries, &cookbook());

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2025-03-10");
        assert_eq!(
            days[0].breakfast.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "4"]
        );
        assert_eq!(days[0].snack.len(), 1);
        assert!(days[0].lunch.is_empty());
        assert_eq!(days[1].date, "2025-03-12");
        assert_eq!(days[1].len(), 1);
    }

    #[test]
    fn test_missing_recipe_is_kept_with_null_nutrition() {
        let entries = vec![entry("1", "deleted", date!(2025 - 03 - 10), MealSlot::Lunch)];
        let day = day_plan(date!(2025 - 03 - 10), &entries, &cookbook());

        assert_eq!(day.lunch.len(), 1);
        assert!(day.lunch[0].recipe.is_none());
        assert!(day.lunch[0].nutritional_info.is_none());
    }

    #[test]
    fn test_empty_day_has_all_slots() {
        let day = day_plan(date!(2025 - 03 - 10), &[], &cookbook());
        let json = serde_json::to_value(&day).unwrap();

        for slot in ["breakfast", "lunch", "dinner", "snack"] {
            assert_eq!(json[slot], serde_json::json!([]));
        }
        assert_eq!(json["date"], "2025-03-10");
    }
}

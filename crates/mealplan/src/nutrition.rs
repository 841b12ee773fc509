use mealwise_recipe::{Macros, nutritional_info};
use mealwise_shared::{
    DayRange, MealPlanEntry, RecipeLookup, UserPreferences, format_day, percentage_of,
};
use serde::Serialize;
use time::Date;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MacroTotals {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

impl MacroTotals {
    fn rounded(macros: Macros) -> Self {
        Self {
            calories: macros.calories.round() as i64,
            protein: macros.protein.round() as i64,
            carbs: macros.carbs.round() as i64,
            fat: macros.fat.round() as i64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroTargets {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl From<&UserPreferences> for MacroTargets {
    fn from(value: &UserPreferences) -> Self {
        Self {
            calories: value.daily_calorie_target,
            protein: value.daily_protein_target,
            carbs: value.daily_carbs_target,
            fat: value.daily_fat_target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyNutrition {
    pub date: String,
    pub nutrition: MacroTotals,
    pub targets: MacroTargets,
    /// Share of each target, 0 when the target is 0.
    pub percentages: MacroTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyNutrition {
    pub weekly_data: Vec<DailyNutrition>,
    pub weekly_averages: MacroTotals,
    pub targets: MacroTargets,
}

/// Nutrition eaten on `date` according to the plan.
///
/// # Business Rules
///
/// - Each entry adds its recipe's per-serving macros times its servings
/// - Entries whose recipe is missing add nothing
/// - Totals are rounded to whole units before percentages are taken
pub fn daily_nutrition(
    date: Date,
    entries: &[MealPlanEntry],
    recipes: &impl RecipeLookup,
    preferences: &UserPreferences,
) -> DailyNutrition {
    let sum = entries
        .iter()
        .filter(|e| e.plan_date == date)
        .filter_map(|e| {
            recipes
                .recipe(&e.recipe_id)
                .map(|r| nutritional_info(r).per_serving.scale(f64::from(e.servings)))
        })
        .fold(Macros::default(), |acc, m| acc + m);

    let nutrition = MacroTotals::rounded(sum);
    let targets = MacroTargets::from(preferences);

    DailyNutrition {
        date: format_day(date),
        percentages: MacroTotals {
            calories: percentage_of(nutrition.calories as f64, targets.calories),
            protein: percentage_of(nutrition.protein as f64, targets.protein),
            carbs: percentage_of(nutrition.carbs as f64, targets.carbs),
            fat: percentage_of(nutrition.fat as f64, targets.fat),
        },
        nutrition,
        targets,
    }
}

/// Seven days of nutrition from `start`, with rounded daily averages.
pub fn weekly_nutrition(
    start: Date,
    entries: &[MealPlanEntry],
    recipes: &impl RecipeLookup,
    preferences: &UserPreferences,
) -> WeeklyNutrition {
    let weekly_data = DayRange::week_from(start)
        .days()
        .map(|day| daily_nutrition(day, entries, recipes, preferences))
        .collect::<Vec<_>>();

    let sum = weekly_data
        .iter()
        .fold(MacroTotals::default(), |acc, day| MacroTotals {
            calories: acc.calories + day.nutrition.calories,
            protein: acc.protein + day.nutrition.protein,
            carbs: acc.carbs + day.nutrition.carbs,
            fat: acc.fat + day.nutrition.fat,
        });
    let average = |total: i64| (total as f64 / 7.0).round() as i64;

    WeeklyNutrition {
        weekly_averages: MacroTotals {
            calories: average(sum.calories),
            protein: average(sum.protein),
            carbs: average(sum.carbs),
            fat: average(sum.fat),
        },
        targets: MacroTargets::from(preferences),
        weekly_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealwise_shared::{
        Cookbook, DietaryCategory, Ingredient, IngredientCategory, MealSlot, Recipe,
        RecipeIngredient, ResolvedIngredient, ResolvedRecipe,
    };
    use time::macros::date;

    fn cookbook() -> Cookbook {
        let chicken = Ingredient {
            id: "chicken".to_owned(),
            name: "Chicken".to_owned(),
            calories_per_gram: 1.65,
            protein_per_gram: 0.31,
            fat_per_gram: 0.036,
            carbs_per_gram: 0.0,
            category: IngredientCategory::Protein,
        };

        Cookbook::new([ResolvedRecipe {
            recipe: Recipe {
                id: "grill".to_owned(),
                name: "Grilled chicken".to_owned(),
                instructions: "Grill".to_owned(),
                cooking_time_minutes: 20,
                servings: 4,
                ingredients: vec![RecipeIngredient {
                    ingredient_id: "chicken".to_owned(),
                    quantity_grams: 500.0,
                }],
                dietary_category: vec![DietaryCategory::Paleo],
                image_url: None,
                created_by: None,
                created_at: time::OffsetDateTime::UNIX_EPOCH,
            },
            ingredients: vec![ResolvedIngredient {
                ingredient_id: "chicken".to_owned(),
                quantity_grams: 500.0,
                ingredient: Some(chicken),
            }],
        }])
    }

    fn entry(recipe_id: &str, day: Date, servings: u32) -> MealPlanEntry {
        MealPlanEntry {
            id: format!("{recipe_id}-{day}"),
            user_id: "u".to_owned(),
            recipe_id: recipe_id.to_owned(),
            plan_date: day,
            meal_type: MealSlot::Dinner,
            servings,
            notes: None,
        }
    }

    #[test]
    fn test_daily_sums_per_serving_times_servings() {
        let entries = vec![
            entry("grill", date!(2025 - 03 - 10), 2),
            entry("grill", date!(2025 - 03 - 10), 1),
            entry("grill", date!(2025 - 03 - 11), 1),
            entry("gone", date!(2025 - 03 - 10), 5),
        ];

        let day = daily_nutrition(
            date!(2025 - 03 - 10),
            &entries,
            &cookbook(),
            &UserPreferences::default(),
        );

        // 206.3 × 3, 38.8 × 3, 4.5 × 3
        assert_eq!(
            day.nutrition,
            MacroTotals {
                calories: 619,
                protein: 116,
                carbs: 0,
                fat: 14
            }
        );
        assert_eq!(day.percentages.calories, 31);
        assert_eq!(day.percentages.protein, 232);
        assert_eq!(day.percentages.fat, 20);
        assert_eq!(day.date, "2025-03-10");
    }

    #[test]
    fn test_zero_target_yields_zero_percent() {
        let preferences = UserPreferences {
            daily_carbs_target: 0.0,
            ..Default::default()
        };
        let day = daily_nutrition(
            date!(2025 - 03 - 10),
            &[entry("grill", date!(2025 - 03 - 10), 1)],
            &cookbook(),
            &preferences,
        );
        assert_eq!(day.percentages.carbs, 0);
    }

    #[test]
    fn test_weekly_averages_match_daily_sum() {
        let start = date!(2025 - 03 - 09);
        let entries = vec![
            entry("grill", date!(2025 - 03 - 09), 1),
            entry("grill", date!(2025 - 03 - 12), 2),
            entry("grill", date!(2025 - 03 - 16), 4),
        ];

        let week = weekly_nutrition(start, &entries, &cookbook(), &UserPreferences::default());

        assert_eq!(week.weekly_data.len(), 7);
        assert_eq!(week.weekly_data[0].date, "2025-03-09");
        assert_eq!(week.weekly_data[6].date, "2025-03-15");
        assert_eq!(week.weekly_data[6].nutrition.calories, 0);

        let total: i64 = week.weekly_data.iter().map(|d| d.nutrition.calories).sum();
        assert_eq!(week.weekly_averages.calories, (total as f64 / 7.0).round() as i64);
        assert_eq!(week.targets.calories, 2000.0);
    }

    #[test]
    fn test_weekly_near_last_date_is_truncated() {
        let start = date!(9999 - 12 - 30);
        let entries = vec![entry("grill", date!(9999 - 12 - 31), 1)];

        let week = weekly_nutrition(start, &entries, &cookbook(), &UserPreferences::default());

        assert_eq!(week.weekly_data.len(), 2);
        assert_eq!(week.weekly_data[1].date, "9999-12-31");
        assert_eq!(week.weekly_averages.calories, 29);
    }
}

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Date;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    pub id: String,
    pub user_id: String,
    pub recipe_id: String,
    #[serde(with = "crate::day")]
    pub plan_date: Date,
    pub meal_type: MealSlot,
    pub servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_meal_slot_wire_form() {
        assert_eq!(MealSlot::Breakfast.as_ref(), "breakfast");
        assert_eq!(MealSlot::from_str("snack").unwrap(), MealSlot::Snack);
        assert_eq!(MealSlot::VARIANTS.len(), 4);
    }

    #[test]
    fn test_entry_round_trips_plan_date() {
        let entry: MealPlanEntry = serde_json::from_str(
            r#"{"id":"m1","user_id":"u1","recipe_id":"r1","plan_date":"2025-03-10","meal_type":"dinner","servings":2}"#,
        )
        .unwrap();
        assert_eq!(crate::format_day(entry.plan_date), "2025-03-10");
        assert_eq!(entry.meal_type, MealSlot::Dinner);
        assert!(entry.notes.is_none());
    }
}

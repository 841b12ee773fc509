use mealwise_shared::{DietaryCategory, UserPreferences};
use serde::Deserialize;

/// Partial preference update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PreferencesPatch {
    pub dietary_restrictions: Option<Vec<DietaryCategory>>,
    pub allergies: Option<Vec<String>>,
    pub disliked_ingredients: Option<Vec<String>>,
    pub daily_calorie_target: Option<f64>,
    pub daily_protein_target: Option<f64>,
    pub daily_carbs_target: Option<f64>,
    pub daily_fat_target: Option<f64>,
}

fn clean(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .collect()
}

impl PreferencesPatch {
    pub fn apply(self, current: UserPreferences) -> UserPreferences {
        UserPreferences {
            dietary_restrictions: self
                .dietary_restrictions
                .unwrap_or(current.dietary_restrictions),
            allergies: self.allergies.map(clean).unwrap_or(current.allergies),
            disliked_ingredients: self
                .disliked_ingredients
                .map(clean)
                .unwrap_or(current.disliked_ingredients),
            daily_calorie_target: self
                .daily_calorie_target
                .unwrap_or(current.daily_calorie_target),
            daily_protein_target: self
                .daily_protein_target
                .unwrap_or(current.daily_protein_target),
            daily_carbs_target: self.daily_carbs_target.unwrap_or(current.daily_carbs_target),
            daily_fat_target: self.daily_fat_target.unwrap_or(current.daily_fat_target),
        }
    }
}

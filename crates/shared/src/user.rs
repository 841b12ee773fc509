use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::DietaryCategory;

pub const DEFAULT_CALORIE_TARGET: f64 = 2000.0;
pub const DEFAULT_PROTEIN_TARGET: f64 = 50.0;
pub const DEFAULT_CARBS_TARGET: f64 = 250.0;
pub const DEFAULT_FAT_TARGET: f64 = 70.0;

/// Dietary constraints and daily macro targets.
///
/// # Business Rules
///
/// - Restrictions, allergies and dislikes compare case-insensitively against
///   recipe tags and ingredient names
/// - Targets are bounded: calories 500..=10000, protein 0..=500,
///   carbs 0..=1000, fat 0..=500
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UserPreferences {
    pub dietary_restrictions: Vec<DietaryCategory>,
    pub allergies: Vec<String>,
    pub disliked_ingredients: Vec<String>,
    #[validate(range(
        min = 500.0,
        max = 10000.0,
        message = "Daily calorie target must be between 500 and 10000"
    ))]
    pub daily_calorie_target: f64,
    #[validate(range(
        min = 0.0,
        max = 500.0,
        message = "Daily protein target must be between 0 and 500"
    ))]
    pub daily_protein_target: f64,
    #[validate(range(
        min = 0.0,
        max = 1000.0,
        message = "Daily carbs target must be between 0 and 1000"
    ))]
    pub daily_carbs_target: f64,
    #[validate(range(
        min = 0.0,
        max = 500.0,
        message = "Daily fat target must be between 0 and 500"
    ))]
    pub daily_fat_target: f64,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            dietary_restrictions: vec![],
            allergies: vec![],
            disliked_ingredients: vec![],
            daily_calorie_target: DEFAULT_CALORIE_TARGET,
            daily_protein_target: DEFAULT_PROTEIN_TARGET,
            daily_carbs_target: DEFAULT_CARBS_TARGET,
            daily_fat_target: DEFAULT_FAT_TARGET,
        }
    }
}

impl UserPreferences {
    pub fn allergies_lowercase(&self) -> Vec<String> {
        self.allergies.iter().map(|a| a.trim().to_lowercase()).collect()
    }

    pub fn dislikes_lowercase(&self) -> Vec<String> {
        self.disliked_ingredients
            .iter()
            .map(|d| d.trim().to_lowercase())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub preferences: UserPreferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences_are_valid() {
        let preferences = UserPreferences::default();
        assert!(preferences.validate().is_ok());
        assert_eq!(preferences.daily_calorie_target, 2000.0);
    }

    #[test]
    fn test_calorie_target_bounds() {
        let preferences = UserPreferences {
            daily_calorie_target: 499.0,
            ..Default::default()
        };
        assert!(preferences.validate().is_err());

        let preferences = UserPreferences {
            daily_calorie_target: 10000.0,
            ..Default::default()
        };
        assert!(preferences.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let preferences: UserPreferences =
            serde_json::from_str(r#"{"allergies":["Peanuts"]}"#).unwrap();
        assert_eq!(preferences.allergies_lowercase(), vec!["peanuts"]);
        assert_eq!(preferences.daily_fat_target, 70.0);
    }
}

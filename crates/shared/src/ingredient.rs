use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
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
pub enum IngredientCategory {
    Vegetable,
    Fruit,
    Protein,
    Grain,
    Dairy,
    Spice,
    Oil,
    Nut,
    #[default]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub calories_per_gram: f64,
    pub protein_per_gram: f64,
    pub fat_per_gram: f64,
    pub carbs_per_gram: f64,
    #[serde(default)]
    pub category: IngredientCategory,
}

impl Ingredient {
    pub fn lowercase_name(&self) -> String {
        self.name.to_lowercase()
    }
}

use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub id: String,
    pub ingredient_id: String,
    pub quantity_grams: f64,
    #[serde(with = "crate::day")]
    pub added_date: Date,
    #[serde(default, with = "crate::option_day")]
    pub expiry_date: Option<Date>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pantry {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<PantryItem>,
}

impl Pantry {
    pub fn empty(id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            items: vec![],
        }
    }

    /// Ingredient ids currently stocked, in pantry order.
    pub fn ingredient_ids(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.ingredient_id.as_str()).collect()
    }

    /// First row stocking `ingredient_id`.
    pub fn item_for(&self, ingredient_id: &str) -> Option<&PantryItem> {
        self.items.iter().find(|i| i.ingredient_id == ingredient_id)
    }

    /// On-hand grams, 0 when the ingredient is not stocked.
    pub fn quantity_of(&self, ingredient_id: &str) -> f64 {
        self.item_for(ingredient_id)
            .map(|i| i.quantity_grams)
            .unwrap_or(0.0)
    }

    /// Presence check, additionally gated on quantity when `required_quantity > 0`.
    pub fn has_ingredient(&self, ingredient_id: &str, required_quantity: f64) -> bool {
        match self.item_for(ingredient_id) {
            Some(item) if required_quantity > 0.0 => item.quantity_grams >= required_quantity,
            Some(_) => true,
            None => false,
        }
    }
}

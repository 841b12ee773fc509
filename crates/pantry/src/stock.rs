use mealwise_shared::{Ingredient, IngredientLookup, Pantry, PantryItem};
use serde::Serialize;
use time::Date;

/// Adds `quantity_grams` of an ingredient.
///
/// An already stocked ingredient has its row incremented, and its expiry
/// replaced only when a new one is given. Otherwise a row is appended.
pub fn add_to_pantry(
    pantry: &mut Pantry,
    ingredient_id: &str,
    quantity_grams: f64,
    expiry_date: Option<Date>,
    today: Date,
) {
    if let Some(item) = pantry
        .items
        .iter_mut()
        .find(|i| i.ingredient_id == ingredient_id)
    {
        item.quantity_grams += quantity_grams;
        if expiry_date.is_some() {
            item.expiry_date = expiry_date;
        }
        return;
    }

    pantry.items.push(PantryItem {
        id: mealwise_shared::new_id(),
        ingredient_id: ingredient_id.to_owned(),
        quantity_grams,
        added_date: today,
        expiry_date,
    });
}

/// Overwrites the quantity of an item. Returns false when no item has `item_id`.
pub fn set_quantity(pantry: &mut Pantry, item_id: &str, quantity_grams: f64) -> bool {
    match pantry.items.iter_mut().find(|i| i.id == item_id) {
        Some(item) => {
            item.quantity_grams = quantity_grams;
            true
        }
        None => false,
    }
}

pub fn remove_from_pantry(pantry: &mut Pantry, item_id: &str) {
    pantry.items.retain(|i| i.id != item_id);
}

#[derive(Debug, Clone, Serialize)]
pub struct PantryItemView {
    #[serde(flatten)]
    pub item: PantryItem,
    pub ingredient: Option<Ingredient>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PantryView {
    pub id: String,
    pub items: Vec<PantryItemView>,
}

impl PantryView {
    pub fn new(pantry: Pantry, lookup: &impl IngredientLookup) -> Self {
        Self {
            id: pantry.id,
            items: pantry
                .items
                .into_iter()
                .map(|item| PantryItemView {
                    ingredient: lookup.ingredient(&item.ingredient_id).cloned(),
                    item,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_add_increments_existing_row() {
        let mut pantry = Pantry::empty("p", "u");
        add_to_pantry(&mut pantry, "rice", 200.0, None, date!(2025 - 01 - 01));
        add_to_pantry(&mut pantry, "rice", 50.0, None, date!(2025 - 01 - 02));

        assert_eq!(pantry.items.len(), 1);
        assert_eq!(pantry.items[0].quantity_grams, 250.0);
        assert_eq!(pantry.items[0].added_date, date!(2025 - 01 - 01));
    }

    #[test]
    fn test_add_keeps_expiry_unless_given() {
        let mut pantry = Pantry::empty("p", "u");
        let today = date!(2025 - 01 - 01);
        add_to_pantry(&mut pantry, "milk", 1000.0, Some(date!(2025 - 01 - 08)), today);
        add_to_pantry(&mut pantry, "milk", 500.0, None, today);
        assert_eq!(pantry.items[0].expiry_date, Some(date!(2025 - 01 - 08)));

        add_to_pantry(&mut pantry, "milk", 500.0, Some(date!(2025 - 01 - 10)), today);
        assert_eq!(pantry.items[0].expiry_date, Some(date!(2025 - 01 - 10)));
    }

    #[test]
    fn test_set_quantity_and_remove() {
        let mut pantry = Pantry::empty("p", "u");
        add_to_pantry(&mut pantry, "rice", 200.0, None, date!(2025 - 01 - 01));
        let id = pantry.items[0].id.to_owned();

        assert!(set_quantity(&mut pantry, &id, 20.0));
        assert_eq!(pantry.items[0].quantity_grams, 20.0);
        assert!(!set_quantity(&mut pantry, "unknown", 1.0));

        remove_from_pantry(&mut pantry, "unknown");
        assert_eq!(pantry.items.len(), 1);
        remove_from_pantry(&mut pantry, &id);
        assert!(pantry.items.is_empty());
    }
}

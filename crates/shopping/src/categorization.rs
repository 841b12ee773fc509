use mealwise_shared::{IngredientCategory, OrderedMap};

use crate::ShoppingItem;

/// Shopping items bucketed by ingredient category, categories in first-seen order.
pub type CategorizedItems = OrderedMap<IngredientCategory, Vec<ShoppingItem>>;

pub struct CategorizationService;

impl CategorizationService {
    /// Groups items by their ingredient's category, keeping item order inside each group.
    pub fn categorize(items: Vec<ShoppingItem>) -> CategorizedItems {
        let mut groups = CategorizedItems::new();

        for item in items {
            groups
                .entry_or_insert_with(item.ingredient.category, Vec::new)
                .push(item);
        }

        groups
    }

    pub fn total_items(groups: &CategorizedItems) -> usize {
        groups.values().map(Vec::len).sum()
    }
}

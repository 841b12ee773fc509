use std::sync::Arc;

use mealwise_shared::{Catalog, IngredientRepository, Pantry, PantryRepository};
use time::Date;
use validator::Validate;

use crate::{PantryView, add_to_pantry, remove_from_pantry, set_quantity};

#[derive(Validate, Clone, Debug)]
pub struct AddItemInput {
    #[validate(length(min = 1, message = "Ingredient ID is required"))]
    pub ingredient_id: String,
    #[validate(range(exclusive_min = 0.0, message = "Quantity must be greater than 0"))]
    pub quantity_grams: f64,
    pub expiry_date: Option<Date>,
}

#[derive(Validate, Clone, Debug)]
pub struct UpdateItemInput {
    #[validate(range(min = 0.0, message = "Quantity must not be negative"))]
    pub quantity_grams: f64,
}

#[derive(Clone)]
pub struct Command {
    pantries: Arc<dyn PantryRepository>,
    ingredients: Arc<dyn IngredientRepository>,
}

impl Command {
    pub fn new(
        pantries: Arc<dyn PantryRepository>,
        ingredients: Arc<dyn IngredientRepository>,
    ) -> Self {
        Self {
            pantries,
            ingredients,
        }
    }

    async fn existing(&self, user_id: &str) -> mealwise_shared::Result<Pantry> {
        match self.pantries.find_by_user(user_id).await? {
            Some(pantry) => Ok(pantry),
            None => mealwise_shared::not_found!("pantry"),
        }
    }

    async fn view_of(&self, pantry: Pantry) -> mealwise_shared::Result<PantryView> {
        let ids = pantry
            .items
            .iter()
            .map(|i| i.ingredient_id.to_owned())
            .collect::<Vec<_>>();
        let catalog = Catalog::new(self.ingredients.find_many(&ids).await?);

        Ok(PantryView::new(pantry, &catalog))
    }

    pub async fn get_or_create(&self, user_id: &str) -> mealwise_shared::Result<Pantry> {
        if let Some(pantry) = self.pantries.find_by_user(user_id).await? {
            return Ok(pantry);
        }

        let pantry = Pantry::empty(mealwise_shared::new_id(), user_id);
        self.pantries.save(pantry.clone()).await?;
        tracing::debug!(user_id, pantry_id = %pantry.id, "pantry created");

        Ok(pantry)
    }

    #[tracing::instrument(skip(self, input), fields(ingredient_id = %input.ingredient_id))]
    pub async fn add(
        &self,
        user_id: &str,
        input: AddItemInput,
    ) -> mealwise_shared::Result<PantryView> {
        input.validate()?;

        if self.ingredients.find(&input.ingredient_id).await?.is_none() {
            mealwise_shared::not_found!("ingredient");
        }

        let mut pantry = self.get_or_create(user_id).await?;
        add_to_pantry(
            &mut pantry,
            &input.ingredient_id,
            input.quantity_grams,
            input.expiry_date,
            mealwise_shared::today(),
        );
        self.pantries.save(pantry.clone()).await?;

        self.view_of(pantry).await
    }

    #[tracing::instrument(skip(self, input))]
    pub async fn update(
        &self,
        user_id: &str,
        item_id: &str,
        input: UpdateItemInput,
    ) -> mealwise_shared::Result<PantryView> {
        input.validate()?;

        let mut pantry = self.existing(user_id).await?;
        if !set_quantity(&mut pantry, item_id, input.quantity_grams) {
            mealwise_shared::not_found!("pantry item");
        }
        self.pantries.save(pantry.clone()).await?;

        self.view_of(pantry).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, user_id: &str, item_id: &str) -> mealwise_shared::Result<PantryView> {
        let mut pantry = self.existing(user_id).await?;
        remove_from_pantry(&mut pantry, item_id);
        self.pantries.save(pantry.clone()).await?;

        self.view_of(pantry).await
    }

    pub async fn view(&self, user_id: &str) -> mealwise_shared::Result<PantryView> {
        let pantry = self.get_or_create(user_id).await?;

        self.view_of(pantry).await
    }
}

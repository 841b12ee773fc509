use validator::Validate;

use super::CreateInput;

impl super::Command {
    /// Creates every recipe of a batch without a creator, so anyone may edit them.
    ///
    /// The whole batch is validated before anything is written.
    #[tracing::instrument(skip_all, fields(count = inputs.len()))]
    pub async fn import(&self, inputs: Vec<CreateInput>) -> mealwise_shared::Result<Vec<String>> {
        let mut recipes = Vec::with_capacity(inputs.len());
        for input in inputs {
            let input = input.normalized();
            input.validate()?;

            let recipe = input.into_recipe(mealwise_shared::new_id(), None);
            self.ensure_ingredients(&recipe).await?;
            recipes.push(recipe);
        }

        let mut ids = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            ids.push(recipe.id.to_owned());
            self.recipes.save(recipe).await?;
        }

        Ok(ids)
    }
}

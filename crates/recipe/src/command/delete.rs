impl super::Command {
    #[tracing::instrument(skip(self, request_by))]
    pub async fn delete_recipe(
        &self,
        id: &str,
        request_by: impl Into<String>,
    ) -> mealwise_shared::Result<()> {
        let recipe = self.load(id).await?;
        Self::ensure_owner(&recipe, &request_by.into())?;

        if !self.recipes.delete(&recipe.id).await? {
            mealwise_shared::not_found!("recipe");
        }

        Ok(())
    }
}

use std::sync::Arc;

use mealwise_shared::{DietaryCategory, User, UserPreferences, UserRepository};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::PreferencesPatch;

#[derive(Validate, Clone, Debug)]
pub struct CreateInput {
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[validate(nested)]
    pub preferences: UserPreferences,
}

fn validate_restrictions(preferences: &UserPreferences) -> mealwise_shared::Result<()> {
    preferences.validate()?;

    if preferences
        .dietary_restrictions
        .contains(&DietaryCategory::None)
    {
        let mut errors = ValidationErrors::new();
        errors.add(
            "dietary_restrictions",
            ValidationError::new("none").with_message("none is not a dietary restriction".into()),
        );
        return Err(errors.into());
    }

    Ok(())
}

#[derive(Clone)]
pub struct Command(Arc<dyn UserRepository>);

impl Command {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self(users)
    }

    #[tracing::instrument(skip(self, input))]
    pub async fn create(&self, input: CreateInput) -> mealwise_shared::Result<User> {
        let input = CreateInput {
            email: input.email.trim().to_lowercase(),
            ..input
        };
        input.validate()?;
        validate_restrictions(&input.preferences)?;

        if self.0.find_by_email(&input.email).await?.is_some() {
            mealwise_shared::conflict!("User already exists");
        }

        let user = User {
            id: mealwise_shared::new_id(),
            email: input.email,
            preferences: input.preferences,
        };
        self.0.save(user.clone()).await?;
        tracing::info!(user_id = %user.id, "user created");

        Ok(user)
    }

    pub async fn find(&self, user_id: &str) -> mealwise_shared::Result<User> {
        match self.0.find(user_id).await? {
            Some(user) => Ok(user),
            None => mealwise_shared::not_found!("user"),
        }
    }

    #[tracing::instrument(skip(self, patch))]
    pub async fn update_preferences(
        &self,
        user_id: &str,
        patch: PreferencesPatch,
    ) -> mealwise_shared::Result<User> {
        let mut user = self.find(user_id).await?;
        let preferences = patch.apply(user.preferences);
        validate_restrictions(&preferences)?;

        user.preferences = preferences;
        self.0.save(user.clone()).await?;

        Ok(user)
    }
}

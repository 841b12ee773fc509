use clap::{Args, Subcommand};
use mealwise_shared::{DietaryCategory, UserPreferences};
use mealwise_user::{Command, CreateInput, PreferencesPatch};
use serde_json::Value;

use super::{Context, to_data};

/// Preference flags; repeated flags build the lists.
#[derive(Args, Debug, Default)]
pub struct PreferenceArgs {
    /// Dietary restriction, repeatable
    #[arg(long = "restriction")]
    pub restrictions: Vec<DietaryCategory>,

    /// Allergen name, repeatable
    #[arg(long = "allergy")]
    pub allergies: Vec<String>,

    /// Disliked ingredient name, repeatable
    #[arg(long = "dislike")]
    pub dislikes: Vec<String>,

    /// Clear restrictions, allergies and dislikes before applying the flags above
    #[arg(long)]
    pub reset_lists: bool,

    #[arg(long)]
    pub calories: Option<f64>,

    #[arg(long)]
    pub protein: Option<f64>,

    #[arg(long)]
    pub carbs: Option<f64>,

    #[arg(long)]
    pub fat: Option<f64>,
}

impl PreferenceArgs {
    fn list<T>(values: Vec<T>, reset: bool) -> Option<Vec<T>> {
        (reset || !values.is_empty()).then_some(values)
    }

    fn into_patch(self) -> PreferencesPatch {
        PreferencesPatch {
            dietary_restrictions: Self::list(self.restrictions, self.reset_lists),
            allergies: Self::list(self.allergies, self.reset_lists),
            disliked_ingredients: Self::list(self.dislikes, self.reset_lists),
            daily_calorie_target: self.calories,
            daily_protein_target: self.protein,
            daily_carbs_target: self.carbs,
            daily_fat_target: self.fat,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Register a user
    Add {
        #[arg(long)]
        email: String,

        #[command(flatten)]
        preferences: PreferenceArgs,
    },
    /// Show a user, the acting user by default
    Show { id: Option<String> },
    /// Update the acting user's preferences, omitted flags are kept
    Preferences {
        #[command(flatten)]
        preferences: PreferenceArgs,
    },
}

impl UserCommands {
    pub fn mutates(&self) -> bool {
        !matches!(self, UserCommands::Show { .. })
    }
}

pub(super) async fn run(
    command: UserCommands,
    ctx: &Context<'_>,
) -> mealwise_shared::Result<Value> {
    let users = Command::new(ctx.store.state().users);

    match command {
        UserCommands::Add { email, preferences } => {
            let preferences = preferences.into_patch().apply(UserPreferences::default());
            to_data(users.create(CreateInput { email, preferences }).await?)
        }
        UserCommands::Show { id } => {
            to_data(users.find(id.as_deref().unwrap_or(ctx.user_id)).await?)
        }
        UserCommands::Preferences { preferences } => {
            let user = users
                .update_preferences(ctx.user_id, preferences.into_patch())
                .await?;
            to_data(user)
        }
    }
}

use std::cmp::Ordering;

use mealwise_shared::{DietaryCategory, MealSlot, ResolvedRecipe, UserPreferences};
use serde::Serialize;

use crate::{NutritionalInfo, PantryMatch, PantryStock, match_pantry, nutritional_info};

pub const DIETARY_MISMATCH_PENALTY: f64 = 50.0;
pub const DISLIKED_INGREDIENT_PENALTY: f64 = 30.0;
pub const FULL_PANTRY_BONUS: f64 = 20.0;
/// Score forced on recipes containing an allergen.
pub const ALLERGEN_SCORE: f64 = -1000.0;
/// Recipes scoring at or below this are dropped.
pub const SCORE_FLOOR: f64 = -100.0;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct SuggestOptions {
    pub max_cooking_time: Option<u32>,
    /// Carried through for callers, never filtered on.
    pub meal_type: Option<MealSlot>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub recipe: ResolvedRecipe,
    pub match_percentage: i64,
    pub missing_count: usize,
    pub score: f64,
    pub dietary_match: bool,
    pub has_allergens: bool,
    pub has_disliked_ingredients: bool,
    pub nutritional_info: NutritionalInfo,
}

fn within_cooking_time(recipe: &ResolvedRecipe, max_cooking_time: Option<u32>) -> bool {
    max_cooking_time.is_none_or(|max| recipe.recipe.cooking_time_minutes <= max)
}

fn dietary_match(recipe: &ResolvedRecipe, restrictions: &[DietaryCategory]) -> bool {
    restrictions.is_empty()
        || restrictions.iter().any(|r| recipe.recipe.has_tag(*r))
        || recipe.recipe.has_tag(DietaryCategory::None)
}

#[derive(Debug, Clone, Copy)]
struct Scored {
    pantry: PantryMatch,
    score: f64,
    dietary_match: bool,
    has_allergens: bool,
    has_disliked_ingredients: bool,
}

fn score(recipe: &ResolvedRecipe, preferences: &PreferenceSet, stock: &PantryStock) -> Scored {
    let pantry = match_pantry(&recipe.recipe, stock);
    let names = recipe.ingredient_names();
    let dietary_match = dietary_match(recipe, &preferences.restrictions);
    let has_disliked_ingredients = names.iter().any(|n| preferences.dislikes.contains(n));
    let has_allergens = names.iter().any(|n| preferences.allergies.contains(n));

    let mut score = pantry.match_percentage;
    if !dietary_match {
        score -= DIETARY_MISMATCH_PENALTY;
    }
    if has_disliked_ingredients {
        score -= DISLIKED_INGREDIENT_PENALTY;
    }
    if has_allergens {
        score = ALLERGEN_SCORE;
    }
    if pantry.is_complete() {
        score += FULL_PANTRY_BONUS;
    }

    Scored {
        pantry,
        score,
        dietary_match,
        has_allergens,
        has_disliked_ingredients,
    }
}

struct PreferenceSet {
    restrictions: Vec<DietaryCategory>,
    allergies: Vec<String>,
    dislikes: Vec<String>,
}

impl From<&UserPreferences> for PreferenceSet {
    fn from(value: &UserPreferences) -> Self {
        Self {
            restrictions: value.dietary_restrictions.to_vec(),
            allergies: value.allergies_lowercase(),
            dislikes: value.dislikes_lowercase(),
        }
    }
}

/// Scores, filters and orders candidate recipes for a user.
///
/// # Business Rules
///
/// - Score starts at the pantry match percentage
/// - A dietary mismatch costs 50, a disliked ingredient costs 30
/// - An allergen forces the score to [`ALLERGEN_SCORE`]
/// - A fully stocked recipe earns 20
/// - Allergen recipes and scores at or below [`SCORE_FLOOR`] are dropped
/// - Order is score descending, then missing count ascending, then input order
/// - The limit is applied after sorting, a zero limit means the default
pub fn suggest(
    candidates: Vec<ResolvedRecipe>,
    preferences: &UserPreferences,
    stock: &PantryStock,
    options: &SuggestOptions,
) -> Vec<Suggestion> {
    let preference_set = PreferenceSet::from(preferences);

    let mut ranked = candidates
        .into_iter()
        .filter(|r| within_cooking_time(r, options.max_cooking_time))
        .map(|r| (score(&r, &preference_set, stock), r))
        .filter(|(s, _)| !s.has_allergens && s.score > SCORE_FLOOR)
        .collect::<Vec<_>>();

    ranked.sort_by(|(a, _), (b, _)| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.pantry.missing_count.cmp(&b.pantry.missing_count))
    });

    ranked
        .into_iter()
        .take(
            options
                .limit
                .filter(|limit| *limit > 0)
                .unwrap_or(DEFAULT_SUGGESTION_LIMIT),
        )
        .map(|(s, recipe)| Suggestion {
            nutritional_info: nutritional_info(&recipe),
            recipe,
            match_percentage: s.pantry.match_percentage.round() as i64,
            missing_count: s.pantry.missing_count,
            score: s.score,
            dietary_match: s.dietary_match,
            has_allergens: s.has_allergens,
            has_disliked_ingredients: s.has_disliked_ingredients,
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    pub search: Option<String>,
    pub max_cooking_time: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FoundRecipe {
    pub recipe: ResolvedRecipe,
    pub match_percentage: f64,
    pub missing_count: usize,
    pub nutritional_info: NutritionalInfo,
}

/// Plain browse ranking: restriction and cooking time filters, pantry order.
///
/// Unlike [`suggest`] there is no scoring layer, no `none` tag exception and
/// no limit. Restrictions apply only when the user has some.
pub fn find(
    candidates: Vec<ResolvedRecipe>,
    restrictions: &[DietaryCategory],
    stock: &PantryStock,
    options: &FindOptions,
) -> Vec<FoundRecipe> {
    let search = options
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut found = candidates
        .into_iter()
        .filter(|r| within_cooking_time(r, options.max_cooking_time))
        .filter(|r| restrictions.is_empty() || restrictions.iter().any(|t| r.recipe.has_tag(*t)))
        .map(|r| (match_pantry(&r.recipe, stock), r))
        .collect::<Vec<_>>();

    found.sort_by(|(a, _), (b, _)| {
        b.match_percentage
            .partial_cmp(&a.match_percentage)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.missing_count.cmp(&b.missing_count))
    });

    found
        .into_iter()
        .filter(|(_, r)| {
            search
                .as_ref()
                .is_none_or(|s| r.recipe.name.to_lowercase().contains(s))
        })
        .map(|(m, recipe)| FoundRecipe {
            nutritional_info: nutritional_info(&recipe),
            recipe,
            match_percentage: m.match_percentage,
            missing_count: m.missing_count,
        })
        .collect()
}

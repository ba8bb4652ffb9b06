//! Recipe domain types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RecipeError;

/// Shortest accepted prep time, in minutes.
pub const PREP_TIME_MIN: u32 = 1;

/// Longest accepted prep time, in minutes.
pub const PREP_TIME_MAX: u32 = 240;

/// Lowest accepted rating.
pub const RATING_MIN: f64 = 1.0;

/// Highest accepted rating.
pub const RATING_MAX: f64 = 5.0;

/// How hard a recipe is to cook.
///
/// Parsing is case-insensitive, both through `FromStr` and serde; display
/// and serialization use the capitalized form (`Easy`, `Medium`, `Hard`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(try_from = "String")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse user text into a difficulty, reporting a domain error on failure.
    pub fn parse(value: &str) -> Result<Self, RecipeError> {
        Self::from_str(value.trim()).map_err(|_| RecipeError::UnknownDifficulty(value.to_string()))
    }
}

impl TryFrom<String> for Difficulty {
    type Error = RecipeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// A recipe stored in the table.
///
/// `name` is the table key; everything else is payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique name within a store.
    pub name: String,
    /// Cuisine label, e.g. "Italian".
    pub cuisine: String,
    /// Ingredients in the order they were entered.
    pub ingredients: Vec<String>,
    /// Preparation time in minutes.
    pub prep_time: u32,
    pub difficulty: Difficulty,
    /// Rating from 1.0 to 5.0.
    pub rating: f64,
}

impl Recipe {
    /// Build a recipe from already-validated parts.
    pub fn new(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        ingredients: &[&str],
        prep_time: u32,
        difficulty: Difficulty,
        rating: f64,
    ) -> Self {
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
            ingredients: ingredients.iter().map(|s| (*s).to_string()).collect(),
            prep_time,
            difficulty,
            rating,
        }
    }

    /// Ingredients joined for display, e.g. "Pasta, Eggs".
    pub fn ingredient_list(&self) -> String {
        self.ingredients.join(", ")
    }
}

/// An unvalidated add-recipe submission.
///
/// Field names match the add form so adapters can deserialize form posts
/// and JSON bodies straight into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeDraft {
    pub name: String,
    pub cuisine: String,
    /// Comma-separated ingredient text.
    pub ingredients: String,
    pub prep_time: u32,
    pub difficulty: Difficulty,
    pub rating: f64,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            cuisine: String::new(),
            ingredients: String::new(),
            prep_time: PREP_TIME_MIN,
            difficulty: Difficulty::Easy,
            rating: 3.0,
        }
    }
}

impl RecipeDraft {
    /// Validate the submission and turn it into a storable recipe.
    ///
    /// Name and cuisine are trimmed; a value that is empty after trimming is
    /// rejected. Prep time and rating must lie within the form bounds.
    pub fn validate(&self) -> Result<Recipe, RecipeError> {
        let name = self.name.trim();
        let cuisine = self.cuisine.trim();
        if name.is_empty() || cuisine.is_empty() {
            return Err(RecipeError::MissingNameOrCuisine);
        }

        if !(PREP_TIME_MIN..=PREP_TIME_MAX).contains(&self.prep_time) {
            return Err(RecipeError::PrepTimeOutOfRange {
                value: self.prep_time,
                min: PREP_TIME_MIN,
                max: PREP_TIME_MAX,
            });
        }

        if !(RATING_MIN..=RATING_MAX).contains(&self.rating) {
            return Err(RecipeError::RatingOutOfRange {
                value: self.rating,
                min: RATING_MIN,
                max: RATING_MAX,
            });
        }

        Ok(Recipe {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            ingredients: parse_ingredients(&self.ingredients),
            prep_time: self.prep_time,
            difficulty: self.difficulty,
            rating: self.rating,
        })
    }
}

/// Split comma-separated ingredient text into trimmed tokens.
///
/// Tokens that are empty after trimming are dropped, so `"a,,b, "` yields
/// `["a", "b"]` and empty input yields no ingredients.
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

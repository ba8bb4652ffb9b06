//! Domain types, independent of any adapter concerns.

mod recipe;

pub use recipe::{
    Difficulty, PREP_TIME_MAX, PREP_TIME_MIN, RATING_MAX, RATING_MIN, Recipe, RecipeDraft,
    parse_ingredients,
};

//! Domain error types.
//!
//! Adapters map `RecipeError` to their own error types (`HttpError`, CLI
//! exit messages). Validation variants are user-facing and their `Display`
//! output is shown verbatim next to the add-recipe form.

use thiserror::Error;

/// Errors raised by recipe validation and lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecipeError {
    /// Name or cuisine was blank.
    #[error("Please provide at least a recipe name and cuisine type")]
    MissingNameOrCuisine,

    /// Prep time outside the accepted range.
    #[error("Prep time must be between {min} and {max} minutes, got {value}")]
    PrepTimeOutOfRange { value: u32, min: u32, max: u32 },

    /// Rating outside the accepted range (or not a number).
    #[error("Rating must be between {min:.1} and {max:.1}, got {value}")]
    RatingOutOfRange { value: f64, min: f64, max: f64 },

    /// A numeric form field that is empty or not a number.
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    /// Difficulty text that is not Easy, Medium or Hard.
    #[error("Unknown difficulty '{0}' (expected Easy, Medium or Hard)")]
    UnknownDifficulty(String),

    /// No recipe with the given name.
    #[error("Recipe not found: {0}")]
    NotFound(String),
}

impl RecipeError {
    /// True for errors caused by a bad submission rather than a missing entity.
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_is_user_facing() {
        assert_eq!(
            RecipeError::MissingNameOrCuisine.to_string(),
            "Please provide at least a recipe name and cuisine type"
        );
    }

    #[test]
    fn not_a_number_names_the_field() {
        let err = RecipeError::NotANumber {
            field: "Rating",
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "Rating must be a number, got 'abc'");
    }

    #[test]
    fn not_found_is_not_validation() {
        assert!(!RecipeError::NotFound("Soup".into()).is_validation());
        assert!(RecipeError::MissingNameOrCuisine.is_validation());
        assert!(RecipeError::NotANumber {
            field: "Prep time",
            value: String::new()
        }
        .is_validation());
    }
}

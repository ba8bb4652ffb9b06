//! Core domain for Culinary Compass.
//!
//! This crate owns the recipe table and every piece of logic that operates on
//! it: validation of submitted recipes, the filter predicates used by the
//! explorer and search pages, and the aggregations that feed the charts.
//! It has no knowledge of HTTP, HTML, or SVG.
//!
//! # Architecture
//!
//! ```text
//! Adapters:     compass-cli       compass-axum
//!                    ↓                 ↓
//! Views:             └── compass-ui ───┘
//!                            ↓
//! Core:                compass-core
//! ```

#![deny(unused_crate_dependencies)]

pub mod analytics;
pub mod domain;
pub mod error;
pub mod filter;
pub mod store;

// Re-export commonly used types for convenience
pub use analytics::{
    CuisineCount, DEFAULT_HISTOGRAM_BINS, HistogramBin, PrepTimeHistogram, WordCount,
    cuisine_counts, ingredient_text, word_frequencies,
};
pub use domain::{
    Difficulty, PREP_TIME_MAX, PREP_TIME_MIN, RATING_MAX, RATING_MIN, Recipe, RecipeDraft,
    parse_ingredients,
};
pub use error::RecipeError;
pub use filter::{
    DEFAULT_MAX_PREP_TIME, DEFAULT_MIN_RATING, MAX_PREP_TIME_CEILING, MIN_PREP_TIME_CEILING,
    SearchCriteria, by_cuisine, search,
};
pub use store::{AddOutcome, RecipeStore};

#[cfg(test)]
use serde_json as _;

//! Request and response bodies for the JSON API.

use compass_core::{AddOutcome, Recipe, SearchCriteria};
use serde::{Deserialize, Serialize};

/// Query for `GET /api/recipes`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Restrict to one cuisine (exact match).
    pub cuisine: Option<String>,
}

/// Response for `POST /api/recipes`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddRecipeResponse {
    pub outcome: AddOutcome,
    pub recipe: Recipe,
}

/// Response for `GET /api/recipes/search`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Criteria after clamping, as actually applied.
    pub criteria: SearchCriteria,
    pub count: usize,
    pub recipes: Vec<Recipe>,
}

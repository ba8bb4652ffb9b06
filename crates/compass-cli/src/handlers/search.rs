//! Search command handler.

use compass_core::{Difficulty, RecipeStore, SearchCriteria, search};
use compass_ui::SearchParams;
use compass_ui::pages::search::{NO_MATCHES, found_heading};

use crate::presentation::recipe_table;

/// Criteria for the given flags. No `--difficulty` means the default set.
pub fn criteria(
    max_time: Option<u32>,
    min_rating: Option<f64>,
    difficulty: Vec<Difficulty>,
) -> SearchCriteria {
    SearchParams {
        max_time,
        min_rating,
        difficulty,
        submitted: None,
    }
    .into_criteria()
}

pub fn render(store: &RecipeStore, criteria: &SearchCriteria) -> String {
    let found = search(store, criteria);
    if found.is_empty() {
        return NO_MATCHES.to_string();
    }
    format!("{}\n\n{}", found_heading(found.len()), recipe_table(found))
}

pub fn execute(max_time: Option<u32>, min_rating: Option<f64>, difficulty: Vec<Difficulty>) {
    let criteria = criteria(max_time, min_rating, difficulty);
    tracing::debug!(?criteria, "running search");
    print!("{}", render(&RecipeStore::seeded(), &criteria));
}

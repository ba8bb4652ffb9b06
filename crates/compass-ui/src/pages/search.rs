//! Advanced search: prep-time ceiling, rating floor, difficulty set.

use compass_core::{
    DEFAULT_MAX_PREP_TIME, DEFAULT_MIN_RATING, Difficulty, RecipeStore, SearchCriteria, search,
};
use serde::Deserialize;

use crate::nav::NavMode;
use crate::view::{Block, Notice, View};

/// Message shown when nothing matches.
pub const NO_MATCHES: &str = "No recipes match these criteria. Try adjusting your filters!";

/// Heading above the search results, e.g. "🍳 Found 2 Matching Recipes".
pub fn found_heading(count: usize) -> String {
    let noun = if count == 1 { "Recipe" } else { "Recipes" };
    format!("🍳 Found {count} Matching {noun}")
}

/// Query parameters posted by the search controls.
///
/// The controls always send `submitted`, so a request without it is the
/// first visit and gets the default difficulty set. A submitted request with
/// no `difficulty` values means the user cleared every box.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub max_time: Option<u32>,
    pub min_rating: Option<f64>,
    pub difficulty: Vec<Difficulty>,
    pub submitted: Option<String>,
}

impl SearchParams {
    /// Convert to clamped search criteria.
    pub fn into_criteria(self) -> SearchCriteria {
        let defaults = SearchCriteria::default();
        let difficulties = if self.submitted.is_none() && self.difficulty.is_empty() {
            defaults.difficulties
        } else {
            self.difficulty.into_iter().collect()
        };
        SearchCriteria {
            max_prep_time: self.max_time.unwrap_or(DEFAULT_MAX_PREP_TIME),
            min_rating: self.min_rating.unwrap_or(DEFAULT_MIN_RATING),
            difficulties,
        }
        .clamped()
    }
}

/// Build the search page for the given criteria.
pub fn view(store: &RecipeStore, criteria: &SearchCriteria) -> View {
    let found = search(store, criteria);
    let mut blocks = vec![
        Block::heading("🔍 Advanced Search"),
        Block::SearchControls(criteria.clone()),
    ];

    if found.is_empty() {
        blocks.push(Block::Notice(Notice::warning(NO_MATCHES)));
    } else {
        blocks.push(Block::subheading(found_heading(found.len())));
        blocks.push(Block::Cards(found.into_iter().cloned().collect()));
    }

    View::new(NavMode::Search, blocks)
}

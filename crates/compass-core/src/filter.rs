//! Filter predicates over the recipe table.
//!
//! These functions are pure: they borrow the store and return the matching
//! recipes in store order. An empty result is a valid answer, not an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::{Difficulty, RATING_MAX, RATING_MIN, Recipe};
use crate::store::RecipeStore;

/// Lowest prep-time ceiling offered by the search controls.
pub const MIN_PREP_TIME_CEILING: u32 = 5;

/// Highest prep-time ceiling offered by the search controls.
pub const MAX_PREP_TIME_CEILING: u32 = 120;

/// Prep-time ceiling used before the user touches the controls.
pub const DEFAULT_MAX_PREP_TIME: u32 = 60;

/// Rating floor used before the user touches the controls.
pub const DEFAULT_MIN_RATING: f64 = 3.0;

/// Inputs to the advanced search.
///
/// A recipe matches when `prep_time <= max_prep_time`,
/// `rating >= min_rating`, and its difficulty is in `difficulties`.
/// Both comparisons are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub max_prep_time: u32,
    pub min_rating: f64,
    pub difficulties: BTreeSet<Difficulty>,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            max_prep_time: DEFAULT_MAX_PREP_TIME,
            min_rating: DEFAULT_MIN_RATING,
            difficulties: [Difficulty::Easy, Difficulty::Medium].into_iter().collect(),
        }
    }
}

impl SearchCriteria {
    pub fn new(
        max_prep_time: u32,
        min_rating: f64,
        difficulties: impl IntoIterator<Item = Difficulty>,
    ) -> Self {
        Self {
            max_prep_time,
            min_rating,
            difficulties: difficulties.into_iter().collect(),
        }
    }

    /// Pull the numeric inputs into the ranges the search controls offer.
    ///
    /// Adapters call this on untrusted input; the predicate itself accepts
    /// any values. A NaN rating falls back to the default floor.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.max_prep_time = self
            .max_prep_time
            .clamp(MIN_PREP_TIME_CEILING, MAX_PREP_TIME_CEILING);
        self.min_rating = if self.min_rating.is_nan() {
            DEFAULT_MIN_RATING
        } else {
            self.min_rating.clamp(RATING_MIN, RATING_MAX)
        };
        self
    }

    /// The search predicate.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        recipe.prep_time <= self.max_prep_time
            && recipe.rating >= self.min_rating
            && self.difficulties.contains(&recipe.difficulty)
    }
}

/// Recipes matching the search criteria, in store order.
pub fn search<'a>(store: &'a RecipeStore, criteria: &SearchCriteria) -> Vec<&'a Recipe> {
    store.iter().filter(|r| criteria.matches(r)).collect()
}

/// Recipes whose cuisine equals `cuisine` exactly, in store order.
pub fn by_cuisine<'a>(store: &'a RecipeStore, cuisine: &str) -> Vec<&'a Recipe> {
    store.iter().filter(|r| r.cuisine == cuisine).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    fn all_difficulties() -> BTreeSet<Difficulty> {
        Difficulty::iter().collect()
    }

    fn names(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_default_criteria_match_seed() {
        let store = RecipeStore::seeded();
        let found = search(&store, &SearchCriteria::default());
        // Tikka Masala is Hard and excluded by the default difficulty set.
        assert_eq!(
            names(&found),
            vec!["Spaghetti Carbonara", "Avocado Toast"]
        );
    }

    #[test]
    fn test_prep_time_ceiling_is_inclusive() {
        let store = RecipeStore::seeded();
        let criteria = SearchCriteria::new(20, 1.0, Difficulty::iter());
        assert_eq!(
            names(&search(&store, &criteria)),
            vec!["Spaghetti Carbonara", "Avocado Toast"]
        );
    }

    #[test]
    fn test_rating_floor_is_inclusive() {
        let store = RecipeStore::seeded();
        let criteria = SearchCriteria::new(120, 4.8, Difficulty::iter());
        assert_eq!(names(&search(&store, &criteria)), vec!["Chicken Tikka Masala"]);
    }

    #[test]
    fn test_empty_difficulty_set_matches_nothing() {
        let store = RecipeStore::seeded();
        let criteria = SearchCriteria::new(240, 1.0, []);
        assert!(search(&store, &criteria).is_empty());
    }

    #[test]
    fn test_by_cuisine_exact_match() {
        let store = RecipeStore::seeded();
        assert_eq!(names(&by_cuisine(&store, "Indian")), vec!["Chicken Tikka Masala"]);
        assert!(by_cuisine(&store, "indian").is_empty());
        assert!(by_cuisine(&store, "French").is_empty());
    }

    #[test]
    fn test_clamped_pulls_values_into_control_range() {
        let criteria = SearchCriteria::new(500, 9.0, []).clamped();
        assert_eq!(criteria.max_prep_time, MAX_PREP_TIME_CEILING);
        assert!((criteria.min_rating - RATING_MAX).abs() < f64::EPSILON);

        let criteria = SearchCriteria::new(0, f64::NAN, []).clamped();
        assert_eq!(criteria.max_prep_time, MIN_PREP_TIME_CEILING);
        assert!((criteria.min_rating - DEFAULT_MIN_RATING).abs() < f64::EPSILON);
    }

    fn arb_recipe() -> impl Strategy<Value = Recipe> {
        (
            "[a-z]{1,8}",
            prop::sample::select(vec!["Italian", "Indian", "Thai"]),
            1u32..=240,
            prop::sample::select(vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]),
            10u32..=50,
        )
            .prop_map(|(name, cuisine, prep_time, difficulty, rating10)| {
                Recipe::new(
                    name,
                    cuisine,
                    &["salt"],
                    prep_time,
                    difficulty,
                    f64::from(rating10) / 10.0,
                )
            })
    }

    fn arb_store() -> impl Strategy<Value = RecipeStore> {
        prop::collection::vec(arb_recipe(), 0..20).prop_map(|extra| {
            let mut store = RecipeStore::seeded();
            for recipe in extra {
                store.upsert(recipe);
            }
            store
        })
    }

    proptest! {
        #[test]
        fn prop_prep_time_filter_is_exact(store in arb_store(), ceiling in 0u32..=250) {
            let criteria = SearchCriteria::new(ceiling, RATING_MIN, Difficulty::iter());
            let found = search(&store, &criteria);
            let expected: Vec<&Recipe> =
                store.iter().filter(|r| r.prep_time <= ceiling).collect();
            prop_assert_eq!(found, expected);
        }

        #[test]
        fn prop_rating_floor_is_exact(store in arb_store(), floor10 in 10u32..=50) {
            let floor = f64::from(floor10) / 10.0;
            let criteria = SearchCriteria::new(u32::MAX, floor, Difficulty::iter());
            let found = search(&store, &criteria);
            let expected: Vec<&Recipe> = store.iter().filter(|r| r.rating >= floor).collect();
            prop_assert_eq!(found, expected);
        }

        #[test]
        fn prop_empty_difficulty_set_is_empty(store in arb_store()) {
            let criteria = SearchCriteria::new(u32::MAX, 0.0, []);
            prop_assert!(search(&store, &criteria).is_empty());
        }

        #[test]
        fn prop_matches_are_subset_of_store(store in arb_store()) {
            let found = search(&store, &SearchCriteria::new(60, 3.0, all_difficulties()));
            prop_assert!(found.len() <= store.len());
            for recipe in found {
                prop_assert_eq!(store.get(&recipe.name), Some(recipe));
            }
        }
    }
}

//! Aggregations that feed the analytics charts.
//!
//! Each function takes any iterator of recipes so callers can chart the
//! whole store or a filtered subset. All of them return an empty result for
//! empty input; the renderers decide what an empty chart looks like.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::Recipe;

/// Number of prep-time buckets in the distribution chart.
pub const DEFAULT_HISTOGRAM_BINS: usize = 8;

// ─────────────────────────────────────────────────────────────────────────────
// Ingredient words
// ─────────────────────────────────────────────────────────────────────────────

/// One word of the ingredient cloud and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// All ingredients of all recipes joined by spaces.
pub fn ingredient_text<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> String {
    recipes
        .into_iter()
        .map(|r| r.ingredients.join(" "))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Word frequencies across every ingredient, most frequent first.
///
/// Multi-word ingredients contribute each word ("Tomato Sauce" counts
/// "Tomato" and "Sauce"). Words are compared case-insensitively and shown in
/// the casing they first appeared with. Single-character tokens are ignored.
/// Ties keep first-appearance order.
pub fn word_frequencies<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Vec<WordCount> {
    let text = ingredient_text(recipes);
    let mut counts: Vec<WordCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for token in text.split(|c: char| !(c.is_alphanumeric() || c == '\'')) {
        let word = token.trim_matches('\'');
        if word.chars().count() < 2 {
            continue;
        }
        let key = word.to_lowercase();
        if let Some(&i) = positions.get(&key) {
            counts[i].count += 1;
        } else {
            positions.insert(key, counts.len());
            counts.push(WordCount {
                word: word.to_string(),
                count: 1,
            });
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

// ─────────────────────────────────────────────────────────────────────────────
// Prep time distribution
// ─────────────────────────────────────────────────────────────────────────────

/// A half-open bucket `[start, end)`; the last bucket also includes `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Equal-width histogram of prep times.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrepTimeHistogram {
    bins: Vec<HistogramBin>,
}

impl PrepTimeHistogram {
    /// Bucket prep times into `bins` equal-width bins spanning min..=max.
    ///
    /// When every recipe has the same prep time the range is widened by half
    /// a minute on each side so the single value sits in the middle.
    /// A `bins` of zero is treated as one.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn from_recipes<'a>(recipes: impl IntoIterator<Item = &'a Recipe>, bins: usize) -> Self {
        let times: Vec<f64> = recipes
            .into_iter()
            .map(|r| f64::from(r.prep_time))
            .collect();
        if times.is_empty() {
            return Self::default();
        }

        let bins = bins.max(1);
        let mut lo = times.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if (hi - lo).abs() < f64::EPSILON {
            lo -= 0.5;
            hi += 0.5;
        }
        let width = (hi - lo) / bins as f64;

        let mut counts = vec![0usize; bins];
        for t in &times {
            let idx = (((t - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                start: (i as f64).mul_add(width, lo),
                end: ((i + 1) as f64).mul_add(width, lo),
                count,
            })
            .collect();
        Self { bins }
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Total number of recipes counted.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Height of the tallest bar.
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cuisine counts
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineCount {
    pub cuisine: String,
    pub count: usize,
}

/// Recipes per cuisine, most common first; ties ordered by cuisine name.
pub fn cuisine_counts<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Vec<CuisineCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for recipe in recipes {
        *counts.entry(recipe.cuisine.as_str()).or_default() += 1;
    }

    let mut counts: Vec<CuisineCount> = counts
        .into_iter()
        .map(|(cuisine, count)| CuisineCount {
            cuisine: cuisine.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.cuisine.cmp(&b.cuisine)));
    counts
}

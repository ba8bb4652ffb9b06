//! In-memory recipe table.
//!
//! One `RecipeStore` exists per session. It is created with the seed recipes,
//! grows through [`RecipeStore::add`], and is never persisted.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::domain::{Difficulty, Recipe, RecipeDraft};
use crate::error::RecipeError;

/// Result of a successful add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    /// A new name was added to the table.
    Inserted,
    /// An existing entry with the same name was overwritten.
    Replaced,
}

/// Recipe table keyed by name.
///
/// Iteration follows insertion order. Overwriting an entry keeps its
/// original position.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    index: HashMap<String, usize>,
}

impl RecipeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the three starter recipes every session begins with.
    pub fn seeded() -> Self {
        Self::from_recipes(seed_recipes())
    }

    /// Create a store from recipes; later duplicates overwrite earlier ones.
    pub fn from_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        let mut store = Self::new();
        for recipe in recipes {
            store.upsert(recipe);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// All recipes in insertion order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// Look up a recipe by exact name.
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.index.get(name).map(|&i| &self.recipes[i])
    }

    /// Look up a recipe by exact name, failing with `NotFound`.
    pub fn require(&self, name: &str) -> Result<&Recipe, RecipeError> {
        self.get(name)
            .ok_or_else(|| RecipeError::NotFound(name.to_string()))
    }

    /// Distinct cuisines, sorted ascending.
    pub fn cuisines(&self) -> Vec<&str> {
        self.recipes
            .iter()
            .map(|r| r.cuisine.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Validate a submission and store it.
    ///
    /// On a validation error the table is left untouched.
    pub fn add(&mut self, draft: &RecipeDraft) -> Result<AddOutcome, RecipeError> {
        let recipe = draft.validate()?;
        let outcome = self.upsert(recipe);
        tracing::debug!(name = %draft.name.trim(), ?outcome, "recipe stored");
        Ok(outcome)
    }

    /// Insert or overwrite a recipe that is already valid.
    pub fn upsert(&mut self, recipe: Recipe) -> AddOutcome {
        if let Some(&i) = self.index.get(&recipe.name) {
            self.recipes[i] = recipe;
            AddOutcome::Replaced
        } else {
            self.index.insert(recipe.name.clone(), self.recipes.len());
            self.recipes.push(recipe);
            AddOutcome::Inserted
        }
    }
}

impl<'a> IntoIterator for &'a RecipeStore {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Spaghetti Carbonara",
            "Italian",
            &["Pasta", "Eggs", "Cheese", "Bacon"],
            20,
            Difficulty::Medium,
            4.5,
        ),
        Recipe::new(
            "Chicken Tikka Masala",
            "Indian",
            &["Chicken", "Yogurt", "Spices", "Tomato Sauce"],
            45,
            Difficulty::Hard,
            4.8,
        ),
        Recipe::new(
            "Avocado Toast",
            "American",
            &["Bread", "Avocado", "Salt", "Pepper"],
            5,
            Difficulty::Easy,
            3.7,
        ),
    ]
}

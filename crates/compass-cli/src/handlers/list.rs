//! List command handler.

use compass_core::{RecipeStore, by_cuisine};

use crate::presentation::recipe_table;

/// Text for `compass list`, optionally restricted to one cuisine.
pub fn render(store: &RecipeStore, cuisine: Option<&str>) -> String {
    let recipes = match cuisine {
        Some(cuisine) => by_cuisine(store, cuisine),
        None => store.iter().collect(),
    };

    if recipes.is_empty() {
        return match cuisine {
            Some(cuisine) => format!(
                "No {cuisine} recipes found. Available cuisines: {}",
                store.cuisines().join(", ")
            ),
            None => "No recipes found.".to_string(),
        };
    }

    format!(
        "Found {} recipe(s):\n\n{}",
        recipes.len(),
        recipe_table(recipes)
    )
}

pub fn execute(cuisine: Option<&str>) {
    let store = RecipeStore::seeded();
    print!("{}", render(&store, cuisine));
}

//! Table formatting for terminal output.

use compass_core::Recipe;

/// Truncates a string to `max_len` characters, adding "..." if needed.
///
/// ```rust
/// use compass_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Carbonara", 12), "Carbonara");
/// assert_eq!(truncate_string("Avocado Toast", 8), "Avoca...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Render recipes as a fixed-width table with a header row.
pub fn recipe_table<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> String {
    let mut out = format!(
        "{:<25} {:<12} {:>5} {:<10} {:>6}  Ingredients\n",
        "Name", "Cuisine", "Prep", "Difficulty", "Rating"
    );
    out.push_str(&"-".repeat(90));
    out.push('\n');

    for recipe in recipes {
        out.push_str(&format!(
            "{:<25} {:<12} {:>5} {:<10} {:>6.1}  {}\n",
            truncate_string(&recipe.name, 24),
            truncate_string(&recipe.cuisine, 11),
            recipe.prep_time,
            recipe.difficulty,
            recipe.rating,
            truncate_string(&recipe.ingredient_list(), 30),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_core::RecipeStore;

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_string("crème brûlée", 12), "crème brûlée");
        assert_eq!(truncate_string("crème brûlée", 8), "crème...");
    }

    #[test]
    fn test_recipe_table_rows() {
        let store = RecipeStore::seeded();
        let table = recipe_table(&store);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[2].starts_with("Spaghetti Carbonara"));
        assert!(lines[3].contains("4.8"));
        assert!(lines[4].contains("Easy"));
    }
}

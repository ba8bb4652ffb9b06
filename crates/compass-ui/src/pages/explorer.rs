//! Cuisine explorer: pick a cuisine, see its recipes next to the ingredient cloud.

use compass_core::{RecipeStore, by_cuisine};

use crate::charts::{Chart, ChartKind};
use crate::nav::NavMode;
use crate::view::{Block, Notice, View};

/// Build the explorer page.
///
/// `cuisine` falls back to the alphabetically first cuisine when it is absent
/// or not present in the store.
pub fn view(store: &RecipeStore, cuisine: Option<&str>) -> View {
    let options: Vec<String> = store.cuisines().into_iter().map(str::to_string).collect();
    let selected = cuisine
        .and_then(|c| options.iter().find(|o| o.as_str() == c))
        .or_else(|| options.first())
        .cloned();

    let mut left = vec![
        Block::heading("🌍 Cuisine Explorer"),
        Block::CuisinePicker {
            options: options.clone(),
            selected: selected.clone(),
        },
    ];
    match selected {
        Some(ref c) => {
            let cards = by_cuisine(store, c).into_iter().cloned().collect();
            left.push(Block::Cards(cards));
        }
        None => left.push(Block::Notice(Notice::info(
            "No recipes yet. Add one to start exploring!",
        ))),
    }

    let right = vec![
        Block::heading("📈 Ingredient Cloud"),
        Block::Chart(Chart::render(ChartKind::IngredientCloud, store)),
    ];

    View::new(NavMode::Explorer, vec![Block::Columns(vec![left, right])])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_first_cuisine() {
        let store = RecipeStore::seeded();
        let page = view(&store, None);
        let cards = page.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "Avocado Toast");
    }

    #[test]
    fn test_selected_cuisine_filters_cards() {
        let store = RecipeStore::seeded();
        let page = view(&store, Some("Italian"));
        let names: Vec<&str> = page.cards().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Spaghetti Carbonara"]);
    }

    #[test]
    fn test_unknown_cuisine_falls_back() {
        let store = RecipeStore::seeded();
        let page = view(&store, Some("Martian"));
        assert_eq!(page.cards()[0].cuisine, "American");
    }

    #[test]
    fn test_always_includes_cloud() {
        let store = RecipeStore::seeded();
        let page = view(&store, None);
        assert_eq!(page.charts().len(), 1);
        assert_eq!(page.charts()[0].kind, ChartKind::IngredientCloud);
    }

    #[test]
    fn test_empty_store_shows_notice() {
        let store = RecipeStore::new();
        let page = view(&store, None);
        assert!(page.cards().is_empty());
        assert_eq!(page.notices().len(), 1);
        assert_eq!(page.charts().len(), 1);
    }
}

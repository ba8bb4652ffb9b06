//! Ingredient word cloud.
//!
//! Words are sized by frequency and flowed into centred rows. When the rows
//! overflow the canvas every font is shrunk and the layout retried; whatever
//! still does not fit after the smallest scale is dropped, least frequent
//! first.

#![allow(clippy::cast_precision_loss)]

use compass_core::{Recipe, WordCount, word_frequencies};

use super::svg::{Anchor, SvgCanvas, placeholder};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const PADDING: f64 = 16.0;
const MAX_FONT: f64 = 64.0;
const MIN_FONT: f64 = 14.0;
const SMALLEST_SCALE: f64 = 0.25;
const MAX_WORDS: usize = 200;
const PALETTE: [&str; 6] = ["#ff6b6b", "#4d96ff", "#6bcb77", "#ffa94d", "#845ec2", "#00a8a8"];

struct Placed<'a> {
    word: &'a str,
    size: f64,
    width: f64,
    color: &'static str,
}

struct Row<'a> {
    items: Vec<Placed<'a>>,
    width: f64,
    height: f64,
}

impl Row<'_> {
    const fn new() -> Self {
        Self {
            items: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Rough advance width of `word` at `size`; good enough for sans-serif text.
fn text_width(word: &str, size: f64) -> f64 {
    word.chars().count() as f64 * size * 0.6
}

fn layout(words: &[WordCount], scale: f64) -> Vec<Row<'_>> {
    let max_count = words.first().map_or(1, |w| w.count) as f64;
    let usable = 2.0f64.mul_add(-PADDING, WIDTH);
    let mut rows = Vec::new();
    let mut row = Row::new();

    for (i, w) in words.iter().enumerate() {
        let size = ((MAX_FONT - MIN_FONT) * (w.count as f64 / max_count) + MIN_FONT) * scale;
        let gap = size * 0.4;
        let width = text_width(&w.word, size);
        if !row.items.is_empty() && row.width + gap + width > usable {
            rows.push(std::mem::replace(&mut row, Row::new()));
        }
        if !row.items.is_empty() {
            row.width += gap;
        }
        row.width += width;
        row.height = row.height.max(size * 1.2);
        row.items.push(Placed {
            word: &w.word,
            size,
            width,
            color: PALETTE[i % PALETTE.len()],
        });
    }
    if !row.items.is_empty() {
        rows.push(row);
    }
    rows
}

fn total_height(rows: &[Row<'_>]) -> f64 {
    rows.iter().map(|r| r.height).sum()
}

pub fn render<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> String {
    let mut words = word_frequencies(recipes);
    if words.is_empty() {
        return placeholder(WIDTH, HEIGHT, "No ingredients to show yet");
    }
    words.truncate(MAX_WORDS);

    let usable_height = 2.0f64.mul_add(-PADDING, HEIGHT);
    let mut scale = 1.0;
    let mut rows = layout(&words, scale);
    while total_height(&rows) > usable_height && scale > SMALLEST_SCALE {
        scale *= 0.9;
        rows = layout(&words, scale);
    }

    let mut used = 0.0;
    rows.retain(|r| {
        used += r.height;
        used <= usable_height
    });

    let mut canvas = SvgCanvas::new(WIDTH, HEIGHT, "white");
    let mut y = (canvas.height() - total_height(&rows)) / 2.0;
    for row in &rows {
        let baseline = row.height.mul_add(0.8, y);
        let mut x = (canvas.width() - row.width) / 2.0;
        for item in &row.items {
            canvas.text(x, baseline, item.size, Anchor::Start, item.color, item.word);
            x += item.width + item.size * 0.4;
        }
        y += row.height;
    }
    canvas.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_core::{Difficulty, RecipeStore};

    #[test]
    fn test_every_seed_word_is_drawn() {
        let store = RecipeStore::seeded();
        let svg = render(&store);
        for word in ["Pasta", "Chicken", "Tomato", "Sauce", "Avocado", "Pepper"] {
            assert!(svg.contains(&format!(">{word}</text>")), "missing {word}");
        }
    }

    #[test]
    fn test_frequent_words_are_larger() {
        let recipes = [
            Recipe::new("A", "X", &["Garlic", "Onion"], 5, Difficulty::Easy, 4.0),
            Recipe::new("B", "X", &["Garlic"], 5, Difficulty::Easy, 4.0),
        ];
        let words = word_frequencies(&recipes);
        let rows = layout(&words, 1.0);
        let garlic = &rows[0].items[0];
        let onion = &rows[0].items[1];
        assert_eq!(garlic.word, "Garlic");
        assert!(garlic.size > onion.size);
    }

    #[test]
    fn test_many_words_stay_on_canvas() {
        let ingredients: Vec<String> = (0..300).map(|i| format!("ingredient{i}")).collect();
        let refs: Vec<&str> = ingredients.iter().map(String::as_str).collect();
        let recipes = [Recipe::new("Big", "X", &refs, 5, Difficulty::Easy, 4.0)];
        let svg = render(&recipes);
        assert!(svg.ends_with("</svg>"));
        assert!(svg.matches("<text").count() <= MAX_WORDS);
    }

    #[test]
    fn test_no_ingredients_placeholder() {
        let recipes = [Recipe::new("Air", "X", &[], 5, Difficulty::Easy, 4.0)];
        assert!(render(&recipes).contains("No ingredients to show yet"));
    }
}

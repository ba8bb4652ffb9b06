//! Render descriptions returned by the view functions.
//!
//! A `View` says *what* a page shows; `html::render_page` decides how.

use compass_core::{Recipe, RecipeDraft, SearchCriteria};
use serde::Serialize;

use crate::charts::Chart;
use crate::nav::NavMode;
use crate::pages::AnalyticsTab;

/// A fully described page for one navigation mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub mode: NavMode,
    pub blocks: Vec<Block>,
}

impl View {
    pub const fn new(mode: NavMode, blocks: Vec<Block>) -> Self {
        Self { mode, blocks }
    }

    /// All notices on the page, including those nested in columns.
    pub fn notices(&self) -> Vec<&Notice> {
        fn walk<'a>(blocks: &'a [Block], out: &mut Vec<&'a Notice>) {
            for block in blocks {
                match block {
                    Block::Notice(n) => out.push(n),
                    Block::Columns(cols) => cols.iter().for_each(|c| walk(c, out)),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.blocks, &mut out);
        out
    }

    /// All recipe cards on the page, in display order.
    pub fn cards(&self) -> Vec<&Recipe> {
        fn walk<'a>(blocks: &'a [Block], out: &mut Vec<&'a Recipe>) {
            for block in blocks {
                match block {
                    Block::Cards(cards) => out.extend(cards.iter()),
                    Block::Columns(cols) => cols.iter().for_each(|c| walk(c, out)),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.blocks, &mut out);
        out
    }

    /// All charts on the page.
    pub fn charts(&self) -> Vec<&Chart> {
        fn walk<'a>(blocks: &'a [Block], out: &mut Vec<&'a Chart>) {
            for block in blocks {
                match block {
                    Block::Chart(c) => out.push(c),
                    Block::Columns(cols) => cols.iter().for_each(|c| walk(c, out)),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.blocks, &mut out);
        out
    }
}

/// One element of a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Block {
    Heading {
        text: String,
    },
    Subheading {
        text: String,
    },
    /// Recipe cards, one per recipe.
    Cards(Vec<Recipe>),
    Notice(Notice),
    Chart(Chart),
    /// Dropdown of cuisines; `selected` is one of `options` when present.
    CuisinePicker {
        options: Vec<String>,
        selected: Option<String>,
    },
    /// Prep-time slider, rating slider and difficulty multi-select.
    SearchControls(SearchCriteria),
    /// The add-recipe form, prefilled from the draft.
    RecipeForm(RecipeDraft),
    /// Analytics tab strip.
    Tabs {
        active: AnalyticsTab,
    },
    /// Side-by-side columns.
    Columns(Vec<Vec<Block>>),
}

impl Block {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    pub fn subheading(text: impl Into<String>) -> Self {
        Self::Subheading { text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A one-line message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{ViewRequest, dispatch};
    use compass_core::RecipeStore;

    #[test]
    fn test_view_serializes_with_block_tags() {
        let mut store = RecipeStore::seeded();
        let view = dispatch(&mut store, ViewRequest::initial(NavMode::Search));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["mode"], "search");
        assert_eq!(json["blocks"][0]["type"], "heading");
        assert_eq!(json["blocks"][1]["type"], "search_controls");
        assert_eq!(json["blocks"][3]["type"], "cards");
        assert_eq!(json["blocks"][3]["data"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_walkers_descend_into_columns() {
        let mut store = RecipeStore::seeded();
        let view = dispatch(&mut store, ViewRequest::initial(NavMode::Explorer));
        assert_eq!(view.blocks.len(), 1);
        assert_eq!(view.cards().len(), 1);
        assert_eq!(view.charts().len(), 1);
        assert!(view.notices().is_empty());
    }
}

//! Chart rendering.
//!
//! Charts are emitted as standalone SVG documents so they can be inlined in a
//! page, served from their own URL, or written to disk by the CLI. Every
//! renderer accepts an empty recipe set and draws a placeholder instead of
//! failing.

mod bars;
mod histogram;
mod svg;
mod word_cloud;

use compass_core::Recipe;
use serde::Serialize;
use std::str::FromStr;

use crate::error::UiError;

/// The three visualizations on offer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ChartKind {
    /// Word cloud of every ingredient word.
    #[strum(serialize = "ingredients")]
    #[serde(rename = "ingredients")]
    IngredientCloud,
    /// Histogram of prep times.
    #[strum(serialize = "prep-times")]
    #[serde(rename = "prep-times")]
    PrepTimeHistogram,
    /// Bar chart of recipes per cuisine.
    #[strum(serialize = "cuisines")]
    #[serde(rename = "cuisines")]
    CuisineBars,
}

impl ChartKind {
    /// Short name used in URLs and file names.
    pub fn slug(self) -> &'static str {
        self.into()
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::IngredientCloud => "🥕 Ingredient Cloud",
            Self::PrepTimeHistogram => "⏱️ Cooking Time Distribution",
            Self::CuisineBars => "🌍 Recipes per Cuisine",
        }
    }

    /// Parse a slug such as `"prep-times"`.
    pub fn parse(value: &str) -> Result<Self, UiError> {
        Self::from_str(value).map_err(|_| UiError::UnknownChart(value.to_string()))
    }
}

/// A rendered chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    pub kind: ChartKind,
    /// Complete `<svg>` document.
    pub svg: String,
}

impl Chart {
    pub fn render<'a>(kind: ChartKind, recipes: impl IntoIterator<Item = &'a Recipe>) -> Self {
        Self {
            kind,
            svg: render_chart(kind, recipes),
        }
    }
}

/// Render one chart over the given recipes as an SVG document.
pub fn render_chart<'a>(kind: ChartKind, recipes: impl IntoIterator<Item = &'a Recipe>) -> String {
    match kind {
        ChartKind::IngredientCloud => word_cloud::render(recipes),
        ChartKind::PrepTimeHistogram => histogram::render(recipes),
        ChartKind::CuisineBars => bars::render(recipes),
    }
}

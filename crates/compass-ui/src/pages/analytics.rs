//! Food analytics: one chart per tab.

use compass_core::RecipeStore;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::charts::{Chart, ChartKind};
use crate::error::UiError;
use crate::nav::NavMode;
use crate::view::{Block, View};

/// Tabs of the analytics page.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AnalyticsTab {
    /// Prep-time histogram.
    #[default]
    Distribution,
    /// Recipes per cuisine.
    Cuisines,
    /// Ingredient word cloud.
    Ingredients,
}

impl AnalyticsTab {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Distribution => "Distribution",
            Self::Cuisines => "Cuisines",
            Self::Ingredients => "Ingredients",
        }
    }

    pub const fn chart(self) -> ChartKind {
        match self {
            Self::Distribution => ChartKind::PrepTimeHistogram,
            Self::Cuisines => ChartKind::CuisineBars,
            Self::Ingredients => ChartKind::IngredientCloud,
        }
    }

    pub fn parse(value: &str) -> Result<Self, UiError> {
        Self::from_str(value).map_err(|_| UiError::UnknownTab(value.to_string()))
    }
}

/// Build the analytics page showing the chart for `tab`.
pub fn view(store: &RecipeStore, tab: AnalyticsTab) -> View {
    View::new(
        NavMode::Analytics,
        vec![
            Block::heading("📊 Culinary Analytics"),
            Block::Tabs { active: tab },
            Block::Chart(Chart::render(tab.chart(), store)),
        ],
    )
}

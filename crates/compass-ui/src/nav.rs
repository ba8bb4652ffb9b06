//! Navigation modes and the view dispatcher.

use compass_core::{RecipeStore, SearchCriteria};
use serde::{Deserialize, Serialize};

use crate::pages::{self, AddParams, AnalyticsTab};
use crate::view::View;

/// The four top-level pages of the sidebar.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NavMode {
    Explorer,
    Search,
    Add,
    Analytics,
}

impl NavMode {
    /// Sidebar label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Explorer => "🔍 Recipe Explorer",
            Self::Search => "✨ Smart Search",
            Self::Add => "🍳 Add Recipe",
            Self::Analytics => "📊 Food Analytics",
        }
    }

    /// URL path serving this mode.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Explorer => "/explorer",
            Self::Search => "/search",
            Self::Add => "/add",
            Self::Analytics => "/analytics",
        }
    }
}

/// Everything a view function needs beyond the store, keyed by mode.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewRequest {
    /// Show recipes of one cuisine; `None` selects the first cuisine.
    Explorer { cuisine: Option<String> },
    Search(SearchCriteria),
    /// Show the add form; `Some` submits a recipe first.
    Add { submission: Option<AddParams> },
    Analytics { tab: AnalyticsTab },
}

impl ViewRequest {
    pub const fn mode(&self) -> NavMode {
        match self {
            Self::Explorer { .. } => NavMode::Explorer,
            Self::Search(_) => NavMode::Search,
            Self::Add { .. } => NavMode::Add,
            Self::Analytics { .. } => NavMode::Analytics,
        }
    }

    /// The request a mode starts with before the user touches any control.
    pub fn initial(mode: NavMode) -> Self {
        match mode {
            NavMode::Explorer => Self::Explorer { cuisine: None },
            NavMode::Search => Self::Search(SearchCriteria::default()),
            NavMode::Add => Self::Add { submission: None },
            NavMode::Analytics => Self::Analytics {
                tab: AnalyticsTab::default(),
            },
        }
    }
}

/// Run the view function for the request's mode against the session store.
///
/// Only an add submission mutates the store.
pub fn dispatch(store: &mut RecipeStore, request: ViewRequest) -> View {
    tracing::debug!(mode = ?request.mode(), recipes = store.len(), "rendering view");
    match request {
        ViewRequest::Explorer { cuisine } => pages::explorer::view(store, cuisine.as_deref()),
        ViewRequest::Search(criteria) => pages::search::view(store, &criteria),
        ViewRequest::Add { submission } => pages::add::view(store, submission.as_ref()),
        ViewRequest::Analytics { tab } => pages::analytics::view(store, tab),
    }
}

//! View layer shared by the Culinary Compass adapters.
//!
//! Every navigation mode is an explicit view function that takes the
//! session's [`RecipeStore`](compass_core::RecipeStore) and returns a
//! [`View`], a render description with no HTML in it. [`dispatch`] picks the
//! view function for the selected mode. Adapters then either render the
//! description with [`html::render_page`] or pull charts out directly.
//!
//! # Rules
//!
//! 1. **No adapter dependencies** - must not depend on axum, tower, clap.
//! 2. **Explicit state** - the store is always passed in, never global.
//! 3. **Semantic errors** - returns `UiError`; adapters map it to theirs.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod charts;
mod error;
pub mod html;
mod nav;
pub mod pages;
mod view;

pub use charts::{Chart, ChartKind, render_chart};
pub use error::UiError;
pub use nav::{NavMode, ViewRequest, dispatch};
pub use pages::{AddParams, AnalyticsTab, SearchParams};
pub use view::{Block, Notice, NoticeKind, View};


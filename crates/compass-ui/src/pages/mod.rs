//! View functions, one module per navigation mode.
//!
//! Each `view` function borrows the session store and returns a [`View`](crate::View).

pub mod add;
pub mod analytics;
pub mod explorer;
pub mod search;

pub use add::AddParams;
pub use analytics::AnalyticsTab;
pub use search::SearchParams;

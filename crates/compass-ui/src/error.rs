//! Semantic error types for view operations.

use thiserror::Error;

/// Errors raised when adapter input does not name a known view element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("unknown analytics tab: {0}")]
    UnknownTab(String),

    #[error("unknown chart: {0}")]
    UnknownChart(String),
}

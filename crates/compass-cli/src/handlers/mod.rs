//! Command handlers.
//!
//! Each handler is a thin wrapper: convert CLI input, call into
//! `compass-core`/`compass-ui`/`compass-axum`, and format the result for the
//! terminal. The offline commands work on a freshly seeded store.

pub mod charts;
pub mod list;
pub mod search;
pub mod serve;

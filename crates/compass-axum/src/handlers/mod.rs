//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin: they resolve the session, run a view function or a
//! core query against the session's store, and wrap the result.

pub mod charts;
pub mod pages;
pub mod recipes;

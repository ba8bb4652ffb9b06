//! Axum web adapter for Culinary Compass.
//!
//! Serves the four navigation pages as server-rendered HTML, the charts as
//! standalone SVG, and a small JSON API. Every browser session gets its own
//! seeded recipe store, identified by a cookie.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies used only by the integration tests
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod session;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use session::{SESSION_COOKIE, SessionId, SessionRegistry};
pub use state::AppState;

//! Command-line front end for Culinary Compass.
//!
//! `compass serve` runs the web adapter; the remaining commands work on a
//! freshly seeded store and print to the terminal.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary target only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

#[cfg(test)]
use tempfile as _;

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use commands::Commands;
pub use parser::Cli;

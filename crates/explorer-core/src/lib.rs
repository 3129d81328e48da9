//! Core types for the Bikeshare Explorer.
//!
//! Holds the domain model (cities, filters, trip records), the input
//! normalization tables, the shared error type, CLI settings and display
//! formatting helpers. Everything here is pure and synchronous; I/O lives in
//! `explorer-data` and the binary crate.

pub mod error;
pub mod formatting;
pub mod models;
pub mod normalize;
pub mod settings;

pub use error::{ExplorerError, Result};

//! Data layer for the Bikeshare Explorer.
//!
//! Responsible for loading city CSV datasets into trip tables with derived
//! time columns, computing the four descriptive-statistics passes, and
//! windowing raw rows for pagination.

pub mod loader;
pub mod paginator;
pub mod stats;

pub use explorer_core as core;

//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the store catalog (RON) and the game
//! configuration (TOML), plus the default data bundled with the game:
//! - `data/catalog.ron`: foods and toys sold in the store
//! - `data/config.toml`: day count, allowance, treatment cost, score weights
//!
//! Content is consumed by the runtime and never mutated during a game.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, default_catalog, default_config};

/// Directory holding the bundled data files.
pub const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

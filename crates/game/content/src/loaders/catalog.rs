//! Store catalog loader.

use std::collections::HashSet;
use std::path::Path;

use pet_core::Catalog;

use crate::loaders::{LoadResult, read_file};

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.ron");

/// Loader for the store catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse catalog RON text.
    ///
    /// Rejects duplicate names within a category, negative prices and
    /// non-positive portion sizes or durabilities.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let catalog: Catalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;
        validate(&catalog)?;
        Ok(catalog)
    }
}

/// The catalog shipped with the game.
pub fn default_catalog() -> LoadResult<Catalog> {
    CatalogLoader::parse(BUNDLED_CATALOG)
}

fn validate(catalog: &Catalog) -> LoadResult<()> {
    let mut seen = HashSet::new();
    for food in &catalog.foods {
        anyhow::ensure!(seen.insert(&food.name), "duplicate food '{}'", food.name);
        anyhow::ensure!(food.price >= 0, "food '{}' has a negative price", food.name);
        anyhow::ensure!(
            food.portion_size > 0,
            "food '{}' must have a positive portion size",
            food.name
        );
    }

    seen.clear();
    for toy in &catalog.toys {
        anyhow::ensure!(seen.insert(&toy.name), "duplicate toy '{}'", toy.name);
        anyhow::ensure!(toy.price >= 0, "toy '{}' has a negative price", toy.name);
        anyhow::ensure!(
            toy.durability > 0,
            "toy '{}' must have a positive durability",
            toy.name
        );
    }
    Ok(())
}

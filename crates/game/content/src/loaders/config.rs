//! Game configuration loader.

use std::path::Path;

use pet_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

const BUNDLED_CONFIG: &str = include_str!("../../data/config.toml");

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing GameConfig
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(config.number_of_days > 0, "number_of_days must be at least 1");
        anyhow::ensure!(config.daily_allowance >= 0, "daily_allowance must not be negative");
        anyhow::ensure!(config.treatment_cost >= 0, "treatment_cost must not be negative");

        Ok(config)
    }
}

/// The configuration shipped with the game.
pub fn default_config() -> LoadResult<GameConfig> {
    ConfigLoader::parse(BUNDLED_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        assert_eq!(default_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config = ConfigLoader::parse(
            r#"
            number_of_days = 8

            [score]
            dead_pet_penalty = 100
            "#,
        )
        .unwrap();

        assert_eq!(config.number_of_days, 8);
        assert_eq!(config.daily_allowance, GameConfig::DEFAULT_DAILY_ALLOWANCE);
        assert_eq!(config.score.dead_pet_penalty, 100);
        assert_eq!(config.score.balance, 1);
    }

    #[test]
    fn zero_days_is_rejected() {
        let err = ConfigLoader::parse("number_of_days = 0").unwrap_err();
        assert!(err.to_string().contains("number_of_days"));
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = ConfigLoader::parse("number_of_days = \"five\"").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config TOML"));
    }
}

//! Client builder: content loading and roster setup.

use crate::Client;
use anyhow::{Context, Result};
use pet_content::ContentFactory;
use pet_runtime::{Caretaker, GameSession, RuntimeConfig};

/// Builder for constructing a Client with proper validation.
#[derive(Default)]
pub struct ClientBuilder {
    config: Option<RuntimeConfig>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime configuration (defaults to [`RuntimeConfig::default`]).
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the data directory cannot be read or parsed
    /// - the roster breaks a game rule (too many players, duplicate names)
    pub fn build(self) -> Result<Client> {
        let config = self.config.unwrap_or_default();

        let factory = match &config.data_dir {
            Some(dir) => ContentFactory::new(dir),
            None => ContentFactory::bundled(),
        };
        tracing::debug!("Loading content from {}", factory.data_dir().display());

        let mut game = factory
            .load_config()
            .with_context(|| format!("loading config from {}", factory.data_dir().display()))?;
        config.apply(&mut game);
        let catalog = factory
            .load_catalog()
            .with_context(|| format!("loading catalog from {}", factory.data_dir().display()))?;

        let seed = config.seed_or_random();
        let mut session = GameSession::new(game, catalog, seed);
        for player in &config.roster {
            session
                .add_player(player)
                .with_context(|| format!("adding player {}", player.name))?;
        }

        Ok(Client {
            session,
            decisions: Caretaker::new(),
            policy: Caretaker::new(),
        })
    }
}

//! Headless client that plays a whole game of virtual pets.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ GameSession (rules, roster, day loop)
//!   └─→ Autopilot (answers events and chooses care actions)
//! ```
//!
//! The client is the composition root: [`ClientBuilder`] loads content,
//! applies runtime overrides and seats the roster, then [`Client::run`] plays
//! every day and returns the final ranking.

mod builder;

pub use builder::ClientBuilder;

use anyhow::Result;
use pet_runtime::{Caretaker, FinalStanding, GameSession};

/// Top-level client container.
pub struct Client {
    session: GameSession,
    decisions: Caretaker,
    policy: Caretaker,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Plays every day and ranks the players.
    pub fn run(mut self) -> Result<Vec<FinalStanding>> {
        while !self.session.is_over() {
            let summary = self
                .session
                .run_day(&mut self.decisions, &mut self.policy)?;
            if summary.deaths() > 0 {
                tracing::warn!(day = summary.day, deaths = summary.deaths(), "pets died");
            }
            for player in &summary.players {
                let actions: u32 = player.pets.iter().map(|pet| pet.actions).sum();
                tracing::debug!(day = summary.day, player = %player.player, actions, "turn finished");
            }
        }
        Ok(self.session.finish())
    }
}

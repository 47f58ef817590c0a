//! Session driver for the virtual pets game.
//!
//! This crate turns the pure rules in `pet-core` into a playable game: it
//! owns the roster, the shared random generator and the day counter, and
//! routes player choices through [`InteractionPolicy`].
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the day loop and end-of-game ranking
//! - [`policy`] defines how players choose care actions, plus built-in players
//! - [`config`] reads runtime settings from the environment
//! - [`error`] collects the failures a session can surface
pub mod config;
pub mod error;
pub mod policy;
pub mod session;

pub use config::{ConfigError, PetSpec, PlayerSpec, RuntimeConfig, parse_roster};
pub use error::{Result, SessionError};
pub use policy::{Caretaker, IdlePolicy, InteractionPolicy, PetAction, ScriptedPolicy, TurnView};
pub use session::{DaySummary, FinalStanding, GameSession, PetDay, PlayerDay};

//! Deterministic rules of the virtual pets game.
//!
//! `pet-core` defines pet vitals, species behavior, the daily event engine,
//! player ledgers and scoring, and exposes pure APIs that the runtime drives.
//! Randomness, the store catalog and player decisions are injected through the
//! traits in [`env`], so a game is reproducible from its seed and its
//! decisions alone.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod ledger;
pub mod pet;
pub mod player;
pub mod scoring;
pub mod stats;

pub use config::{GameConfig, ScoreWeights};
pub use engine::{
    DailyEngine, DayReport, DeathOutcome, EngineError, MisbehaviorOutcome, SicknessOutcome,
};
pub use env::{
    Catalog, CatalogOracle, DecisionKind, DecisionOracle, FixedDecisions, FoodItem, ItemCategory,
    PcgRng, RandomSource, ScriptedDecisions, ScriptedRng, ToyItem,
};
pub use error::{ErrorSeverity, GameError};
pub use ledger::{Ledger, LedgerError};
pub use pet::{ActionError, Gender, Pet, PlayOutcome, Species, SpeciesError, SpeciesProfile};
pub use player::Player;
pub use scoring::{Standing, calculate_score, rank_players};
pub use stats::{StatError, Vital, Vitals};

//! Collaborators the game core consumes but does not own.
//!
//! The catalog, the random source and the decision callback are all passed
//! in explicitly, so the engine can run against scripted stand-ins in tests
//! and against real players or policies in the runtime.
mod catalog;
mod decision;
mod items;
mod rng;

pub use catalog::{Catalog, CatalogOracle};
pub use decision::{DecisionKind, DecisionOracle, FixedDecisions, ScriptedDecisions};
pub use items::{FoodItem, ItemCategory, ToyItem};
pub use rng::{PcgRng, RandomSource, ScriptedRng};

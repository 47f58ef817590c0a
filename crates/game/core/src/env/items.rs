//! Store items: food and toys.
//!
//! Catalog entries are read-only prototypes. A purchase clones the prototype
//! into the buyer's inventory, so each toy wears out on its own.

use std::collections::BTreeMap;

use crate::pet::Species;

/// Food that can be bought and fed to a pet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoodItem {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub price: i64,
    pub portion_size: i32,
    /// Health gained per species; species missing from the map gain nothing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub health_increase: BTreeMap<Species, i32>,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, price: i64, portion_size: i32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            portion_size,
            health_increase: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_health_increase(mut self, species: Species, amount: i32) -> Self {
        self.health_increase.insert(species, amount);
        self
    }

    pub fn health_increase(&self, species: Species) -> i32 {
        self.health_increase.get(&species).copied().unwrap_or(0)
    }
}

/// Toy that can be bought and played with until it wears out.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToyItem {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub price: i64,
    /// Remaining play sessions.
    pub durability: i32,
    /// Happiness gained per species; species missing from the map gain nothing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub happiness_increase: BTreeMap<Species, i32>,
}

impl ToyItem {
    pub fn new(name: impl Into<String>, price: i64, durability: i32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            durability,
            happiness_increase: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_happiness_increase(mut self, species: Species, amount: i32) -> Self {
        self.happiness_increase.insert(species, amount);
        self
    }

    pub fn happiness_increase(&self, species: Species) -> i32 {
        self.happiness_increase.get(&species).copied().unwrap_or(0)
    }

    /// Uses the toy once. Returns true when it is worn out afterwards.
    pub fn wear(&mut self) -> bool {
        self.durability = self.durability.saturating_sub(1);
        self.is_depleted()
    }

    pub fn is_depleted(&self) -> bool {
        self.durability <= 0
    }
}

/// Which inventory list an item belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemCategory {
    Food,
    Toy,
}

use super::items::{FoodItem, ToyItem};

/// Read-only store catalog.
///
/// Loaded once before the first day and never mutated by the game.
pub trait CatalogOracle {
    /// Food prototypes, in display order.
    fn foods(&self) -> &[FoodItem];

    /// Toy prototypes, in display order.
    fn toys(&self) -> &[ToyItem];

    fn food(&self, name: &str) -> Option<&FoodItem> {
        self.foods().iter().find(|food| food.name == name)
    }

    fn toy(&self, name: &str) -> Option<&ToyItem> {
        self.toys().iter().find(|toy| toy.name == name)
    }
}

/// In-memory catalog backed by two ordered lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    #[cfg_attr(feature = "serde", serde(default))]
    pub foods: Vec<FoodItem>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub toys: Vec<ToyItem>,
}

impl Catalog {
    pub fn new(foods: Vec<FoodItem>, toys: Vec<ToyItem>) -> Self {
        Self { foods, toys }
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty() && self.toys.is_empty()
    }
}

impl CatalogOracle for Catalog {
    fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    fn toys(&self) -> &[ToyItem] {
        &self.toys
    }
}

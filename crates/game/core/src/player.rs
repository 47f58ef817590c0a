//! Players: money, pets and inventory.

use crate::env::{CatalogOracle, FoodItem, ItemCategory, ToyItem};
use crate::ledger::{self, Ledger, LedgerError};
use crate::pet::{ActionError, Pet, PlayOutcome};

/// A player and everything they own.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    ledger: Ledger,
    pets: Vec<Pet>,
    food: Vec<FoodItem>,
    toys: Vec<ToyItem>,
    final_score: Option<i64>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ledger: Ledger::new(),
            pets: Vec::new(),
            food: Vec::new(),
            toys: Vec::new(),
            final_score: None,
        }
    }

    pub fn with_pets(mut self, pets: impl IntoIterator<Item = Pet>) -> Self {
        self.pets.extend(pets);
        self
    }

    pub fn with_ledger(mut self, ledger: Ledger) -> Self {
        self.ledger = ledger;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> i64 {
        self.ledger.balance()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn pet(&self, index: usize) -> Option<&Pet> {
        self.pets.get(index)
    }

    pub fn add_pet(&mut self, pet: Pet) {
        self.pets.push(pet);
    }

    pub fn food_stock(&self) -> &[FoodItem] {
        &self.food
    }

    pub fn toys(&self) -> &[ToyItem] {
        &self.toys
    }

    pub fn alive_pet_count(&self) -> usize {
        self.pets.iter().filter(|pet| pet.is_alive()).count()
    }

    pub fn all_pets_dead(&self) -> bool {
        !self.pets.is_empty() && self.alive_pet_count() == 0
    }

    /// Score fixed at game end, if it has been computed.
    pub fn final_score(&self) -> Option<i64> {
        self.final_score
    }

    pub fn set_final_score(&mut self, score: i64) {
        self.final_score = Some(score);
    }

    /// Borrows one pet together with the ledger, for the daily engine.
    pub fn pet_and_ledger_mut(&mut self, index: usize) -> Option<(&mut Pet, &mut Ledger)> {
        let pet = self.pets.get_mut(index)?;
        Some((pet, &mut self.ledger))
    }

    /// Credits `daily_rate` for every living pet and returns the amount.
    pub fn collect_allowance(&mut self, daily_rate: i64) -> Result<i64, LedgerError> {
        let amount = ledger::daily_allowance(daily_rate, self.alive_pet_count());
        self.ledger.earn(amount)?;
        Ok(amount)
    }

    /// Buys one copy of a food item from the catalog.
    pub fn buy_food(
        &mut self,
        catalog: &dyn CatalogOracle,
        name: &str,
    ) -> Result<&FoodItem, ActionError> {
        let food = catalog
            .food(name)
            .ok_or_else(|| unknown(ItemCategory::Food, name))?;
        self.ledger.spend(food.price)?;
        self.food.push(food.clone());
        Ok(&self.food[self.food.len() - 1])
    }

    /// Buys one fresh copy of a toy from the catalog.
    pub fn buy_toy(
        &mut self,
        catalog: &dyn CatalogOracle,
        name: &str,
    ) -> Result<&ToyItem, ActionError> {
        let toy = catalog
            .toy(name)
            .ok_or_else(|| unknown(ItemCategory::Toy, name))?;
        self.ledger.spend(toy.price)?;
        self.toys.push(toy.clone());
        Ok(&self.toys[self.toys.len() - 1])
    }

    /// Feeds a pet from the food stock; the food is eaten.
    pub fn feed_pet(&mut self, pet_index: usize, food_index: usize) -> Result<(), ActionError> {
        if food_index >= self.food.len() {
            return Err(ActionError::NoSuchItem {
                category: ItemCategory::Food,
                index: food_index,
            });
        }
        pet_mut(&mut self.pets, pet_index)?.feed(&self.food[food_index])?;
        self.food.remove(food_index);
        Ok(())
    }

    /// Plays with a toy from the inventory; worn-out toys are thrown away.
    pub fn play_with_pet(
        &mut self,
        pet_index: usize,
        toy_index: usize,
    ) -> Result<PlayOutcome, ActionError> {
        let toy = self.toys.get_mut(toy_index).ok_or(ActionError::NoSuchItem {
            category: ItemCategory::Toy,
            index: toy_index,
        })?;
        let outcome = pet_mut(&mut self.pets, pet_index)?.play(toy)?;
        if outcome.is_depleted() {
            self.toys.remove(toy_index);
        }
        Ok(outcome)
    }

    pub fn put_pet_to_bed(&mut self, pet_index: usize) -> Result<(), ActionError> {
        pet_mut(&mut self.pets, pet_index)?.sleep()
    }

    pub fn take_pet_to_toilet(&mut self, pet_index: usize) -> Result<(), ActionError> {
        pet_mut(&mut self.pets, pet_index)?.go_toilet()
    }
}

/// Looks a pet up by position. Aliveness is checked by the care action itself.
fn pet_mut(pets: &mut [Pet], index: usize) -> Result<&mut Pet, ActionError> {
    pets.get_mut(index).ok_or(ActionError::NoSuchPet(index))
}

fn unknown(category: ItemCategory, name: &str) -> ActionError {
    ActionError::UnknownItem {
        category,
        name: name.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Catalog;
    use crate::pet::{Gender, Species};
    use crate::stats::Vital;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![FoodItem::new("Kibble", 10, 20).with_health_increase(Species::Dog, 2)],
            vec![ToyItem::new("Ball", 15, 1).with_happiness_increase(Species::Dog, 10)],
        )
    }

    fn player_with_dog(balance: i64) -> Player {
        Player::new("Ann")
            .with_ledger(Ledger::with_balance(balance).unwrap())
            .with_pets([Pet::new("Rex", Species::Dog, Gender::Male)])
    }

    #[test]
    fn buying_copies_the_prototype() {
        let catalog = catalog();
        let mut player = player_with_dog(40);

        player.buy_toy(&catalog, "Ball").unwrap();
        player.buy_food(&catalog, "Kibble").unwrap();

        assert_eq!(player.balance(), 15);
        assert_eq!(player.toys().len(), 1);
        assert_eq!(player.food_stock().len(), 1);
        assert_eq!(catalog.toys[0].durability, 1);
    }

    #[test]
    fn buying_without_funds_changes_nothing() {
        let catalog = catalog();
        let mut player = player_with_dog(5);

        let err = player.buy_food(&catalog, "Kibble").unwrap_err();

        assert_eq!(
            err,
            ActionError::Ledger(LedgerError::InsufficientFunds {
                balance: 5,
                amount: 10
            })
        );
        assert_eq!(player.balance(), 5);
        assert!(player.food_stock().is_empty());
    }

    #[test]
    fn unknown_items_are_rejected() {
        let mut player = player_with_dog(100);
        let err = player.buy_toy(&catalog(), "Frisbee").unwrap_err();
        assert!(matches!(err, ActionError::UnknownItem { .. }));
        assert_eq!(player.balance(), 100);
    }

    #[test]
    fn feeding_consumes_the_food() {
        let catalog = catalog();
        let mut player = player_with_dog(10);
        player.buy_food(&catalog, "Kibble").unwrap();

        player.feed_pet(0, 0).unwrap();

        assert!(player.food_stock().is_empty());
        assert_eq!(player.pets()[0].vitals().weight(), 24.0);
        assert!(matches!(
            player.feed_pet(0, 0),
            Err(ActionError::NoSuchItem { .. })
        ));
    }

    #[test]
    fn depleted_toy_leaves_the_inventory() {
        let catalog = catalog();
        let mut player = player_with_dog(15);
        player.buy_toy(&catalog, "Ball").unwrap();

        let outcome = player.play_with_pet(0, 0).unwrap();

        assert_eq!(outcome, PlayOutcome::ToyDepleted);
        assert!(player.toys().is_empty());
    }

    #[test]
    fn care_for_dead_pet_keeps_inventory() {
        let catalog = catalog();
        let mut player = player_with_dog(30);
        player.buy_food(&catalog, "Kibble").unwrap();
        player.buy_toy(&catalog, "Ball").unwrap();
        if let Some((pet, _)) = player.pet_and_ledger_mut(0) {
            pet.die();
        }

        assert!(matches!(
            player.feed_pet(0, 0),
            Err(ActionError::PetIsDead { .. })
        ));
        assert!(matches!(
            player.play_with_pet(0, 0),
            Err(ActionError::PetIsDead { .. })
        ));
        assert!(matches!(
            player.put_pet_to_bed(0),
            Err(ActionError::PetIsDead { .. })
        ));
        assert_eq!(player.food_stock().len(), 1);
        assert_eq!(player.toys()[0].durability, 1);
    }

    #[test]
    fn unknown_pet_is_reported_by_every_action() {
        let catalog = catalog();
        let mut player = player_with_dog(30);
        player.buy_food(&catalog, "Kibble").unwrap();
        player.buy_toy(&catalog, "Ball").unwrap();

        assert_eq!(player.feed_pet(1, 0), Err(ActionError::NoSuchPet(1)));
        assert_eq!(player.play_with_pet(2, 0), Err(ActionError::NoSuchPet(2)));
        assert_eq!(player.take_pet_to_toilet(5), Err(ActionError::NoSuchPet(5)));
        assert_eq!(player.food_stock().len(), 1);
        assert_eq!(player.toys()[0].durability, 1);
    }

    #[test]
    fn allowance_counts_only_living_pets() {
        let mut player = Player::new("Bo").with_pets([
            Pet::new("A", Species::Cat, Gender::Female),
            Pet::new("B", Species::Goat, Gender::Male),
        ]);
        if let Some((pet, _)) = player.pet_and_ledger_mut(1) {
            pet.die();
        }

        assert_eq!(player.collect_allowance(10).unwrap(), 10);
        assert_eq!(player.balance(), 10);
        assert!(!player.all_pets_dead());
    }

    #[test]
    fn toilet_and_bed_route_to_the_pet() {
        let mut player = player_with_dog(0);
        if let Some((pet, _)) = player.pet_and_ledger_mut(0) {
            pet.vitals_mut().increase(Vital::Bladder, 60);
            pet.vitals_mut().increase(Vital::Fatigue, 90);
        }
        player.take_pet_to_toilet(0).unwrap();
        player.put_pet_to_bed(0).unwrap();
        assert_eq!(player.pets()[0].vitals().bladder(), 0);
        assert_eq!(player.pets()[0].vitals().fatigue(), 20);
        assert_eq!(player.put_pet_to_bed(3), Err(ActionError::NoSuchPet(3)));
    }
}

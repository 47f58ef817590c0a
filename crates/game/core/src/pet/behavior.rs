//! Care actions and event transitions.
//!
//! Care actions are what a player does to a pet and are refused once the pet
//! is dead. Event transitions (`misbehave`, `be_sick`, `die` and their
//! counters) are applied by the daily engine.

use crate::env::{FoodItem, ToyItem};
use crate::stats::{Vital, Vitals};

use super::species::SpeciesProfile;
use super::{ActionError, Pet};

/// Result of a play session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum PlayOutcome {
    /// The toy still has uses left.
    Played,
    /// The toy wore out during this session and must leave the inventory.
    ToyDepleted,
}

impl PlayOutcome {
    pub fn is_depleted(self) -> bool {
        matches!(self, PlayOutcome::ToyDepleted)
    }
}

impl Pet {
    fn ensure_alive(&self) -> Result<(), ActionError> {
        if self.is_dead() {
            return Err(ActionError::PetIsDead {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Feeds one portion of `food`.
    ///
    /// Portions must be positive, so feeding never makes a pet lighter. Both
    /// the portion and the new weight are checked before any stat moves.
    pub fn feed(&mut self, food: &FoodItem) -> Result<(), ActionError> {
        self.ensure_alive()?;

        let portion = food.portion_size;
        if portion <= 0 {
            return Err(ActionError::InvalidPortion {
                name: self.name.clone(),
                portion,
            });
        }
        let health_increase = food.health_increase(self.species);

        self.vitals.increase_weight(f64::from(portion))?;
        self.vitals.increase(Vital::Hunger, portion.saturating_neg());
        self.vitals.increase(Vital::Bladder, portion);
        self.vitals
            .increase(Vital::Happiness, health_increase.saturating_mul(portion));
        self.vitals.increase(Vital::Health, health_increase);
        Ok(())
    }

    /// Plays with `toy`, wearing it down by one use.
    pub fn play(&mut self, toy: &mut ToyItem) -> Result<PlayOutcome, ActionError> {
        self.ensure_alive()?;

        let profile = self.profile();
        let depleted = toy.wear();

        let happiness = toy
            .happiness_increase(self.species)
            .saturating_add(profile.play_bonus_happiness);
        self.vitals.increase(Vital::Happiness, happiness);
        self.vitals.increase(Vital::Fatigue, profile.play_fatigue);
        self.vitals.increase(Vital::Hunger, profile.play_hunger);
        self.vitals
            .increase(Vital::Mischievousness, profile.play_mischief);

        Ok(if depleted {
            PlayOutcome::ToyDepleted
        } else {
            PlayOutcome::Played
        })
    }

    pub fn sleep(&mut self) -> Result<(), ActionError> {
        self.ensure_alive()?;
        let fatigue = self.profile().sleep_fatigue;
        self.vitals.increase(Vital::Fatigue, fatigue);
        Ok(())
    }

    pub fn go_toilet(&mut self) -> Result<(), ActionError> {
        self.ensure_alive()?;
        self.vitals.increase(Vital::Bladder, -i32::from(Vitals::MAX));
        Ok(())
    }

    pub fn misbehave(&mut self) {
        let happiness = self.profile().misbehave_happiness;
        self.vitals.increase(Vital::Happiness, happiness);
        self.vitals.set_misbehaving(true);
    }

    pub fn discipline(&mut self) {
        self.vitals
            .increase(Vital::Mischievousness, SpeciesProfile::DISCIPLINE_MISCHIEF);
        self.vitals
            .increase(Vital::Happiness, SpeciesProfile::DISCIPLINE_HAPPINESS);
        self.vitals.set_misbehaving(false);
    }

    pub fn be_sick(&mut self) {
        self.vitals.set_sick(true);
    }

    pub fn treat(&mut self) {
        self.vitals.set_sick(false);
        self.vitals
            .increase(Vital::Health, SpeciesProfile::TREAT_HEALTH);
    }

    pub fn die(&mut self) {
        let revivable = self.profile().revivable_after_death;
        self.vitals.set_dead(true);
        self.vitals.set_revivable(revivable);
    }

    /// Brings the pet back healthy enough to survive the night.
    ///
    /// A pet can only be revived once.
    pub fn revive(&mut self) {
        self.vitals.set_dead(false);
        self.vitals.set_sick(false);
        self.vitals.set_revivable(false);
        let missing = i32::from(SpeciesProfile::REVIVE_HEALTH) - i32::from(self.vitals.health());
        self.vitals.increase(Vital::Health, missing.max(0));
    }
}

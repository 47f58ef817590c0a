//! How players choose what to do with their pets.
//!
//! The session asks an [`InteractionPolicy`] for one [`PetAction`] at a
//! time until the pet's daily actions are used up or the policy moves on.
//! Rejected actions are reported back so the policy can adapt.
use std::cmp::Reverse;
use std::collections::VecDeque;

use pet_core::{ActionError, CatalogOracle, DecisionOracle, Pet, Player};

/// One choice a player makes during a pet's turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PetAction {
    /// Feed the food at this position in the player's stock.
    Feed(usize),
    /// Play with the toy at this position in the player's toy box.
    Play(usize),
    Sleep,
    Toilet,
    /// Buy a food from the store by name. Does not use up an action.
    BuyFood(String),
    /// Buy a toy from the store by name. Does not use up an action.
    BuyToy(String),
    /// End this pet's turn.
    MoveOn,
}

impl PetAction {
    /// Whether a successful attempt counts against the pet's daily actions.
    pub fn consumes_action(&self) -> bool {
        matches!(self, Self::Feed(_) | Self::Play(_) | Self::Sleep | Self::Toilet)
    }
}

/// Read-only view of the game handed to a policy for each choice.
#[derive(Clone, Copy)]
pub struct TurnView<'a> {
    pub day: u32,
    pub player: &'a Player,
    pub pet_index: usize,
    pub actions_left: u32,
    pub catalog: &'a dyn CatalogOracle,
}

impl<'a> TurnView<'a> {
    pub fn pet(&self) -> Option<&'a Pet> {
        self.player.pet(self.pet_index)
    }
}

/// Chooses care actions for a player's pets.
pub trait InteractionPolicy {
    /// Called once before the first choice of each pet turn.
    fn start_turn(&mut self, _view: &TurnView<'_>) {}

    fn choose(&mut self, view: &TurnView<'_>) -> PetAction;

    /// Called when the last choice failed; nothing changed in the game.
    fn rejected(&mut self, _action: &PetAction, _error: &ActionError) {}
}

/// Policy that never does anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdlePolicy;

impl InteractionPolicy for IdlePolicy {
    fn choose(&mut self, _view: &TurnView<'_>) -> PetAction {
        PetAction::MoveOn
    }
}

/// Policy that replays a queue of actions, then moves on forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPolicy {
    actions: VecDeque<PetAction>,
    rejections: Vec<(PetAction, ActionError)>,
}

impl ScriptedPolicy {
    pub fn new(actions: impl IntoIterator<Item = PetAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            rejections: Vec::new(),
        }
    }

    pub fn rejections(&self) -> &[(PetAction, ActionError)] {
        &self.rejections
    }

    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl InteractionPolicy for ScriptedPolicy {
    fn choose(&mut self, _view: &TurnView<'_>) -> PetAction {
        self.actions.pop_front().unwrap_or(PetAction::MoveOn)
    }

    fn rejected(&mut self, action: &PetAction, error: &ActionError) {
        self.rejections.push((action.clone(), error.clone()));
    }
}

/// Built-in autopilot that looks after its pets sensibly.
///
/// It answers every event question (discipline, treat, revive when
/// possible) and tends to the most pressing need first: rest, toilet,
/// food, then play. After any rejection it gives up on the current pet.
#[derive(Clone, Debug, Default)]
pub struct Caretaker {
    gave_up: bool,
}

impl Caretaker {
    const TIRED: u8 = 70;
    const DESPERATE: u8 = 70;
    const HUNGRY: u8 = 40;
    const GLUM: u8 = 60;

    pub fn new() -> Self {
        Self::default()
    }
}

impl DecisionOracle for Caretaker {
    fn decide_misbehavior(&mut self, _pet: &Pet) -> Option<bool> {
        Some(true)
    }

    fn decide_sickness(&mut self, _pet: &Pet, _balance: i64) -> Option<bool> {
        Some(true)
    }

    fn decide_death(&mut self, _pet: &Pet, revivable: bool) -> Option<bool> {
        Some(revivable)
    }
}

impl InteractionPolicy for Caretaker {
    fn start_turn(&mut self, _view: &TurnView<'_>) {
        self.gave_up = false;
    }

    fn choose(&mut self, view: &TurnView<'_>) -> PetAction {
        let Some(pet) = view.pet() else {
            return PetAction::MoveOn;
        };
        if self.gave_up || pet.is_dead() {
            return PetAction::MoveOn;
        }

        let vitals = pet.vitals();
        let species = pet.species();
        let balance = view.player.balance();

        if vitals.fatigue() >= Self::TIRED {
            return PetAction::Sleep;
        }
        if vitals.bladder() >= Self::DESPERATE {
            return PetAction::Toilet;
        }

        if vitals.hunger() >= Self::HUNGRY {
            let stocked = view
                .player
                .food_stock()
                .iter()
                .enumerate()
                .max_by_key(|(_, food)| food.health_increase(species));
            if let Some((index, _)) = stocked {
                return PetAction::Feed(index);
            }
            let affordable = view
                .catalog
                .foods()
                .iter()
                .filter(|food| food.price <= balance)
                .max_by_key(|food| (food.health_increase(species), Reverse(food.price)));
            if let Some(food) = affordable {
                return PetAction::BuyFood(food.name.clone());
            }
        }

        if vitals.happiness() <= Self::GLUM {
            let stocked = view
                .player
                .toys()
                .iter()
                .enumerate()
                .filter(|(_, toy)| toy.happiness_increase(species) > 0)
                .max_by_key(|(_, toy)| toy.happiness_increase(species));
            if let Some((index, _)) = stocked {
                return PetAction::Play(index);
            }
            let affordable = view
                .catalog
                .toys()
                .iter()
                .filter(|toy| toy.price <= balance && toy.happiness_increase(species) > 0)
                .max_by_key(|toy| (toy.happiness_increase(species), Reverse(toy.price)));
            if let Some(toy) = affordable {
                return PetAction::BuyToy(toy.name.clone());
            }
        }

        PetAction::MoveOn
    }

    fn rejected(&mut self, _action: &PetAction, _error: &ActionError) {
        self.gave_up = true;
    }
}

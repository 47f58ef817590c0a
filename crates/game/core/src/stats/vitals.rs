//! Bounded stat container.

use crate::error::{ErrorSeverity, GameError};

/// The six bounded integer vitals.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Vital {
    Health,
    Happiness,
    Hunger,
    Mischievousness,
    /// How full the bladder is, in percent.
    Bladder,
    Fatigue,
}

/// Errors raised by stat mutations.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum StatError {
    #[error("weight {current} kg changed by {delta} kg would not stay positive")]
    InvalidWeight { current: f64, delta: f64 },
}

impl GameError for StatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            StatError::InvalidWeight { .. } => "STAT_INVALID_WEIGHT",
        }
    }
}

/// Mutable vitals of a single pet.
///
/// Invariants:
/// - every [`Vital`] is within `MIN..=MAX`
/// - `weight > MIN_WEIGHT`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    health: u8,
    happiness: u8,
    hunger: u8,
    mischievousness: u8,
    bladder: u8,
    fatigue: u8,
    weight: f64,
    is_sick: bool,
    is_revivable: bool,
    is_misbehaving: bool,
    is_dead: bool,
}

impl Vitals {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    /// Weights at or below this value are rejected.
    pub const MIN_WEIGHT: f64 = 1e-6;

    /// Fresh vitals: full health and happiness, everything else at zero.
    pub(crate) fn new(weight: f64) -> Self {
        Self {
            health: Self::MAX,
            happiness: Self::MAX,
            hunger: Self::MIN,
            mischievousness: Self::MIN,
            bladder: Self::MIN,
            fatigue: Self::MIN,
            weight,
            is_sick: false,
            is_revivable: true,
            is_misbehaving: false,
            is_dead: false,
        }
    }

    pub fn get(&self, vital: Vital) -> u8 {
        match vital {
            Vital::Health => self.health,
            Vital::Happiness => self.happiness,
            Vital::Hunger => self.hunger,
            Vital::Mischievousness => self.mischievousness,
            Vital::Bladder => self.bladder,
            Vital::Fatigue => self.fatigue,
        }
    }

    fn slot_mut(&mut self, vital: Vital) -> &mut u8 {
        match vital {
            Vital::Health => &mut self.health,
            Vital::Happiness => &mut self.happiness,
            Vital::Hunger => &mut self.hunger,
            Vital::Mischievousness => &mut self.mischievousness,
            Vital::Bladder => &mut self.bladder,
            Vital::Fatigue => &mut self.fatigue,
        }
    }

    /// Adds `delta` to a vital, clamping the result to `MIN..=MAX`.
    pub fn increase(&mut self, vital: Vital, delta: i32) {
        let slot = self.slot_mut(vital);
        let raised = i32::from(*slot).saturating_add(delta);
        *slot = raised.clamp(i32::from(Self::MIN), i32::from(Self::MAX)) as u8;
    }

    /// Adds `delta` kilograms, rejecting results at or below [`Self::MIN_WEIGHT`].
    pub fn increase_weight(&mut self, delta: f64) -> Result<(), StatError> {
        let weight = self.weight + delta;
        if weight.is_nan() || weight <= Self::MIN_WEIGHT {
            return Err(StatError::InvalidWeight {
                current: self.weight,
                delta,
            });
        }
        self.weight = weight;
        Ok(())
    }

    pub fn health(&self) -> u8 {
        self.health
    }

    pub fn happiness(&self) -> u8 {
        self.happiness
    }

    pub fn hunger(&self) -> u8 {
        self.hunger
    }

    pub fn mischievousness(&self) -> u8 {
        self.mischievousness
    }

    pub fn bladder(&self) -> u8 {
        self.bladder
    }

    pub fn fatigue(&self) -> u8 {
        self.fatigue
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_sick(&self) -> bool {
        self.is_sick
    }

    pub fn is_revivable(&self) -> bool {
        self.is_revivable
    }

    pub fn is_misbehaving(&self) -> bool {
        self.is_misbehaving
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn set_sick(&mut self, is_sick: bool) {
        self.is_sick = is_sick;
    }

    pub fn set_revivable(&mut self, is_revivable: bool) {
        self.is_revivable = is_revivable;
    }

    pub fn set_misbehaving(&mut self, is_misbehaving: bool) {
        self.is_misbehaving = is_misbehaving;
    }

    pub(crate) fn set_dead(&mut self, is_dead: bool) {
        self.is_dead = is_dead;
    }
}

//! Pet species and their behavior tables.
//!
//! Every species shares the same shape of care actions; they differ only in
//! the numbers recorded in [`SpeciesProfile`]. The profile is looked up by
//! species tag, so dispatch is a plain exhaustive `match`.

use core::str::FromStr;

use super::error::SpeciesError;

/// Pet species.
///
/// Species is fixed at pet creation and decides the starting weight and the
/// behavior table used by every care action.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Species {
    Alpaca,
    Cat,
    Dog,
    Goat,
    Horse,
    #[strum(to_string = "polar bear", serialize = "polar_bear", serialize = "polarbear")]
    PolarBear,
}

impl Species {
    /// Parses a species name such as `"cat"` or `"Polar Bear"`.
    pub fn parse(name: &str) -> Result<Self, SpeciesError> {
        Self::from_str(name.trim()).map_err(|_| SpeciesError::UnknownSpecies(name.to_owned()))
    }

    /// Behavior table for this species.
    pub const fn profile(self) -> &'static SpeciesProfile {
        match self {
            Species::Alpaca => &ALPACA,
            Species::Cat => &CAT,
            Species::Dog => &DOG,
            Species::Goat => &GOAT,
            Species::Horse => &HORSE,
            Species::PolarBear => &POLAR_BEAR,
        }
    }

    /// Starting weight in kilograms.
    pub const fn base_weight(self) -> f64 {
        self.profile().base_weight
    }
}

/// Per-species constants layered on top of the shared care-action shape.
///
/// Deltas are signed and applied through the clamping stat operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeciesProfile {
    /// Starting weight in kilograms.
    pub base_weight: f64,
    /// Fatigue gained per play session.
    pub play_fatigue: i32,
    /// Hunger gained per play session.
    pub play_hunger: i32,
    /// Mischievousness change per play session.
    pub play_mischief: i32,
    /// Extra happiness on top of the toy's own bonus (dog fetch bonus).
    pub play_bonus_happiness: i32,
    /// Fatigue change when put to bed.
    pub sleep_fatigue: i32,
    /// Happiness change when the pet misbehaves unchecked.
    pub misbehave_happiness: i32,
    /// Whether a pet stays revivable once it has died.
    pub revivable_after_death: bool,
}

impl SpeciesProfile {
    /// Mischievousness change when disciplined.
    pub const DISCIPLINE_MISCHIEF: i32 = -30;
    /// Happiness change when disciplined.
    pub const DISCIPLINE_HAPPINESS: i32 = -5;
    /// Health restored by treatment.
    pub const TREAT_HEALTH: i32 = 25;
    /// Health floor after a revival.
    pub const REVIVE_HEALTH: u8 = 50;
}

const ALPACA: SpeciesProfile = SpeciesProfile {
    base_weight: 60.0,
    play_fatigue: 10,
    play_hunger: 5,
    play_mischief: 0,
    play_bonus_happiness: 0,
    sleep_fatigue: -80,
    misbehave_happiness: -5,
    revivable_after_death: false,
};

const CAT: SpeciesProfile = SpeciesProfile {
    base_weight: 4.0,
    play_fatigue: 5,
    play_hunger: 5,
    play_mischief: -5,
    play_bonus_happiness: 0,
    sleep_fatigue: -80,
    misbehave_happiness: -5,
    revivable_after_death: false,
};

const DOG: SpeciesProfile = SpeciesProfile {
    base_weight: 4.0,
    play_fatigue: 15,
    play_hunger: 10,
    play_mischief: -2,
    play_bonus_happiness: 5,
    sleep_fatigue: -70,
    misbehave_happiness: -10,
    revivable_after_death: false,
};

const GOAT: SpeciesProfile = SpeciesProfile {
    base_weight: 50.0,
    play_fatigue: 10,
    play_hunger: 10,
    play_mischief: 5,
    play_bonus_happiness: 0,
    sleep_fatigue: -80,
    misbehave_happiness: -10,
    revivable_after_death: false,
};

const HORSE: SpeciesProfile = SpeciesProfile {
    base_weight: 500.0,
    play_fatigue: 20,
    play_hunger: 15,
    play_mischief: 0,
    play_bonus_happiness: 0,
    sleep_fatigue: -60,
    misbehave_happiness: -5,
    revivable_after_death: false,
};

const POLAR_BEAR: SpeciesProfile = SpeciesProfile {
    base_weight: 250.0,
    play_fatigue: 15,
    play_hunger: 20,
    play_mischief: 0,
    play_bonus_happiness: 0,
    sleep_fatigue: -90,
    misbehave_happiness: -15,
    revivable_after_death: false,
};

//! Trigger conditions and outcomes of the three daily events.
//!
//! The thresholds keep the original game's integer arithmetic: each check
//! draws `r` in `[0, 100)` and compares it against fixed bands.

use crate::stats::Vitals;

/// Composite well-being used to gate misbehavior.
///
/// `(3·happiness + health + 5·(100 − mischievousness) + (100 − hunger)) / 10`
pub fn wellness(vitals: &Vitals) -> i32 {
    let happiness = i32::from(vitals.happiness());
    let health = i32::from(vitals.health());
    let mischief = i32::from(vitals.mischievousness());
    let hunger = i32::from(vitals.hunger());
    (happiness * 3 + health + (100 - mischief) * 5 + (100 - hunger)) / 10
}

pub fn misbehavior_triggers(wellness: i32, roll: u32) -> bool {
    (wellness < 25 && roll < 75) || (wellness < 50 && roll < 50) || (wellness < 75 && roll < 25)
}

pub fn sickness_triggers(is_sick: bool, health: u8, roll: u32) -> bool {
    is_sick
        || health < 5
        || (health < 25 && roll < 75)
        || (health < 50 && roll < 50)
        || (health < 75 && roll < 25)
}

pub fn death_triggers(is_sick: bool, happiness: u8, health: u8, roll: u32) -> bool {
    (is_sick && happiness < 50) || health < 5 || roll < 2
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MisbehaviorOutcome {
    Disciplined,
    Misbehaved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SicknessOutcome {
    Treated,
    FellSick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DeathOutcome {
    Revived,
    Died,
}

/// What happened to one pet during one day.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayReport {
    /// The pet was already dead; nothing was drawn or changed.
    pub skipped: bool,
    /// Health change caused by fatigue during drift (0 or negative).
    pub health_penalty: i32,
    pub misbehavior: Option<MisbehaviorOutcome>,
    pub sickness: Option<SicknessOutcome>,
    pub death: Option<DeathOutcome>,
    /// Money paid for treatment.
    pub spent: i64,
}

impl DayReport {
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }

    pub fn died(&self) -> bool {
        self.death == Some(DeathOutcome::Died)
    }

    /// True when no event fired.
    pub fn is_quiet(&self) -> bool {
        self.misbehavior.is_none() && self.sickness.is_none() && self.death.is_none()
    }
}

//! Automatic overnight stat drift.

use crate::stats::{Vital, Vitals};

pub const FATIGUE_DRIFT: i32 = 30;
pub const HAPPINESS_DRIFT: i32 = -10;
pub const HUNGER_DRIFT: i32 = 30;
pub const MISCHIEF_DRIFT: i32 = 5;

/// Health lost by an exhausted pet, picked by the highest threshold reached.
///
/// | fatigue | health |
/// |---|---|
/// | 100 | −50 |
/// | > 90 | −25 |
/// | > 80 | −10 |
pub fn fatigue_health_penalty(fatigue: u8) -> i32 {
    match fatigue {
        100.. => -50,
        91..=99 => -25,
        81..=90 => -10,
        _ => 0,
    }
}

/// Applies one day of drift and returns the health penalty that was applied.
pub fn apply_drift(vitals: &mut Vitals) -> i32 {
    vitals.increase(Vital::Fatigue, FATIGUE_DRIFT);
    vitals.increase(Vital::Happiness, HAPPINESS_DRIFT);
    vitals.increase(Vital::Hunger, HUNGER_DRIFT);
    vitals.increase(Vital::Mischievousness, MISCHIEF_DRIFT);

    let penalty = fatigue_health_penalty(vitals.fatigue());
    if penalty != 0 {
        vitals.increase(Vital::Health, penalty);
    }
    penalty
}

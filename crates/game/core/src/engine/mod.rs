//! Daily event pipeline.
//!
//! The [`DailyEngine`] advances a single pet by one day:
//! drift → misbehavior → sickness → death
//!
//! Each check draws exactly one number from the shared random source, even
//! when its outcome is already forced, so a seeded game always consumes the
//! same draw sequence. Player responses come from an injected
//! [`DecisionOracle`].

pub mod drift;
mod errors;
pub mod events;

pub use errors::EngineError;
pub use events::{DayReport, DeathOutcome, MisbehaviorOutcome, SicknessOutcome};

use crate::config::GameConfig;
use crate::env::{DecisionKind, DecisionOracle, RandomSource};
use crate::ledger::Ledger;
use crate::pet::Pet;

/// Rolls are uniform in `[0, ROLL_SIDES)`.
pub const ROLL_SIDES: u32 = 100;

/// Applies drift and random events to pets, one day at a time.
pub struct DailyEngine<'a> {
    rng: &'a mut dyn RandomSource,
    decisions: &'a mut dyn DecisionOracle,
    treatment_cost: i64,
}

impl<'a> DailyEngine<'a> {
    pub fn new(
        config: &GameConfig,
        rng: &'a mut dyn RandomSource,
        decisions: &'a mut dyn DecisionOracle,
    ) -> Self {
        Self {
            rng,
            decisions,
            treatment_cost: config.treatment_cost,
        }
    }

    /// Processes one day for `pet`, paying for treatment out of `ledger`.
    ///
    /// Works on copies and commits only on success: on error both `pet` and
    /// `ledger` are unchanged (draws already taken stay consumed). Dead pets
    /// are skipped without drawing.
    pub fn process_day(
        &mut self,
        pet: &mut Pet,
        ledger: &mut Ledger,
    ) -> Result<DayReport, EngineError> {
        if pet.is_dead() {
            return Ok(DayReport::skipped());
        }

        let mut working = pet.clone();
        let mut wallet = *ledger;
        let mut report = DayReport {
            health_penalty: drift::apply_drift(working.vitals_mut()),
            ..DayReport::default()
        };

        report.misbehavior = self.check_misbehavior(&mut working)?;

        // The death check reads health as it was before any treatment today.
        let health = working.vitals().health();
        report.sickness = self.check_sickness(&mut working, &mut wallet, health)?;
        if report.sickness == Some(SicknessOutcome::Treated) {
            report.spent = self.treatment_cost;
        }

        report.death = self.check_death(&mut working, health)?;

        *pet = working;
        *ledger = wallet;
        Ok(report)
    }

    fn roll(&mut self) -> u32 {
        self.rng.next_below(ROLL_SIDES)
    }

    fn check_misbehavior(
        &mut self,
        pet: &mut Pet,
    ) -> Result<Option<MisbehaviorOutcome>, EngineError> {
        let roll = self.roll();
        let wellness = events::wellness(pet.vitals());
        if !events::misbehavior_triggers(wellness, roll) {
            return Ok(None);
        }

        let disciplined = self
            .decisions
            .decide_misbehavior(pet)
            .ok_or_else(|| missing(DecisionKind::Misbehavior, pet))?;
        Ok(Some(if disciplined {
            pet.discipline();
            MisbehaviorOutcome::Disciplined
        } else {
            pet.misbehave();
            MisbehaviorOutcome::Misbehaved
        }))
    }

    fn check_sickness(
        &mut self,
        pet: &mut Pet,
        wallet: &mut Ledger,
        health: u8,
    ) -> Result<Option<SicknessOutcome>, EngineError> {
        let roll = self.roll();
        if !events::sickness_triggers(pet.vitals().is_sick(), health, roll) {
            return Ok(None);
        }

        let wants_treatment = self
            .decisions
            .decide_sickness(pet, wallet.balance())
            .ok_or_else(|| missing(DecisionKind::Sickness, pet))?;
        Ok(Some(
            if wants_treatment && wallet.can_afford(self.treatment_cost) {
                wallet.spend(self.treatment_cost)?;
                pet.treat();
                SicknessOutcome::Treated
            } else {
                pet.be_sick();
                SicknessOutcome::FellSick
            },
        ))
    }

    fn check_death(
        &mut self,
        pet: &mut Pet,
        health: u8,
    ) -> Result<Option<DeathOutcome>, EngineError> {
        let roll = self.roll();
        let vitals = pet.vitals();
        if !events::death_triggers(vitals.is_sick(), vitals.happiness(), health, roll) {
            return Ok(None);
        }

        let revivable = vitals.is_revivable();
        let revive = self
            .decisions
            .decide_death(pet, revivable)
            .ok_or_else(|| missing(DecisionKind::Death, pet))?;
        Ok(Some(if revivable && revive {
            pet.revive();
            DeathOutcome::Revived
        } else {
            pet.die();
            DeathOutcome::Died
        }))
    }
}

fn missing(kind: DecisionKind, pet: &Pet) -> EngineError {
    EngineError::NoDecisionProvided {
        kind,
        pet: pet.name().to_owned(),
    }
}

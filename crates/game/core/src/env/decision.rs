//! Player responses to stochastic pet events.

use std::collections::VecDeque;

use crate::pet::Pet;

/// The three questions the daily engine can put to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DecisionKind {
    /// Discipline a misbehaving pet?
    Misbehavior,
    /// Pay for treatment of a sick pet?
    Sickness,
    /// Revive a dying pet?
    Death,
}

/// Synchronous decision callback supplied by whoever drives the game.
///
/// Returning `None` means no decision was made; the engine then fails the
/// day with `NoDecisionProvided` instead of guessing.
pub trait DecisionOracle {
    /// `Some(true)` disciplines the pet, `Some(false)` lets it misbehave.
    fn decide_misbehavior(&mut self, pet: &Pet) -> Option<bool>;

    /// `Some(true)` asks for treatment. Only honored when `balance` covers it.
    fn decide_sickness(&mut self, pet: &Pet, balance: i64) -> Option<bool>;

    /// `Some(true)` asks for a revival. Only honored when `revivable`.
    fn decide_death(&mut self, pet: &Pet, revivable: bool) -> Option<bool>;
}

/// Decision oracle that replays a queue of answers and records every question.
///
/// Once the queue is empty every further question is left unanswered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedDecisions {
    answers: VecDeque<bool>,
    asked: Vec<DecisionKind>,
}

impl ScriptedDecisions {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Answers `answer` to the next `count` questions.
    pub fn repeat(answer: bool, count: usize) -> Self {
        Self::new(core::iter::repeat_n(answer, count))
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[DecisionKind] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn answer(&mut self, kind: DecisionKind) -> Option<bool> {
        self.asked.push(kind);
        self.answers.pop_front()
    }
}

impl DecisionOracle for ScriptedDecisions {
    fn decide_misbehavior(&mut self, _pet: &Pet) -> Option<bool> {
        self.answer(DecisionKind::Misbehavior)
    }

    fn decide_sickness(&mut self, _pet: &Pet, _balance: i64) -> Option<bool> {
        self.answer(DecisionKind::Sickness)
    }

    fn decide_death(&mut self, _pet: &Pet, _revivable: bool) -> Option<bool> {
        self.answer(DecisionKind::Death)
    }
}

/// Gives the same answer to every question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDecisions(pub bool);

impl DecisionOracle for FixedDecisions {
    fn decide_misbehavior(&mut self, _pet: &Pet) -> Option<bool> {
        Some(self.0)
    }

    fn decide_sickness(&mut self, _pet: &Pet, _balance: i64) -> Option<bool> {
        Some(self.0)
    }

    fn decide_death(&mut self, _pet: &Pet, _revivable: bool) -> Option<bool> {
        Some(self.0)
    }
}

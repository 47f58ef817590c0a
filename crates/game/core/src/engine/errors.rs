//! Error types for the daily event pipeline.

use crate::env::DecisionKind;
use crate::error::{ErrorSeverity, GameError};
use crate::ledger::LedgerError;

/// Errors surfaced while processing a pet's day.
///
/// When one of these is returned the pet and the ledger are exactly as they
/// were before the day started.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no {kind} decision was provided for {pet}")]
    NoDecisionProvided { kind: DecisionKind, pet: String },

    #[error("treatment payment failed: {0}")]
    Ledger(#[from] LedgerError),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::NoDecisionProvided { .. } => ErrorSeverity::Internal,
            EngineError::Ledger(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EngineError::NoDecisionProvided { .. } => "ENGINE_NO_DECISION_PROVIDED",
            EngineError::Ledger(err) => err.error_code(),
        }
    }
}

use crate::env::ItemCategory;
use crate::error::{ErrorSeverity, GameError};
use crate::ledger::LedgerError;
use crate::stats::StatError;

/// Errors raised while creating pets.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpeciesError {
    #[error("species '{0}' not recognised")]
    UnknownSpecies(String),
}

impl GameError for SpeciesError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            SpeciesError::UnknownSpecies(_) => "SPECIES_UNKNOWN",
        }
    }
}

/// Errors raised by care actions and store purchases.
///
/// A failed action never changes the pet, the inventory or the ledger.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ActionError {
    #[error("{name} is dead and cannot be cared for")]
    PetIsDead { name: String },

    #[error("no pet at position {0}")]
    NoSuchPet(usize),

    #[error("no {category} at inventory position {index}")]
    NoSuchItem { category: ItemCategory, index: usize },

    #[error("{name} cannot be fed a portion of {portion}")]
    InvalidPortion { name: String, portion: i32 },

    #[error("the store does not sell {category} '{name}'")]
    UnknownItem { category: ItemCategory, name: String },

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Stat(#[from] StatError),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ActionError::PetIsDead { .. } | ActionError::NoSuchItem { .. } => {
                ErrorSeverity::Recoverable
            }
            ActionError::NoSuchPet(_)
            | ActionError::InvalidPortion { .. }
            | ActionError::UnknownItem { .. } => ErrorSeverity::Validation,
            ActionError::Ledger(err) => err.severity(),
            ActionError::Stat(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ActionError::PetIsDead { .. } => "ACTION_PET_IS_DEAD",
            ActionError::NoSuchPet(_) => "ACTION_NO_SUCH_PET",
            ActionError::NoSuchItem { .. } => "ACTION_NO_SUCH_ITEM",
            ActionError::InvalidPortion { .. } => "ACTION_INVALID_PORTION",
            ActionError::UnknownItem { .. } => "ACTION_UNKNOWN_ITEM",
            ActionError::Ledger(err) => err.error_code(),
            ActionError::Stat(err) => err.error_code(),
        }
    }
}

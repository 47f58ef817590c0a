//! Errors surfaced by a game session.
use pet_core::{EngineError, ErrorSeverity, GameError, LedgerError, SpeciesError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a game holds at most {max} players")]
    TooManyPlayers { max: usize },

    #[error("player {player} must own between 1 and {max} pets, got {count}")]
    InvalidPetCount {
        player: String,
        count: usize,
        max: usize,
    },

    #[error("the name '{0}' is already taken")]
    DuplicateName(String),

    #[error("names must not be blank")]
    BlankName,

    #[error("the game has no players")]
    NoPlayers,

    #[error("players cannot join after day {day} has started")]
    AlreadyStarted { day: u32 },

    #[error("all {days} days have been played")]
    GameOver { days: u32 },

    #[error(transparent)]
    Species(#[from] SpeciesError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Species(err) => err.severity(),
            Self::Engine(err) => err.severity(),
            Self::Ledger(err) => err.severity(),
            Self::GameOver { .. } | Self::AlreadyStarted { .. } => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooManyPlayers { .. } => "SESSION_TOO_MANY_PLAYERS",
            Self::InvalidPetCount { .. } => "SESSION_INVALID_PET_COUNT",
            Self::DuplicateName(_) => "SESSION_DUPLICATE_NAME",
            Self::BlankName => "SESSION_BLANK_NAME",
            Self::NoPlayers => "SESSION_NO_PLAYERS",
            Self::AlreadyStarted { .. } => "SESSION_ALREADY_STARTED",
            Self::GameOver { .. } => "SESSION_GAME_OVER",
            Self::Species(err) => err.error_code(),
            Self::Engine(err) => err.error_code(),
            Self::Ledger(err) => err.error_code(),
        }
    }
}

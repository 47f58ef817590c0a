//! Player money.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised by ledger operations. A failed operation leaves the balance
/// unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("amount {0} must not be negative")]
    InvalidAmount(i64),

    #[error("cannot spend ${amount} with a balance of ${balance}")]
    InsufficientFunds { balance: i64, amount: i64 },
}

impl GameError for LedgerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            LedgerError::InvalidAmount(_) => ErrorSeverity::Validation,
            LedgerError::InsufficientFunds { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            LedgerError::InvalidAmount(_) => "LEDGER_INVALID_AMOUNT",
            LedgerError::InsufficientFunds { .. } => "LEDGER_INSUFFICIENT_FUNDS",
        }
    }
}

/// A player's balance. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ledger {
    balance: i64,
}

impl Ledger {
    pub const fn new() -> Self {
        Self { balance: 0 }
    }

    /// Opening balance; negative values are rejected.
    pub fn with_balance(balance: i64) -> Result<Self, LedgerError> {
        let mut ledger = Self::new();
        ledger.earn(balance)?;
        Ok(ledger)
    }

    pub const fn balance(&self) -> i64 {
        self.balance
    }

    pub fn can_afford(&self, amount: i64) -> bool {
        amount >= 0 && amount <= self.balance
    }

    pub fn earn(&mut self, amount: i64) -> Result<(), LedgerError> {
        if amount < 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        self.balance = self.balance.saturating_add(amount);
        Ok(())
    }

    pub fn spend(&mut self, amount: i64) -> Result<(), LedgerError> {
        if amount < 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                balance: self.balance,
                amount,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}

/// Allowance credited to a player with `alive_pets` living pets.
pub fn daily_allowance(daily_rate: i64, alive_pets: usize) -> i64 {
    daily_rate.saturating_mul(alive_pets as i64)
}

//! Points ledger
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("insufficient points: {shortfall} more needed")]
    InsufficientFunds { shortfall: u32 },
}

/// Non-negative points balance. Debits that would overdraw are rejected whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointsLedger {
    balance: u32,
}

impl PointsLedger {
    #[must_use]
    pub const fn with_balance(balance: u32) -> Self {
        Self { balance }
    }

    #[must_use]
    pub const fn balance(&self) -> u32 {
        self.balance
    }

    #[must_use]
    pub const fn can_afford(&self, cost: u32) -> bool {
        cost <= self.balance
    }

    /// Add points. Returns the new balance.
    pub fn credit(&mut self, amount: u32) -> u32 {
        self.balance = self.balance.saturating_add(amount);
        self.balance
    }

    /// Remove points. Returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] with the missing amount when
    /// `cost` exceeds the balance; the balance is left untouched.
    pub fn debit(&mut self, cost: u32) -> Result<u32, LedgerError> {
        let Some(remaining) = self.balance.checked_sub(cost) else {
            return Err(LedgerError::InsufficientFunds {
                shortfall: cost - self.balance,
            });
        };
        self.balance = remaining;
        Ok(self.balance)
    }

    /// Credit a one-time bonus. Whether it was already granted is tracked by the caller.
    pub fn grant_one_time_bonus(&mut self, amount: u32) -> u32 {
        self.credit(amount)
    }
}

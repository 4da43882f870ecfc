use std::collections::HashMap;

use crate::domain::tokens::Tokens;
use crate::domain::UserId;
use crate::engine::ledger::{Ledger, LedgerError};

/// Простая in-memory реализация леджера для тестов и локального запуска.
///
/// В проде этот трейт реализует обёртка над транзакционной БД;
/// движку разница не видна.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLedger {
    balances: HashMap<UserId, u64>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Завести пользователя с начальным балансом.
    pub fn with_balance(user_id: UserId, balance: Tokens) -> Self {
        let mut ledger = Self::new();
        ledger.set_balance(user_id, balance);
        ledger
    }

    pub fn set_balance(&mut self, user_id: UserId, balance: Tokens) {
        self.balances.insert(user_id, balance.0);
    }
}

impl Ledger for InMemoryLedger {
    fn balance(&self, user_id: UserId) -> Result<Tokens, LedgerError> {
        Ok(Tokens(self.balances.get(&user_id).copied().unwrap_or(0)))
    }

    fn adjust(&mut self, user_id: UserId, delta: i64) -> Result<Tokens, LedgerError> {
        let current = self.balances.get(&user_id).copied().unwrap_or(0);

        let new_balance = if delta < 0 {
            let debit = delta.unsigned_abs();
            // Дебет ниже нуля отклоняется, баланс не меняется.
            current
                .checked_sub(debit)
                .ok_or(LedgerError::InsufficientFunds {
                    balance: Tokens(current),
                    required: Tokens(debit),
                })?
        } else {
            current.saturating_add(delta as u64)
        };

        self.balances.insert(user_id, new_balance);
        Ok(Tokens(new_balance))
    }
}

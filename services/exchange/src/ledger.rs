//! Ledger — authoritative balance store
//!
//! Owns every (owner, token) balance. Balances are created implicitly at
//! zero on first reference, are never negative, and are only ever moved
//! by credit, debit, and transfer. The ledger is a leaf component: it
//! knows nothing about tokens' registration status or about orders.

use rust_decimal::Decimal;
use std::collections::HashMap;
use types::errors::LedgerError;
use types::ids::{Principal, TokenId};

/// Authoritative store of all balances.
///
/// Balances are stored as `HashMap<Principal, HashMap<TokenId, Decimal>>`.
/// Every debit is preceded by a sufficiency check and all arithmetic is
/// overflow-checked, so no sequence of operations can drive a balance
/// negative or wrap.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Balances: owner -> (token -> amount)
    balances: HashMap<Principal, HashMap<TokenId, Decimal>>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
        }
    }

    // ───────────────────────── Mutations ─────────────────────────

    /// Increase a balance by `amount`
    ///
    /// Requires `amount > 0`. Fails only on invalid amount or overflow.
    pub fn credit(
        &mut self,
        owner: &Principal,
        token: &TokenId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        self.apply_credit(owner, token, amount)
    }

    /// Decrease a balance by `amount`
    ///
    /// Requires `amount > 0`. Fails with `InsufficientBalance` when the
    /// current balance is below `amount`, leaving the ledger untouched.
    pub fn debit(
        &mut self,
        owner: &Principal,
        token: &TokenId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }

        let current = self.balance_of(owner, token);
        if current < amount {
            return Err(LedgerError::InsufficientBalance {
                token: token.to_string(),
                required: amount.to_string(),
                available: current.to_string(),
            });
        }

        let balance = self
            .balances
            .get_mut(owner)
            .and_then(|tokens| tokens.get_mut(token))
            .ok_or(LedgerError::InsufficientBalance {
                token: token.to_string(),
                required: amount.to_string(),
                available: Decimal::ZERO.to_string(),
            })?;
        *balance = balance.checked_sub(amount).ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    /// Atomically debit `from` and credit `to`
    ///
    /// The debit is validated before any mutation, so a failed transfer
    /// has no observable effect. A self-transfer preserves the balance
    /// but still requires sufficiency.
    pub fn transfer(
        &mut self,
        from: &Principal,
        to: &Principal,
        token: &TokenId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        self.debit(from, token, amount)?;
        // The credit cannot fail after a successful debit: the amount was
        // just held in a balance, so re-adding it cannot overflow.
        self.apply_credit(to, token, amount)
    }

    /// All-or-nothing multi-leg credit used by trade settlement
    ///
    /// Zero-amount legs are permitted and skipped. Every leg is
    /// overflow-checked against the projected balances (duplicate
    /// (owner, token) legs accumulate) before any write, so a failure
    /// leaves the ledger untouched.
    pub fn credit_many(
        &mut self,
        legs: &[(Principal, TokenId, Decimal)],
    ) -> Result<(), LedgerError> {
        // Accumulate per-balance totals first
        let mut projected: HashMap<(&Principal, &TokenId), Decimal> = HashMap::new();
        for (owner, token, amount) in legs {
            if *amount < Decimal::ZERO {
                return Err(LedgerError::InvalidAmount);
            }
            let entry = projected.entry((owner, token)).or_insert(Decimal::ZERO);
            *entry = entry.checked_add(*amount).ok_or(LedgerError::Overflow)?;
        }

        // Validate every projected balance before the first write
        for ((owner, token), delta) in &projected {
            self.balance_of(owner, token)
                .checked_add(*delta)
                .ok_or(LedgerError::Overflow)?;
        }

        let applied: Vec<(Principal, TokenId, Decimal)> = projected
            .into_iter()
            .filter(|(_, delta)| !delta.is_zero())
            .map(|((owner, token), delta)| (owner.clone(), token.clone(), delta))
            .collect();
        for (owner, token, delta) in applied {
            self.apply_credit(&owner, &token, delta)?;
        }
        Ok(())
    }

    // ───────────────────────── Queries ─────────────────────────

    /// Current balance, defaulting to zero for unseen pairs. Never fails.
    pub fn balance_of(&self, owner: &Principal, token: &TokenId) -> Decimal {
        self.balances
            .get(owner)
            .and_then(|tokens| tokens.get(token))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Balance if the (owner, token) pair has ever been touched
    pub fn recorded_balance(&self, owner: &Principal, token: &TokenId) -> Option<Decimal> {
        self.balances
            .get(owner)
            .and_then(|tokens| tokens.get(token))
            .copied()
    }

    /// Total ledger-held amount of a token across all owners
    pub fn total_supply(&self, token: &TokenId) -> Decimal {
        self.balances
            .values()
            .filter_map(|tokens| tokens.get(token))
            .sum()
    }

    // ───────────────────────── Internal ─────────────────────────

    /// Credit with overflow protection; amount must be non-negative.
    fn apply_credit(
        &mut self,
        owner: &Principal,
        token: &TokenId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let balance = self
            .balances
            .entry(owner.clone())
            .or_default()
            .entry(token.clone())
            .or_insert(Decimal::ZERO);
        *balance = balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
        Ok(())
    }
}

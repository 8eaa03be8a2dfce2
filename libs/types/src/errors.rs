//! Error taxonomy for the exchange backend
//!
//! Every failure is a normal, synchronous outcome of the call that
//! triggered it, and always leaves the ledger and order book exactly as
//! they were before the call.

use crate::ids::OrderId;
use thiserror::Error;

/// Ledger-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient balance for {token}: required {required}, available {available}")]
    InsufficientBalance {
        token: String,
        required: String,
        available: String,
    },

    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Arithmetic overflow in balance calculation")]
    Overflow,
}

/// Top-level exchange errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("Unknown token: {token}")]
    UnknownToken { token: String },

    #[error("Token already exists: {token}")]
    TokenAlreadyExists { token: String },

    #[error("Unknown order: {order_id}")]
    UnknownOrder { order_id: OrderId },

    #[error("Invalid order pair: {buy_order_id} is not a buy or {sell_order_id} is not a sell")]
    InvalidOrderPair {
        buy_order_id: OrderId,
        sell_order_id: OrderId,
    },

    #[error("Token mismatch: buy order is for {buy_token}, sell order is for {sell_token}")]
    TokenMismatch {
        buy_token: String,
        sell_token: String,
    },

    #[error("Price mismatch: bid {bid} is below ask {ask}")]
    PriceMismatch { bid: String, ask: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

impl ExchangeError {
    /// Returns true if this failure came from a balance check
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(
            self,
            ExchangeError::Ledger(LedgerError::InsufficientBalance { .. })
        )
    }
}

//! Event records emitted by exchange operations
//!
//! Events are immutable records appended to the service's log only
//! after an operation has fully succeeded; a failed call emits nothing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::ids::{OrderId, Principal, TokenId, TradeId};
use types::numeric::{Price, Quantity};
use types::order::Side;

/// A token was registered and its initial supply minted to the creator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenCreated {
    pub token: TokenId,
    pub creator: Principal,
    pub initial_supply: Decimal,
}

/// Funds were credited to a balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposited {
    pub owner: Principal,
    pub token: TokenId,
    pub amount: Decimal,
}

/// Funds were debited from a balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawn {
    pub owner: Principal,
    pub token: TokenId,
    pub amount: Decimal,
}

/// An order was placed and its reservation escrowed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlaced {
    pub order_id: OrderId,
    pub token: TokenId,
    pub owner: Principal,
    pub side: Side,
    pub price: Price,
    pub amount: Quantity,
    /// Amount debited from the owner at placement
    pub reserved: Decimal,
}

/// A trade settled between two matched orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeExecuted {
    pub trade_id: TradeId,
    pub sequence: u64,
    pub token: TokenId,
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}

/// Enum wrapper for all exchange events, enabling uniform handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExchangeEvent {
    TokenCreated(TokenCreated),
    Deposited(Deposited),
    Withdrawn(Withdrawn),
    OrderPlaced(OrderPlaced),
    TradeExecuted(TradeExecuted),
}

//! Trade settlement records
//!
//! A trade is the atomic exchange of base and quote assets between one
//! buy order and one sell order. Records are immutable once created.

use crate::ids::{OrderId, Principal, TokenId, TradeId};
use crate::numeric::{Price, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An executed trade between two matched orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: TradeId,
    /// Global monotonic sequence assigned at execution
    pub sequence: u64,
    pub token: TokenId,

    // Order references
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,

    // Counterparties
    pub buyer: Principal,
    pub seller: Principal,

    // Settlement terms
    pub price: Price,
    pub quantity: Quantity,
}

impl Trade {
    /// Create a new trade record
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sequence: u64,
        token: TokenId,
        buy_order_id: OrderId,
        sell_order_id: OrderId,
        buyer: Principal,
        seller: Principal,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            trade_id: TradeId::new(),
            sequence,
            token,
            buy_order_id,
            sell_order_id,
            buyer,
            seller,
            price,
            quantity,
        }
    }

    /// Quote value moved from buyer to seller (price × quantity)
    ///
    /// None when the product does not fit in a `Decimal`; a trade
    /// produced by settlement always fits, since the value was held in
    /// the buyer's reservation.
    pub fn quote_value(&self) -> Option<Decimal> {
        self.price.checked_value(self.quantity)
    }
}

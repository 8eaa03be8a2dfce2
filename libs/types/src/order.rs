//! Order lifecycle types
//!
//! An order is a standing offer to buy or sell a quantity of a token at
//! a price. Its `amount` field is the *remaining* quantity: it shrinks as
//! trades execute, and the order leaves the book when it reaches zero.

use crate::ids::{OrderId, Principal, TokenId};
use crate::numeric::{Price, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self, Side::Buy)
    }
}

/// An outstanding order
///
/// The order doubles as the escrow record: the funds reserved at
/// placement (quote value for a buy, base amount for a sell) stay locked
/// exactly as long as the order is outstanding, and are released only
/// through settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub token: TokenId,
    pub owner: Principal,
    pub side: Side,
    pub price: Price,
    /// Remaining (unfilled) quantity; always positive while outstanding
    pub amount: Quantity,
}

impl Order {
    /// Create a new outstanding order
    pub fn new(
        id: OrderId,
        token: TokenId,
        owner: Principal,
        side: Side,
        price: Price,
        amount: Quantity,
    ) -> Self {
        Self {
            id,
            token,
            owner,
            side,
            price,
            amount,
        }
    }

    /// Value reserved from the owner's balance for the remaining amount
    ///
    /// A buy escrows quote currency (`price × amount`); a sell escrows
    /// the base token (`amount`). None when the buy-side product does
    /// not fit in a `Decimal`.
    pub fn reserved_value(&self) -> Option<Decimal> {
        match self.side {
            Side::Buy => self.price.checked_value(self.amount),
            Side::Sell => Some(self.amount.as_decimal()),
        }
    }

    /// Reduce the remaining amount by a fill
    ///
    /// # Panics
    /// Panics if the fill exceeds the remaining amount
    pub fn fill(&mut self, quantity: Quantity) {
        let remaining = self
            .amount
            .checked_sub(quantity)
            .expect("Fill would exceed remaining amount");
        self.amount = remaining;
    }

    /// Check if the order is completely filled
    pub fn is_filled(&self) -> bool {
        self.amount.is_zero()
    }
}

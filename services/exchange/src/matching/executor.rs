//! Trade planning and execution
//!
//! Validates a (buy, sell) order pair and computes the settlement legs:
//! how much base moves to the buyer, how much quote moves to the seller,
//! and how much escrowed quote is returned to the buyer when the pair
//! settles below the buy limit.

use rust_decimal::Decimal;
use types::errors::{ExchangeError, LedgerError};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

use super::crossing::{can_match, settlement_price};

/// Computed settlement for one crossed pair
///
/// All amounts are denominated from already-escrowed funds: the seller's
/// order holds `base_amount` of the base token, and the buyer's order
/// holds `quote_amount + buyer_refund` of the quote currency for the
/// traded quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    /// Traded quantity: min of the two remaining amounts
    pub quantity: Quantity,
    /// Settlement price: the resting (earlier-placed) order's price
    pub price: Price,
    /// Base token credited to the buyer
    pub base_amount: Decimal,
    /// Quote currency credited to the seller (price × quantity)
    pub quote_amount: Decimal,
    /// Escrow surplus returned to the buyer
    ///
    /// Non-zero only when the buy order was placed later at a higher
    /// limit than the settlement price.
    pub buyer_refund: Decimal,
}

/// Plans settlements and assigns trade sequence numbers
pub struct TradeExecutor {
    sequence_counter: u64,
}

impl TradeExecutor {
    /// Create a new executor with starting sequence number
    pub fn new(starting_sequence: u64) -> Self {
        Self {
            sequence_counter: starting_sequence,
        }
    }

    /// Get next sequence number (monotonically increasing)
    fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence_counter;
        self.sequence_counter += 1;
        seq
    }

    /// Validate a pair and compute its settlement, mutating nothing
    ///
    /// Checks, in order: sides (`InvalidOrderPair`), same token
    /// (`TokenMismatch`), price compatibility (`PriceMismatch`).
    pub fn plan(buy: &Order, sell: &Order) -> Result<Settlement, ExchangeError> {
        if buy.side != Side::Buy || sell.side != Side::Sell {
            return Err(ExchangeError::InvalidOrderPair {
                buy_order_id: buy.id,
                sell_order_id: sell.id,
            });
        }

        if buy.token != sell.token {
            return Err(ExchangeError::TokenMismatch {
                buy_token: buy.token.to_string(),
                sell_token: sell.token.to_string(),
            });
        }

        if !can_match(buy.price, sell.price) {
            return Err(ExchangeError::PriceMismatch {
                bid: buy.price.to_string(),
                ask: sell.price.to_string(),
            });
        }

        let quantity = buy.amount.min(sell.amount);
        let price = settlement_price(buy, sell);

        let base_amount = quantity.as_decimal();
        let quote_amount = price
            .checked_value(quantity)
            .ok_or(LedgerError::Overflow)?;
        let bid_value = buy
            .price
            .checked_value(quantity)
            .ok_or(LedgerError::Overflow)?;
        // Escrow held for the traded units at the buy limit, minus what
        // the settlement consumes. Never negative since bid >= price.
        let buyer_refund = bid_value - quote_amount;

        Ok(Settlement {
            quantity,
            price,
            base_amount,
            quote_amount,
            buyer_refund,
        })
    }

    /// Plan the pair and produce the trade record for it
    pub fn execute(
        &mut self,
        buy: &Order,
        sell: &Order,
    ) -> Result<(Settlement, Trade), ExchangeError> {
        let settlement = Self::plan(buy, sell)?;
        let trade = Trade::new(
            self.next_sequence(),
            buy.token.clone(),
            buy.id,
            sell.id,
            buy.owner.clone(),
            sell.owner.clone(),
            settlement.price,
            settlement.quantity,
        );
        Ok((settlement, trade))
    }
}

//! Crossing detection logic
//!
//! Determines when a buy and a sell are price-compatible and which
//! price the pair settles at.

use types::numeric::Price;
use types::order::Order;

/// Check if a buy and sell can match at given prices
///
/// A buy crosses a sell when the bid is at or above the ask.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// The price a crossed pair settles at
///
/// The resting (earlier-placed) order sets the price. Order ids are
/// assigned monotonically, so the earlier order is the one with the
/// lower id.
pub fn settlement_price(buy: &Order, sell: &Order) -> Price {
    if buy.id < sell.id {
        buy.price
    } else {
        sell.price
    }
}

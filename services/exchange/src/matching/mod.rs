//! Matching logic module
//!
//! Price-compatibility checks and trade settlement planning.

pub mod crossing;
pub mod executor;

pub use crossing::can_match;
pub use executor::TradeExecutor;

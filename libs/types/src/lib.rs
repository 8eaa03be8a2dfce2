//! Types library for the token exchange backend
//!
//! This library provides all core type definitions shared between the
//! ledger and the order book, ensuring type safety and deterministic
//! behavior.
//!
//! # Modules
//! - `ids`: Unique identifiers (OrderId, TradeId, TokenId, Principal)
//! - `numeric`: Fixed-point decimal types (Price, Quantity)
//! - `order`: Order lifecycle types
//! - `trade`: Trade settlement records
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
    pub use crate::errors::*;
}

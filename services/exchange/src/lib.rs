//! Token Exchange Backend
//!
//! In-memory ledger and order matching service behind the exchange
//! contract: token registration, deposits and withdrawals, escrowed
//! order placement, and atomic two-sided trade settlement.
//!
//! **Key Invariants:**
//! - No balance is ever negative
//! - Every value transfer between two parties is atomic
//! - Funds reserved for an outstanding order are always obtainable at
//!   settlement
//! - Order ids are strictly increasing and never reused
//!
//! Execution is single-writer, run-to-completion: every mutating
//! operation takes `&mut self` and either completes or fails with no
//! observable partial state.

pub mod book;
pub mod matching;
pub mod ledger;
pub mod registry;
pub mod engine;
pub mod events;

pub use engine::Exchange;
pub use ledger::Ledger;
pub use registry::TokenRegistry;

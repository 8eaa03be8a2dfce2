//! Order book infrastructure module
//!
//! Contains the per-token FIFO order queue.

pub mod token_book;

pub use token_book::TokenBook;

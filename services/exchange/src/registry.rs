//! Token registry
//!
//! Tracks the set of registered token identifiers. A token must be
//! registered via creation before any balance or order referencing it
//! is valid.

use std::collections::HashSet;
use types::errors::ExchangeError;
use types::ids::TokenId;

/// Set of registered token identifiers
#[derive(Debug, Default)]
pub struct TokenRegistry {
    tokens: HashSet<TokenId>,
}

impl TokenRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tokens: HashSet::new(),
        }
    }

    /// Register a token, failing if it already exists
    pub fn register(&mut self, token: TokenId) -> Result<(), ExchangeError> {
        if self.tokens.contains(&token) {
            return Err(ExchangeError::TokenAlreadyExists {
                token: token.to_string(),
            });
        }
        self.tokens.insert(token);
        Ok(())
    }

    /// Check if a token is registered
    pub fn is_registered(&self, token: &TokenId) -> bool {
        self.tokens.contains(token)
    }

    /// Fail with `UnknownToken` unless the token is registered
    pub fn ensure_registered(&self, token: &TokenId) -> Result<(), ExchangeError> {
        if self.is_registered(token) {
            Ok(())
        } else {
            Err(ExchangeError::UnknownToken {
                token: token.to_string(),
            })
        }
    }

    /// Number of registered tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

//! Per-token order queue with FIFO ordering
//!
//! The contract matches two explicitly named orders rather than sweeping
//! price levels, so the book for one token reduces to a single queue of
//! outstanding order ids. Insertion order is kept so book snapshots are
//! deterministic.

use std::collections::VecDeque;
use types::ids::OrderId;

/// The outstanding orders of one token, in placement order
///
/// An order id appears in exactly one token's book, and only while the
/// order's remaining amount is positive.
#[derive(Debug, Clone, Default)]
pub struct TokenBook {
    /// Queue of outstanding order ids (insertion order)
    orders: VecDeque<OrderId>,
}

impl TokenBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self {
            orders: VecDeque::new(),
        }
    }

    /// Append an order at the back of the queue
    pub fn insert(&mut self, order_id: OrderId) {
        self.orders.push_back(order_id);
    }

    /// Remove an order id from the queue
    ///
    /// Returns true if the order was present
    pub fn remove(&mut self, order_id: &OrderId) -> bool {
        match self.orders.iter().position(|id| id == order_id) {
            Some(position) => {
                self.orders.remove(position);
                true
            }
            None => false,
        }
    }

    /// Check membership
    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.orders.contains(order_id)
    }

    /// Iterate over outstanding order ids in placement order
    pub fn iter(&self) -> impl Iterator<Item = &OrderId> {
        self.orders.iter()
    }

    /// Number of outstanding orders
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the book is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_placement_order() {
        let mut book = TokenBook::new();
        book.insert(OrderId::new(1));
        book.insert(OrderId::new(2));
        book.insert(OrderId::new(3));

        let ids: Vec<u64> = book.iter().map(|id| id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn test_remove_middle_order() {
        let mut book = TokenBook::new();
        book.insert(OrderId::new(1));
        book.insert(OrderId::new(2));
        book.insert(OrderId::new(3));

        assert!(book.remove(&OrderId::new(2)));
        assert!(!book.contains(&OrderId::new(2)));

        let ids: Vec<u64> = book.iter().map(|id| id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_absent_order() {
        let mut book = TokenBook::new();
        book.insert(OrderId::new(1));
        assert!(!book.remove(&OrderId::new(9)));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_empty_book() {
        let book = TokenBook::new();
        assert!(book.is_empty());
        assert_eq!(book.iter().count(), 0);
    }
}

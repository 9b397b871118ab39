//! Presentation-boundary display ordering.
//!
//! Storage order is authoritative. When a pane wants to show items in a
//! different order, that reordering is a pure, stateless permutation applied
//! to a view snapshot here. It is never baked into the store's mutation
//! logic, and the store never learns about it.

use crate::item::Item;

/// A validated permutation of `0..len`, mapping display slots to storage
/// positions: slot `d` shows the item at storage position `order[d]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOrder {
    order: Vec<usize>,
}

impl DisplayOrder {
    /// The order in which items are stored.
    pub fn identity(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
        }
    }

    /// Validate `order` as a permutation: every position in `0..len` exactly
    /// once. Returns `None` otherwise.
    pub fn new(order: Vec<usize>) -> Option<Self> {
        let len = order.len();
        let mut seen = vec![false; len];
        for &position in &order {
            if position >= len || seen[position] {
                return None;
            }
            seen[position] = true;
        }
        Some(Self { order })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Reorder a view snapshot for display. Returns `None` when the snapshot
    /// length does not match this permutation.
    pub fn apply(&self, items: &[Item]) -> Option<Vec<Item>> {
        if items.len() != self.order.len() {
            return None;
        }
        Some(
            self.order
                .iter()
                .map(|&position| items[position].clone())
                .collect(),
        )
    }
}

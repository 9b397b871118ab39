//! The item-list store: one backing sequence, two logical views.
//!
//! # Architecture
//!
//! ```text
//! move_item / reset ──→ validate ──→ splice backing ──→ notify observers
//!                          │
//!                          └─ error: backing untouched, typed reason returned
//! ```
//!
//! The backing sequence is the sole source of truth. The left view is
//! `backing[0..split_index]`, the right view is `backing[split_index..]`;
//! `split_index` is fixed at construction. Moves permute the backing
//! sequence and never add or remove items, so both views always concatenate
//! back to the full sequence.
//!
//! The store is single-threaded and synchronous with no internal lock; see
//! [`SharedStore`] for the cross-thread wrapper.

mod error;
mod shared;

pub use error::StoreError;
pub use shared::SharedStore;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Identifies one of the two logical views over the backing sequence.
///
/// Callers pass this explicit tag instead of a widget reference; the store
/// knows nothing about whatever hosts the panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Left,
    Right,
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewId::Left => f.write_str("left"),
            ViewId::Right => f.write_str("right"),
        }
    }
}

impl FromStr for ViewId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" | "l" => Ok(ViewId::Left),
            "right" | "r" => Ok(ViewId::Right),
            other => Err(format!("unknown view '{}', expected left or right", other)),
        }
    }
}

/// What happens to the occupant of the target slot when an item lands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovePolicy {
    /// Remove the dragged item and re-insert it at the target position,
    /// shifting the items in between. The append position (one past the end
    /// of the target view) is a valid target.
    #[default]
    InsertShift,
    /// Exchange the dragged item with the occupant of the target slot. The
    /// target must be an existing position, and its occupant must be movable.
    Swap,
}

/// Owned copy of both views after a completed mutation.
///
/// `left` concatenated with `right` always equals the backing sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub left: Vec<Item>,
    pub right: Vec<Item>,
}

type Observer = Box<dyn FnMut(&Snapshot) + Send>;

/// Owns the ordered item sequence and performs validated moves between and
/// within its two views.
pub struct ItemListStore {
    backing: Vec<Item>,
    split_index: usize,
    policy: MovePolicy,
    observers: Vec<Observer>,
}

impl fmt::Debug for ItemListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemListStore")
            .field("backing", &self.backing)
            .field("split_index", &self.split_index)
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ItemListStore {
    /// Create a store over `initial`, split at `split_index`, with the
    /// default insert-shift policy.
    ///
    /// Fails with [`StoreError::InvalidInitialState`] when ids are not unique
    /// or the sequence is shorter than `split_index`.
    pub fn new(initial: Vec<Item>, split_index: usize) -> Result<Self, StoreError> {
        validate_sequence(&initial, split_index)?;
        Ok(Self {
            backing: initial,
            split_index,
            policy: MovePolicy::default(),
            observers: Vec::new(),
        })
    }

    /// Replace the move policy. Intended for use at construction time.
    #[must_use]
    pub fn with_policy(mut self, policy: MovePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register an observer, called with the final consistent snapshot after
    /// every successful `move_item` or `reset`: exactly once per call,
    /// never on failure.
    pub fn subscribe(&mut self, observer: impl FnMut(&Snapshot) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Read-only slice of the requested view in current order.
    pub fn view(&self, view: ViewId) -> &[Item] {
        match view {
            ViewId::Left => &self.backing[..self.split_index],
            ViewId::Right => &self.backing[self.split_index..],
        }
    }

    /// Owned copy of both views.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            left: self.view(ViewId::Left).to_vec(),
            right: self.view(ViewId::Right).to_vec(),
        }
    }

    /// The full backing sequence in current order.
    pub fn items(&self) -> &[Item] {
        &self.backing
    }

    pub fn len(&self) -> usize {
        self.backing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    pub fn split_index(&self) -> usize {
        self.split_index
    }

    pub fn policy(&self) -> MovePolicy {
        self.policy
    }

    /// Translate a view-local index into a backing index. The result may be
    /// one past the end of the view (the append position).
    fn global_index(&self, view: ViewId, index: usize) -> usize {
        match view {
            ViewId::Left => index,
            ViewId::Right => self.split_index + index,
        }
    }

    /// Move the item at `src_index` of `src_view` to `dst_index` of
    /// `dst_view`, both view-local.
    ///
    /// Preconditions are checked in a fixed order: source index in bounds,
    /// source item movable, target index valid, and (under [`MovePolicy::Swap`])
    /// target occupant movable. Any failure leaves the backing sequence
    /// completely unmodified.
    pub fn move_item(
        &mut self,
        src_view: ViewId,
        src_index: usize,
        dst_view: ViewId,
        dst_index: usize,
    ) -> Result<(), StoreError> {
        let src_len = self.view(src_view).len();
        if src_index >= src_len {
            return Err(StoreError::OutOfRange {
                view: src_view,
                index: src_index,
                len: src_len,
            });
        }
        let global_from = self.global_index(src_view, src_index);

        let source = &self.backing[global_from];
        if !source.movable {
            return Err(StoreError::ItemLocked {
                id: source.id,
                label: source.label.clone(),
            });
        }

        let dst_len = self.view(dst_view).len();
        match self.policy {
            MovePolicy::InsertShift => {
                // dst_len itself is the append position.
                if dst_index > dst_len {
                    return Err(StoreError::OutOfRange {
                        view: dst_view,
                        index: dst_index,
                        len: dst_len,
                    });
                }
                let mut global_to = self.global_index(dst_view, dst_index);
                let item = self.backing.remove(global_from);
                if global_from < global_to {
                    // Removal shifted everything after the source left by one.
                    global_to -= 1;
                }
                let global_to = global_to.min(self.backing.len());
                self.backing.insert(global_to, item);
            }
            MovePolicy::Swap => {
                if dst_index >= dst_len {
                    return Err(StoreError::OutOfRange {
                        view: dst_view,
                        index: dst_index,
                        len: dst_len,
                    });
                }
                let global_to = self.global_index(dst_view, dst_index);
                let target = &self.backing[global_to];
                if global_to != global_from && !target.movable {
                    return Err(StoreError::ItemLocked {
                        id: target.id,
                        label: target.label.clone(),
                    });
                }
                self.backing.swap(global_from, global_to);
            }
        }

        self.notify();
        Ok(())
    }

    /// Replace the backing sequence wholesale, e.g. to restore the initial
    /// sample state. On failure the prior sequence is kept.
    pub fn reset(&mut self, items: Vec<Item>) -> Result<(), StoreError> {
        validate_sequence(&items, self.split_index)?;
        self.backing = items;
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }
}

fn validate_sequence(items: &[Item], split_index: usize) -> Result<(), StoreError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            return Err(StoreError::InvalidInitialState {
                reason: format!("duplicate item id {}", item.id),
            });
        }
    }
    if items.len() < split_index {
        return Err(StoreError::InvalidInitialState {
            reason: format!(
                "{} items cannot satisfy a split index of {}",
                items.len(),
                split_index
            ),
        });
    }
    Ok(())
}

//! Typed, recoverable store errors.
//!
//! Every rejected operation leaves the store untouched and reports a specific
//! reason. The store never logs and never retries; translating an error into
//! user-visible feedback is the caller's job.

use thiserror::Error;

use crate::store::ViewId;

/// Errors returned by [`ItemListStore`](crate::store::ItemListStore)
/// operations. All are recoverable, local failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A view-local index does not resolve to a valid position, including
    /// the append position for inserts.
    #[error("index {index} is out of range for the {view} view (length {len})")]
    OutOfRange {
        view: ViewId,
        index: usize,
        len: usize,
    },

    /// The operation would move or displace an item whose `movable` flag
    /// is false.
    #[error("item '{label}' (id {id}) is locked")]
    ItemLocked { id: u32, label: String },

    /// A replacement sequence had duplicate ids or was too short for the
    /// store's split index.
    #[error("invalid initial sequence: {reason}")]
    InvalidInitialState { reason: String },
}

impl StoreError {
    /// User-facing feedback line for display next to a rejected drop.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::OutOfRange { view, .. } => {
                format!("No slot there in the {} view", view)
            }
            StoreError::ItemLocked { label, .. } => format!("'{}' is locked", label),
            StoreError::InvalidInitialState { .. } => "Cannot restore that item set".to_string(),
        }
    }
}

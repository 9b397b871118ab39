//! Thread-safe wrapper around the store.
//!
//! The store itself has no internal lock: a single caller thread is the
//! normal mode. Callers that must reach the board from several threads go
//! through this guard, which serializes every public operation.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::item::Item;
use crate::store::{ItemListStore, Snapshot, StoreError, ViewId};

/// Cloneable handle sharing one [`ItemListStore`] behind a mutual-exclusion
/// guard.
///
/// Each public operation holds the lock for its full duration, so observers
/// still see exactly one consistent snapshot per successful mutation.
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<ItemListStore>>,
}

impl SharedStore {
    pub fn new(store: ItemListStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Owned copy of the requested view in current order.
    pub fn view(&self, view: ViewId) -> Vec<Item> {
        self.inner.lock().view(view).to_vec()
    }

    /// Owned copy of both views.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.lock().snapshot()
    }

    pub fn move_item(
        &self,
        src_view: ViewId,
        src_index: usize,
        dst_view: ViewId,
        dst_index: usize,
    ) -> Result<(), StoreError> {
        self.inner
            .lock()
            .move_item(src_view, src_index, dst_view, dst_index)
    }

    pub fn reset(&self, items: Vec<Item>) -> Result<(), StoreError> {
        self.inner.lock().reset(items)
    }
}

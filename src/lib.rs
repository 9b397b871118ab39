//! dualpane: a two-pane item board core.
//!
//! One ordered backing sequence of items, partitioned at a fixed split index
//! into two logical views (left and right). The store validates and applies
//! move operations between and within the views, and notifies observers with
//! a consistent snapshot after every successful mutation.
//!
//! Rendering, gesture handling and drop-zone geometry live elsewhere: callers
//! hand the store already-resolved `(view, index)` tuples and translate the
//! typed errors into user-visible feedback.

pub mod display;
pub mod item;
pub mod store;

pub use item::{sample_items, ColorTag, Item};
pub use store::{ItemListStore, MovePolicy, SharedStore, Snapshot, StoreError, ViewId};

//! Item model shared by both panes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque color tag carried for the presentation layer, packed as `0xRRGGBB`.
///
/// The store never interprets it; it only travels with the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTag(pub u32);

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0xFF_FF_FF)
    }
}

/// A single board item.
///
/// Items are immutable once created: "editing" means replacing the item at an
/// index with a new value, never mutating fields in place. Items with
/// `movable == false` can neither be dragged nor displaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique across the whole backing sequence.
    pub id: u32,
    pub label: String,
    pub color_tag: ColorTag,
    pub movable: bool,
}

impl Item {
    pub fn new(id: u32, label: impl Into<String>, color_tag: ColorTag) -> Self {
        Self {
            id,
            label: label.into(),
            color_tag,
            movable: true,
        }
    }

    /// Returns a copy of this item with `movable` cleared.
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.movable = false;
        self
    }
}

/// Palette for the canonical demo set, one entry per item.
const SAMPLE_PALETTE: [u32; 12] = [
    0xFF0000, // red
    0x0000FF, // blue
    0x00FF00, // green
    0xFFFF00, // yellow
    0xFF00FF, // magenta
    0x00FFFF, // cyan
    0xFF9800, 0x9C27B0, 0x795548, 0x607D8B, 0xE91E63, 0x3F51B5,
];

/// The canonical 12-item demo sequence: "Item 1" through "Item 12",
/// ids 1..=12, all movable.
pub fn sample_items() -> Vec<Item> {
    SAMPLE_PALETTE
        .iter()
        .enumerate()
        .map(|(i, &rgb)| {
            let n = i as u32 + 1;
            Item::new(n, format!("Item {}", n), ColorTag(rgb))
        })
        .collect()
}

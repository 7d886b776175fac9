#![forbid(unsafe_code)]

//! Selection state: which item is selected and which slice is in memory.

use navlist_core::contract::WindowSlice;
use navlist_core::item::Item;

/// The engine's view of the result list.
///
/// `total_count` is authoritative and comes from the data source;
/// `visible_items` is whatever contiguous window is currently
/// materialized. Selection is tracked as an absolute index into the
/// logical list, so a selected item may or may not be materialized at
/// any given moment.
///
/// Invariant: whenever `selected` is `Some(i)` and the item is
/// materialized, `visible_start <= i < visible_start + visible_items.len()`.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Absolute index of the selected item; `None` means no selection
    /// (the input field owns keyboard focus).
    pub selected: Option<usize>,
    /// Absolute index of the first materialized item.
    pub visible_start: usize,
    /// The materialized window, contiguous from `visible_start`.
    pub visible_items: Vec<Item>,
    /// Authoritative total result count.
    pub total_count: usize,
}

impl SelectionState {
    /// Empty state: no results, no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One past the last materialized index.
    #[must_use]
    pub fn visible_end(&self) -> usize {
        self.visible_start + self.visible_items.len()
    }

    /// Whether the item at `index` is currently in memory.
    #[must_use]
    pub fn is_materialized(&self, index: usize) -> bool {
        index >= self.visible_start && index < self.visible_end()
    }

    /// The materialized item at an absolute index, if present.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<&Item> {
        if self.is_materialized(index) {
            self.visible_items.get(index - self.visible_start)
        } else {
            None
        }
    }

    /// Replace the materialized window with a fetched slice.
    pub fn apply_slice(&mut self, start: usize, slice: WindowSlice) {
        self.visible_start = start;
        self.visible_items = slice.items;
        self.total_count = slice.total_count;
    }

    /// Drop all results and selection (a new search is starting).
    pub fn clear(&mut self) {
        self.selected = None;
        self.visible_start = 0;
        self.visible_items.clear();
        self.total_count = 0;
    }
}

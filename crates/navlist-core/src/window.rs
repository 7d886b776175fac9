#![forbid(unsafe_code)]

//! Window arithmetic: which slice of the logical result list to fetch.
//!
//! The total result list can be far larger than what is materialized in
//! memory. These pure functions decide the `[start, start + count)`
//! subrange to request from the data source for a given target index,
//! and how many items a capped display is allowed to show.
//!
//! # Example
//!
//! ```
//! use navlist_core::window::FetchWindow;
//!
//! // 30 rows in view, 10 rows of buffer on each side, 100 results total.
//! let w = FetchWindow::around(80, 30, 10, 100);
//! assert_eq!(w.start, 50);
//! assert_eq!(w.count, 50);
//! assert!(w.contains(80));
//! ```

/// Number of items fetched when the viewport capacity is not yet known
/// (first search, before any layout pass has measured the list).
pub const INITIAL_ITEMS_TO_LOAD: usize = 30;

/// A contiguous subrange of the logical result list to materialize.
///
/// Always clamped so `start >= 0`; `start + count` may exceed the total
/// count, in which case the data source returns fewer items than
/// requested (see [`DataSource`](crate::contract::DataSource)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchWindow {
    /// Absolute index of the first item to fetch.
    pub start: usize,
    /// Number of items requested.
    pub count: usize,
}

impl FetchWindow {
    /// Compute the fetch window centered on `target`.
    ///
    /// The window size is the viewport capacity (or
    /// [`INITIAL_ITEMS_TO_LOAD`] when the capacity is still 0) plus one
    /// buffer of `buffer` items on each side. The start is pulled back so
    /// the window never extends past `total` when `total` is large
    /// enough; with fewer results than the window size the window
    /// degenerates to `[0, total)` on the data-source side.
    ///
    /// Guarantee: `target` lies inside the returned window whenever
    /// `total >= window_size` and `target < total`.
    #[must_use]
    pub fn around(target: usize, viewport_capacity: usize, buffer: usize, total: usize) -> Self {
        let base = if viewport_capacity > 0 {
            viewport_capacity
        } else {
            INITIAL_ITEMS_TO_LOAD
        };
        let count = base + buffer * 2;
        let start = target
            .saturating_sub(count / 2)
            .min(total.saturating_sub(count));
        Self { start, count }
    }

    /// One past the last requested index.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.count
    }

    /// Whether `index` falls inside the requested range.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end()
    }
}

/// Cap on how many results the list is allowed to present.
///
/// The original settings file stores `-1` for "no limit"; the enum makes
/// that sentinel explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayLimit {
    /// Show every result the data source reports.
    #[default]
    Unlimited,
    /// Show at most this many results.
    Capped(usize),
}

impl DisplayLimit {
    /// Number of selectable items given the authoritative total count.
    #[must_use]
    pub fn effective_item_count(self, total: usize) -> usize {
        match self {
            Self::Unlimited => total,
            Self::Capped(limit) => total.min(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_centered_when_room_allows() {
        let w = FetchWindow::around(500, 30, 10, 1000);
        assert_eq!(w.count, 50);
        assert_eq!(w.start, 475);
        assert!(w.contains(500));
    }

    #[test]
    fn window_clamps_at_list_start() {
        let w = FetchWindow::around(3, 30, 10, 1000);
        assert_eq!(w.start, 0);
        assert!(w.contains(3));
    }

    #[test]
    fn window_clamps_at_list_end() {
        // Scenario from the design review: total=100, window=50, target=80.
        let w = FetchWindow::around(80, 30, 10, 100);
        assert_eq!(w.start, 50);
        assert_eq!(w.end(), 100);
        assert!(w.contains(80));
    }

    #[test]
    fn window_degenerates_when_total_is_small() {
        let w = FetchWindow::around(2, 30, 10, 7);
        assert_eq!(w.start, 0);
        // The request may overshoot; the data source returns the 7 that exist.
        assert_eq!(w.count, 50);
    }

    #[test]
    fn zero_capacity_falls_back_to_initial_load() {
        let w = FetchWindow::around(0, 0, 10, 1000);
        assert_eq!(w.count, INITIAL_ITEMS_TO_LOAD + 20);
    }

    #[test]
    fn display_limit_caps_item_count() {
        assert_eq!(DisplayLimit::Unlimited.effective_item_count(123), 123);
        assert_eq!(DisplayLimit::Capped(50).effective_item_count(123), 50);
        assert_eq!(DisplayLimit::Capped(50).effective_item_count(12), 12);
    }
}

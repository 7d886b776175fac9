//! Property-based invariant tests for fetch-window arithmetic.
//!
//! These tests verify the containment guarantees that must hold for any
//! valid inputs:
//!
//! 1. Containment: with enough results, the window always contains the
//!    target index and never extends past the total.
//! 2. Start clamping: the start never exceeds `total - window_size`.
//! 3. Determinism: the same inputs always produce the same window.
//! 4. Degenerate totals: with fewer results than the window size the
//!    start collapses to 0.
//! 5. Display-limit cap: the effective item count never exceeds the
//!    total or the cap.

use navlist_core::window::{DisplayLimit, FetchWindow};
use proptest::prelude::*;

fn window_size(capacity: usize, buffer: usize) -> usize {
    let base = if capacity > 0 { capacity } else { 30 };
    base + buffer * 2
}

proptest! {
    #[test]
    fn window_contains_target_when_total_is_large(
        capacity in 0usize..200,
        buffer in 0usize..50,
        total in 1usize..10_000,
        target_seed in 0usize..10_000,
    ) {
        let size = window_size(capacity, buffer);
        prop_assume!(total >= size);
        let target = target_seed % total;

        let w = FetchWindow::around(target, capacity, buffer, total);
        prop_assert!(w.contains(target), "window {:?} misses target {}", w, target);
        prop_assert!(w.end() <= total, "window {:?} overshoots total {}", w, total);
    }

    #[test]
    fn window_start_is_clamped(
        capacity in 0usize..200,
        buffer in 0usize..50,
        total in 0usize..10_000,
        target in 0usize..20_000,
    ) {
        let size = window_size(capacity, buffer);
        let w = FetchWindow::around(target, capacity, buffer, total);
        prop_assert_eq!(w.count, size);
        prop_assert!(w.start <= total.saturating_sub(size));
    }

    #[test]
    fn window_is_deterministic(
        capacity in 0usize..200,
        buffer in 0usize..50,
        total in 0usize..10_000,
        target in 0usize..20_000,
    ) {
        let a = FetchWindow::around(target, capacity, buffer, total);
        let b = FetchWindow::around(target, capacity, buffer, total);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn small_totals_collapse_to_list_start(
        capacity in 1usize..200,
        buffer in 0usize..50,
        total in 0usize..200,
        target in 0usize..200,
    ) {
        prop_assume!(total < window_size(capacity, buffer));
        let w = FetchWindow::around(target, capacity, buffer, total);
        prop_assert_eq!(w.start, 0);
    }

    #[test]
    fn effective_item_count_never_exceeds_bounds(
        total in 0usize..10_000,
        limit in 0usize..10_000,
    ) {
        let capped = DisplayLimit::Capped(limit).effective_item_count(total);
        prop_assert!(capped <= total);
        prop_assert!(capped <= limit);
        prop_assert_eq!(DisplayLimit::Unlimited.effective_item_count(total), total);
    }
}

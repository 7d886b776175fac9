//! Property-based invariant tests for the window/list height arithmetic.

use navlist_core::layout::{LayoutParams, compute_layout};
use proptest::prelude::*;

fn params(
    message_lines: usize,
    overflow_notice: bool,
    item_count: usize,
) -> LayoutParams {
    LayoutParams {
        message_lines,
        overflow_notice,
        item_count,
        ..LayoutParams::default()
    }
}

proptest! {
    #[test]
    fn window_height_stays_between_base_and_max(
        message_lines in 0usize..50,
        overflow_notice in any::<bool>(),
        item_count in 0usize..1_000,
    ) {
        let p = params(message_lines, overflow_notice, item_count);
        let layout = compute_layout(&p);
        prop_assert!(layout.window_height >= p.base_height);
        prop_assert!(layout.window_height <= p.max_height);
    }

    #[test]
    fn list_height_is_bounded_by_the_items(
        message_lines in 0usize..50,
        overflow_notice in any::<bool>(),
        item_count in 0usize..1_000,
    ) {
        let p = params(message_lines, overflow_notice, item_count);
        let layout = compute_layout(&p);
        prop_assert!(layout.list_height >= 0.0);
        prop_assert!(layout.list_height <= item_count as f32 * p.item_height);
        if item_count == 0 {
            prop_assert_eq!(layout.list_height, 0.0);
        }
    }

    #[test]
    fn more_items_never_shrink_the_window(
        message_lines in 0usize..50,
        item_count in 0usize..1_000,
    ) {
        let smaller = compute_layout(&params(message_lines, false, item_count));
        let larger = compute_layout(&params(message_lines, false, item_count + 1));
        prop_assert!(larger.window_height >= smaller.window_height);
    }
}

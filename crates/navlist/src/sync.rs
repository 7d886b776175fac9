#![forbid(unsafe_code)]

//! Focus/scroll synchronizer.
//!
//! After a selection change (and any window fetch) the render surface
//! needs a frame or two before the row for the new selection exists.
//! The synchronizer polls across render frames with a fixed retry
//! budget, moves focus to the row once it appears, then applies a
//! minimal explicit scroll correction so the row sits inside the
//! viewport with a small pixel margin.
//!
//! Render lag past the retry budget is tolerated, not an error: the
//! call reports [`SyncOutcome::RetryExhausted`] and a later render is
//! expected to reconcile on its own.

use crate::selection::SelectionState;
use navlist_core::contract::{ElementMetrics, RenderSurface, ScrollMetrics};

/// Tuning for [`align_focus`].
#[derive(Debug, Clone, Copy)]
pub struct SyncParams {
    /// How many render frames to poll before giving up.
    pub retry_budget: u32,
    /// Pixel margin kept between the focused row and the viewport edge.
    pub buffer_px: f32,
    /// Scroll deltas at or below this are dropped to avoid jitter.
    pub dead_zone: f32,
}

impl Default for SyncParams {
    fn default() -> Self {
        Self {
            retry_budget: 30,
            // One quarter of the render buffer, in pixels: 10 items * 35 px / 4.
            buffer_px: 10.0 * 35.0 / 4.0,
            dead_zone: 0.5,
        }
    }
}

/// How an [`align_focus`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The row was found, focused, and scrolled into view.
    Focused,
    /// The target is not in the materialized window; nothing was done.
    /// The caller is responsible for fetching before synchronizing.
    NotMaterialized,
    /// The retry budget ran out before the row appeared.
    RetryExhausted,
}

/// Align keyboard focus and scroll position with `target`.
pub fn align_focus<R: RenderSurface>(
    surface: &mut R,
    target: usize,
    state: &SelectionState,
    params: &SyncParams,
) -> SyncOutcome {
    surface.wait_frame();
    if !state.is_materialized(target) {
        return SyncOutcome::NotMaterialized;
    }

    for attempt in 0..params.retry_budget {
        surface.wait_frame();
        let Some(element) = surface.find_element(target) else {
            continue;
        };

        // The surface contract suppresses the platform's implicit
        // scroll-into-view; the correction below is the only scroll.
        surface.focus_element(target);

        let metrics = surface.metrics();
        let corrected = corrected_scroll_top(&element, &metrics, params.buffer_px);
        if (corrected - metrics.scroll_top).abs() > params.dead_zone {
            surface.set_scroll_top(corrected);
        }

        tracing::trace!(
            message = "nav.sync",
            target,
            attempt,
            scroll_top = metrics.scroll_top,
            corrected,
        );
        return SyncOutcome::Focused;
    }

    tracing::debug!(message = "nav.sync", target, outcome = "retry_exhausted");
    SyncOutcome::RetryExhausted
}

/// Minimal scroll position that keeps `element` inside the viewport
/// with a `buffer` pixel margin, clamped to the valid scroll range.
#[must_use]
pub fn corrected_scroll_top(element: &ElementMetrics, metrics: &ScrollMetrics, buffer: f32) -> f32 {
    let mut scroll_top = metrics.scroll_top;
    if element.offset_top < metrics.scroll_top + buffer {
        scroll_top = element.offset_top - buffer;
    } else if element.offset_bottom() > metrics.scroll_top + metrics.client_height - buffer {
        scroll_top = element.offset_bottom() - metrics.client_height + buffer;
    }
    scroll_top.clamp(0.0, metrics.max_scroll_top())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_top: f32) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            client_height: 200.0,
            scroll_height: 1000.0,
        }
    }

    fn row(offset_top: f32) -> ElementMetrics {
        ElementMetrics {
            offset_top,
            height: 35.0,
        }
    }

    #[test]
    fn row_above_viewport_scrolls_up() {
        let corrected = corrected_scroll_top(&row(100.0), &metrics(300.0), 10.0);
        assert_eq!(corrected, 90.0);
    }

    #[test]
    fn row_below_viewport_scrolls_down() {
        let corrected = corrected_scroll_top(&row(600.0), &metrics(300.0), 10.0);
        assert_eq!(corrected, 600.0 + 35.0 - 200.0 + 10.0);
    }

    #[test]
    fn row_inside_viewport_keeps_scroll() {
        let corrected = corrected_scroll_top(&row(350.0), &metrics(300.0), 10.0);
        assert_eq!(corrected, 300.0);
    }

    #[test]
    fn correction_clamps_to_scroll_range() {
        // Near the top, the buffer would push scroll_top negative.
        let corrected = corrected_scroll_top(&row(5.0), &metrics(100.0), 10.0);
        assert_eq!(corrected, 0.0);

        // Near the bottom, clamp to scroll_height - client_height.
        let corrected = corrected_scroll_top(&row(990.0), &metrics(0.0), 10.0);
        assert_eq!(corrected, 800.0);
    }

    #[test]
    fn short_content_floors_at_zero() {
        let short = ScrollMetrics {
            scroll_top: 0.0,
            client_height: 200.0,
            scroll_height: 120.0,
        };
        let corrected = corrected_scroll_top(&row(110.0), &short, 10.0);
        assert_eq!(corrected, 0.0);
    }
}

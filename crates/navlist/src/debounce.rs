#![forbid(unsafe_code)]

//! Scroll debouncer.
//!
//! Raw scroll events arrive far faster than windows should be fetched.
//! Each event just records the latest scroll metrics and re-arms a short
//! deadline; only when the deadline expires with no further events does
//! the engine compute a new fetch window around the viewport middle.
//! Two skip rules prevent refetch storms: an unchanged window start is a
//! no-op, and shifts smaller than a hysteresis threshold (a quarter of
//! the effective viewport capacity) are ignored as scroll noise.

use navlist_core::window::{FetchWindow, INITIAL_ITEMS_TO_LOAD};
use web_time::{Duration, Instant};

/// Default coalescing delay between the last scroll event and the fetch.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(50);

/// Scroll metrics captured from one raw scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// Scroll position at the time of the event.
    pub scroll_top: f32,
    /// Visible height of the container.
    pub client_height: f32,
}

/// Coalesces raw scroll events into delayed window-recompute requests.
#[derive(Debug)]
pub struct ScrollDebouncer {
    sample: Option<ScrollSample>,
    deadline: Option<Instant>,
    delay: Duration,
    /// Whether a scroll-triggered fetch is currently executing. New
    /// scroll events are dropped while set; selection-triggered fetches
    /// are not gated by this flag.
    pub fetch_in_flight: bool,
}

impl Default for ScrollDebouncer {
    fn default() -> Self {
        Self::new(SCROLL_DEBOUNCE)
    }
}

impl ScrollDebouncer {
    /// Create a debouncer with the given coalescing delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            sample: None,
            deadline: None,
            delay,
            fetch_in_flight: false,
        }
    }

    /// Record a raw scroll event and re-arm the deadline.
    pub fn on_scroll(&mut self, sample: ScrollSample, now: Instant) {
        if self.fetch_in_flight {
            return;
        }
        self.sample = Some(sample);
        self.deadline = Some(now + self.delay);
    }

    /// Take the pending sample if the deadline has expired.
    pub fn take_due(&mut self, now: Instant) -> Option<ScrollSample> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        self.sample.take()
    }

    /// Whether a sample is waiting on its deadline.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Minimum window-shift magnitude that justifies a refetch.
///
/// Before the first layout pass the capacity is still 0; the threshold
/// then derives from [`INITIAL_ITEMS_TO_LOAD`], the same fallback the
/// window arithmetic applies to the window size.
#[must_use]
pub fn hysteresis_threshold(viewport_capacity: usize) -> usize {
    let base = if viewport_capacity > 0 {
        viewport_capacity
    } else {
        INITIAL_ITEMS_TO_LOAD
    };
    (base / 4).max(1)
}

/// Absolute index of the item at the vertical middle of the viewport.
#[must_use]
pub fn middle_visible_index(sample: ScrollSample, item_height: f32) -> usize {
    ((sample.scroll_top + sample.client_height / 2.0) / item_height).floor() as usize
}

/// Decide whether a debounced scroll warrants a fetch, and of what.
///
/// Returns `None` when the proposed window start equals the current one
/// and items are already loaded, or when the shift is below the
/// hysteresis threshold.
#[must_use]
pub fn plan_refetch(
    sample: ScrollSample,
    item_height: f32,
    viewport_capacity: usize,
    buffer: usize,
    total: usize,
    current_start: usize,
    items_loaded: bool,
) -> Option<FetchWindow> {
    if total == 0 {
        return None;
    }
    let middle = middle_visible_index(sample, item_height);
    let window = FetchWindow::around(middle, viewport_capacity, buffer, total);

    if items_loaded {
        if window.start == current_start {
            return None;
        }
        let shift = window.start.abs_diff(current_start);
        if shift < hysteresis_threshold(viewport_capacity) {
            return None;
        }
    }
    Some(window)
}

#![forbid(unsafe_code)]

//! Capability contracts between the engine and its host.
//!
//! The engine owns no display and no search index. Everything it needs
//! from the outside world arrives through two narrow traits:
//!
//! - [`DataSource`] materializes a window of results around a position.
//! - [`RenderSurface`] exposes the scroll container of the rendered
//!   list: its metrics, a per-index element lookup, focus, explicit
//!   scroll assignment, and a render-frame wait.
//!
//! Both are plain synchronous traits. The host decides how the work
//! actually happens (an in-process index, an IPC bridge, a real DOM-like
//! tree); from the engine's side each call is one cooperative
//! suspension point, and key events are handled serially to completion.

use crate::item::Item;
use crate::window::FetchWindow;
use thiserror::Error;

/// One materialized slice of the logical result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSlice {
    /// The items in `[window.start, window.start + items.len())`.
    pub items: Vec<Item>,
    /// Authoritative total result count, independent of how many items
    /// this slice carries.
    pub total_count: usize,
}

/// Failure reported by a [`DataSource`].
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// The source refused the request (bad query state, shutdown, ...).
    #[error("data source rejected the fetch: {0}")]
    Rejected(String),

    /// The backing store failed.
    #[error("data source backend failed")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Windowed access to the result list.
pub trait DataSource {
    /// Fetch the items in `window`.
    ///
    /// Implementations must tolerate `window.end() > total_count` by
    /// returning fewer items than requested; the engine routinely
    /// overshoots near the end of the list.
    fn fetch_window(&mut self, window: FetchWindow) -> Result<WindowSlice, DataSourceError>;
}

/// Scroll container metrics, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current scroll position.
    pub scroll_top: f32,
    /// Visible height of the container.
    pub client_height: f32,
    /// Total content height.
    pub scroll_height: f32,
}

impl ScrollMetrics {
    /// Largest valid scroll position (0 when content fits the viewport).
    #[must_use]
    pub fn max_scroll_top(&self) -> f32 {
        (self.scroll_height - self.client_height).max(0.0)
    }
}

/// Position and size of one rendered row inside the scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementMetrics {
    /// Distance from the top of the content to the top of the row.
    pub offset_top: f32,
    /// Pixel height of the row.
    pub height: f32,
}

impl ElementMetrics {
    /// One past the bottom edge of the row.
    #[must_use]
    pub fn offset_bottom(&self) -> f32 {
        self.offset_top + self.height
    }
}

/// The rendered list viewport.
///
/// Indices are absolute positions in the logical result list; the
/// surface is expected to tag its rendered rows with them.
pub trait RenderSurface {
    /// Current scroll metrics of the container.
    fn metrics(&self) -> ScrollMetrics;

    /// Look up the rendered row for an absolute index.
    ///
    /// Returns `None` while the render has not caught up with the data;
    /// the synchronizer polls across frames until the row appears or its
    /// retry budget runs out.
    fn find_element(&self, index: usize) -> Option<ElementMetrics>;

    /// Move keyboard focus to the row at `index`.
    ///
    /// Implementations must suppress any implicit scroll-into-view the
    /// platform performs on focus; the engine applies its own minimal
    /// scroll correction afterwards.
    fn focus_element(&mut self, index: usize);

    /// Assign the scroll position directly.
    fn set_scroll_top(&mut self, px: f32);

    /// Block until the next render frame has been produced.
    fn wait_frame(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_scroll_top_floors_at_zero() {
        let short = ScrollMetrics {
            scroll_top: 0.0,
            client_height: 200.0,
            scroll_height: 120.0,
        };
        assert_eq!(short.max_scroll_top(), 0.0);

        let tall = ScrollMetrics {
            scroll_top: 0.0,
            client_height: 200.0,
            scroll_height: 500.0,
        };
        assert_eq!(tall.max_scroll_top(), 300.0);
    }
}

#![forbid(unsafe_code)]

//! Scripted fakes for the navlist capability contracts.
//!
//! [`FakeDataSource`] and [`FakeSurface`] stand in for the search index
//! and the rendered scroll container so the engine can be exercised
//! deterministically, with no display and no timers. Both are cheap
//! shared handles: clone one into the engine and keep a clone in the
//! test to script failures and inspect what happened.
//!
//! The usual wiring mirrors fetches into the surface, modeling a render
//! pipeline that repaints whatever the data layer materialized:
//!
//! ```
//! use navlist_harness::{FakeDataSource, FakeSurface};
//!
//! let surface = FakeSurface::new(35.0, 350.0);
//! let source = FakeDataSource::new(1000).mirrored_to(&surface);
//! # let _ = (source, surface);
//! ```
//!
//! Render lag is scripted per surface: with `with_render_lag(2)` a
//! freshly materialized row only becomes findable after two
//! `wait_frame` calls, which is how the synchronizer's retry polling
//! gets exercised.

use navlist_core::contract::{
    DataSource, DataSourceError, ElementMetrics, RenderSurface, ScrollMetrics, WindowSlice,
};
use navlist_core::item::Item;
use navlist_core::window::FetchWindow;
use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

// ── Render surface ──────────────────────────────────────────────────

#[derive(Debug)]
struct SurfaceInner {
    item_height: f32,
    client_height: f32,
    scroll_top: f32,
    total_rows: usize,
    rendered: Range<usize>,
    render_lag: u32,
    lag_remaining: u32,
    frames_waited: u32,
    focus_log: Vec<usize>,
    scroll_log: Vec<f32>,
}

/// A fake scroll container with uniform row heights.
///
/// Rows are tagged with absolute indices; `scroll_height` reflects the
/// full logical list (`total_rows * item_height`), matching a
/// virtualized render where spacers keep the scrollbar honest.
#[derive(Debug, Clone)]
pub struct FakeSurface {
    inner: Rc<RefCell<SurfaceInner>>,
}

impl FakeSurface {
    /// Create a surface with the given row and viewport heights.
    #[must_use]
    pub fn new(item_height: f32, client_height: f32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SurfaceInner {
                item_height,
                client_height,
                scroll_top: 0.0,
                total_rows: 0,
                rendered: 0..0,
                render_lag: 0,
                lag_remaining: 0,
                frames_waited: 0,
                focus_log: Vec::new(),
                scroll_log: Vec::new(),
            })),
        }
    }

    /// Delay row availability by `frames` `wait_frame` calls after each
    /// window change.
    #[must_use]
    pub fn with_render_lag(self, frames: u32) -> Self {
        {
            let mut inner = self.inner.borrow_mut();
            inner.render_lag = frames;
            inner.lag_remaining = frames;
        }
        self
    }

    /// Replace the rendered window (absolute indices) and the logical
    /// row count, restarting any scripted render lag.
    pub fn set_rendered(&self, rendered: Range<usize>, total_rows: usize) {
        let mut inner = self.inner.borrow_mut();
        inner.rendered = rendered;
        inner.total_rows = total_rows;
        inner.lag_remaining = inner.render_lag;
    }

    /// Current scroll position.
    #[must_use]
    pub fn scroll_top(&self) -> f32 {
        self.inner.borrow().scroll_top
    }

    /// Indices focused so far, in order.
    #[must_use]
    pub fn focus_log(&self) -> Vec<usize> {
        self.inner.borrow().focus_log.clone()
    }

    /// Scroll positions assigned so far, in order.
    #[must_use]
    pub fn scroll_log(&self) -> Vec<f32> {
        self.inner.borrow().scroll_log.clone()
    }

    /// How many render frames have been waited on.
    #[must_use]
    pub fn frames_waited(&self) -> u32 {
        self.inner.borrow().frames_waited
    }
}

impl RenderSurface for FakeSurface {
    fn metrics(&self) -> ScrollMetrics {
        let inner = self.inner.borrow();
        ScrollMetrics {
            scroll_top: inner.scroll_top,
            client_height: inner.client_height,
            scroll_height: inner.total_rows as f32 * inner.item_height,
        }
    }

    fn find_element(&self, index: usize) -> Option<ElementMetrics> {
        let inner = self.inner.borrow();
        if inner.lag_remaining > 0 || !inner.rendered.contains(&index) {
            return None;
        }
        Some(ElementMetrics {
            offset_top: index as f32 * inner.item_height,
            height: inner.item_height,
        })
    }

    fn focus_element(&mut self, index: usize) {
        // The contract suppresses implicit scroll-into-view, so focusing
        // deliberately leaves scroll_top untouched.
        self.inner.borrow_mut().focus_log.push(index);
    }

    fn set_scroll_top(&mut self, px: f32) {
        let max = self.metrics().max_scroll_top();
        let mut inner = self.inner.borrow_mut();
        inner.scroll_top = px.clamp(0.0, max);
        let top = inner.scroll_top;
        inner.scroll_log.push(top);
    }

    fn wait_frame(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.frames_waited += 1;
        inner.lag_remaining = inner.lag_remaining.saturating_sub(1);
    }
}

// ── Data source ─────────────────────────────────────────────────────

#[derive(Debug)]
struct SourceInner {
    total: usize,
    fail_next: bool,
    calls: Vec<FetchWindow>,
}

/// A fake result list of `total` generated items.
#[derive(Debug, Clone)]
pub struct FakeDataSource {
    inner: Rc<RefCell<SourceInner>>,
    mirror: Option<FakeSurface>,
}

impl FakeDataSource {
    /// Create a source reporting `total` results.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SourceInner {
                total,
                fail_next: false,
                calls: Vec::new(),
            })),
            mirror: None,
        }
    }

    /// Mirror every successful fetch into `surface` as its rendered
    /// window, modeling a render pass that keeps up with the data.
    #[must_use]
    pub fn mirrored_to(mut self, surface: &FakeSurface) -> Self {
        self.mirror = Some(surface.clone());
        self
    }

    /// The generated item at an absolute index.
    #[must_use]
    pub fn item(index: usize) -> Item {
        Item::new(format!("item-{index}"), format!("/fake/item-{index}"))
    }

    /// Change the reported total.
    pub fn set_total(&self, total: usize) {
        self.inner.borrow_mut().total = total;
    }

    /// Make the next fetch fail with a scripted rejection.
    pub fn fail_next(&self) {
        self.inner.borrow_mut().fail_next = true;
    }

    /// Every window requested so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<FetchWindow> {
        self.inner.borrow().calls.clone()
    }

    /// Number of fetches performed (failed ones included).
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.inner.borrow().calls.len()
    }
}

impl DataSource for FakeDataSource {
    fn fetch_window(&mut self, window: FetchWindow) -> Result<WindowSlice, DataSourceError> {
        let (total, failed) = {
            let mut inner = self.inner.borrow_mut();
            inner.calls.push(window);
            let failed = std::mem::take(&mut inner.fail_next);
            (inner.total, failed)
        };
        if failed {
            return Err(DataSourceError::Rejected("scripted failure".into()));
        }

        let start = window.start.min(total);
        let end = window.end().min(total);
        if let Some(mirror) = &self.mirror {
            mirror.set_rendered(start..end, total);
        }
        Ok(WindowSlice {
            items: (start..end).map(Self::item).collect(),
            total_count: total,
        })
    }
}

#![forbid(unsafe_code)]

//! The engine facade: key dispatch, navigation, and scroll polling.
//!
//! One [`Engine`] owns the selection state, the active [`Mode`], the
//! scroll debouncer, and the two injected capabilities (data source and
//! render surface). The host feeds it keyboard events, raw scroll
//! events, and a periodic clock tick; the engine answers with a key
//! disposition and a list of [`Effect`]s to apply.
//!
//! Key events are handled serially to completion: a navigation that
//! needs a window fetch blocks on the data source and then on the
//! focus/scroll synchronizer before the call returns, so the next key
//! always observes settled state.

use crate::debounce::{SCROLL_DEBOUNCE, ScrollDebouncer, ScrollSample, plan_refetch};
use crate::effect::Effect;
use crate::mode::{HelpScroll, KeyDisposition, Mode, RunHistoryBrowse, SearchHistoryBrowse};
use crate::navigator::FetchLedger;
use crate::selection::SelectionState;
use crate::sync::{SyncOutcome, SyncParams, align_focus};
use navlist_core::contract::{DataSource, DataSourceError, RenderSurface, WindowSlice};
use navlist_core::event::{KeyCode, KeyEvent};
use navlist_core::item::Item;
use navlist_core::window::{DisplayLimit, FetchWindow};
use thiserror::Error;
use web_time::{Duration, Instant};

/// Engine tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Items that fit in the rendered viewport (0 until the first
    /// layout pass has measured the list).
    pub viewport_capacity: usize,
    /// Extra items fetched above and below the viewport.
    pub buffer_items: usize,
    /// Pixel height of one row.
    pub item_height: f32,
    /// Render frames the synchronizer polls before giving up.
    pub retry_budget: u32,
    /// Coalescing delay for raw scroll events.
    pub scroll_debounce: Duration,
    /// Cap on how many results the list presents.
    pub display_limit: DisplayLimit,
    /// Scroll deltas at or below this are dropped as jitter.
    pub dead_zone: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            viewport_capacity: 0,
            buffer_items: 10,
            item_height: 35.0,
            retry_budget: 30,
            scroll_debounce: SCROLL_DEBOUNCE,
            display_limit: DisplayLimit::Unlimited,
            dead_zone: 0.5,
        }
    }
}

impl EngineConfig {
    fn sync_params(&self) -> SyncParams {
        SyncParams {
            retry_budget: self.retry_budget,
            buffer_px: self.buffer_items as f32 * self.item_height / 4.0,
            dead_zone: self.dead_zone,
        }
    }
}

/// Failure of an engine operation.
///
/// Never fatal: the engine's own state stays consistent, the failed
/// navigation or refetch simply did not happen.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The data source failed while navigating to an index.
    #[error("window fetch for navigation to index {target} failed")]
    NavigationFetch {
        /// The index that was being navigated to.
        target: usize,
        /// The underlying data-source failure.
        #[source]
        source: DataSourceError,
    },

    /// The data source failed during a scroll-triggered refetch.
    #[error("scroll-triggered window fetch failed")]
    ScrollFetch {
        /// The underlying data-source failure.
        #[source]
        source: DataSourceError,
    },
}

/// Result of feeding one key event to the engine.
#[derive(Debug)]
pub struct KeyOutcome {
    /// What the host should do with the key afterwards.
    pub disposition: KeyDisposition,
    /// Host actions requested while handling the key.
    pub effects: Vec<Effect>,
}

/// Result of a [`navigate_to`](Engine::navigate_to) call.
#[derive(Debug)]
pub struct NavOutcome {
    /// Whether a window fetch was performed.
    pub fetched: bool,
    /// Synchronizer outcome, when a target index was given.
    pub sync: Option<SyncOutcome>,
    /// Host actions requested by the navigation.
    pub effects: Vec<Effect>,
}

/// The windowed list navigation engine.
pub struct Engine<D, R> {
    source: D,
    surface: R,
    config: EngineConfig,
    state: SelectionState,
    mode: Mode,
    debouncer: ScrollDebouncer,
    ledger: FetchLedger,
}

impl<D: DataSource, R: RenderSurface> Engine<D, R> {
    /// Create an engine with default configuration.
    pub fn new(source: D, surface: R) -> Self {
        Self::with_config(source, surface, EngineConfig::default())
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(source: D, surface: R, config: EngineConfig) -> Self {
        Self {
            source,
            surface,
            debouncer: ScrollDebouncer::new(config.scroll_debounce),
            config,
            state: SelectionState::new(),
            mode: Mode::Normal,
            ledger: FetchLedger::new(),
        }
    }

    /// Current selection state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The active input mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The injected render surface.
    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    /// The injected data source.
    pub fn source_mut(&mut self) -> &mut D {
        &mut self.source
    }

    /// Number of selectable items after the display limit.
    pub fn item_count(&self) -> usize {
        self.config
            .display_limit
            .effective_item_count(self.state.total_count)
    }

    /// Update the measured viewport capacity after a layout pass.
    pub fn set_viewport_capacity(&mut self, items: usize) {
        self.config.viewport_capacity = items;
    }

    /// Install the first slice of a fresh search.
    ///
    /// Clears the selection, replaces the materialized window from
    /// index 0, and invalidates any fetch still in flight.
    pub fn apply_search_results(&mut self, slice: WindowSlice) {
        self.ledger.issue();
        self.state.selected = None;
        self.state.apply_slice(0, slice);
        tracing::debug!(
            message = "nav.results",
            total = self.state.total_count,
            materialized = self.state.visible_items.len(),
        );
    }

    // ── Mode entry triggers ─────────────────────────────────────────

    /// Start browsing the run history.
    pub fn enter_run_history_browse(&mut self, entries: Vec<Item>) {
        self.set_mode(Mode::RunHistoryBrowse(RunHistoryBrowse::new(entries)));
    }

    /// Open the help view for scroll browsing.
    pub fn enter_help_scroll(&mut self, view: HelpScroll) {
        self.set_mode(Mode::HelpScroll(view));
    }

    /// Start recalling past search queries into the input field.
    pub fn enter_search_history_browse(&mut self, entries: Vec<String>, current_input: &str) {
        self.set_mode(Mode::SearchHistoryBrowse(SearchHistoryBrowse::new(
            entries,
            current_input,
        )));
    }

    fn set_mode(&mut self, mode: Mode) {
        tracing::debug!(message = "nav.mode", from = self.mode.name(), to = mode.name());
        self.mode = mode;
    }

    // ── Key dispatch ────────────────────────────────────────────────

    /// Route one key event to the active mode.
    ///
    /// On a printable-character exit the mode is restored to Normal
    /// *before* this returns [`KeyDisposition::PassThrough`], so when
    /// the host re-feeds the character to its input field the engine is
    /// already out of the browse mode.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Result<KeyOutcome, EngineError> {
        let step = match &mut self.mode {
            Mode::Normal => return self.handle_normal_key(key),
            Mode::RunHistoryBrowse(browse) => browse.handle_key(key),
            Mode::HelpScroll(help) => help.handle_key(key),
            Mode::SearchHistoryBrowse(browse) => browse.handle_key(key),
        };
        if step.clear_selection {
            self.state.selected = None;
        }
        if step.exit {
            self.set_mode(Mode::Normal);
        }
        Ok(KeyOutcome {
            disposition: step.disposition,
            effects: step.effects,
        })
    }

    fn handle_normal_key(&mut self, key: &KeyEvent) -> Result<KeyOutcome, EngineError> {
        let item_count = self.item_count();
        if item_count == 0 {
            return Ok(match key.code {
                KeyCode::Enter => KeyOutcome {
                    disposition: KeyDisposition::Consumed,
                    effects: vec![Effect::SubmitSearch],
                },
                _ => KeyOutcome {
                    disposition: KeyDisposition::Ignored,
                    effects: Vec::new(),
                },
            });
        }
        let max = item_count - 1;

        let navigate = |engine: &mut Self, target| -> Result<KeyOutcome, EngineError> {
            let nav = engine.navigate_to(target)?;
            Ok(KeyOutcome {
                disposition: KeyDisposition::Consumed,
                effects: nav.effects,
            })
        };

        match key.code {
            KeyCode::Down => {
                let target = match self.state.selected {
                    None => Some(0),
                    Some(i) if i < max => Some(i + 1),
                    Some(_) => None,
                };
                navigate(self, target)
            }
            KeyCode::Up => {
                let target = match self.state.selected {
                    None => Some(max),
                    Some(0) => None,
                    Some(i) => Some(i - 1),
                };
                navigate(self, target)
            }
            KeyCode::Tab if !key.shift() => {
                if self.state.selected.is_none() {
                    navigate(self, Some(0))
                } else {
                    Ok(KeyOutcome {
                        disposition: KeyDisposition::Ignored,
                        effects: Vec::new(),
                    })
                }
            }
            KeyCode::BackTab | KeyCode::Tab => {
                if self.state.selected == Some(0) {
                    navigate(self, None)
                } else {
                    Ok(KeyOutcome {
                        disposition: KeyDisposition::Ignored,
                        effects: Vec::new(),
                    })
                }
            }
            KeyCode::Left | KeyCode::Right => {
                if self.state.selected.is_some() {
                    navigate(self, None)
                } else {
                    Ok(KeyOutcome {
                        disposition: KeyDisposition::Ignored,
                        effects: Vec::new(),
                    })
                }
            }
            KeyCode::Enter => Ok(self.activate_selection(key)),
            _ => Ok(KeyOutcome {
                disposition: KeyDisposition::Ignored,
                effects: Vec::new(),
            }),
        }
    }

    fn activate_selection(&mut self, key: &KeyEvent) -> KeyOutcome {
        let valid = self
            .state
            .selected
            .filter(|&i| i < self.state.total_count && !self.state.visible_items.is_empty());
        match valid {
            Some(index) => match self.state.item_at(index) {
                Some(item) => KeyOutcome {
                    disposition: KeyDisposition::Consumed,
                    effects: vec![Effect::Execute {
                        item: item.clone(),
                        elevated: key.ctrl(),
                    }],
                },
                // Selected but not materialized: render will reconcile,
                // activating nothing is safer than activating the wrong row.
                None => KeyOutcome {
                    disposition: KeyDisposition::Consumed,
                    effects: Vec::new(),
                },
            },
            None => KeyOutcome {
                disposition: KeyDisposition::Consumed,
                effects: vec![Effect::SubmitSearch],
            },
        }
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Move the selection to `target`, fetching a window when the item
    /// is not materialized, then align focus and scroll.
    ///
    /// `None` clears the selection and hands focus back to the input
    /// field without touching the data source. On a fetch failure the
    /// selection keeps its pre-call value and the error is returned for
    /// logging.
    pub fn navigate_to(&mut self, target: Option<usize>) -> Result<NavOutcome, EngineError> {
        let Some(index) = target else {
            self.state.selected = None;
            tracing::debug!(message = "nav.selection", to = "none");
            return Ok(NavOutcome {
                fetched: false,
                sync: None,
                effects: vec![Effect::FocusInput],
            });
        };

        let fetched = if self.state.is_materialized(index) {
            false
        } else {
            let window = FetchWindow::around(
                index,
                self.config.viewport_capacity,
                self.config.buffer_items,
                self.state.total_count,
            );
            let ticket = self.ledger.issue();
            let slice = self.source.fetch_window(window).map_err(|source| {
                tracing::error!(
                    message = "nav.fetch",
                    target = index,
                    start = window.start,
                    count = window.count,
                    error = %source,
                );
                EngineError::NavigationFetch {
                    target: index,
                    source,
                }
            })?;
            if self.ledger.is_current(ticket) {
                self.state.apply_slice(window.start, slice);
            }
            true
        };

        self.state.selected = Some(index);
        let sync = align_focus(
            &mut self.surface,
            index,
            &self.state,
            &self.config.sync_params(),
        );
        tracing::debug!(message = "nav.selection", to = index, fetched, sync = ?sync);
        Ok(NavOutcome {
            fetched,
            sync: Some(sync),
            effects: Vec::new(),
        })
    }

    // ── Scroll handling ─────────────────────────────────────────────

    /// Record a raw scroll event; the refetch decision happens later in
    /// [`poll`](Self::poll) once the debounce deadline expires.
    pub fn on_scroll(&mut self, scroll_top: f32, client_height: f32, now: Instant) {
        self.debouncer.on_scroll(
            ScrollSample {
                scroll_top,
                client_height,
            },
            now,
        );
    }

    /// Drive the scroll debouncer. Returns `true` when a refetch was
    /// performed and the materialized window replaced.
    pub fn poll(&mut self, now: Instant) -> Result<bool, EngineError> {
        if self.debouncer.fetch_in_flight {
            return Ok(false);
        }
        let Some(sample) = self.debouncer.take_due(now) else {
            return Ok(false);
        };
        let Some(window) = plan_refetch(
            sample,
            self.config.item_height,
            self.config.viewport_capacity,
            self.config.buffer_items,
            self.state.total_count,
            self.state.visible_start,
            !self.state.visible_items.is_empty(),
        ) else {
            tracing::trace!(message = "nav.scroll", outcome = "skipped");
            return Ok(false);
        };

        let ticket = self.ledger.issue();
        self.debouncer.fetch_in_flight = true;
        let result = self.source.fetch_window(window);
        self.debouncer.fetch_in_flight = false;

        let slice = result.map_err(|source| {
            tracing::error!(message = "nav.scroll", start = window.start, error = %source);
            EngineError::ScrollFetch { source }
        })?;
        if self.ledger.is_current(ticket) {
            self.state.apply_slice(window.start, slice);
        }
        tracing::debug!(message = "nav.scroll", start = window.start, count = window.count);
        Ok(true)
    }
}

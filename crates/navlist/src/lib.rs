#![forbid(unsafe_code)]

//! Windowed list navigation engine.
//!
//! # Role
//! `navlist` owns keyboard-driven selection over a result list whose
//! total size may vastly exceed what is materialized in memory. It
//! coordinates "fetch a window of items around position X" requests
//! against a [`DataSource`](navlist_core::contract::DataSource),
//! synchronizes focus and scroll with a
//! [`RenderSurface`](navlist_core::contract::RenderSurface) once the
//! render catches up, and arbitrates four mutually exclusive input
//! modes (normal navigation, run-history browsing, help scrolling, and
//! search-history recall).
//!
//! # Primary responsibilities
//! - **Engine**: the facade owning selection state, the active mode,
//!   and the scroll debouncer.
//! - **Modes**: per-mode state machines with a single dispatch keyed on
//!   the active variant.
//! - **Synchronizer**: bounded retry polling across render frames to
//!   align focus and apply a minimal scroll correction.
//! - **Debouncer**: coalesces raw scroll events with hysteresis so
//!   sub-row scroll noise never triggers a refetch.
//! - **History**: capped MRU stores feeding the two history modes.
//!
//! # Example
//!
//! ```
//! use navlist::engine::{Engine, EngineConfig};
//! use navlist_core::event::{KeyCode, KeyEvent};
//! use navlist_core::window::DisplayLimit;
//! use navlist_harness::{FakeDataSource, FakeSurface};
//!
//! let surface = FakeSurface::new(35.0, 350.0);
//! let source = FakeDataSource::new(100).mirrored_to(&surface);
//! let mut engine = Engine::with_config(
//!     source,
//!     surface,
//!     EngineConfig {
//!         viewport_capacity: 10,
//!         display_limit: DisplayLimit::Unlimited,
//!         ..EngineConfig::default()
//!     },
//! );
//!
//! // Fetches the first window and selects row 0.
//! engine.navigate_to(Some(0)).unwrap();
//! assert_eq!(engine.state().selected, Some(0));
//!
//! // Arrow down moves the selection.
//! engine.handle_key(&KeyEvent::new(KeyCode::Down)).unwrap();
//! assert_eq!(engine.state().selected, Some(1));
//! ```

pub mod debounce;
pub mod effect;
pub mod engine;
pub mod history;
pub mod mode;
pub mod navigator;
pub mod selection;
pub mod sync;

pub use effect::Effect;
pub use engine::{Engine, EngineConfig, EngineError, KeyOutcome, NavOutcome};
pub use history::HistoryStore;
pub use mode::{HelpScroll, KeyDisposition, Mode, RunHistoryBrowse, SearchHistoryBrowse};
pub use selection::SelectionState;
pub use sync::{SyncOutcome, SyncParams};

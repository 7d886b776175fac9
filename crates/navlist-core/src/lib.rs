#![forbid(unsafe_code)]

//! Core: events, window arithmetic, layout arithmetic, and capability
//! contracts for the navlist engine.
//!
//! # Role in navlist
//! `navlist-core` is the dependency-light leaf crate. It defines the
//! vocabulary the engine speaks (keyboard events, the item model, fetch
//! windows) plus the two traits through which the engine reaches the
//! outside world ([`contract::DataSource`] and
//! [`contract::RenderSurface`]).
//!
//! # Primary responsibilities
//! - **KeyEvent**: normalized keyboard events routed by the mode
//!   controller.
//! - **FetchWindow**: pure arithmetic for "which slice to materialize
//!   around index X".
//! - **Layout**: launcher window/list height computation.
//! - **Contracts**: the data-source and render-surface capabilities.
//!
//! # How it fits in the system
//! The engine (`navlist`) consumes these types and drives navigation;
//! the harness (`navlist-harness`) provides scripted fakes for both
//! contracts so everything above this crate is testable without a real
//! display or search index.

pub mod contract;
pub mod event;
pub mod item;
pub mod layout;
pub mod window;

pub use contract::{
    DataSource, DataSourceError, ElementMetrics, RenderSurface, ScrollMetrics, WindowSlice,
};
pub use event::{KeyCode, KeyEvent, Modifiers};
pub use item::{IconKind, Item};
pub use window::{DisplayLimit, FetchWindow};

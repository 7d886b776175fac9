#![forbid(unsafe_code)]

//! Outward actions the engine asks its host to perform.

use navlist_core::item::Item;

/// A fire-and-forget request to the embedding application.
///
/// The engine returns effects from key handling instead of calling the
/// host directly; the host applies them in order. Effect failures stay
/// on the host side (logged there, per the execution contract) and are
/// never fed back into selection state.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Move keyboard focus back to the input field.
    FocusInput,

    /// Launch the item. `elevated` selects the privileged execution
    /// path (the Ctrl+Enter case).
    Execute {
        /// The item to launch.
        item: Item,
        /// Whether to use the elevated-privilege path.
        elevated: bool,
    },

    /// Run a new search with the current input text.
    SubmitSearch,

    /// Replace the input field text (search-history recall).
    SetQuery(String),

    /// Scroll the help view to this offset (always `<= 0`).
    SetHelpScroll(f32),

    /// Tear down the help view content.
    ClearHelp,

    /// Restore the viewport to the height saved before help opened.
    RestoreViewportHeight(f32),
}

#![forbid(unsafe_code)]

//! The four input modes and their mode-local state machines.
//!
//! Exactly one mode is active at a time. Normal-mode navigation lives in
//! the engine (it needs the data source and render surface); the three
//! browse modes are self-contained state machines that only produce
//! [`Effect`]s, so they live here as plain structs with a `handle_key`
//! each.
//!
//! Exit discipline, shared by all browse modes: Escape exits explicitly,
//! and any printable character exits without consuming the event. The
//! dispatcher restores Normal first and reports
//! [`KeyDisposition::PassThrough`] so the character still reaches the
//! input field.

use crate::effect::Effect;
use navlist_core::event::{KeyCode, KeyEvent};
use navlist_core::item::Item;

/// What the dispatcher should do with the key after mode handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The mode handled the key; the host must not process it further.
    Consumed,
    /// The key exits the mode and must continue on to the input field.
    PassThrough,
    /// The key meant nothing to the engine.
    Ignored,
}

/// Result of feeding one key to a mode handler.
#[derive(Debug)]
pub struct ModeStep {
    /// What to do with the key afterwards.
    pub disposition: KeyDisposition,
    /// Host actions requested by the handler.
    pub effects: Vec<Effect>,
    /// Whether the mode is done and Normal should be restored.
    pub exit: bool,
    /// Whether a stale list selection should be cleared on exit
    /// (help-view printable exit only).
    pub clear_selection: bool,
}

impl ModeStep {
    fn consumed() -> Self {
        Self {
            disposition: KeyDisposition::Consumed,
            effects: Vec::new(),
            exit: false,
            clear_selection: false,
        }
    }

    fn consumed_with(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            ..Self::consumed()
        }
    }

    fn exit_with(effects: Vec<Effect>) -> Self {
        Self {
            exit: true,
            ..Self::consumed_with(effects)
        }
    }

    fn pass_through_exit(effects: Vec<Effect>) -> Self {
        Self {
            disposition: KeyDisposition::PassThrough,
            exit: true,
            ..Self::consumed_with(effects)
        }
    }
}

/// The active input-handling context.
#[derive(Debug, Default)]
pub enum Mode {
    /// Search-result navigation; keys route to the selection navigator.
    #[default]
    Normal,
    /// Browsing the fixed run-history list.
    RunHistoryBrowse(RunHistoryBrowse),
    /// Scrolling through help text.
    HelpScroll(HelpScroll),
    /// Recalling past search queries into the input field.
    SearchHistoryBrowse(SearchHistoryBrowse),
}

impl Mode {
    /// Stable name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::RunHistoryBrowse(_) => "run_history_browse",
            Self::HelpScroll(_) => "help_scroll",
            Self::SearchHistoryBrowse(_) => "search_history_browse",
        }
    }

    /// Whether this is [`Mode::Normal`].
    #[must_use]
    pub const fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Mode-local state for run-history browsing.
///
/// A transient list of previously executed items; Up/Down move a clamped
/// index (no wraparound), Enter executes and leaves the mode.
#[derive(Debug)]
pub struct RunHistoryBrowse {
    /// The fixed history list, most recent first.
    pub entries: Vec<Item>,
    /// Currently highlighted entry.
    pub selected: usize,
}

impl RunHistoryBrowse {
    /// Start browsing at the top of the history.
    #[must_use]
    pub fn new(entries: Vec<Item>) -> Self {
        Self {
            entries,
            selected: 0,
        }
    }

    /// Feed one key to the browse state machine.
    pub fn handle_key(&mut self, key: &KeyEvent) -> ModeStep {
        if key.printable().is_some() {
            return ModeStep::pass_through_exit(vec![Effect::FocusInput]);
        }
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                ModeStep::consumed()
            }
            KeyCode::Down => {
                if !self.entries.is_empty() {
                    self.selected = (self.selected + 1).min(self.entries.len() - 1);
                }
                ModeStep::consumed()
            }
            KeyCode::Enter => match self.entries.get(self.selected) {
                Some(item) => ModeStep::exit_with(vec![Effect::Execute {
                    item: item.clone(),
                    elevated: false,
                }]),
                None => ModeStep::consumed(),
            },
            KeyCode::Escape => ModeStep::exit_with(vec![Effect::FocusInput]),
            _ => ModeStep::consumed(),
        }
    }
}

/// Mode-local state for help-text scrolling.
///
/// The offset is a translation of the help content, so it is always
/// `<= 0`: 0 shows the top, `-(content - viewport)` shows the bottom.
#[derive(Debug)]
pub struct HelpScroll {
    /// Current content translation in pixels.
    pub offset: f32,
    /// Total height of the help content.
    pub content_height: f32,
    /// Height of the help viewport.
    pub viewport_height: f32,
    /// Pixels moved per arrow press.
    pub line_height: f32,
    /// Viewport height to restore when help closes.
    pub saved_viewport_height: f32,
}

impl HelpScroll {
    /// Open help at the top of the content.
    #[must_use]
    pub fn new(
        content_height: f32,
        viewport_height: f32,
        line_height: f32,
        saved_viewport_height: f32,
    ) -> Self {
        Self {
            offset: 0.0,
            content_height,
            viewport_height,
            line_height,
            saved_viewport_height,
        }
    }

    /// Most negative allowed offset (0 when the content fits).
    #[must_use]
    pub fn min_offset(&self) -> f32 {
        -(self.content_height - self.viewport_height).max(0.0)
    }

    fn teardown_effects(&self) -> Vec<Effect> {
        vec![
            Effect::ClearHelp,
            Effect::SetHelpScroll(0.0),
            Effect::RestoreViewportHeight(self.saved_viewport_height),
            Effect::FocusInput,
        ]
    }

    /// Feed one key to the help-scroll state machine.
    pub fn handle_key(&mut self, key: &KeyEvent) -> ModeStep {
        if key.printable().is_some() {
            let mut step = ModeStep::pass_through_exit(self.teardown_effects());
            step.clear_selection = true;
            return step;
        }
        match key.code {
            KeyCode::Up => {
                let moved = (self.offset + self.line_height).min(0.0);
                if moved == self.offset {
                    return ModeStep::consumed();
                }
                self.offset = moved;
                ModeStep::consumed_with(vec![Effect::SetHelpScroll(self.offset)])
            }
            KeyCode::Down => {
                let moved = (self.offset - self.line_height).max(self.min_offset());
                if moved == self.offset {
                    return ModeStep::consumed();
                }
                self.offset = moved;
                ModeStep::consumed_with(vec![Effect::SetHelpScroll(self.offset)])
            }
            KeyCode::Escape => ModeStep::exit_with(self.teardown_effects()),
            _ => ModeStep::consumed(),
        }
    }
}

/// Mode-local state for search-history recall.
///
/// Browsing is circular. `cursor` is `None` until the first move; each
/// move replaces the input text with the entry under the cursor.
#[derive(Debug)]
pub struct SearchHistoryBrowse {
    /// Past queries, most recent first.
    pub entries: Vec<String>,
    /// Position in the history, `None` before the first move.
    pub cursor: Option<usize>,
    /// Input text at mode entry, restored on Escape.
    pub saved_input: String,
}

impl SearchHistoryBrowse {
    /// Start browsing with the current input saved for restore.
    #[must_use]
    pub fn new(entries: Vec<String>, saved_input: impl Into<String>) -> Self {
        Self {
            entries,
            cursor: None,
            saved_input: saved_input.into(),
        }
    }

    fn recall(&mut self, cursor: usize) -> ModeStep {
        self.cursor = Some(cursor);
        ModeStep::consumed_with(vec![Effect::SetQuery(self.entries[cursor].clone())])
    }

    /// Feed one key to the recall state machine.
    pub fn handle_key(&mut self, key: &KeyEvent) -> ModeStep {
        if key.printable().is_some() {
            return ModeStep::pass_through_exit(vec![Effect::FocusInput]);
        }
        let len = self.entries.len();
        match key.code {
            KeyCode::Up if len > 0 => {
                let next = match self.cursor {
                    None => 0,
                    Some(i) => (i + len - 1) % len,
                };
                self.recall(next)
            }
            KeyCode::Down if len > 0 => {
                let next = match self.cursor {
                    None => len - 1,
                    Some(i) => (i + 1) % len,
                };
                self.recall(next)
            }
            KeyCode::Escape => ModeStep::exit_with(vec![
                Effect::SetQuery(self.saved_input.clone()),
                Effect::FocusInput,
            ]),
            _ => ModeStep::consumed(),
        }
    }
}

#![forbid(unsafe_code)]

//! Capped MRU history stores for search queries and executed items.
//!
//! One store backs both browse modes: search history feeds
//! [`SearchHistoryBrowse`](crate::mode::SearchHistoryBrowse) recall, run
//! history (stored as paths) feeds
//! [`RunHistoryBrowse`](crate::mode::RunHistoryBrowse). Pushing an entry
//! that already exists moves it to the front instead of duplicating it,
//! and the store truncates to its cap.
//!
//! With the `state-persistence` feature the store round-trips through a
//! JSON file holding a plain array of strings; a missing file loads as
//! an empty history.

/// Default maximum number of retained entries.
pub const DEFAULT_MAX_HISTORY: usize = 20;

/// A most-recent-first list of strings with a size cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    entries: Vec<String>,
    cap: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl HistoryStore {
    /// Create an empty store retaining at most `cap` entries.
    #[must_use]
    pub fn new(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap,
        }
    }

    /// Build a store from existing entries (most recent first),
    /// truncating to the cap.
    #[must_use]
    pub fn from_entries(entries: Vec<String>, cap: usize) -> Self {
        let mut store = Self { entries, cap };
        store.entries.truncate(store.cap);
        store
    }

    /// Record an entry as most recent.
    ///
    /// Repeated entries move to the front; blank entries are ignored.
    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        if entry.trim().is_empty() {
            return;
        }
        self.entries.retain(|existing| existing != &entry);
        self.entries.insert(0, entry);
        self.entries.truncate(self.cap);
    }

    /// Entries, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry (the `/history clear` command).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Maximum number of retained entries.
    #[must_use]
    pub const fn cap(&self) -> usize {
        self.cap
    }
}

#[cfg(feature = "state-persistence")]
mod persistence {
    use super::HistoryStore;
    use std::fs;
    use std::io;
    use std::path::Path;
    use thiserror::Error;

    /// Failure loading or saving a history file.
    #[derive(Debug, Error)]
    pub enum HistoryFileError {
        /// Filesystem failure.
        #[error("history file i/o failed")]
        Io(#[from] io::Error),
        /// The file exists but is not a JSON string array.
        #[error("history file is not valid JSON")]
        Format(#[from] serde_json::Error),
    }

    impl HistoryStore {
        /// Load a history file written by [`save_to`](Self::save_to).
        ///
        /// A missing file is not an error; it loads as an empty history.
        pub fn load_from(path: &Path, cap: usize) -> Result<Self, HistoryFileError> {
            let raw = match fs::read_to_string(path) {
                Ok(raw) => raw,
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::new(cap));
                }
                Err(err) => return Err(err.into()),
            };
            let entries: Vec<String> = serde_json::from_str(&raw)?;
            Ok(Self::from_entries(entries, cap))
        }

        /// Write the entries as a pretty-printed JSON array.
        pub fn save_to(&self, path: &Path) -> Result<(), HistoryFileError> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let raw = serde_json::to_string_pretty(&self.entries)?;
            fs::write(path, raw)?;
            Ok(())
        }
    }
}

#[cfg(feature = "state-persistence")]
pub use persistence::HistoryFileError;

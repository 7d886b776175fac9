#![forbid(unsafe_code)]

//! The list item model.

/// Icon classification reported by the data source, when known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// A regular file.
    File,
    /// A directory.
    Folder,
}

/// A single result row.
///
/// Items are value data copied out of data-source responses. The engine
/// never mutates them; it only stores the materialized window and hands
/// items back out through execution effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Identity used for execution (a filesystem path for the launcher).
    pub path: String,
    /// Icon classification, if the data source resolved one.
    pub icon: Option<IconKind>,
}

impl Item {
    /// Create an item with no icon classification.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            icon: None,
        }
    }

    /// Set the icon classification.
    #[must_use]
    pub fn with_icon(mut self, icon: IconKind) -> Self {
        self.icon = Some(icon);
        self
    }
}

#![forbid(unsafe_code)]

//! Launcher window and list height arithmetic.
//!
//! The launcher window grows with its content: a status message adds one
//! line per message line, each result row adds one item height, and the
//! whole window is clamped between a base height and a maximum. Whatever
//! vertical space remains after the non-list chrome is what the scroll
//! container gets.
//!
//! Pure arithmetic only; applying the computed sizes to a real window is
//! the embedder's job.

/// Default pixel height of the window with no message and no results.
pub const BASE_HEIGHT: f32 = 50.0;
/// Default pixel height of one result row.
pub const ITEM_HEIGHT: f32 = 35.0;
/// Default pixel height of one message line.
pub const MESSAGE_LINE_HEIGHT: f32 = 25.0;
/// Default maximum window height.
pub const MAX_WINDOW_HEIGHT: f32 = 400.0;

/// Inputs for [`compute_layout`].
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    /// Number of lines in the status message (0 when no message shows).
    pub message_lines: usize,
    /// Whether an overflow notice ("showing N of M") takes a line.
    pub overflow_notice: bool,
    /// Number of result rows the list presents.
    pub item_count: usize,
    /// Pixel height of one result row.
    pub item_height: f32,
    /// Pixel height of the window chrome (input field, padding).
    pub base_height: f32,
    /// Pixel height of one message line.
    pub message_line_height: f32,
    /// Hard cap on the window height.
    pub max_height: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            message_lines: 0,
            overflow_notice: false,
            item_count: 0,
            item_height: ITEM_HEIGHT,
            base_height: BASE_HEIGHT,
            message_line_height: MESSAGE_LINE_HEIGHT,
            max_height: MAX_WINDOW_HEIGHT,
        }
    }
}

/// Result of [`compute_layout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListLayout {
    /// Total window height, clamped to `[base_height, max_height]`.
    pub window_height: f32,
    /// Visible height of the scrollable list region (0 with no items).
    pub list_height: f32,
}

/// Compute window and list heights for the current content.
#[must_use]
pub fn compute_layout(params: &LayoutParams) -> ListLayout {
    let mut message_height = params.message_lines as f32 * params.message_line_height;
    if params.item_count > 0 && params.overflow_notice {
        message_height += params.message_line_height;
    }
    let items_height = params.item_count as f32 * params.item_height;

    let window_height = (params.base_height + message_height + items_height)
        .clamp(params.base_height, params.max_height);

    let list_height = if params.item_count > 0 {
        let non_list_height = params.base_height + message_height;
        (window_height - non_list_height).clamp(0.0, items_height)
    } else {
        0.0
    };

    ListLayout {
        window_height,
        list_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_stays_at_base_height() {
        let layout = compute_layout(&LayoutParams::default());
        assert_eq!(layout.window_height, BASE_HEIGHT);
        assert_eq!(layout.list_height, 0.0);
    }

    #[test]
    fn few_items_grow_the_window() {
        let layout = compute_layout(&LayoutParams {
            item_count: 4,
            ..LayoutParams::default()
        });
        assert_eq!(layout.window_height, BASE_HEIGHT + 4.0 * ITEM_HEIGHT);
        assert_eq!(layout.list_height, 4.0 * ITEM_HEIGHT);
    }

    #[test]
    fn many_items_clamp_to_max_height() {
        let layout = compute_layout(&LayoutParams {
            item_count: 100,
            ..LayoutParams::default()
        });
        assert_eq!(layout.window_height, MAX_WINDOW_HEIGHT);
        assert_eq!(layout.list_height, MAX_WINDOW_HEIGHT - BASE_HEIGHT);
    }

    #[test]
    fn message_lines_shrink_the_list_region() {
        let with_message = compute_layout(&LayoutParams {
            message_lines: 2,
            item_count: 100,
            ..LayoutParams::default()
        });
        let without = compute_layout(&LayoutParams {
            item_count: 100,
            ..LayoutParams::default()
        });
        assert_eq!(with_message.window_height, MAX_WINDOW_HEIGHT);
        assert!(with_message.list_height < without.list_height);
    }

    #[test]
    fn overflow_notice_counts_only_with_items() {
        let no_items = compute_layout(&LayoutParams {
            overflow_notice: true,
            ..LayoutParams::default()
        });
        assert_eq!(no_items.window_height, BASE_HEIGHT);

        let with_items = compute_layout(&LayoutParams {
            overflow_notice: true,
            item_count: 1,
            ..LayoutParams::default()
        });
        assert_eq!(
            with_items.window_height,
            BASE_HEIGHT + MESSAGE_LINE_HEIGHT + ITEM_HEIGHT
        );
    }

    #[test]
    fn list_height_never_goes_negative() {
        let layout = compute_layout(&LayoutParams {
            message_lines: 40,
            item_count: 1,
            ..LayoutParams::default()
        });
        assert!(layout.list_height >= 0.0);
    }
}

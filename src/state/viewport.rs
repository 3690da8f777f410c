//! Viewport scroll state.
//!
//! The document is a line buffer longer than the terminal window; this
//! module owns the single vertical scroll offset and keeps it clamped to
//! the valid range.
//!
//! Architecture:
//! - offset = user state, mutated only through the operations here
//! - max scroll = derived from content height vs. visible rows

// =============================================================================
// SCROLL CONSTANTS
// =============================================================================

/// Default scroll amount for arrow keys (lines).
pub const LINE_SCROLL: u16 = 1;

/// Default scroll amount for mouse wheel.
pub const WHEEL_SCROLL: u16 = 3;

/// Default scroll amount for Page Up/Down (90% of viewport).
pub const PAGE_SCROLL_FACTOR: f32 = 0.9;

// =============================================================================
// VIEWPORT
// =============================================================================

/// Vertical scroll window over the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    offset: u16,
    visible_rows: u16,
    content_rows: u16,
}

impl Viewport {
    pub fn new(visible_rows: u16, content_rows: u16) -> Self {
        Self {
            offset: 0,
            visible_rows,
            content_rows,
        }
    }

    /// Current scroll offset (top document row on screen).
    #[inline]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Rows the window can show.
    #[inline]
    pub fn visible_rows(&self) -> u16 {
        self.visible_rows
    }

    /// Maximum valid scroll offset.
    #[inline]
    pub fn max_scroll(&self) -> u16 {
        self.content_rows.saturating_sub(self.visible_rows)
    }

    /// Whether there is anything to scroll at all.
    #[inline]
    pub fn is_scrollable(&self) -> bool {
        self.max_scroll() > 0
    }

    /// Set the offset, clamped to the valid range.
    pub fn set_offset(&mut self, offset: u16) {
        self.offset = offset.min(self.max_scroll());
    }

    /// Scroll by a delta amount.
    ///
    /// Returns `true` if scrolling occurred, `false` if already at boundary.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let max = self.max_scroll() as i32;
        let new_offset = (self.offset as i32 + delta).clamp(0, max) as u16;

        if new_offset == self.offset {
            return false; // Already at boundary
        }

        self.offset = new_offset;
        true
    }

    /// Rows one Page Up/Down step covers.
    #[inline]
    pub fn page_rows(&self) -> u16 {
        ((self.visible_rows as f32 * PAGE_SCROLL_FACTOR) as u16).max(1)
    }

    /// Window or document size changed. Re-clamps the offset so it stays
    /// valid for the new bounds.
    pub fn resize(&mut self, visible_rows: u16, content_rows: u16) {
        self.visible_rows = visible_rows;
        self.content_rows = content_rows;
        self.offset = self.offset.min(self.max_scroll());
    }
}

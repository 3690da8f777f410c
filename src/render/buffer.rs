//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what should be
//! displayed on the terminal. The frame composer draws into it, the diff
//! renderer reads it out.
//!
//! # Design Decisions
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing for cache
//!   efficiency.
//! - **Hyperlink table**: OSC 8 targets live in a per-frame `Vec<String>`;
//!   cells carry a 1-based slot so they stay `Copy`.

use crate::types::{Attr, Cell, Rgba};
use unicode_width::UnicodeWidthChar;

// =============================================================================
// Style
// =============================================================================

/// How a run of text is drawn: colors, attributes, optional hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
    pub link: Option<String>,
}

impl Style {
    pub fn fg(color: Rgba) -> Self {
        Self {
            fg: color,
            ..Self::default()
        }
    }

    pub fn with_bg(mut self, color: Rgba) -> Self {
        self.bg = color;
        self
    }

    pub fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }
}

// =============================================================================
// FrameBuffer
// =============================================================================

/// A 2D buffer of terminal cells plus the frame's hyperlink table.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    links: Vec<String>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
            links: Vec::new(),
        }
    }

    /// Create a new buffer with a specific background color.
    pub fn with_background(width: u16, height: u16, bg: Rgba) -> Self {
        let mut buffer = Self::new(width, height);
        for cell in &mut buffer.cells {
            cell.bg = bg;
        }
        buffer
    }

    /// Get buffer width.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get buffer height.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Convert (x, y) to flat index.
    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check if coordinates are in bounds.
    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a mutable cell reference (returns None if out of bounds).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Register a hyperlink target, returning its 1-based cell slot.
    ///
    /// Targets are deduplicated within the frame so spans of the same link
    /// share a slot.
    pub fn push_link(&mut self, url: &str) -> u16 {
        if let Some(pos) = self.links.iter().position(|existing| existing == url) {
            return pos as u16 + 1;
        }
        self.links.push(url.to_string());
        self.links.len() as u16
    }

    /// Resolve a cell's link slot to its URL.
    #[inline]
    pub fn link_url(&self, slot: u16) -> Option<&str> {
        if slot == 0 {
            None
        } else {
            self.links.get(slot as usize - 1).map(String::as_str)
        }
    }

    /// The characters of one row as a string (trailing spaces trimmed).
    /// Mostly useful for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        let mut text = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                if let Some(c) = char::from_u32(cell.char) {
                    text.push(c);
                }
            }
        }
        text.trim_end().to_string()
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Fill a full row with a background color (keeps default foreground).
    pub fn fill_row(&mut self, y: u16, bg: Rgba) {
        if y >= self.height {
            return;
        }
        for x in 0..self.width {
            let idx = self.index(x, y);
            self.cells[idx] = Cell {
                bg,
                ..Cell::default()
            };
        }
    }

    /// Draw text starting at (x, y) with the given style.
    ///
    /// Clips at the right edge. Wide characters occupy two cells; the
    /// continuation cell is blanked so the diff renderer never emits half a
    /// glyph. Returns the x position after the last drawn cell.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, style: &Style) -> u16 {
        if y >= self.height {
            return x;
        }

        let link = match &style.link {
            Some(url) => self.push_link(url),
            None => 0,
        };

        let mut cx = x;
        for c in text.chars() {
            let cw = UnicodeWidthChar::width(c).unwrap_or(0) as u16;
            if cw == 0 {
                continue;
            }
            if cx + cw > self.width {
                break;
            }

            let idx = self.index(cx, y);
            self.cells[idx] = Cell {
                char: c as u32,
                fg: style.fg,
                bg: style.bg,
                attrs: style.attrs,
                link,
            };

            // Continuation cell for wide glyphs
            if cw == 2 {
                let idx = self.index(cx + 1, y);
                self.cells[idx] = Cell {
                    char: b' ' as u32,
                    fg: style.fg,
                    bg: style.bg,
                    attrs: style.attrs,
                    link,
                };
            }

            cx += cw;
        }
        cx
    }
}

//! Output buffering and stateful cell rendering.
//!
//! These components optimize terminal output by:
//! - Batching writes into a single syscall
//! - Tracking terminal state to avoid redundant escape codes
//! - Only emitting changes (colors, attributes, cursor position, links)

use crate::types::{Attr, Cell, Rgba};
use std::io::{self, Write};

use super::ansi;

// =============================================================================
// OutputBuffer
// =============================================================================

/// A buffer that accumulates output for batch writing.
///
/// Instead of many small writes to stdout, we accumulate everything
/// and flush once. This reduces syscall overhead significantly.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(16384) // 16KB default
    }

    /// Create a buffer with specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a unicode codepoint.
    #[inline]
    pub fn write_codepoint(&mut self, cp: u32) {
        if let Some(c) = char::from_u32(cp) {
            let mut buf = [0u8; 4];
            self.data.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }

    /// Flush buffer to stdout (blocking).
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.data)?;
        stdout.flush()?;
        self.data.clear();
        Ok(())
    }
}

impl Write for OutputBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// StatefulCellRenderer
// =============================================================================

/// Renders cells while tracking terminal state.
///
/// Emits cursor moves only on position jumps, color/attribute codes only on
/// changes, and OSC 8 open/close only at link boundaries.
#[derive(Debug)]
pub struct StatefulCellRenderer {
    cursor: Option<(u16, u16)>,
    fg: Option<Rgba>,
    bg: Option<Rgba>,
    attrs: Option<Attr>,
    link: Option<String>,
}

impl StatefulCellRenderer {
    pub fn new() -> Self {
        Self {
            cursor: None,
            fg: None,
            bg: None,
            attrs: None,
            link: None,
        }
    }

    /// Forget all tracked state. Call at the start of every frame.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.fg = None;
        self.bg = None;
        self.attrs = None;
        self.link = None;
    }

    /// Render one cell at (x, y). `link_url` is the cell's resolved
    /// hyperlink target, if any.
    pub fn render_cell(
        &mut self,
        out: &mut OutputBuffer,
        x: u16,
        y: u16,
        cell: &Cell,
        link_url: Option<&str>,
    ) -> io::Result<()> {
        // Cursor: skip the move when we are already there
        if self.cursor != Some((x, y)) {
            ansi::cursor_to(out, x, y)?;
        }

        // Attributes reset wholesale on change (cheaper than per-flag resets)
        if self.attrs != Some(cell.attrs) {
            ansi::reset(out)?;
            ansi::attrs(out, cell.attrs)?;
            self.fg = None;
            self.bg = None;
            self.attrs = Some(cell.attrs);
        }

        if self.fg != Some(cell.fg) {
            ansi::fg(out, cell.fg)?;
            self.fg = Some(cell.fg);
        }

        if self.bg != Some(cell.bg) {
            ansi::bg(out, cell.bg)?;
            self.bg = Some(cell.bg);
        }

        // Hyperlink boundaries
        if self.link.as_deref() != link_url {
            if self.link.is_some() {
                ansi::link_close(out)?;
            }
            if let Some(url) = link_url {
                ansi::link_open(out, url)?;
            }
            self.link = link_url.map(String::from);
        }

        out.write_codepoint(cell.char);
        self.cursor = Some((x + 1, y));
        Ok(())
    }

    /// Close any open hyperlink. Call at the end of every frame.
    pub fn finish(&mut self, out: &mut OutputBuffer) -> io::Result<()> {
        if self.link.take().is_some() {
            ansi::link_close(out)?;
        }
        Ok(())
    }
}

impl Default for StatefulCellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(cells: &[(u16, u16, Cell, Option<&str>)]) -> String {
        let mut out = OutputBuffer::new();
        let mut renderer = StatefulCellRenderer::new();
        for (x, y, cell, link) in cells {
            renderer.render_cell(&mut out, *x, *y, cell, *link).unwrap();
        }
        renderer.finish(&mut out).unwrap();
        String::from_utf8(out.data).unwrap()
    }

    fn plain(c: char) -> Cell {
        Cell {
            char: c as u32,
            ..Cell::default()
        }
    }

    #[test]
    fn test_consecutive_cells_skip_cursor_moves() {
        let output = rendered(&[
            (0, 0, plain('a'), None),
            (1, 0, plain('b'), None),
        ]);
        // One cursor move, not two
        assert_eq!(output.matches("\x1b[1;1H").count(), 1);
        assert!(!output.contains("\x1b[1;2H"));
        assert!(output.contains('a'));
        assert!(output.contains('b'));
    }

    #[test]
    fn test_color_emitted_once_per_run() {
        let mut cell = plain('x');
        cell.fg = Rgba::rgb(1, 2, 3);
        let output = rendered(&[(0, 0, cell, None), (1, 0, cell, None)]);
        assert_eq!(output.matches("\x1b[38;2;1;2;3m").count(), 1);
    }

    #[test]
    fn test_link_brackets_span() {
        let output = rendered(&[
            (0, 0, plain('a'), Some("https://e.org")),
            (1, 0, plain('b'), Some("https://e.org")),
            (2, 0, plain('c'), None),
        ]);
        assert_eq!(output.matches("\x1b]8;;https://e.org\x07").count(), 1);
        assert_eq!(output.matches("\x1b]8;;\x07").count(), 1);
    }

    #[test]
    fn test_finish_closes_trailing_link() {
        let output = rendered(&[(0, 0, plain('a'), Some("https://e.org"))]);
        assert!(output.ends_with("\x1b]8;;\x07"));
    }
}

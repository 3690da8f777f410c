//! Differential renderer.
//!
//! The DiffRenderer compares the current frame to the previous frame and only
//! outputs cells that have changed. This dramatically reduces terminal I/O
//! and provides smooth, flicker-free scrolling.
//!
//! # Algorithm
//!
//! 1. Wrap output in synchronized block (begin_sync/end_sync)
//! 2. For each cell in the new frame:
//!    - If previous frame exists and cell is unchanged: skip
//!    - Otherwise: render cell with StatefulCellRenderer
//! 3. Flush output buffer (single syscall)
//! 4. Store current frame as previous for next comparison

use std::io;

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};
use crate::types::Cell;

/// Differential renderer for the fullscreen page.
///
/// Keeps track of the previous frame to enable diff-based rendering.
pub struct DiffRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns true if any cells were changed.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut has_changes = false;

        ansi::begin_sync(&mut self.output)?;
        self.cell_renderer.reset();

        let width = buffer.width();
        let height = buffer.height();

        for y in 0..height {
            for x in 0..width {
                let Some(cell) = buffer.get(x, y) else { continue };

                let changed = match &self.previous {
                    Some(prev) if prev.width() == width && prev.height() == height => {
                        match prev.get(x, y) {
                            Some(prev_cell) => !cells_equal(cell, buffer, prev_cell, prev),
                            None => true,
                        }
                    }
                    _ => true, // No previous or size changed
                };

                if changed {
                    has_changes = true;
                    self.cell_renderer.render_cell(
                        &mut self.output,
                        x,
                        y,
                        cell,
                        buffer.link_url(cell.link),
                    )?;
                }
            }
        }

        self.cell_renderer.finish(&mut self.output)?;
        ansi::end_sync(&mut self.output)?;
        self.output.flush_stdout()?;

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Invalidate the previous frame.
    ///
    /// Next render will be a full redraw. Use after resize or theme change.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Check if we have a previous frame to diff against.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter fullscreen mode (alternate screen buffer).
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        ansi::enter_alt_screen(&mut self.output)?;
        ansi::cursor_hide(&mut self.output)?;
        ansi::clear_screen(&mut self.output)?;
        self.output.flush_stdout()?;
        self.invalidate();
        Ok(())
    }

    /// Exit fullscreen mode.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        ansi::reset(&mut self.output)?;
        ansi::cursor_show(&mut self.output)?;
        ansi::exit_alt_screen(&mut self.output)?;
        self.output.flush_stdout()
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Cell equality including resolved hyperlink targets.
///
/// Link slots are per-frame indices, so they are compared through each
/// frame's own table.
#[inline]
fn cells_equal(a: &Cell, a_frame: &FrameBuffer, b: &Cell, b_frame: &FrameBuffer) -> bool {
    a.char == b.char
        && a.attrs == b.attrs
        && a.fg == b.fg
        && a.bg == b.bg
        && a_frame.link_url(a.link) == b_frame.link_url(b.link)
}

// =============================================================================
// Tests
// =============================================================================

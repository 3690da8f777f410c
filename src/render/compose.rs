//! Frame composition.
//!
//! Assembles one terminal frame from the current state:
//! - the document, windowed by the viewport scroll offset
//! - the sticky navbar (solid variant when scrolled, transparent otherwise;
//!   inline section labels when the terminal is wide, a collapsed menu hint
//!   when it is narrow)
//! - the dropdown menu panel when `menu_open`
//! - the scroll-to-top chip when scrolled
//!
//! Composition is a pure function of (document, nav state, viewport, theme);
//! it allocates a fresh FrameBuffer and never touches the inputs.

use crate::layout::string_width;
use crate::render::buffer::{FrameBuffer, Style};
use crate::render::document::Document;
use crate::state::{NavState, SectionId, Viewport};
use crate::theme::Theme;
use crate::types::Attr;

/// Rows the sticky navbar occupies at the top of the frame.
pub const NAVBAR_ROWS: u16 = 2;

/// Below this width the navbar collapses its labels into a menu hint.
pub const NAV_COLLAPSE_WIDTH: u16 = 72;

/// Compose a full frame.
pub fn compose_frame(
    doc: &Document,
    nav: &NavState,
    viewport: &Viewport,
    theme: &Theme,
    logo: &str,
    width: u16,
    height: u16,
) -> FrameBuffer {
    let mut frame = FrameBuffer::with_background(width, height, theme.bg);

    draw_document(&mut frame, doc, viewport, height);
    draw_navbar(&mut frame, nav, theme, logo, width);
    if nav.menu_open {
        draw_menu_panel(&mut frame, theme);
    }
    if nav.scrolled {
        draw_scroll_top_chip(&mut frame, theme, width, height);
    }

    frame
}

/// Window the document rows below the navbar.
fn draw_document(frame: &mut FrameBuffer, doc: &Document, viewport: &Viewport, height: u16) {
    for screen_row in NAVBAR_ROWS..height {
        let doc_row = viewport.offset() as usize + (screen_row - NAVBAR_ROWS) as usize;
        let Some(line) = doc.lines.get(doc_row) else {
            break;
        };

        let mut x = line.indent;
        for span in &line.spans {
            x = frame.draw_text(x, screen_row, &span.text, &span.style);
        }
    }
}

/// The sticky navbar: logo plus labels (wide) or a menu hint (narrow).
fn draw_navbar(frame: &mut FrameBuffer, nav: &NavState, theme: &Theme, logo: &str, width: u16) {
    // Transparent variant keeps the page background; solid variant gets its
    // own bar color and a hairline rule underneath.
    let bar_bg = if nav.scrolled { theme.navbar_bg } else { theme.bg };
    frame.fill_row(0, bar_bg);
    frame.fill_row(1, bar_bg);
    if nav.scrolled {
        frame.draw_text(
            0,
            1,
            &"─".repeat(width as usize),
            &Style::fg(theme.chip_bg).with_bg(bar_bg),
        );
    }

    let logo_style = Style::fg(theme.primary)
        .with_attrs(Attr::BOLD)
        .with_bg(bar_bg);
    let mut x = frame.draw_text(2, 0, logo, &logo_style);

    if width >= NAV_COLLAPSE_WIDTH {
        x += 3;
        for id in SectionId::ALL {
            let label = Style::fg(theme.text_muted).with_bg(bar_bg);
            let key = Style::fg(theme.accent).with_bg(bar_bg);
            x = frame.draw_text(x, 0, &id.hotkey().to_string(), &key);
            x = frame.draw_text(x, 0, " ", &label);
            x = frame.draw_text(x, 0, id.label(), &label);
            x += 2;
        }
    } else {
        let hint = "≡ menu (m)";
        let hint_x = width.saturating_sub(string_width(hint) + 2);
        frame.draw_text(hint_x, 0, hint, &Style::fg(theme.text_muted).with_bg(bar_bg));
    }
}

/// Dropdown panel listing every section with its hotkey.
fn draw_menu_panel(frame: &mut FrameBuffer, theme: &Theme) {
    let width = SectionId::ALL
        .iter()
        .map(|id| string_width(id.label()))
        .max()
        .unwrap_or(0)
        + 7;

    for (i, id) in SectionId::ALL.iter().enumerate() {
        let y = NAVBAR_ROWS + i as u16;
        let entry = format!(" {}  {:<w$}", id.hotkey(), id.label(), w = width as usize - 5);
        frame.draw_text(
            2,
            y,
            &entry,
            &Style::fg(theme.text).with_bg(theme.surface),
        );
    }
}

/// Bottom-right scroll-to-top affordance, shown only once scrolled.
fn draw_scroll_top_chip(frame: &mut FrameBuffer, theme: &Theme, width: u16, height: u16) {
    let chip = " ↑ top (g) ";
    let x = width.saturating_sub(string_width(chip) + 1);
    let y = height.saturating_sub(1);
    frame.draw_text(x, y, chip, &Style::fg(theme.text).with_bg(theme.chip_bg));
}

// =============================================================================
// Tests
// =============================================================================

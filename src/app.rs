//! Application shell: terminal setup, the event loop, and teardown.
//!
//! Events are delivered by crossterm on the single main thread, strictly
//! serialized; each handler mutates state through the documented operations
//! and the frame is re-composed once per loop iteration. The diff renderer
//! keeps the actual terminal writes proportional to what changed.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::error::Result;
use crate::profile::Profile;
use crate::render::{build_document, compose_frame, ansi, DiffRenderer, Document, NAVBAR_ROWS};
use crate::state::{Glide, NavState, SectionId, Viewport, LINE_SCROLL, WHEEL_SCROLL};
use crate::theme::Theme;

/// How long to wait for an event before ticking animations.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Map a hotkey to the string id it navigates to.
///
/// Navigation goes through string ids on purpose: the menu, the anchors,
/// and this mapping all meet at the same fixed id set.
pub fn section_id_for_key(key: char) -> Option<&'static str> {
    SectionId::ALL
        .iter()
        .find(|id| id.hotkey() == key)
        .map(|id| id.as_str())
}

// =============================================================================
// App
// =============================================================================

struct App {
    profile: Profile,
    theme: Theme,
    nav: NavState,
    viewport: Viewport,
    glide: Option<Glide>,
    doc: Document,
    renderer: DiffRenderer,
    logo: String,
    width: u16,
    height: u16,
}

impl App {
    fn new(profile: Profile, width: u16, height: u16) -> Self {
        let theme = Theme::default();
        let doc = build_document(&profile, &theme, width);
        let viewport = Viewport::new(height.saturating_sub(NAVBAR_ROWS), doc.rows());
        let logo = profile.header.initials() + ".";

        Self {
            profile,
            theme,
            nav: NavState::new(),
            viewport,
            glide: None,
            doc,
            renderer: DiffRenderer::new(),
            logo,
            width,
            height,
        }
    }

    /// Manual scroll input: the user wins over any in-flight glide.
    fn scroll_by(&mut self, delta: i32) {
        self.glide = None;
        if self.viewport.scroll_by(delta) {
            self.nav.on_scroll(self.viewport.offset());
        }
    }

    /// Start a smooth scroll toward a document row.
    fn glide_to(&mut self, row: u16) {
        let target = row.min(self.viewport.max_scroll());
        self.glide = Some(Glide::new(self.viewport.offset(), target));
    }

    fn navigate(&mut self, id: &str) {
        if let Some(row) = self.nav.navigate_to(&self.doc.anchors, id) {
            self.glide_to(row);
        }
    }

    fn scroll_to_top(&mut self) {
        self.glide_to(self.nav.scroll_to_top());
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.next();
        self.rebuild();
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.rebuild();
    }

    /// Re-project the document after a resize or theme change.
    fn rebuild(&mut self) {
        self.doc = build_document(&self.profile, &self.theme, self.width);
        self.viewport
            .resize(self.height.saturating_sub(NAVBAR_ROWS), self.doc.rows());
        self.nav.on_scroll(self.viewport.offset());
        self.renderer.invalidate();
    }

    /// Advance an in-flight glide. Every offset it produces goes through
    /// `on_scroll`, so the navbar variant is exact at every frame and after
    /// the glide settles.
    fn tick(&mut self) {
        let Some(glide) = self.glide else { return };
        let now = Instant::now();
        self.viewport.set_offset(glide.sample(now));
        self.nav.on_scroll(self.viewport.offset());
        if glide.is_done(now) {
            self.glide = None;
        }
    }

    /// Handle one input event. Returns false when the app should quit.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    return false;
                }
                match key.code {
                    KeyCode::Char('q') => return false,
                    KeyCode::Esc => {
                        if self.nav.menu_open {
                            self.nav.toggle_menu();
                        } else {
                            return false;
                        }
                    }
                    KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-(LINE_SCROLL as i32)),
                    KeyCode::Down | KeyCode::Char('j') => self.scroll_by(LINE_SCROLL as i32),
                    KeyCode::PageUp => self.scroll_by(-(self.viewport.page_rows() as i32)),
                    KeyCode::PageDown | KeyCode::Char(' ') => {
                        self.scroll_by(self.viewport.page_rows() as i32)
                    }
                    KeyCode::Home | KeyCode::Char('g') => self.scroll_to_top(),
                    KeyCode::End | KeyCode::Char('G') => {
                        self.glide_to(self.viewport.max_scroll())
                    }
                    KeyCode::Char('m') | KeyCode::Tab => self.nav.toggle_menu(),
                    KeyCode::Char('t') => self.toggle_theme(),
                    KeyCode::Char(c) => {
                        if let Some(id) = section_id_for_key(c) {
                            self.navigate(id);
                        }
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => self.scroll_by(-(WHEEL_SCROLL as i32)),
                MouseEventKind::ScrollDown => self.scroll_by(WHEEL_SCROLL as i32),
                _ => {}
            },
            Event::Resize(width, height) => self.resize(width, height),
            _ => {}
        }
        true
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = compose_frame(
            &self.doc,
            &self.nav,
            &self.viewport,
            &self.theme,
            &self.logo,
            self.width,
            self.height,
        );
        self.renderer.render(&frame)?;
        Ok(())
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            self.render()?;

            if event::poll(POLL_INTERVAL)? {
                let event = event::read()?;
                if !self.handle_event(event) {
                    return Ok(());
                }
            }
            self.tick();
        }
    }
}

// =============================================================================
// Entry
// =============================================================================

/// Load the profile, own the terminal, run the page until quit.
pub fn run() -> Result<()> {
    let profile = Profile::embedded()?;
    let (width, height) = crossterm::terminal::size()?;
    let mut app = App::new(profile, width, height);

    enable_raw_mode()?;
    execute!(io::stdout(), EnableMouseCapture)?;
    app.renderer.enter_fullscreen()?;
    {
        let mut out = io::stdout();
        ansi::set_title(&mut out, "folio")?;
    }

    let result = app.event_loop();

    // Teardown runs whatever the loop returned
    let mut teardown = || -> Result<()> {
        app.renderer.exit_fullscreen()?;
        execute!(io::stdout(), DisableMouseCapture)?;
        disable_raw_mode()?;
        Ok(())
    };
    match (result, teardown()) {
        (Err(e), _) | (Ok(()), Err(e)) => Err(e),
        (Ok(()), Ok(())) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotkeys_cover_every_section() {
        for id in SectionId::ALL {
            assert_eq!(section_id_for_key(id.hotkey()), Some(id.as_str()));
        }
    }

    #[test]
    fn test_unmapped_keys_navigate_nowhere() {
        assert_eq!(section_id_for_key('x'), None);
        assert_eq!(section_id_for_key('0'), None);
        assert_eq!(section_id_for_key('9'), None);
    }
}

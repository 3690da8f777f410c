//! Navigation state.
//!
//! Owns the two booleans that drive the navbar:
//! - `scrolled`: has the viewport moved past the threshold (controls the
//!   solid vs. transparent navbar variant and the scroll-to-top chip)
//! - `menu_open`: is the collapsible menu panel open
//!
//! Both are mutated only through the operations below; everything else
//! (the frame composer in particular) just reads them.

use std::collections::HashMap;

// =============================================================================
// SECTION IDS
// =============================================================================

/// The fixed set of anchorable page sections.
///
/// The menu, the anchor map, and `navigate_to` all share this enumeration;
/// there is no way to navigate anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Experience,
    Education,
    Publications,
    Portfolio,
}

impl SectionId {
    /// All sections in menu order.
    pub const ALL: [SectionId; 5] = [
        Self::About,
        Self::Experience,
        Self::Education,
        Self::Publications,
        Self::Portfolio,
    ];

    /// The string id used for anchors and navigation requests.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Publications => "publications",
            Self::Portfolio => "portfolio",
        }
    }

    /// Menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Publications => "Publications",
            Self::Portfolio => "Portfolio",
        }
    }

    /// Keyboard shortcut shown in the menu.
    pub const fn hotkey(self) -> char {
        match self {
            Self::About => '1',
            Self::Experience => '2',
            Self::Education => '3',
            Self::Publications => '4',
            Self::Portfolio => '5',
        }
    }

    /// Parse a string id. Unknown ids yield None (navigation treats that
    /// as a silent no-op).
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "about" => Some(Self::About),
            "experience" => Some(Self::Experience),
            "education" => Some(Self::Education),
            "publications" => Some(Self::Publications),
            "portfolio" => Some(Self::Portfolio),
            _ => None,
        }
    }
}

/// Document row each section heading lands on.
pub type AnchorMap = HashMap<SectionId, u16>;

// =============================================================================
// NAV STATE
// =============================================================================

/// Scroll offset past which the navbar switches to its solid variant.
pub const SCROLL_THRESHOLD: u16 = 50;

/// The navbar's state pair. Both flags start false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update `scrolled` from the current viewport offset.
    ///
    /// Strictly greater-than: offset 50 itself still renders the
    /// transparent navbar. Idempotent for a given offset, so it is safe to
    /// call after every offset mutation, however the events were coalesced.
    pub fn on_scroll(&mut self, offset: u16) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    /// Flip the menu panel open/closed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Resolve a navigation request against the anchor map.
    ///
    /// On success returns the document row to scroll to and closes the
    /// menu, whatever its prior state. An unknown id, or an id with no
    /// recorded anchor, is a silent no-op: no error, no state change.
    pub fn navigate_to(&mut self, anchors: &AnchorMap, id: &str) -> Option<u16> {
        let section = SectionId::parse(id)?;
        let row = anchors.get(&section).copied()?;
        self.menu_open = false;
        Some(row)
    }

    /// Scroll-to-top request (logo or chip). Always targets row 0.
    pub fn scroll_to_top(&self) -> u16 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> AnchorMap {
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, (i as u16 + 1) * 20))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let state = NavState::new();
        assert!(!state.scrolled);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_scrolled_matches_threshold_comparison() {
        let mut state = NavState::new();

        for offset in [0u16, 1, 49, 50, 51, 200, u16::MAX] {
            state.on_scroll(offset);
            assert_eq!(state.scrolled, offset > SCROLL_THRESHOLD, "offset {offset}");
        }
    }

    #[test]
    fn test_on_scroll_idempotent() {
        let mut state = NavState::new();
        state.on_scroll(120);
        let snapshot = state;
        state.on_scroll(120);
        state.on_scroll(120);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_toggle_menu_involution() {
        let mut state = NavState::new();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn test_navigate_returns_anchor_row_and_closes_menu() {
        let anchors = anchors();

        for id in SectionId::ALL {
            // Menu open beforehand
            let mut state = NavState::new();
            state.toggle_menu();
            let row = state.navigate_to(&anchors, id.as_str());
            assert_eq!(row, anchors.get(&id).copied());
            assert!(!state.menu_open, "menu must close after {}", id.as_str());

            // Menu closed beforehand - stays closed
            let mut state = NavState::new();
            state.navigate_to(&anchors, id.as_str());
            assert!(!state.menu_open);
        }
    }

    #[test]
    fn test_navigate_unknown_id_is_noop() {
        let anchors = anchors();
        let mut state = NavState::new();
        state.toggle_menu();
        state.on_scroll(100);
        let snapshot = state;

        assert_eq!(state.navigate_to(&anchors, "nonexistent"), None);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_navigate_missing_anchor_is_noop() {
        // Valid id but the anchor map has no entry for it.
        let mut anchors = anchors();
        anchors.remove(&SectionId::Portfolio);

        let mut state = NavState::new();
        state.toggle_menu();

        assert_eq!(state.navigate_to(&anchors, "portfolio"), None);
        assert!(state.menu_open, "no navigation happened, menu stays open");
    }

    #[test]
    fn test_section_id_roundtrip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::parse(id.as_str()), Some(id));
        }
        assert_eq!(SectionId::parse("About"), None); // ids are lowercase
        assert_eq!(SectionId::parse(""), None);
    }

    #[test]
    fn test_scroll_to_top_targets_zero() {
        let state = NavState::new();
        assert_eq!(state.scroll_to_top(), 0);
    }
}

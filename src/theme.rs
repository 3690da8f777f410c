//! Color themes.
//!
//! A small semantic palette: every visual element picks a role, never a
//! raw color. Two presets ship; the `t` key cycles between them at runtime.

use crate::types::Rgba;

/// Semantic palette for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Page background.
    pub bg: Rgba,
    /// Card / panel background.
    pub surface: Rgba,
    /// Body text.
    pub text: Rgba,
    /// Secondary text (publishers, periods, hints).
    pub text_muted: Rgba,
    /// Headings and the logo.
    pub primary: Rgba,
    /// Timeline markers, badges, interest bullets.
    pub accent: Rgba,
    /// Hyperlinked text.
    pub link: Rgba,
    /// Navbar background in the solid ("scrolled") variant.
    pub navbar_bg: Rgba,
    /// Skill chips and the scroll-to-top chip.
    pub chip_bg: Rgba,
}

/// Dark preset (default).
pub fn ink() -> Theme {
    Theme {
        name: "ink",
        bg: Rgba::rgb(16, 20, 28),
        surface: Rgba::rgb(26, 32, 44),
        text: Rgba::rgb(214, 220, 229),
        text_muted: Rgba::rgb(130, 140, 154),
        primary: Rgba::rgb(125, 196, 255),
        accent: Rgba::rgb(255, 184, 108),
        link: Rgba::rgb(137, 221, 255),
        navbar_bg: Rgba::rgb(32, 40, 54),
        chip_bg: Rgba::rgb(38, 48, 64),
    }
}

/// Light preset.
pub fn paper() -> Theme {
    Theme {
        name: "paper",
        bg: Rgba::rgb(248, 246, 240),
        surface: Rgba::rgb(238, 234, 224),
        text: Rgba::rgb(42, 46, 52),
        text_muted: Rgba::rgb(120, 124, 130),
        primary: Rgba::rgb(22, 92, 170),
        accent: Rgba::rgb(176, 98, 14),
        link: Rgba::rgb(12, 105, 150),
        navbar_bg: Rgba::rgb(230, 225, 212),
        chip_bg: Rgba::rgb(228, 222, 208),
    }
}

impl Theme {
    /// The next preset in the cycle.
    pub fn next(&self) -> Theme {
        match self.name {
            "ink" => paper(),
            _ => ink(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        ink()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ink() {
        assert_eq!(Theme::default().name, "ink");
    }

    #[test]
    fn test_cycle_returns() {
        let theme = Theme::default();
        assert_eq!(theme.next().name, "paper");
        assert_eq!(theme.next().next().name, "ink");
    }
}

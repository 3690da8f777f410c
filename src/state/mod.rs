//! UI state: the navbar flags, the viewport scroll offset, and in-flight
//! smooth scrolls.

pub mod glide;
pub mod nav;
pub mod viewport;

pub use glide::Glide;
pub use nav::{AnchorMap, NavState, SectionId, SCROLL_THRESHOLD};
pub use viewport::{Viewport, LINE_SCROLL, PAGE_SCROLL_FACTOR, WHEEL_SCROLL};

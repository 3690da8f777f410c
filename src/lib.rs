//! folio-tui: a single-page academic portfolio for the terminal.
//!
//! The page renders one profile (bio, experience, education, publications,
//! portfolio) as a scrollable document under a sticky navbar, with smooth
//! scroll-to-section navigation and OSC 8 hyperlinks for external targets.
//!
//! # Architecture
//!
//! ```text
//! profile.toml ──► Profile ──► build_document ──► Document (lines + anchors)
//!                                                     │
//!                  NavState / Viewport / Glide ──► compose_frame
//!                                                     │
//!                                                 FrameBuffer
//!                                                     │
//!                                              DiffRenderer ──► terminal
//! ```
//!
//! State mutation and rendering are strictly separated: the document
//! projection and frame composition are pure functions, while [`state`]
//! holds the three small pieces that change at runtime (navbar state,
//! scroll offset, in-flight glide). The event loop in [`app`] is the only
//! place the two meet.

pub mod app;
pub mod error;
pub mod layout;
pub mod profile;
pub mod render;
pub mod state;
pub mod theme;
pub mod types;

pub use error::{Error, Result};
pub use profile::Profile;
pub use render::{build_document, compose_frame, Document, FrameBuffer};
pub use state::{NavState, SectionId, Viewport};
pub use theme::Theme;

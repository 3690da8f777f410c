//! Rendering pipeline: document projection, frame composition, terminal
//! output.
//!
//! ```text
//! Profile → build_document → compose_frame → DiffRenderer → terminal
//! ```

pub mod ansi;
pub mod buffer;
pub mod compose;
pub mod diff;
pub mod document;
pub mod output;

pub use buffer::{FrameBuffer, Style};
pub use compose::{compose_frame, NAVBAR_ROWS, NAV_COLLAPSE_WIDTH};
pub use diff::DiffRenderer;
pub use document::{build_document, Document, Line, Span};
pub use output::{OutputBuffer, StatefulCellRenderer};

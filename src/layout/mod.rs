//! Text layout helpers.

pub mod text_measure;

pub use text_measure::{string_width, truncate_text, wrap_text};

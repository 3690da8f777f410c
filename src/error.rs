//! Crate-level error type.
//!
//! The render pipeline itself plumbs `std::io::Result` (terminal writes are
//! the only thing that can fail there); this type exists for the outer
//! surface where profile parsing and terminal I/O meet.

use thiserror::Error;

/// Errors surfaced by the application shell.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("embedded profile data is invalid: {0}")]
    Profile(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

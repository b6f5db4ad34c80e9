//! Error types for marker creation and verification.

use crate::variant::CollectionVariant;
use std::io;
use thiserror::Error;

/// Result alias for type marker operations.
pub type TagResult<T> = Result<T, TagError>;

/// Failures surfaced while tagging or verifying a data directory.
#[derive(Debug, Error)]
pub enum TagError {
    /// Filesystem failure, passed through unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The marker holds a byte that is not a known collection variant.
    #[error("unrecognized collection type marker byte {0:#04x}")]
    UnknownMarker(u8),

    /// The directory belongs to a variant with an incompatible key layout.
    #[error("data directory was created as {stored}, cannot be opened as {requested}")]
    Incompatible {
        stored: CollectionVariant,
        requested: CollectionVariant,
    },
}

impl TagError {
    /// Returns the underlying I/O error, if this is one.
    pub fn as_io(&self) -> Option<&io::Error> {
        match self {
            TagError::Io(e) => Some(e),
            _ => None,
        }
    }
}

//! Storage layer: the collection type marker and the directory sync it relies on.
//!
//! A data directory is tagged once with the variant that created it
//! (`GOQUE`, one byte, atomic temp-file + rename + directory fsync) and
//! checked against the requested variant on every later open.

/// Directory fsync with "unsupported" treated as a no-op.
pub mod dir_sync;
/// Type marker creation and compatibility checks.
pub mod marker;

pub use dir_sync::sync_dir;
pub use marker::{check_type, ensure_compatible, marker_path, marker_temp_path, read_marker};

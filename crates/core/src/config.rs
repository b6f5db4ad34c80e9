//! On-disk constants for collection type markers.
//!
//! These names and sizes are part of the persisted format shared by every
//! collection variant. They are compile-time constants; the data directory
//! itself is chosen by the collection-store layer.

/// Name of the type marker file inside a data directory.
pub const MARKER_FILE_NAME: &str = "GOQUE";

/// Name of the staging file used while a marker is first written.
///
/// Renamed onto [`MARKER_FILE_NAME`] once its contents are synced. A stale
/// copy left by a crash is overwritten by the next creation attempt.
pub const MARKER_TEMP_FILE_NAME: &str = "GOQUE.tmp";

/// Size of a complete marker in bytes.
pub const MARKER_LEN: usize = 1;

/// Unix permission bits for the staging file (and so the final marker).
pub const MARKER_FILE_MODE: u32 = 0o644;

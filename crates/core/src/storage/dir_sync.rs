//! Directory fsync for making renames durable.
//!
//! A rename is only crash-safe once the parent directory's entries reach
//! stable storage. Some platforms and filesystems cannot sync a directory
//! handle; those report "unsupported", which is treated as a successful no-op.

use std::fs::File;
use std::io;
use std::path::Path;

/// Whether directory handles can be opened and synced on this target.
const DIR_SYNC_SUPPORTED: bool = cfg!(unix);

/// Sync directory entries of `path` to stable storage.
///
/// Open and sync errors are returned unchanged, except those classified by
/// [`sync_unsupported`]. The handle is released on every path.
pub fn sync_dir(path: &Path) -> io::Result<()> {
    if !DIR_SYNC_SUPPORTED {
        // Still surface a missing or inaccessible path.
        std::fs::metadata(path)?;
        tracing::debug!("Directory sync not supported on this platform: {:?}", path);
        return Ok(());
    }

    let dir = File::open(path)?;
    match dir.sync_all() {
        Ok(()) => Ok(()),
        Err(e) if sync_unsupported(&e) => {
            tracing::debug!("Directory sync unsupported for {:?}: {}", path, e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Errors from a directory sync that mean "not supported here".
///
/// EINVAL surfaces as `InvalidInput`, ENOTSUP/EOPNOTSUPP as `Unsupported`.
pub fn sync_unsupported(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::InvalidInput | io::ErrorKind::Unsupported
    )
}

//! Collection type marker: creation on first use, verification on reopen.
//!
//! The first collection to open a data directory records its variant as a
//! single byte in `GOQUE`. The byte is written to `GOQUE.tmp`, fsynced, renamed
//! into place and the directory is fsynced, so after a crash the directory
//! holds either no marker or a complete one. Later opens read the byte back
//! and check it against the requested variant.
//!
//! Creation is not locked. Two processes racing on a fresh directory may both
//! write a marker and the last rename wins; callers that need a single writer
//! must serialize directory creation themselves.

use crate::config::{MARKER_FILE_NAME, MARKER_LEN, MARKER_TEMP_FILE_NAME};
use crate::error::{TagError, TagResult};
use crate::storage::dir_sync::sync_dir;
use crate::variant::CollectionVariant;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Path of the marker file inside `data_dir`.
pub fn marker_path(data_dir: &Path) -> PathBuf {
    data_dir.join(MARKER_FILE_NAME)
}

/// Path of the staging file inside `data_dir`.
pub fn marker_temp_path(data_dir: &Path) -> PathBuf {
    data_dir.join(MARKER_TEMP_FILE_NAME)
}

/// Tag `data_dir` with `variant` on first use, or check an existing tag.
///
/// Returns `Ok(true)` when the directory was just tagged or its stored variant
/// is compatible with `variant`, and `Ok(false)` when it is not. The directory
/// must already exist.
///
/// # Errors
///
/// Any filesystem failure is returned as [`TagError::Io`]. A marker byte that
/// is not a known variant is [`TagError::UnknownMarker`].
pub fn check_type(data_dir: impl AsRef<Path>, variant: CollectionVariant) -> TagResult<bool> {
    let stored = tag_or_read(data_dir.as_ref(), variant)?;
    Ok(stored.is_compatible_with(variant))
}

/// Like [`check_type`], but reports incompatibility as
/// [`TagError::Incompatible`] so an open can bail out with `?`.
pub fn ensure_compatible(data_dir: impl AsRef<Path>, variant: CollectionVariant) -> TagResult<()> {
    let stored = tag_or_read(data_dir.as_ref(), variant)?;
    if stored.is_compatible_with(variant) {
        Ok(())
    } else {
        Err(TagError::Incompatible {
            stored,
            requested: variant,
        })
    }
}

/// Read the variant recorded in `data_dir` without creating anything.
///
/// Returns `Ok(None)` if the directory has no marker yet.
pub fn read_marker(data_dir: impl AsRef<Path>) -> TagResult<Option<CollectionVariant>> {
    match File::open(marker_path(data_dir.as_ref())) {
        Ok(file) => read_tag(file).map(Some),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Returns the variant the directory belongs to, writing `variant` as the
/// marker if there is none yet.
fn tag_or_read(data_dir: &Path, variant: CollectionVariant) -> TagResult<CollectionVariant> {
    let path = marker_path(data_dir);
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            write_marker(data_dir, &path, variant)?;
            tracing::info!("Tagged data directory {:?} as {}", data_dir, variant);
            return Ok(variant);
        }
        Err(e) => return Err(e.into()),
    };

    let stored = read_tag(file)?;
    tracing::debug!(
        "Data directory {:?} is tagged {}, requested {}",
        data_dir,
        stored,
        variant
    );
    Ok(stored)
}

/// Read and decode the marker byte. The file is closed before returning.
fn read_tag(mut file: File) -> TagResult<CollectionVariant> {
    let mut buf = [0u8; MARKER_LEN];
    file.read_exact(&mut buf)?;
    CollectionVariant::try_from(buf[0])
}

/// Write-fsync-rename-fsync sequence. Must not be reordered: only the rename
/// publishes the marker, and only the directory sync makes the rename durable.
fn write_marker(data_dir: &Path, path: &Path, variant: CollectionVariant) -> io::Result<()> {
    let tmp_path = marker_temp_path(data_dir);

    let mut opts = OpenOptions::new();
    // Truncate so a longer stale staging file cannot leak trailing bytes.
    opts.read(true).write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(crate::config::MARKER_FILE_MODE);
    }
    let mut tmp = opts.open(&tmp_path)?;
    tmp.write_all(&[variant.tag()])?;
    tmp.sync_all()?;
    drop(tmp);

    fs::rename(&tmp_path, path)?;
    sync_dir(data_dir)
}
